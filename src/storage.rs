use crate::errors::AppError;
use crate::models::TrainingLog;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/training_log.json"))
}

/// The decorative sidebar photo, looked up in the working directory unless
/// overridden. A missing file shows up as a broken image, not a crash.
pub fn resolve_asset_path() -> PathBuf {
    if let Ok(path) = env::var("APP_ASSET_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("gapco.png")
}

pub async fn load_log(path: &Path) -> TrainingLog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(log) => log,
            Err(err) => {
                error!("failed to parse training log file: {err}");
                TrainingLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => TrainingLog::default(),
        Err(err) => {
            error!("failed to read training log file: {err}");
            TrainingLog::default()
        }
    }
}

pub async fn persist_log(path: &Path, log: &TrainingLog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(log).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
