use crate::models::TrainingLog;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub asset_path: PathBuf,
    pub data: Arc<Mutex<TrainingLog>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, asset_path: PathBuf, log: TrainingLog) -> Self {
        Self {
            data_path,
            asset_path,
            data: Arc::new(Mutex::new(log)),
        }
    }
}
