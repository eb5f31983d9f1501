use crate::errors::AppError;
use crate::log_view::build_log_view;
use crate::models::{CreateEntryRequest, EntriesResponse, LogResponse};
use crate::state::AppState;
use crate::storage::persist_log;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate};
use tokio::fs;
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<EntriesResponse>, AppError> {
    let log = state.data.lock().await;
    Ok(Json(EntriesResponse {
        entries: log.entries.clone(),
    }))
}

pub async fn get_log(State(state): State<AppState>) -> Result<Json<LogResponse>, AppError> {
    let log = state.data.lock().await;
    Ok(Json(build_log_view(&log)))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<StatusCode, AppError> {
    save_entry(&state, payload).await?;
    Ok(StatusCode::CREATED)
}

/// Script-free fallback for the sidebar form.
pub async fn submit_entry(
    State(state): State<AppState>,
    Form(payload): Form<CreateEntryRequest>,
) -> Result<Redirect, AppError> {
    save_entry(&state, payload).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut log = state.data.lock().await;
    log.delete(id);
    persist_log(&state.data_path, &log).await?;

    info!("deleted training entry {id}");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn asset(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    match fs::read(&state.asset_path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "image/png")], bytes)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::not_found("image not found"))
        }
        Err(err) => Err(AppError::internal(err)),
    }
}

async fn save_entry(state: &AppState, payload: CreateEntryRequest) -> Result<(), AppError> {
    let date = payload.date.trim();
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    }

    let mut log = state.data.lock().await;
    let id = log.create(
        date.to_string(),
        payload.activity,
        payload.miles,
        payload.nutrition_goal_met,
    );
    persist_log(&state.data_path, &log).await?;

    info!("saved training entry {id} for {date}");
    Ok(())
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
