use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/entries", post(handlers::submit_entry))
        .route("/api/entries", get(handlers::list_entries).post(handlers::create_entry))
        .route("/api/entries/:id", delete(handlers::delete_entry))
        .route("/api/log", get(handlers::get_log))
        .route("/assets/gapco.png", get(handlers::asset))
        .with_state(state)
}
