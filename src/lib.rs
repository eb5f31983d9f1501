pub mod app;
pub mod errors;
pub mod handlers;
pub mod log_view;
pub mod models;
pub mod plan;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_log, resolve_asset_path, resolve_data_path};
