use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/status", get(handlers::get_status))
        .route("/api/dataset", get(handlers::get_dataset))
        .with_state(state)
}
