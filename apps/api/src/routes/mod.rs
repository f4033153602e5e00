pub mod health;
pub mod parse;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/parse", post(parse::handle_parse_upload))
        .route(
            "/api/v1/candidates/:id/parse",
            post(parse::handle_parse_candidate),
        )
        .with_state(state)
}
