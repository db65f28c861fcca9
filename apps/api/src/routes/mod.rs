pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coach::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career chat API
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route("/api/v1/chat/classify", post(handlers::handle_classify))
        .with_state(state)
}
