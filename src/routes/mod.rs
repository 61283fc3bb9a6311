// src/routes/mod.rs
pub mod talk;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use talk::{greeting_handler, talk_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(greeting_handler))
        .route("/talk", post(talk_handler))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
