mod handlers;
mod models;

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use handlers::GENERATION_FAILED;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-listing", post(handlers::generate_listing))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
