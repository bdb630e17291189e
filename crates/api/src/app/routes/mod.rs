use axum::{
    Router,
    routing::{get, post},
};

pub mod recommend;
pub mod system;

/// Router for the recommendation endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/submit", post(recommend::submit))
        .route("/catalog", get(recommend::catalog))
}
