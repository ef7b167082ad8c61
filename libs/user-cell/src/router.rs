use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn user_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/lookup", post(handlers::lookup_user))
        .with_state(state)
}
