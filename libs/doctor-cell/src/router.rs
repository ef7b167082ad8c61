use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/create", post(handlers::create_doctor))
        .route("/categories", get(handlers::list_categories))
        .route("/{phone_number}", get(handlers::get_doctor_profile))
        .with_state(state)
}
