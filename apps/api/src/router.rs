use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use consultation_cell::router::consultation_routes;
use doctor_cell::router::doctor_routes;
use shared_config::AppConfig;
use user_cell::router::user_routes;

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn create_router(state: Arc<AppConfig>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .nest("/users", user_routes(state.clone()))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/consultations", consultation_routes(state));

    Router::new()
        .route("/", get(|| async { "MediConsult API is running!" }))
        .nest("/api", api_routes)
}
