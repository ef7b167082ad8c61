use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn consultation_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors))
        .route("/doctors/{doctor_id}/availability", get(handlers::get_doctor_availability))
        .route("/doctors/{doctor_id}/bookings", get(handlers::list_doctor_bookings))
        .route("/bookings", post(handlers::create_booking))
        .route("/patients/{mobile_number}/bookings", get(handlers::list_patient_bookings))
        .with_state(state)
}
