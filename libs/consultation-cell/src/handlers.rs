use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};

use doctor_cell::models::ConsultationType;
use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::validation::RequestValidator;

use crate::models::{
    AvailabilityQuery, AvailableSlot, BookConsultationRequest, Consultation, DoctorBookingsQuery,
    DoctorListQuery, NewConsultation,
};
use crate::services::{
    availability::AvailabilityService, booking::BookingService, doctors::DoctorDirectoryService,
};

/// `GET /consultations/doctors` — the doctor directory, optionally filtered
/// by specialty name. Returns the plain array the client renders.
#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorDirectoryService::new(&state);

    let doctors = service
        .list_doctors(query.specialization.as_deref())
        .await
        .map_err(|e| AppError::Database(format!("Error fetching doctors: {}", e)))?;

    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn get_doctor_availability(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<AvailableSlot>>, AppError> {
    let date = query
        .date
        .ok_or_else(|| AppError::BadRequest("Date is required".to_string()))?;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date".to_string()))?;

    let service = AvailabilityService::new(&state);

    let slots = service
        .get_doctor_availability(&doctor_id, date)
        .await
        .map_err(|e| AppError::Database(format!("Error fetching consultations: {}", e)))?;

    Ok(Json(slots))
}

fn validate_booking(request: &BookConsultationRequest) -> Result<NewConsultation, AppError> {
    let mut validator = RequestValidator::new();

    validator
        .require_non_empty("doctor_id", &request.doctor_id, "Doctor ID is required")
        .require_time("start_time", &request.start_time, "Invalid start time")
        .require_non_empty("symptoms", &request.symptoms, "Symptoms are required");

    let booking_date = NaiveDate::parse_from_str(&request.appointment_date, "%Y-%m-%d");
    validator.check(
        "appointment_date",
        booking_date.is_ok(),
        "Invalid appointment date",
    );

    let consultation_type = ConsultationType::from_str(&request.consultation_type);
    validator.check(
        "consultation_type",
        consultation_type.is_ok(),
        "Invalid consultation type",
    );

    let patient_mobile = request
        .patient
        .as_ref()
        .map(|patient| patient.phone_number.trim())
        .unwrap_or_default();
    validator.check(
        "patient.phone_number",
        !patient_mobile.is_empty(),
        "Patient phone number is required",
    );

    validator.finish()?;

    // The checks above guarantee both parses succeeded.
    let booking_date =
        booking_date.map_err(|_| AppError::BadRequest("Invalid appointment date".to_string()))?;
    let consultation_type =
        consultation_type.map_err(AppError::BadRequest)?;

    Ok(NewConsultation {
        patient_mobile: patient_mobile.to_string(),
        doctor_phone: request.doctor_id.clone(),
        booking_date,
        booking_time: request.start_time.clone(),
        consultation_type,
        symptoms: request.symptoms.clone(),
    })
}

/// `POST /consultations/bookings` — persist exactly one consultation row
/// for an accepted request.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<BookConsultationRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking = validate_booking(&request)?;

    let service = BookingService::new(&state);

    let consultation = service
        .book_consultation(booking)
        .await
        .map_err(|e| AppError::Database(format!("Error creating consultation: {}", e)))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Consultation booked successfully",
            "consultation": consultation,
        })),
    ))
}

#[axum::debug_handler]
pub async fn list_patient_bookings(
    State(state): State<Arc<AppConfig>>,
    Path(mobile_number): Path<String>,
) -> Result<Json<Vec<Consultation>>, AppError> {
    let service = BookingService::new(&state);

    let consultations = service
        .patient_bookings(&mobile_number)
        .await
        .map_err(|e| AppError::Database(format!("Error fetching consultations: {}", e)))?;

    Ok(Json(consultations))
}

#[axum::debug_handler]
pub async fn list_doctor_bookings(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<String>,
    Query(query): Query<DoctorBookingsQuery>,
) -> Result<Json<Vec<Consultation>>, AppError> {
    let date = match query.date {
        Some(date) => Some(
            NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|_| AppError::BadRequest("Invalid date".to_string()))?,
        ),
        None => None,
    };

    let service = BookingService::new(&state);

    let consultations = service
        .doctor_bookings(&doctor_id, date)
        .await
        .map_err(|e| AppError::Database(format!("Error fetching consultations: {}", e)))?;

    Ok(Json(consultations))
}
