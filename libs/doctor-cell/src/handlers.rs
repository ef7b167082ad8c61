use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::info;

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::validation::RequestValidator;

use crate::models::{ConsultationType, CreateDoctorRequest, DoctorError, DoctorProfileResponse};
use crate::services::doctor::DoctorService;

fn validate_create_doctor(
    request: &CreateDoctorRequest,
) -> Result<Vec<(ConsultationType, f64)>, AppError> {
    let mut validator = RequestValidator::new();

    validator
        .require_non_empty("phone_number", &request.phone_number, "Phone number is required")
        .require_non_empty("name", &request.name, "Name is required")
        .check(
            "consultation_types",
            !request.consultation_types.is_empty(),
            "At least one consultation type is required",
        );

    if let Some(photo_url) = &request.photo_url {
        validator.check(
            "photo_url",
            reqwest::Url::parse(photo_url).is_ok(),
            "Photo URL must be a valid URL",
        );
    }

    let mut parsed_types = Vec::with_capacity(request.consultation_types.len());
    for (index, entry) in request.consultation_types.iter().enumerate() {
        match ConsultationType::from_str(&entry.consultation_type) {
            Ok(consultation_type) => parsed_types.push((consultation_type, entry.price)),
            Err(_) => {
                validator.push(
                    &format!("consultation_types[{}].type", index),
                    "Consultation type must be valid",
                );
            }
        }
        if entry.price < 0.0 {
            validator.push(
                &format!("consultation_types[{}].price", index),
                "Price must be a positive number",
            );
        }
    }

    validator.finish()?;
    Ok(parsed_types)
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<Response, AppError> {
    let consultation_types = validate_create_doctor(&request)?;

    let service = DoctorService::new(&state);

    match service.create_doctor(&request, &consultation_types).await {
        Ok((doctor, types)) => {
            info!("Doctor {} created with {} consultation types", doctor.phone_number, types.len());
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "message": "Doctor created successfully",
                    "data": {
                        "doctor": doctor,
                        "consultation_types": types,
                    }
                })),
            )
                .into_response())
        }
        Err(DoctorError::CreateFailed(error)) => Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Failed to create doctor",
                "error": error,
            })),
        )
            .into_response()),
        Err(DoctorError::ConsultationTypesFailed(error)) => Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Failed to create doctor consultation types",
                "error": error,
            })),
        )
            .into_response()),
        Err(e) => Err(AppError::Database(e.to_string())),
    }
}

#[axum::debug_handler]
pub async fn get_doctor_profile(
    State(state): State<Arc<AppConfig>>,
    Path(phone_number): Path<String>,
) -> Result<Json<DoctorProfileResponse>, AppError> {
    let service = DoctorService::new(&state);

    let doctor = service.get_doctor(&phone_number).await.map_err(|e| match e {
        DoctorError::NotFound => AppError::NotFound("Doctor not found".to_string()),
        other => AppError::Database(other.to_string()),
    })?;

    let consultation_types = service
        .get_consultation_types(&phone_number)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(DoctorProfileResponse {
        doctor,
        consultation_types,
    }))
}

#[axum::debug_handler]
pub async fn list_categories(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = DoctorService::new(&state);

    let categories = service
        .list_categories()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!(categories)))
}
