use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::info;

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::validation::RequestValidator;

use crate::models::{UserLookupRequest, UserLookupResponse, UserType};
use crate::services::user::UserService;

/// `POST /users/lookup` — get or create a user by phone number. Patients
/// are created on first sight; doctors must already be registered.
#[axum::debug_handler]
pub async fn lookup_user(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<UserLookupRequest>,
) -> Result<Response, AppError> {
    let mut validator = RequestValidator::new();
    validator
        .require_non_empty("phone_number", &request.phone_number, "Phone number is required")
        .check(
            "user_type",
            UserType::from_str(&request.user_type).is_ok(),
            "User type must be either doctor or patient",
        );
    validator.finish()?;

    let user_type = UserType::from_str(&request.user_type).map_err(AppError::BadRequest)?;

    let service = UserService::new(&state);

    match user_type {
        UserType::Doctor => {
            let doctor = service
                .find_doctor(&request.phone_number)
                .await
                .map_err(|e| AppError::Database(format!("Error fetching doctor information: {}", e)))?;

            match doctor {
                Some(doctor) => Ok(Json(UserLookupResponse::doctor(&doctor)).into_response()),
                None => Ok((
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "message": "Doctor not found with the provided phone number",
                        "phone_number": request.phone_number,
                        "user_type": "doctor",
                    })),
                )
                    .into_response()),
            }
        }
        UserType::Patient => {
            let (patient, existed) = service
                .ensure_patient(&request.phone_number)
                .await
                .map_err(|e| AppError::Database(format!("Error fetching patient information: {}", e)))?;

            let status = if existed {
                StatusCode::OK
            } else {
                info!("Created patient {}", patient.mobile_number);
                StatusCode::CREATED
            };

            Ok((status, Json(UserLookupResponse::patient(&patient, existed))).into_response())
        }
    }
}
