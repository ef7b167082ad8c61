use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doctor_cell::models::Doctor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Doctor,
    Patient,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Doctor => write!(f, "doctor"),
            UserType::Patient => write!(f, "patient"),
        }
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "doctor" => Ok(UserType::Doctor),
            "patient" => Ok(UserType::Patient),
            other => Err(format!("Invalid user type: {}", other)),
        }
    }
}

/// A row in `patients`. The mobile number is the key; nothing else is
/// collected at signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub mobile_number: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /users/lookup`. The type stays a string so an unknown
/// value becomes a field-level message.
#[derive(Debug, Clone, Deserialize)]
pub struct UserLookupRequest {
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub user_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserLookupResponse {
    pub phone_number: String,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_count: Option<i32>,
}

impl UserLookupResponse {
    pub fn patient(patient: &Patient, exists: bool) -> Self {
        Self {
            phone_number: patient.mobile_number.clone(),
            user_type: UserType::Patient,
            created_at: patient.created_at,
            exists,
            name: None,
            category_id: None,
            experience_years: None,
            about: None,
            photo_url: None,
            consultation_count: None,
        }
    }

    pub fn doctor(doctor: &Doctor) -> Self {
        Self {
            phone_number: doctor.phone_number.clone(),
            user_type: UserType::Doctor,
            created_at: doctor.created_at,
            exists: true,
            name: Some(doctor.name.clone()),
            category_id: doctor.category_id,
            experience_years: Some(doctor.experience_years),
            about: doctor.about.clone(),
            photo_url: doctor.photo_url.clone(),
            consultation_count: Some(doctor.consultation_count),
        }
    }
}
