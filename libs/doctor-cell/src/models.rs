use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a consultation is delivered. Stored as snake_case text in
/// `doctor_consultation_types` and `consultations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationType {
    Video,
    Audio,
    Chat,
    InPerson,
    Whatsapp,
}

impl ConsultationType {
    pub const ALL: [ConsultationType; 5] = [
        ConsultationType::Video,
        ConsultationType::Audio,
        ConsultationType::Chat,
        ConsultationType::InPerson,
        ConsultationType::Whatsapp,
    ];
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationType::Video => write!(f, "video"),
            ConsultationType::Audio => write!(f, "audio"),
            ConsultationType::Chat => write!(f, "chat"),
            ConsultationType::InPerson => write!(f, "in_person"),
            ConsultationType::Whatsapp => write!(f, "whatsapp"),
        }
    }
}

impl FromStr for ConsultationType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "video" => Ok(ConsultationType::Video),
            "audio" => Ok(ConsultationType::Audio),
            "chat" => Ok(ConsultationType::Chat),
            "in_person" => Ok(ConsultationType::InPerson),
            "whatsapp" => Ok(ConsultationType::Whatsapp),
            other => Err(format!("Invalid consultation type: {}", other)),
        }
    }
}

/// A row in `doctors`, keyed by phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub phone_number: String,
    pub name: String,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub experience_years: i32,
    pub about: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub consultation_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Medical specialty used to filter doctor listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorCategory {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorConsultationType {
    pub doctor_phone: String,
    pub consultation_type: ConsultationType,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub phone_number: String,
    pub name: String,
    pub category_id: Option<i32>,
    pub photo_url: Option<String>,
    pub experience_years: Option<i32>,
    pub consultation_count: Option<i32>,
    pub about: Option<String>,
    #[serde(default)]
    pub consultation_types: Vec<ConsultationTypeInput>,
}

/// One `{type, price}` entry from the registration form. The type stays a
/// string here so a bad value becomes a field-level message instead of a
/// body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationTypeInput {
    #[serde(rename = "type")]
    pub consultation_type: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfileResponse {
    pub doctor: Doctor,
    pub consultation_types: Vec<DoctorConsultationType>,
}

#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Failed to create doctor: {0}")]
    CreateFailed(String),

    #[error("Failed to create doctor consultation types: {0}")]
    ConsultationTypesFailed(String),

    #[error("Database error: {0}")]
    Database(String),
}
