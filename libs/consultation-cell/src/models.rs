use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use doctor_cell::models::ConsultationType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationStatus::Scheduled => write!(f, "scheduled"),
            ConsultationStatus::Completed => write!(f, "completed"),
            ConsultationStatus::Cancelled => write!(f, "cancelled"),
            ConsultationStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// A row in `consultations`: one booked appointment between a patient and
/// a doctor. `booking_time` stays the raw `HH:MM` text the slot grid
/// compares against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    pub id: Uuid,
    pub patient_mobile: String,
    pub doctor_phone: String,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub consultation_type: ConsultationType,
    pub status: ConsultationStatus,
    pub symptoms: String,
    pub booking_reference: String,
    pub created_at: DateTime<Utc>,
}

/// Minimal projection used by the availability query.
#[derive(Debug, Clone, Deserialize)]
pub struct BookedSlot {
    pub booking_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlot {
    pub time: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingPatient {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub email: Option<String>,
}

/// Body of `POST /consultations/bookings`. Date, time and type arrive as
/// strings and are checked into typed values so failures come back as
/// field-level messages.
#[derive(Debug, Clone, Deserialize)]
pub struct BookConsultationRequest {
    #[serde(default)]
    pub doctor_id: String,
    #[serde(default)]
    pub appointment_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub consultation_type: String,
    #[serde(default)]
    pub symptoms: String,
    pub patient: Option<BookingPatient>,
}

/// A validated booking, ready to persist.
#[derive(Debug, Clone)]
pub struct NewConsultation {
    pub patient_mobile: String,
    pub doctor_phone: String,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub consultation_type: ConsultationType,
    pub symptoms: String,
}

#[derive(Debug, Deserialize)]
pub struct DoctorListQuery {
    pub specialization: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DoctorBookingsQuery {
    pub date: Option<String>,
}
