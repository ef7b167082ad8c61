use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::json;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;
use shared_utils::reference::generate_booking_reference;

use user_cell::services::user::UserService;

use crate::models::{Consultation, ConsultationStatus, NewConsultation};

pub struct BookingService {
    supabase: SupabaseClient,
    users: UserService,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            users: UserService::new(config),
        }
    }

    /// Persist one consultation row. The patient row is created first when
    /// the mobile number has not been seen before. No idempotency key and
    /// no slot serialization: a duplicate submission books twice.
    pub async fn book_consultation(&self, booking: NewConsultation) -> Result<Consultation> {
        let (patient, existed) = self.users.ensure_patient(&booking.patient_mobile).await?;
        if !existed {
            debug!("Created patient {} for booking", patient.mobile_number);
        }

        let booking_reference = generate_booking_reference();

        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        let inserted: Vec<Consultation> = self
            .supabase
            .request_with_headers(
                Method::POST,
                "/rest/v1/consultations",
                Some(json!({
                    "patient_mobile": booking.patient_mobile,
                    "doctor_phone": booking.doctor_phone,
                    "booking_date": booking.booking_date,
                    "booking_time": booking.booking_time,
                    "consultation_type": booking.consultation_type,
                    "status": ConsultationStatus::Scheduled,
                    "symptoms": booking.symptoms,
                    "booking_reference": booking_reference,
                })),
                Some(headers),
            )
            .await?;

        let consultation = inserted
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Failed to create consultation"))?;

        info!(
            "Booked consultation {} for patient {} with doctor {}",
            consultation.booking_reference, consultation.patient_mobile, consultation.doctor_phone
        );

        Ok(consultation)
    }

    /// A patient's consultation history, newest first.
    pub async fn patient_bookings(&self, mobile_number: &str) -> Result<Vec<Consultation>> {
        let path = format!(
            "/rest/v1/consultations?patient_mobile=eq.{}&select=*&order=booking_date.desc,booking_time.desc",
            urlencoding::encode(mobile_number)
        );
        self.supabase.request(Method::GET, &path, None).await
    }

    /// A doctor's consultations, optionally restricted to one date.
    pub async fn doctor_bookings(
        &self,
        doctor_phone: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Consultation>> {
        let mut path = format!(
            "/rest/v1/consultations?doctor_phone=eq.{}&select=*",
            urlencoding::encode(doctor_phone)
        );
        match date {
            Some(date) => path.push_str(&format!("&booking_date=eq.{}&order=booking_time.asc", date)),
            None => path.push_str("&order=booking_date.desc,booking_time.desc"),
        }
        self.supabase.request(Method::GET, &path, None).await
    }
}
