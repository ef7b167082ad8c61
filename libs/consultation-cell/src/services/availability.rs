use anyhow::Result;
use chrono::NaiveDate;
use reqwest::Method;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{AvailableSlot, BookedSlot, ConsultationStatus};

/// Working hours of every doctor: 9 AM to 5 PM, one-hour slots.
pub const WORKING_HOURS_START: u32 = 9;
pub const WORKING_HOURS_END: u32 = 17;

/// Walk the fixed hourly grid and keep the slots without an exact string
/// match in the booked set. A stored time that is not `HH:00` never
/// matches, so it closes nothing.
pub fn open_slots(booked: &[String]) -> Vec<AvailableSlot> {
    (WORKING_HOURS_START..WORKING_HOURS_END)
        .map(|hour| format!("{:02}:00", hour))
        .filter(|slot| !booked.iter().any(|time| time == slot))
        .map(|time| AvailableSlot {
            time,
            is_available: true,
        })
        .collect()
}

pub struct AvailabilityService {
    supabase: SupabaseClient,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Open slots for one doctor and date: every grid hour without a
    /// `scheduled` consultation at exactly that time. No lock is taken;
    /// two concurrent bookings of the same slot can both observe it open.
    pub async fn get_doctor_availability(
        &self,
        doctor_phone: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailableSlot>> {
        debug!("Fetching availability for doctor {} on {}", doctor_phone, date);

        let path = format!(
            "/rest/v1/consultations?doctor_phone=eq.{}&booking_date=eq.{}&status=eq.{}&select=booking_time",
            urlencoding::encode(doctor_phone),
            date,
            ConsultationStatus::Scheduled,
        );
        let consultations: Vec<BookedSlot> = self.supabase.request(Method::GET, &path, None).await?;

        let booked: Vec<String> = consultations
            .into_iter()
            .map(|slot| slot.booking_time)
            .collect();

        Ok(open_slots(&booked))
    }
}
