use anyhow::{anyhow, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use doctor_cell::models::Doctor;

use crate::models::Patient;

pub struct UserService {
    supabase: SupabaseClient,
}

impl UserService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn find_doctor(&self, phone_number: &str) -> Result<Option<Doctor>> {
        debug!("Looking up doctor {}", phone_number);

        let path = format!(
            "/rest/v1/doctors?phone_number=eq.{}&select=*",
            urlencoding::encode(phone_number)
        );
        let result: Vec<Doctor> = self.supabase.request(Method::GET, &path, None).await?;

        Ok(result.into_iter().next())
    }

    pub async fn find_patient(&self, mobile_number: &str) -> Result<Option<Patient>> {
        debug!("Looking up patient {}", mobile_number);

        let path = format!(
            "/rest/v1/patients?mobile_number=eq.{}&select=*",
            urlencoding::encode(mobile_number)
        );
        let result: Vec<Patient> = self.supabase.request(Method::GET, &path, None).await?;

        Ok(result.into_iter().next())
    }

    pub async fn create_patient(&self, mobile_number: &str) -> Result<Patient> {
        debug!("Creating patient {}", mobile_number);

        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        let inserted: Vec<Patient> = self
            .supabase
            .request_with_headers(
                Method::POST,
                "/rest/v1/patients",
                Some(json!({ "mobile_number": mobile_number })),
                Some(headers),
            )
            .await?;

        inserted
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Failed to create patient record"))
    }

    /// Look the patient up, creating the row when missing. Returns the row
    /// and whether it already existed. Idempotent per mobile number.
    pub async fn ensure_patient(&self, mobile_number: &str) -> Result<(Patient, bool)> {
        if let Some(patient) = self.find_patient(mobile_number).await? {
            return Ok((patient, true));
        }

        let created = self.create_patient(mobile_number).await?;
        Ok((created, false))
    }
}
