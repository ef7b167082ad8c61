use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{
    ConsultationType, CreateDoctorRequest, Doctor, DoctorCategory, DoctorConsultationType,
    DoctorError,
};

pub struct DoctorService {
    supabase: SupabaseClient,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    fn representation_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        headers
    }

    /// Register a doctor together with its priced consultation types. The
    /// two inserts are not transactional: when the second one fails the
    /// doctor row is deleted again, best-effort.
    pub async fn create_doctor(
        &self,
        request: &CreateDoctorRequest,
        consultation_types: &[(ConsultationType, f64)],
    ) -> Result<(Doctor, Vec<DoctorConsultationType>), DoctorError> {
        debug!("Creating doctor profile for {}", request.phone_number);

        let doctor_data = json!({
            "phone_number": request.phone_number,
            "name": request.name,
            "category_id": request.category_id,
            "photo_url": request.photo_url,
            "experience_years": request.experience_years.unwrap_or(0),
            "consultation_count": request.consultation_count.unwrap_or(0),
            "about": request.about,
        });

        let inserted: Vec<Doctor> = self
            .supabase
            .request_with_headers(
                Method::POST,
                "/rest/v1/doctors",
                Some(doctor_data),
                Some(Self::representation_headers()),
            )
            .await
            .map_err(|e| DoctorError::CreateFailed(e.to_string()))?;

        let doctor = inserted
            .into_iter()
            .next()
            .ok_or_else(|| DoctorError::CreateFailed("no row returned".to_string()))?;

        let type_rows: Vec<Value> = consultation_types
            .iter()
            .map(|(consultation_type, price)| {
                json!({
                    "doctor_phone": request.phone_number,
                    "consultation_type": consultation_type,
                    "price": price,
                })
            })
            .collect();

        let created_types: Result<Vec<DoctorConsultationType>, _> = self
            .supabase
            .request_with_headers(
                Method::POST,
                "/rest/v1/doctor_consultation_types",
                Some(Value::Array(type_rows)),
                Some(Self::representation_headers()),
            )
            .await;

        match created_types {
            Ok(types) => Ok((doctor, types)),
            Err(e) => {
                // Keep the tables consistent by undoing the first insert.
                let delete_path = format!(
                    "/rest/v1/doctors?phone_number=eq.{}",
                    urlencoding::encode(&request.phone_number)
                );
                if let Err(delete_err) = self.supabase.execute(Method::DELETE, &delete_path, None).await {
                    warn!(
                        "Failed to roll back doctor {} after consultation type error: {}",
                        request.phone_number, delete_err
                    );
                }
                Err(DoctorError::ConsultationTypesFailed(e.to_string()))
            }
        }
    }

    pub async fn get_doctor(&self, phone_number: &str) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor profile: {}", phone_number);

        let path = format!(
            "/rest/v1/doctors?phone_number=eq.{}&select=*",
            urlencoding::encode(phone_number)
        );
        let result: Vec<Doctor> = self
            .supabase
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| DoctorError::Database(e.to_string()))?;

        result.into_iter().next().ok_or(DoctorError::NotFound)
    }

    pub async fn get_consultation_types(
        &self,
        phone_number: &str,
    ) -> Result<Vec<DoctorConsultationType>, DoctorError> {
        let path = format!(
            "/rest/v1/doctor_consultation_types?doctor_phone=eq.{}&select=*",
            urlencoding::encode(phone_number)
        );
        self.supabase
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| DoctorError::Database(e.to_string()))
    }

    pub async fn list_categories(&self) -> Result<Vec<DoctorCategory>, DoctorError> {
        self.supabase
            .request(Method::GET, "/rest/v1/doctor_categories?select=*&order=name.asc", None)
            .await
            .map_err(|e| DoctorError::Database(e.to_string()))
    }
}
