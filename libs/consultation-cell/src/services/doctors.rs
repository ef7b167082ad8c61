use anyhow::Result;
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use doctor_cell::models::Doctor;

#[derive(Debug, Deserialize)]
struct CategoryId {
    id: i32,
}

pub struct DoctorDirectoryService {
    supabase: SupabaseClient,
}

impl DoctorDirectoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// List doctors, optionally narrowed to a specialty by category name.
    /// An unknown specialty is not an error: the filter is skipped and the
    /// full listing returned.
    pub async fn list_doctors(&self, specialization: Option<&str>) -> Result<Vec<Doctor>> {
        let mut path = "/rest/v1/doctors?select=*".to_string();

        if let Some(specialization) = specialization {
            let category_path = format!(
                "/rest/v1/doctor_categories?name=eq.{}&select=id",
                urlencoding::encode(specialization)
            );
            let categories: Vec<CategoryId> =
                self.supabase.request(Method::GET, &category_path, None).await?;

            match categories.first() {
                Some(category) => path.push_str(&format!("&category_id=eq.{}", category.id)),
                None => debug!("No category named {:?}, listing all doctors", specialization),
            }
        }

        let doctors: Vec<Doctor> = self.supabase.request(Method::GET, &path, None).await?;
        Ok(doctors)
    }
}
