use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use consultation_cell::services::availability::{open_slots, AvailabilityService};
use shared_config::AppConfig;
use shared_utils::test_utils::TestConfig;

fn config_for(server: &MockServer) -> Arc<AppConfig> {
    TestConfig::with_supabase_url(&server.uri()).to_arc()
}

#[test]
fn full_grid_when_nothing_is_booked() {
    let slots = open_slots(&[]);

    let times: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(
        times,
        vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"]
    );
    assert!(slots.iter().all(|s| s.is_available));
}

#[test]
fn booked_times_are_removed() {
    let booked = vec!["09:00".to_string(), "13:00".to_string()];

    let slots = open_slots(&booked);

    let times: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times.len(), 6);
    assert!(!times.contains(&"09:00"));
    assert!(!times.contains(&"13:00"));
}

#[test]
fn only_exact_string_matches_close_a_slot() {
    // "9:00" is not "09:00"; a row stored that way blocks nothing.
    let booked = vec!["9:00".to_string(), "09:30".to_string()];

    let slots = open_slots(&booked);

    assert_eq!(slots.len(), 8);
}

#[test]
fn fully_booked_day_has_no_slots() {
    let booked: Vec<String> = (9..17).map(|hour| format!("{:02}:00", hour)).collect();

    assert!(open_slots(&booked).is_empty());
}

#[tokio::test]
async fn fetches_scheduled_consultations_for_the_day() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/consultations"))
        .and(query_param("doctor_phone", "eq.0861000000"))
        .and(query_param("booking_date", "eq.2025-03-10"))
        .and(query_param("status", "eq.scheduled"))
        .and(query_param("select", "booking_time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "booking_time": "10:00" },
            { "booking_time": "15:00" }
        ])))
        .mount(&server)
        .await;

    let service = AvailabilityService::new(&config_for(&server));

    let slots = service
        .get_doctor_availability("0861000000", "2025-03-10".parse().unwrap())
        .await
        .expect("availability loads");

    let times: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times.len(), 6);
    assert!(!times.contains(&"10:00"));
    assert!(!times.contains(&"15:00"));
    assert!(times.contains(&"09:00"));
}
