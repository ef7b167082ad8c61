use assert_matches::assert_matches;

use shared_models::error::AppError;
use shared_utils::reference::generate_booking_reference;
use shared_utils::validation::{time_format, RequestValidator};

#[test]
fn empty_validator_passes() {
    let validator = RequestValidator::new();
    assert!(validator.is_valid());
    assert!(validator.finish().is_ok());
}

#[test]
fn collects_every_failed_field() {
    let mut validator = RequestValidator::new();
    validator
        .require_non_empty("phone_number", "", "Phone number is required")
        .require_non_empty("name", "Dr. Byrne", "Name is required")
        .require_time("start_time", "25:00", "Invalid start time")
        .check("consultation_types", false, "At least one consultation type is required");

    let error = validator.finish().unwrap_err();
    let fields = assert_matches!(error, AppError::Validation(fields) => fields);
    let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(names, vec!["phone_number", "start_time", "consultation_types"]);
}

#[test]
fn whitespace_only_counts_as_empty() {
    let mut validator = RequestValidator::new();
    validator.require_non_empty("symptoms", "   ", "Symptoms are required");
    assert!(!validator.is_valid());
}

#[test]
fn time_format_accepts_24h_clock() {
    for time in ["09:00", "9:00", "17:30", "23:59", "00:00"] {
        assert!(time_format().is_match(time), "{} should be valid", time);
    }
}

#[test]
fn time_format_rejects_out_of_range() {
    for time in ["24:00", "12:60", "noon", "9", "09:0", ""] {
        assert!(!time_format().is_match(time), "{} should be invalid", time);
    }
}

#[test]
fn booking_reference_is_ten_uppercase_alphanumerics() {
    for _ in 0..50 {
        let reference = generate_booking_reference();
        assert_eq!(reference.len(), 10);
        assert!(reference
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
