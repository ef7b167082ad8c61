use std::sync::OnceLock;

use regex::Regex;

use shared_models::{AppError, FieldError};

static TIME_FORMAT: OnceLock<Regex> = OnceLock::new();

/// `HH:MM` in 24-hour time, single-digit hours allowed.
pub fn time_format() -> &'static Regex {
    TIME_FORMAT.get_or_init(|| {
        Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex")
    })
}

/// Collects field-level failures across a request body and reports them all
/// at once, the way the API's validator chains always have.
#[derive(Debug, Default)]
pub struct RequestValidator {
    errors: Vec<FieldError>,
}

impl RequestValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_non_empty(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn require_time(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        if !time_format().is_match(value) {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    /// Record a failure for `field` unless `ok` holds.
    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn push(&mut self, field: &str, message: &str) -> &mut Self {
        self.errors.push(FieldError::new(field, message));
        self
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}
