/**
 * Request Validation
 *
 * Field-level checks shared by the handlers. A `Validator` collects every
 * failure for a request so the client receives all of them at once, then
 * `finish` turns them into a single `ApiError::Validation`.
 */

use chrono::NaiveDate;
use uuid::Uuid;

use crate::backend::error::{ApiError, FieldError};

/// Date format accepted for experience and education entries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check that an email address is well formed
///
/// Addresses must:
/// - Contain exactly one `@` with a non-empty local part
/// - Have a domain with at least one dot, not at either end
/// - Contain no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Parse a path identifier; a malformed id is reported as not found
pub fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!("Malformed identifier: {}", raw);
        ApiError::not_found(not_found)
    })
}

/// Drop blank optional values
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Collects field errors for a single request
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, msg: &str) {
        self.errors.push(FieldError::new(field, msg));
    }

    /// Require a non-blank value; returns it unchanged
    pub fn required(&mut self, field: &str, value: Option<&str>, msg: &str) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v.to_string(),
            _ => {
                self.reject(field, msg);
                String::new()
            }
        }
    }

    /// Require a well-formed email address
    pub fn email(&mut self, field: &str, value: Option<&str>, msg: &str) -> String {
        match value {
            Some(v) if is_valid_email(v) => v.to_string(),
            _ => {
                self.reject(field, msg);
                String::new()
            }
        }
    }

    /// Require a value of at least `min` characters
    pub fn min_length(&mut self, field: &str, value: Option<&str>, min: usize, msg: &str) -> String {
        match value {
            Some(v) if v.chars().count() >= min => v.to_string(),
            _ => {
                self.reject(field, msg);
                String::new()
            }
        }
    }

    /// Require a `YYYY-MM-DD` date
    pub fn date(&mut self, field: &str, value: Option<&str>, msg: &str) -> Option<NaiveDate> {
        let parsed = value
            .filter(|v| !v.trim().is_empty())
            .and_then(|v| NaiveDate::parse_from_str(v.trim(), DATE_FORMAT).ok());
        if parsed.is_none() {
            self.reject(field, msg);
        }
        parsed
    }

    /// Accept an absent or blank date, reject a malformed one
    pub fn optional_date(&mut self, field: &str, value: Option<&str>) -> Option<NaiveDate> {
        let value = value.map(str::trim).filter(|v| !v.is_empty())?;
        match NaiveDate::parse_from_str(value, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.reject(field, "Date must be formatted YYYY-MM-DD");
                None
            }
        }
    }

    /// Fail with every collected error, if any
    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(self.errors))
        }
    }

    /// Like `finish`, also unwrapping a value whose check recorded an error when absent
    pub fn finish_with<T>(self, value: Option<T>) -> Result<T, ApiError> {
        self.finish()?;
        value.ok_or_else(|| ApiError::internal("validated value missing"))
    }
}
