//! Synchronous validation for the login form.
//!
//! Runs on every field change; submission is blocked while any field
//! reports an error. Messages match what the backend's own schema
//! reports so the inline hints and server rejections read the same.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::state::login::Credentials;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Why a single form field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort,
}

impl FieldError {
    /// User-facing message rendered adjacent to the field.
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::InvalidFormat => "Invalid email address",
            Self::TooShort => "Password must be at least 8 characters",
        }
    }
}

/// Per-field validation outcome for the login form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl ValidationResult {
    /// True when no field reports an error.
    pub fn is_ok(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate one submission attempt's worth of input.
pub fn validate(credentials: &Credentials) -> ValidationResult {
    ValidationResult {
        email: validate_email(&credentials.email),
        password: validate_password(&credentials.password),
    }
}

/// Validate the email field in isolation.
pub fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::Required)
    } else if !is_email_shaped(email) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

/// Validate the password field in isolation. Length counts characters,
/// not bytes.
pub fn validate_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        Some(FieldError::Required)
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some(FieldError::TooShort)
    } else {
        None
    }
}

/// Accepts `local@domain` with a nonempty local part, a single `@`, no
/// whitespace, and a domain of nonempty dot-separated labels with at
/// least one dot. Not an RFC 5322 parser; matches the address shape the
/// backend accepts.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
