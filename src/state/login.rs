#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::Serialize;

use crate::net::types::{AuthError, Session};
use crate::validate::{self, FieldError, ValidationResult};

/// One submission attempt's worth of input. Built from the form state
/// when a submit begins, serialized as the request body, and discarded
/// once the request resolves.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Where the current submission attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed(AuthError),
}

/// Login form state: field values, visited flags for deferred error
/// display, the password visibility toggle, and the submission state
/// machine.
///
/// Validation messages render only once a field has been visited (blur
/// or a submit attempt), so an untouched form doesn't open covered in
/// "Required" hints.
#[derive(Clone, Debug, Default)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub email_visited: bool,
    pub password_visited: bool,
    pub show_password: bool,
    pub submission: SubmissionState,
}

impl LoginFormState {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn visit_email(&mut self) {
        self.email_visited = true;
    }

    pub fn visit_password(&mut self) {
        self.password_visited = true;
    }

    /// Pure UI toggle between masked and plain-text password display.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Snapshot the field values for one submission attempt.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn validation(&self) -> ValidationResult {
        validate::validate(&self.credentials())
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// Validation message for the email field, if it should render.
    pub fn email_error(&self) -> Option<&'static str> {
        if !self.email_visited {
            return None;
        }
        self.validation().email.map(FieldError::message)
    }

    /// Validation message for the password field, if it should render.
    pub fn password_error(&self) -> Option<&'static str> {
        if !self.password_visited {
            return None;
        }
        self.validation().password.map(FieldError::message)
    }

    /// User-facing message for the last failed submission. Persists
    /// while the user edits fields; only the next submit attempt
    /// rewrites it.
    pub fn submit_error(&self) -> Option<&'static str> {
        match self.submission {
            SubmissionState::Failed(err) => Some(err.message()),
            _ => None,
        }
    }

    /// Move to `Submitting` if allowed. Returns `false` without calling
    /// out when a submission is already in flight or validation fails;
    /// a failed attempt marks both fields visited so their messages
    /// render.
    pub fn try_begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.email_visited = true;
        self.password_visited = true;
        if !self.validation().is_ok() {
            return false;
        }
        self.submission = SubmissionState::Submitting;
        true
    }

    /// Record the outcome of the in-flight request. On success the
    /// session is handed back for the caller to store and navigate
    /// away with; on failure the error sticks until the next attempt.
    pub fn finish_submit(&mut self, result: Result<Session, AuthError>) -> Option<Session> {
        match result {
            Ok(session) => {
                self.submission = SubmissionState::Idle;
                Some(session)
            }
            Err(err) => {
                self.submission = SubmissionState::Failed(err);
                None
            }
        }
    }
}
