//! Wire types exchanged with the authentication backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Opaque authenticated-identity payload returned by the auth backend
/// after a successful login. The client forwards it to the credential
/// store without inspecting its shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(pub serde_json::Value);

/// Success envelope returned by `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: Session,
}

/// Error body returned by the auth endpoint on failure.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

/// Login failure as surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The backend rejected the email/password pair.
    InvalidCredentials,
    /// Anything else: network failure, unexpected server error.
    Unknown,
}

impl AuthError {
    /// Classify a failed login. The backend signals a bad credential
    /// pair with `code: 401` in the error body; a missing or
    /// unparseable body, or any other code, is reported generically.
    pub fn from_error_body(body: Option<&ApiErrorBody>) -> Self {
        match body {
            Some(body) if body.code == 401 => Self::InvalidCredentials,
            _ => Self::Unknown,
        }
    }

    /// User-facing message rendered under the form.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid email or password",
            Self::Unknown => "An error occurred during login",
        }
    }
}
