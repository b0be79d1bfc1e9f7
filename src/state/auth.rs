#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Process-wide credential store: holds the current session for the
/// rest of the application, plus a loading flag for the boot-time
/// session restore.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Store the session produced by a successful login.
    pub fn set_credentials(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
