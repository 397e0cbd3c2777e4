//! Authenticated session context

use serde::Serialize;
use std::fmt;

/// Login or registration credentials as posted to the auth endpoints
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Token issued by the backend, passed explicitly to every authenticated call
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    email: String,
}

impl Session {
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
        }
    }

    /// Email the session was opened with
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email)
            .field("token", &"***")
            .finish()
    }
}
