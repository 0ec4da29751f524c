use serde::{Deserialize, Serialize};
use std::fmt;

/// Login credential pair submitted by a client.
///
/// Values are carried exactly as supplied: no trimming, case-folding, or
/// format checks happen at this boundary. Absent wire fields stay empty.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoginCredentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }

    pub fn builder() -> LoginCredentialsBuilder {
        LoginCredentialsBuilder::default()
    }
}

// Don't print the password in debug output
impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Staged construction of [`LoginCredentials`].
///
/// Fields may be set in any order; fields never set come out empty.
#[derive(Clone, Default)]
pub struct LoginCredentialsBuilder {
    email: String,
    password: String,
}

impl LoginCredentialsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    pub fn build(self) -> LoginCredentials {
        LoginCredentials {
            email: self.email,
            password: self.password,
        }
    }
}

impl fmt::Debug for LoginCredentialsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentialsBuilder")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
