//! Admin login check and session expiry.
//!
//! The admin "session" is a login timestamp held by the client. The server
//! only verifies credentials and answers whether a timestamp is still inside
//! the session window; product endpoints are not gated on it.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::config::AdminConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Name and password are required")]
    MissingCredentials,

    #[error("Incorrect name or password")]
    InvalidCredentials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub login_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AdminAuth {
    username: String,
    password: String,
    window: Duration,
}

impl AdminAuth {
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            username: config.username.trim().to_lowercase(),
            password: config.password.clone(),
            window: Duration::hours(i64::from(config.session_hours)),
        }
    }

    /// Name is matched trimmed and case-insensitively; password exactly.
    pub fn verify(&self, name: &str, password: &str) -> Result<(), AuthError> {
        if name.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        if name.trim().to_lowercase() == self.username && password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn login(
        &self,
        name: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AdminSession, AuthError> {
        self.verify(name, password)?;
        Ok(self.session_at(now))
    }

    #[must_use]
    pub fn session_at(&self, login_at: DateTime<Utc>) -> AdminSession {
        AdminSession {
            login_at,
            expires_at: login_at + self.window,
        }
    }

    #[must_use]
    pub fn is_session_valid(&self, login_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        session_is_valid(login_at, now, self.window)
    }
}

/// A login stays valid while less than `window` has elapsed since `login_at`.
#[must_use]
pub fn session_is_valid(login_at: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    now.signed_duration_since(login_at) < window
}
