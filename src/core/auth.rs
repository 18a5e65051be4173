//! Pluggable authentication seam. The engine's consumers depend on the
//! trait, not on where the credentials live.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::Local;

#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub started_at: String,
}

pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> AppResult<Session>;
}

/// Authenticator backed by the credential pair in the configuration file.
pub struct ConfigAuthenticator {
    username: String,
    password: String,
}

impl ConfigAuthenticator {
    pub fn new(cfg: &Config) -> Self {
        Self {
            username: cfg.admin_user.clone(),
            password: cfg.admin_password.clone(),
        }
    }
}

impl Authenticator for ConfigAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> AppResult<Session> {
        if username == self.username && password == self.password {
            Ok(Session {
                username: username.to_string(),
                started_at: Local::now().to_rfc3339(),
            })
        } else {
            Err(AppError::AuthFailed)
        }
    }
}
