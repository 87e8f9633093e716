use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{Error, Result};

/// The login gate in front of the dashboard routes. A plain credential check
/// against configuration; the session lives only as long as the process.
#[derive(Debug, Clone)]
pub struct AuthService {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: Uuid,
    pub username: String,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            username: config.dashboard_username.clone(),
            password: config.dashboard_password.clone(),
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        if username == self.username && password == self.password {
            info!(user = %username, "login successful");
            Ok(Session {
                token: Uuid::new_v4(),
                username: username.to_string(),
            })
        } else {
            warn!(user = %username, "login rejected");
            Err(Error::Unauthorized("Invalid username or password".to_string()))
        }
    }
}
