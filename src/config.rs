use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

/// Runtime configuration, loaded once at startup and passed by value to the
/// app root. There is deliberately no global config cell: tests build their
/// own instances.
#[derive(Debug, Clone)]
pub struct Config {
    pub dashboard_username: String,
    pub dashboard_password: String,
    pub seed_file: Option<String>,
    pub page_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            dashboard_username: get_env_or("DASHBOARD_USERNAME", "admin"),
            dashboard_password: get_env_or("DASHBOARD_PASSWORD", "admin"),
            seed_file: env::var("SEED_FILE").ok(),
            page_size: get_env_parse_or("PAGE_SIZE", 5)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard_username: "admin".to_string(),
            dashboard_password: "admin".to_string(),
            seed_file: None,
            page_size: 5,
        }
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
