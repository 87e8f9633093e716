pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod screens;
pub mod seed;
pub mod services;
pub mod store;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::models::job::Job;
use crate::services::auth_service::{AuthService, Session};
use crate::store::JobStore;

/// Application root: owns the store and the auth gate and is passed by
/// reference to every screen. Tests build isolated instances with their own
/// seed data.
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub store: JobStore,
    pub auth: AuthService,
    pub session: Option<Session>,
}

impl App {
    pub fn new(config: Config, jobs: Vec<Job>) -> Self {
        let auth = AuthService::new(&config);
        Self {
            config,
            store: JobStore::new(jobs),
            auth,
            session: None,
        }
    }

    /// Builds the app from config: `SEED_FILE` when set, built-in demo data
    /// otherwise.
    pub fn from_config(config: Config) -> Result<Self> {
        let jobs = match &config.seed_file {
            Some(path) => seed::load_from_file(path)?,
            None => seed::seed_jobs(),
        };
        Ok(Self::new(config, jobs))
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let session = self.auth.login(username, password)?;
        self.session = Some(session);
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session = None;
    }
}
