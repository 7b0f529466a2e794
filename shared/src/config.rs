//! Configuration management for the Lambda function.

use std::env;

use crate::{Error, Result};

/// Default email provider API host.
const DEFAULT_EMAIL_API_BASE: &str = "https://api.sendgrid.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database host
    pub db_host: String,
    /// Database name
    pub db_name: String,
    /// Database user
    pub db_user: String,
    /// Environment name, used as the verification host subdomain
    pub environment: String,
    /// Identifier of the secret holding email provider credentials
    pub email_secret_id: String,
    /// Identifier of the secret holding the database password
    pub db_secret_id: String,
    /// Email provider API base URL (overridable for tests)
    pub email_api_base: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            db_host: require("DB_HOST")?,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "users".to_string()),
            db_user: env::var("DB_USER").unwrap_or_else(|_| "app".to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()),
            email_secret_id: require("EMAIL_SECRET_ID")?,
            db_secret_id: require("DB_SECRET_ID")?,
            email_api_base: env::var("EMAIL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_EMAIL_API_BASE.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("{} not set", name)))
}
