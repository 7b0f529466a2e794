//! AWS Secrets Manager integration.
//!
//! Secrets are resolved fresh on every invocation; nothing is cached across
//! invocations and nothing is retried.

use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;

use crate::{Error, Result};

/// Email provider credentials from Secrets Manager.
#[derive(Debug, Deserialize)]
pub struct EmailCredentials {
    pub api_key: String,
    pub verified_sender: String,
}

/// Database credentials from Secrets Manager.
#[derive(Debug, Deserialize)]
pub struct DatabaseCredentials {
    pub password: String,
}

/// Get a secret value from Secrets Manager.
pub async fn get_secret(client: &SecretsClient, secret_id: &str) -> Result<String> {
    let response = client
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(|e| Error::Secret(format!("failed to get secret {}: {}", secret_id, e)))?;

    // Binary-only secrets have no string payload
    let secret_string = response
        .secret_string()
        .ok_or_else(|| Error::Secret(format!("secret {} has no string value", secret_id)))?;

    Ok(secret_string.to_string())
}

/// Get email provider credentials from Secrets Manager.
pub async fn get_email_credentials(
    client: &SecretsClient,
    secret_id: &str,
) -> Result<EmailCredentials> {
    let secret_string = get_secret(client, secret_id).await?;

    serde_json::from_str(&secret_string)
        .map_err(|e| Error::Secret(format!("failed to parse email credentials: {}", e)))
}

/// Get database credentials from Secrets Manager.
pub async fn get_database_credentials(
    client: &SecretsClient,
    secret_id: &str,
) -> Result<DatabaseCredentials> {
    let secret_string = get_secret(client, secret_id).await?;

    serde_json::from_str(&secret_string)
        .map_err(|e| Error::Secret(format!("failed to parse database credentials: {}", e)))
}
