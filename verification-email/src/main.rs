//! Verification Email Lambda - Sends verification links to new users.
//!
//! This Lambda is triggered by SNS and:
//! 1. Resolves provider and database secrets from Secrets Manager
//! 2. Parses user details from the SNS message
//! 3. Generates an environment-scoped verification link
//! 4. Sends the verification email via the email provider
//! 5. Inserts one tracking row in the database

use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use shared::{db, email::EmailClient, event, link, secrets, Config, SnsEvent};

/// Lambda-style response; every invocation resolves to one of these.
#[derive(Debug, Serialize)]
struct HandlerResponse {
    #[serde(rename = "statusCode")]
    status_code: u16,
    body: String,
}

impl HandlerResponse {
    fn ok() -> Self {
        Self {
            status_code: 200,
            body: "Email sent successfully".to_string(),
        }
    }

    fn failed() -> Self {
        Self {
            status_code: 500,
            body: "Failed to send email".to_string(),
        }
    }
}

struct AppState {
    config: Config,
    secrets_client: aws_sdk_secretsmanager::Client,
}

impl AppState {
    async fn new() -> Result<Self, LambdaError> {
        let config = Config::from_env()?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let secrets_client = aws_sdk_secretsmanager::Client::new(&aws_config);

        Ok(Self {
            config,
            secrets_client,
        })
    }
}

/// Run the pipeline for one invocation: secrets, parse, link, send, track.
async fn process(state: &AppState, event: &SnsEvent) -> shared::Result<String> {
    let email_creds =
        secrets::get_email_credentials(&state.secrets_client, &state.config.email_secret_id)
            .await?;
    let db_creds =
        secrets::get_database_credentials(&state.secrets_client, &state.config.db_secret_id)
            .await?;

    let user = event::parse_user_details(event)?;

    let link = link::verification_link(&state.config.environment, &user.email, &user.token);

    let email_client = EmailClient::new(
        &state.config.email_api_base,
        email_creds.verified_sender,
        email_creds.api_key,
    )?;
    email_client
        .send_verification_email(&user.email, &user.first_name, &link)
        .await?;

    // Tracker runs strictly after a successful send
    let mut conn = db::connect(&state.config, &db_creds.password).await?;
    let tracked = db::track_email(&mut conn, &user, &link).await;
    if let Err(e) = db::close(conn).await {
        warn!(error = %e, "Failed to close database connection");
    }
    tracked?;

    Ok(user.email)
}

async fn handler(
    state: Arc<AppState>,
    event: LambdaEvent<SnsEvent>,
) -> Result<HandlerResponse, LambdaError> {
    match process(&state, &event.payload).await {
        Ok(email) => {
            info!(email = %email, "Verification email sent and tracked");
            Ok(HandlerResponse::ok())
        }
        Err(e) => {
            error!(error = %e, "Failed to process verification event");
            Ok(HandlerResponse::failed())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::HandlerResponse;

    // Connection teardown lives behind shared::db so this crate never needs
    // the sqlx traits in scope; this pins the helper's path and return type.
    #[test]
    fn database_close_helper_resolves_from_this_crate() {
        fn takes_close<A, F, Fut>(_f: F)
        where
            F: Fn(A) -> Fut,
            Fut: std::future::Future<Output = shared::Result<()>>,
        {
        }

        takes_close(shared::db::close);
    }

    #[test]
    fn success_response_serializes_with_lambda_casing() {
        let json = serde_json::to_value(HandlerResponse::ok()).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"], "Email sent successfully");
    }

    #[test]
    fn failure_response_is_a_generic_500() {
        let json = serde_json::to_value(HandlerResponse::failed()).unwrap();
        assert_eq!(json["statusCode"], 500);
        assert_eq!(json["body"], "Failed to send email");
    }
}
