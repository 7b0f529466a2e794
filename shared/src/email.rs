//! Email provider client.
//!
//! One POST per invocation to the provider's send endpoint. Transport errors
//! and non-2xx responses are surfaced as-is; nothing is retried.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use crate::{Error, Result};

const SUBJECT: &str = "Welcome! Please verify your email";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the transactional email provider's HTTP API.
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    sender: String,
    api_key: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    to: &'a str,
    from: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

impl EmailClient {
    pub fn new(base_url: &str, sender: String, api_key: String) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid email API base url: {}", e)))?;

        let http_client = Client::builder().timeout(SEND_TIMEOUT).build()?;

        Ok(Self {
            http_client,
            base_url,
            sender,
            api_key,
        })
    }

    /// Send the verification email, with the link interpolated into both the
    /// plain-text body and the HTML anchor.
    pub async fn send_verification_email(
        &self,
        to: &str,
        first_name: &str,
        link: &str,
    ) -> Result<()> {
        let url = self
            .base_url
            .join("v3/mail/send")
            .map_err(|e| Error::Config(format!("invalid email API send path: {}", e)))?;

        let text = format!(
            "Hello {},\n\n\
            Please click on the following link to verify your email address: {}. \
            This link will expire in 2 minutes.\n\n\
            If you did not request this, please ignore this email.\n\n\
            Best regards,\nThe Team",
            first_name, link
        );

        let html = format!(
            "<p>Hello {},</p>\
            <p>Please click on the following link to verify your email address: \
            <a href=\"{}\">{}</a></p>\
            <p>This link will expire in 2 minutes.</p>\
            <p>If you did not request this, please ignore this email.</p>\
            <p>Best regards,<br>The Team</p>",
            first_name, link, link
        );

        let body = SendEmailRequest {
            to,
            from: &self.sender,
            subject: SUBJECT,
            text: &text,
            html: &html,
        };

        self.http_client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
