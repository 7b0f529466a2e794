//! Shared library for the verification email Lambda.
//!
//! This crate provides the pipeline building blocks: configuration, typed
//! errors, secret resolution, SNS event parsing, link generation, the email
//! provider client, and the tracking-table writer.

pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod event;
pub mod link;
pub mod secrets;

pub use config::Config;
pub use email::EmailClient;
pub use error::{Error, Result};
pub use event::{parse_user_details, SnsEvent, UserDetails};
pub use link::verification_link;
pub use secrets::{get_database_credentials, get_email_credentials, DatabaseCredentials, EmailCredentials};
