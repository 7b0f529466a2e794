//! SNS event parsing.

use serde::Deserialize;

use crate::{Error, Result};

/// SNS event wrapper.
#[derive(Debug, Deserialize)]
pub struct SnsEvent {
    #[serde(rename = "Records")]
    pub records: Vec<SnsRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

#[derive(Debug, Deserialize)]
pub struct SnsMessage {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Newly-registered user details carried in the SNS message body.
#[derive(Debug, Deserialize)]
pub struct UserDetails {
    pub email: String,
    pub first_name: String,
    pub id: String,
    pub token: String,
}

/// Extract user details from the first record of the SNS envelope.
///
/// Missing records, a malformed JSON body, or an absent required field all
/// surface as [`Error::MalformedEvent`] rather than a panic.
pub fn parse_user_details(event: &SnsEvent) -> Result<UserDetails> {
    let record = event
        .records
        .first()
        .ok_or_else(|| Error::MalformedEvent("notification envelope has no records".to_string()))?;

    let details: UserDetails = serde_json::from_str(&record.sns.message)
        .map_err(|e| Error::MalformedEvent(format!("invalid user details payload: {}", e)))?;

    if details.email.is_empty() {
        return Err(Error::MalformedEvent("email is empty".to_string()));
    }

    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    fn envelope(message: &str) -> SnsEvent {
        serde_json::from_value(serde_json::json!({
            "Records": [{ "Sns": { "Message": message } }]
        }))
        .unwrap()
    }

    #[test]
    fn parses_well_formed_user_details() {
        let event = envelope(
            r#"{"email":"a@b.com","first_name":"Ada","id":"42","token":"tok123"}"#,
        );

        let details = parse_user_details(&event).unwrap();
        assert_eq!(details.email, "a@b.com");
        assert_eq!(details.first_name, "Ada");
        assert_eq!(details.id, "42");
        assert_eq!(details.token, "tok123");
    }

    #[test]
    fn rejects_empty_record_list() {
        let event: SnsEvent =
            serde_json::from_value(serde_json::json!({ "Records": [] })).unwrap();

        let result = parse_user_details(&event);
        assert!(matches!(result, Err(Error::MalformedEvent(_))));
    }

    #[test]
    fn rejects_non_json_message_body() {
        let event = envelope("not json");
        assert_err!(parse_user_details(&event));
    }

    #[test]
    fn rejects_missing_required_field() {
        // No token
        let event = envelope(r#"{"email":"a@b.com","first_name":"Ada","id":"42"}"#);

        let result = parse_user_details(&event);
        assert!(matches!(result, Err(Error::MalformedEvent(_))));
    }

    #[test]
    fn rejects_empty_email() {
        let event = envelope(r#"{"email":"","first_name":"Ada","id":"42","token":"t"}"#);

        let result = parse_user_details(&event);
        assert!(matches!(result, Err(Error::MalformedEvent(_))));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let event = envelope(
            r#"{"email":"a@b.com","first_name":"Ada","id":"42","token":"t","plan":"free"}"#,
        );
        assert_ok!(parse_user_details(&event));
    }
}
