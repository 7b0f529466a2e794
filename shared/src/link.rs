//! Verification link generation.

/// Fixed verification host; the environment name is prepended as a subdomain.
pub const VERIFY_HOST: &str = "srijithmakam.me";

/// Build the verification URL for a user.
///
/// The email parameter is interpolated as-is; callers must ensure it contains
/// no characters that break URL parsing.
pub fn verification_link(environment: &str, email: &str, token: &str) -> String {
    format!(
        "https://{}.{}/v1/user/verify?email={}&token={}",
        environment, VERIFY_HOST, email, token
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_environment_scoped_link() {
        let link = verification_link("prod", "a@b.com", "tok123");
        assert_eq!(
            link,
            "https://prod.srijithmakam.me/v1/user/verify?email=a@b.com&token=tok123"
        );
    }

    #[test]
    fn embeds_the_environment_as_subdomain() {
        let link = verification_link("staging", "a@b.com", "t");
        assert!(link.starts_with("https://staging.srijithmakam.me/"));
    }
}
