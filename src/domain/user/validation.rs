//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::DomainError;

/// Canonical email pattern: dotted local part of allowed characters,
/// domain labels of letters/digits/hyphens, top-level label of at least
/// two letters. Compiled once, shared process-wide.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9_%+-]+(\.[a-zA-Z0-9_%+-]+)*@([a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]\.)+[a-zA-Z]{2,}$",
    )
    .expect("email pattern must compile")
});

/// Validate an email address against the canonical pattern.
///
/// Syntax only; uniqueness is enforced by the store at persistence time.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "jon@doe.com",
            "jane@doe.com",
            "first.last@example.co.uk",
            "user_name+tag@sub.example.org",
            "a%b@example.io",
        ] {
            assert!(validate_email(email).is_ok(), "expected valid: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "not-an-email",
            "a@b",
            "@domain.com",
            "jon@",
            "jon..doe@example.com",
            ".jon@example.com",
            "jon@example.c",
            "jon@-example.com",
        ] {
            let result = validate_email(email);
            assert!(
                matches!(result, Err(DomainError::InvalidEmail)),
                "expected invalid: {}",
                email
            );
        }
    }
}
