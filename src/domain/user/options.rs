//! Options pipeline
//!
//! Construction and update both take an ordered list of options, each of
//! which gets exclusive mutable access to the record and may fail. The
//! pipeline applies them strictly in sequence and stops at the first
//! error, so a failing option aborts the whole operation before anything
//! is persisted.

use chrono::{DateTime, Utc};

use crate::domain::DomainError;

use super::entity::User;

/// A single configuration step over a record under construction or
/// update.
pub type UserOption = Box<dyn FnOnce(&mut User) -> Result<(), DomainError> + Send>;

/// Set the audience tag. Cannot fail.
pub fn set_audience(audience: impl Into<String>) -> UserOption {
    let audience = audience.into();
    Box::new(move |user| {
        user.set_audience(audience);
        Ok(())
    })
}

/// Set the free-form role. Cannot fail.
pub fn set_role(role: impl Into<String>) -> UserOption {
    let role = role.into();
    Box::new(move |user| {
        user.set_role(role);
        Ok(())
    })
}

/// Mark the email verified at the current time.
pub fn mark_email_verified() -> UserOption {
    Box::new(|user| {
        user.mark_email_verified();
        Ok(())
    })
}

/// Set a password-recovery token and stamp its send time.
pub fn set_recovery_token(token: impl Into<String>) -> UserOption {
    let token = token.into();
    Box::new(move |user| {
        user.set_recovery_token(token);
        Ok(())
    })
}

/// Gate authentication until the given instant.
pub fn ban_until(until: DateTime<Utc>) -> UserOption {
    Box::new(move |user| {
        user.set_banned_until(until);
        Ok(())
    })
}

impl User {
    /// Apply update options in order, stopping at the first failure.
    pub fn update(&mut self, options: Vec<UserOption>) -> Result<(), DomainError> {
        for option in options {
            option(self)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_options_apply_in_order() {
        let mut user = User::new("jon@doe.com");

        user.update(vec![set_audience("first"), set_audience("second")])
            .unwrap();

        assert_eq!(user.audience(), "second");
    }

    #[test]
    fn test_first_error_aborts() {
        let mut user = User::new("jon@doe.com");

        let failing: UserOption =
            Box::new(|_| Err(DomainError::random_source("entropy unavailable")));

        let result = user.update(vec![
            set_role("admin"),
            failing,
            set_audience("never-applied"),
        ]);

        assert!(matches!(result, Err(DomainError::RandomSource { .. })));
        // The option before the failure applied; the one after did not.
        assert_eq!(user.role(), "admin");
        assert!(user.audience().is_empty());
    }

    #[test]
    fn test_mark_email_verified_option() {
        let mut user = User::new("jon@doe.com");

        user.update(vec![mark_email_verified()]).unwrap();

        assert!(user.email_verified());
        assert!(user.email_verified_at().is_some());
    }

    #[test]
    fn test_recovery_token_option() {
        let mut user = User::new("jon@doe.com");

        user.update(vec![set_recovery_token("tok-123")]).unwrap();

        assert_eq!(user.password_recovery_token(), "tok-123");
        assert!(user.password_recovery_sent_at().is_some());
    }

    #[test]
    fn test_ban_until_option() {
        let mut user = User::new("jon@doe.com");
        let until = Utc::now() + Duration::hours(1);

        user.update(vec![ban_until(until)]).unwrap();

        assert_eq!(user.banned_until(), Some(until));
    }

    #[test]
    fn test_update_touches_updated_at() {
        let mut user = User::new("jon@doe.com");
        let original_updated = user.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));
        user.update(vec![set_role("viewer")]).unwrap();

        assert!(user.updated_at() > original_updated);
    }
}
