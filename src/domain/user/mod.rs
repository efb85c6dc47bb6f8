//! User domain
//!
//! The identity record, its email validation, and the options pipeline
//! used to set derived fields at construction or update time.

mod entity;
mod options;
mod validation;

pub use entity::User;
pub use options::{
    ban_until, mark_email_verified, set_audience, set_recovery_token, set_role, UserOption,
};
pub use validation::validate_email;
