//! Input checks applied before anything reaches the deriver.
//!
//! Rejections are recoverable: the prompt loop asks again, batch input skips
//! the entry.

use crate::constants;
use crate::models::credential::{Identity, Role};
use crate::models::entry::UserEntry;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("username cannot be empty")]
    EmptyUsername,

    #[error("please enter a valid email")]
    InvalidEmail,

    #[error("password should be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("role must be: admin, manager, or user (got '{0}')")]
    InvalidRole(String),
}

pub fn validate_username(raw: &str) -> Result<String, Rejection> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(Rejection::EmptyUsername);
    }
    Ok(username.to_string())
}

pub fn validate_email(raw: &str) -> Result<String, Rejection> {
    let email = raw.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(Rejection::InvalidEmail);
    }
    Ok(email.to_string())
}

pub fn validate_password(raw: &str, min_len: usize) -> Result<(), Rejection> {
    if raw.chars().count() < min_len {
        return Err(Rejection::PasswordTooShort { min: min_len });
    }
    Ok(())
}

/// Empty input selects the default role.
pub fn validate_role(raw: &str) -> Result<Role, Rejection> {
    let role = raw.trim().to_lowercase();
    let role = if role.is_empty() {
        constants::DEFAULT_ROLE.to_string()
    } else {
        role
    };
    role.parse().map_err(|_| Rejection::InvalidRole(role))
}

/// Validate a full tuple, returning the entry the deriver will consume.
pub fn validate_entry(
    username: &str,
    email: &str,
    password: &str,
    role: &str,
    min_password_len: usize,
) -> Result<UserEntry, Rejection> {
    let username = validate_username(username)?;
    let email = validate_email(email)?;
    validate_password(password, min_password_len)?;
    let role = validate_role(role)?;
    Ok(UserEntry::new(Identity::new(username, email), password, role))
}
