use crate::models::credential::{Identity, Role};
use std::fmt;
use zeroize::Zeroizing;

/// A validated (identity, plaintext, role) tuple waiting to be derived.
///
/// The plaintext is wiped from memory when the entry is dropped.
pub struct UserEntry {
    pub identity: Identity,
    pub password: Zeroizing<String>,
    pub role: Role,
}

impl UserEntry {
    pub fn new(identity: Identity, password: impl Into<String>, role: Role) -> Self {
        Self {
            identity,
            password: Zeroizing::new(password.into()),
            role,
        }
    }
}

impl fmt::Debug for UserEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEntry")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
