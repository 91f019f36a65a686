use crate::core::salt::Salt;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of roles understood by the client application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("role must be one of: admin, manager, user (got '{}')", s))
    }
}

/// ISO-8601 creation time as stored in a credentials document.
///
/// Generated sets always carry the local UTC offset. Documents written by
/// older tooling may hold a bare local time (`2025-01-01T10:00:00.123456`);
/// those are read and written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Offset(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    pub fn now() -> Self {
        Timestamp::Offset(Local::now().fixed_offset())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Offset(dt) => f.write_str(&dt.to_rfc3339()),
            Timestamp::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Timestamp::Offset(dt)
    }
}

/// Who a credential belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub email: String,
}

impl Identity {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// One user's derived authentication record.
///
/// Holds the hash only; there is no field a plaintext could end up in.
/// Fields are read-only outside the crate, so a password change means
/// deriving a new `Credential`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    username: String,
    email: String,
    #[serde(rename = "passwordHash")]
    password_hash: String,
    role: Role,
    created: Timestamp,
}

impl Credential {
    pub(crate) fn new(
        identity: &Identity,
        password_hash: String,
        role: Role,
        created: Timestamp,
    ) -> Self {
        Self {
            username: identity.username.clone(),
            email: identity.email.clone(),
            password_hash,
            role,
            created,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created(&self) -> Timestamp {
        self.created
    }
}

/// The unit of export: a salt, the ordered credentials derived with it, and
/// the time the set was generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    salt: Salt,
    users: Vec<Credential>,
    generated: Timestamp,
}

impl CredentialSet {
    pub(crate) fn new(salt: Salt, users: Vec<Credential>, generated: Timestamp) -> Self {
        Self {
            salt,
            users,
            generated,
        }
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn users(&self) -> &[Credential] {
        &self.users
    }

    pub fn generated(&self) -> Timestamp {
        self.generated
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
