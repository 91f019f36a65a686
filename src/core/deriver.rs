//! Credential derivation: `SHA256(password || salt)`, hex-encoded.
//!
//! The concatenation order is fixed. Deployed credential stores were built
//! with it and the client snippet's `hashPassword` helper reproduces it.

use crate::constants;
use crate::core::salt::Salt;
use crate::models::credential::{Credential, CredentialSet, Identity, Role, Timestamp};
use crate::models::entry::UserEntry;
use sha2::{Digest, Sha256};

/// Hash a plaintext with the run's salt.
pub fn hash_password(plaintext: &str, salt: &Salt) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hasher.update(salt.as_str().as_bytes());
    let hash = format!("{:064x}", hasher.finalize());
    debug_assert_eq!(hash.len(), constants::HASH_HEX_LEN);
    hash
}

/// Derive one credential. The plaintext is only read, never kept.
pub fn derive(salt: &Salt, identity: &Identity, plaintext: &str, role: Role) -> Credential {
    let hash = hash_password(plaintext, salt);
    let credential = Credential::new(identity, hash, role, Timestamp::now());
    tracing::debug!(username = %identity.username, %role, "derived credential");
    credential
}

/// Derive every entry in input order and stamp the set once.
pub fn build_set(salt: Salt, entries: &[UserEntry]) -> CredentialSet {
    let users = entries
        .iter()
        .map(|entry| derive(&salt, &entry.identity, &entry.password, entry.role))
        .collect();
    CredentialSet::new(salt, users, Timestamp::now())
}
