//! Salted credential generator for the Greenstore business tracker.
//!
//! Derives `SHA256(password || salt)` hashes for a list of users and emits
//! two views of the same credential set: a JSON document for deployment
//! tooling and a JavaScript snippet for the client application.
//!
//! ## Modules
//! - `cli`: Command-line handlers and console output
//! - `core`: Salt handling, derivation, serialization, artifact writing
//! - `models`: Data structures
//! - `util`: Filesystem and logging helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;

pub use crate::core::deriver::{build_set, derive, hash_password};
pub use crate::core::export::{parse_data, serialize_client_snippet, serialize_data};
pub use crate::core::salt::Salt;
pub use crate::error::{CredgenError, SaltFormatWarning};
pub use crate::models::credential::{Credential, CredentialSet, Identity, Role, Timestamp};
pub use crate::models::entry::UserEntry;
