//! Credential derivation, serialization, and the plumbing around it.

pub mod artifacts;
pub mod config;
pub mod deriver;
pub mod export;
pub mod paths;
pub mod salt;
pub mod validation;
