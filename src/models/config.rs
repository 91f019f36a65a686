//! Config file model (`credgen.toml`).

use crate::constants;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub policy: PolicySection,
    #[serde(default)]
    pub defaults: DefaultsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory both artifacts are written to (empty = working directory).
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_snippet_file")]
    pub snippet_file: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: None,
            data_file: default_data_file(),
            snippet_file: default_snippet_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySection {
    /// Minimum password length enforced at the prompt.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
        }
    }
}

/// Predefined business accounts and the salt they are derived with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsSection {
    #[serde(default = "default_salt")]
    pub salt: String,
    #[serde(default = "builtin_accounts")]
    pub accounts: Vec<PresetAccount>,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            salt: default_salt(),
            accounts: builtin_accounts(),
        }
    }
}

impl DefaultsSection {
    /// Known plaintext for a preset account, looked up by email.
    pub fn known_password(&self, email: &str) -> Option<&str> {
        self.accounts
            .iter()
            .find(|a| a.email == email)
            .map(|a| a.password.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

impl PresetAccount {
    fn new(username: &str, email: &str, password: &str, role: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }
}

fn builtin_accounts() -> Vec<PresetAccount> {
    vec![
        PresetAccount::new("store_owner", "owner@greenstore.local", "VegStore2025!", "admin"),
        PresetAccount::new("manager", "mgr@greenstore.local", "Manager456!", "manager"),
        PresetAccount::new("assistant", "help@greenstore.local", "Helper123!", "user"),
    ]
}

fn default_data_file() -> String {
    constants::DATA_FILE_NAME.to_string()
}

fn default_snippet_file() -> String {
    constants::SNIPPET_FILE_NAME.to_string()
}

fn default_min_password_length() -> usize {
    constants::DEFAULT_MIN_PASSWORD_LEN
}

fn default_salt() -> String {
    constants::DEFAULT_SALT.to_string()
}

fn default_role() -> String {
    constants::DEFAULT_ROLE.to_string()
}
