//! Loading `credgen.toml` and turning its preset table into deriver input.

use crate::constants;
use crate::error::{CredgenError, Result};
use crate::models::config::{ConfigFile, DefaultsSection};
use crate::models::credential::{Identity, Role};
use crate::models::entry::UserEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// Config plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: ConfigFile,
    pub source: Option<PathBuf>,
    pub warning: Option<String>,
}

/// Parse a config file. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CredgenError::Config(format!("parse {}: {}", path.display(), e)))
}

/// Resolve the config to use for this run.
///
/// An explicit path must load. The implicit `./credgen.toml` is best-effort:
/// if it is unreadable the defaults are used and a warning is returned.
pub fn resolve(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(CredgenError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(LoadedConfig {
            config: load(path)?,
            source: Some(path.to_path_buf()),
            warning: None,
        });
    }

    let implicit = PathBuf::from(constants::CONFIG_FILE_NAME);
    if !implicit.is_file() {
        return Ok(LoadedConfig::default());
    }
    match load(&implicit) {
        Ok(config) => Ok(LoadedConfig {
            config,
            source: Some(implicit),
            warning: None,
        }),
        Err(e) => Ok(LoadedConfig {
            config: ConfigFile::default(),
            source: None,
            warning: Some(format!("ignoring {}: {}", implicit.display(), e)),
        }),
    }
}

/// Convert the preset account table into entries for `build_set`.
pub fn preset_entries(defaults: &DefaultsSection) -> Result<Vec<UserEntry>> {
    defaults
        .accounts
        .iter()
        .map(|account| -> Result<UserEntry> {
            let role: Role = account.role.parse().map_err(|e| {
                CredgenError::Config(format!("preset account '{}': {}", account.username, e))
            })?;
            Ok(UserEntry::new(
                Identity::new(account.username.as_str(), account.email.as_str()),
                account.password.as_str(),
                role,
            ))
        })
        .collect()
}
