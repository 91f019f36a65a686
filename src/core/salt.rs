//! Salt lifecycle: generate a fresh one or reuse an established one.
//!
//! A salt is fixed for one run and shared read-only by every derivation in it.
//! It is not secret and ends up in both published artifacts.

use crate::constants;
use crate::error::{CredgenError, Result, SaltFormatWarning};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salt(String);

impl Salt {
    /// Draw 32 bytes from the OS CSPRNG and hex-encode them.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; constants::SALT_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CredgenError::EntropySource(e.to_string()))?;
        Ok(Self(hex::encode(bytes)))
    }

    /// Wrap a caller-supplied salt verbatim.
    ///
    /// Any non-empty text is accepted. A length other than 64 only logs a
    /// warning, so salts from an existing deployment keep working.
    pub fn from_existing(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(CredgenError::EmptySalt);
        }
        let salt = Self(text);
        if let Some(warning) = salt.format_warning() {
            tracing::warn!(%warning, "reusing salt of unexpected length");
        }
        Ok(salt)
    }

    pub fn format_warning(&self) -> Option<SaltFormatWarning> {
        let actual = self.0.chars().count();
        (actual != constants::SALT_HEX_LEN).then_some(SaltFormatWarning {
            expected: constants::SALT_HEX_LEN,
            actual,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters for console output.
    pub fn preview(&self) -> &str {
        preview(&self.0)
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Char-boundary safe prefix of at most `PREVIEW_LEN` characters.
pub fn preview(s: &str) -> &str {
    match s.char_indices().nth(constants::PREVIEW_LEN) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_64_lowercase_hex() {
        let salt = Salt::generate().unwrap();
        assert_eq!(salt.as_str().len(), 64);
        assert!(salt
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert!(salt.format_warning().is_none());
    }

    #[test]
    fn test_generate_is_unpredictable() {
        let a = Salt::generate().unwrap();
        let b = Salt::generate().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_existing_keeps_text_verbatim() {
        let salt = Salt::from_existing(constants::DEFAULT_SALT).unwrap();
        assert_eq!(salt.as_str(), constants::DEFAULT_SALT);
        assert!(salt.format_warning().is_none());
    }

    #[test]
    fn test_from_existing_short_salt_warns_but_succeeds() {
        let salt = Salt::from_existing("short").unwrap();
        assert_eq!(salt.as_str(), "short");
        assert_eq!(
            salt.format_warning(),
            Some(SaltFormatWarning {
                expected: 64,
                actual: 5
            })
        );
    }

    #[test]
    fn test_from_existing_rejects_empty() {
        assert!(matches!(Salt::from_existing(""), Err(CredgenError::EmptySalt)));
    }

    #[test]
    fn test_preview() {
        let salt = Salt::from_existing(constants::DEFAULT_SALT).unwrap();
        assert_eq!(salt.preview(), "c1202ec646cac69a7cbb");
        assert_eq!(preview("abc"), "abc");
        assert_eq!(preview("ééééééééééééééééééééé"), "éééééééééééééééééééé");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let salt = Salt::from_existing("abc").unwrap();
        assert_eq!(serde_json::to_string(&salt).unwrap(), "\"abc\"");
    }
}
