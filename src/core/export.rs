//! The two projections of a `CredentialSet`: the JSON data document consumed
//! by deployment tooling, and the JavaScript snippet embedded in the client.
//!
//! Both render the same `Salt` and `Credential` values through `serde_json`,
//! so the user list in the snippet is the data document's list, re-indented.

use crate::constants;
use crate::core::salt::Salt;
use crate::error::{CredgenError, Result};
use crate::models::credential::{Credential, CredentialSet};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Pretty-printed JSON document: `salt`, `users`, `generated`.
pub fn serialize_data(set: &CredentialSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(set)?)
}

/// Parse a document produced by [`serialize_data`].
pub fn parse_data(text: &str) -> Result<CredentialSet> {
    serde_json::from_str(text).map_err(|e| CredgenError::MalformedDocument(e.to_string()))
}

/// JavaScript block defining the config object and a compatible hash helper.
pub fn serialize_client_snippet(set: &CredentialSet) -> Result<String> {
    let salt = serde_json::to_string(set.salt())?;
    let users = to_json_with_indent(set.users(), b"    ")?;
    Ok(format!(
        r#"
// Security Configuration - Generated on {generated}
// Safe for public repositories - passwords are hashed
const {name} = {{
    salt: {salt},
    users: {users}
}};

// Authentication helper function
function hashPassword(password, salt) {{
    // Using CryptoJS SHA-256 (include crypto-js library)
    return CryptoJS.SHA256(password + salt).toString();
}}
"#,
        generated = set.generated(),
        name = constants::SNIPPET_CONFIG_NAME,
        salt = salt,
        users = users,
    ))
}

/// Data embedded in a client snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetData {
    pub salt: Salt,
    pub users: Vec<Credential>,
}

/// Recover the embedded salt and user list from a generated snippet.
pub fn read_client_snippet(text: &str) -> Result<SnippetData> {
    let salt_line = text
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("salt:"))
        .ok_or_else(|| CredgenError::MalformedSnippet("no salt entry".into()))?;
    let salt_literal = salt_line.trim().trim_end_matches(',');
    let salt: String = serde_json::from_str(salt_literal)
        .map_err(|e| CredgenError::MalformedSnippet(format!("salt literal: {}", e)))?;

    let marker = "\n    users:";
    let start = text
        .find(marker)
        .map(|idx| idx + marker.len())
        .ok_or_else(|| CredgenError::MalformedSnippet("no users entry".into()))?;
    let end = text[start..]
        .find("\n};")
        .map(|idx| start + idx)
        .ok_or_else(|| CredgenError::MalformedSnippet("unterminated config object".into()))?;
    let users: Vec<Credential> = serde_json::from_str(text[start..end].trim())
        .map_err(|e| CredgenError::MalformedSnippet(format!("users literal: {}", e)))?;

    Ok(SnippetData {
        salt: Salt::from_existing(salt)?,
        users,
    })
}

/// List every disagreement between a data document and a snippet.
pub fn check_consistency(set: &CredentialSet, snippet: &SnippetData) -> Vec<String> {
    let mut issues = Vec::new();
    if set.salt() != &snippet.salt {
        issues.push(format!(
            "salt differs: document {}..., snippet {}...",
            set.salt().preview(),
            snippet.salt.preview()
        ));
    }
    if set.len() != snippet.users.len() {
        issues.push(format!(
            "user count differs: document {}, snippet {}",
            set.len(),
            snippet.users.len()
        ));
    }
    for (idx, cred) in set.users().iter().enumerate() {
        if !is_hex_digest(cred.password_hash()) {
            issues.push(format!(
                "user #{} passwordHash: expected {} hex characters, got '{}'",
                idx + 1,
                constants::HASH_HEX_LEN,
                cred.password_hash()
            ));
        }
    }
    for (idx, (doc, snip)) in set.users().iter().zip(&snippet.users).enumerate() {
        let fields = [
            ("username", doc.username(), snip.username()),
            ("email", doc.email(), snip.email()),
            ("role", doc.role().as_str(), snip.role().as_str()),
            ("passwordHash", doc.password_hash(), snip.password_hash()),
        ];
        for (field, a, b) in fields {
            if a != b {
                issues.push(format!(
                    "user #{} {}: document '{}', snippet '{}'",
                    idx + 1,
                    field,
                    a,
                    b
                ));
            }
        }
    }
    issues
}

fn is_hex_digest(hash: &str) -> bool {
    hash.len() == constants::HASH_HEX_LEN
        && hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn to_json_with_indent<T: Serialize + ?Sized>(value: &T, indent: &[u8]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| {
        CredgenError::Encoding(serde::ser::Error::custom(format!("non-UTF-8 JSON output: {}", e)))
    })
}
