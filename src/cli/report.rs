//! Console output shared by the generating commands.

use crate::cli::CliContext;
use crate::core::deriver::hash_password;
use crate::core::salt::{preview, Salt};
use crate::error::SaltFormatWarning;
use crate::models::config::DefaultsSection;
use crate::models::credential::{Credential, CredentialSet};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};

const RULE_WIDTH: usize = 60;

pub fn banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", title);
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn salt_warning(warning: Option<SaltFormatWarning>) {
    if let Some(w) = warning {
        eprintln!("warning: {}", w);
    }
}

/// Plaintext to show for a preset account.
///
/// Looked up from the preset table by email and only shown when it
/// reproduces the credential's hash, so a custom user who happens to reuse
/// a preset email never gets someone else's password echoed.
pub fn known_password<'a>(
    defaults: &'a DefaultsSection,
    salt: &Salt,
    cred: &Credential,
) -> Option<&'a str> {
    defaults
        .known_password(cred.email())
        .filter(|pw| hash_password(pw, salt) == cred.password_hash())
}

/// Summary printed after both artifacts were written.
pub fn print_summary(ctx: &CliContext, set: &CredentialSet) {
    println!();
    banner("FILES GENERATED SUCCESSFULLY");
    println!("  {} - Complete configuration", ctx.paths.data_file.display());
    println!("  {} - JavaScript code for your app", ctx.paths.snippet_file.display());
    println!();
    println!("SECURITY SUMMARY:");
    println!("   Salt: {}...", set.salt().preview());
    println!("   Users Created: {}", set.len());
    println!("   All passwords are SHA-256 hashed");
    println!();

    if !set.is_empty() {
        println!("USER LOGIN CREDENTIALS:");
        println!("{}", login_table(&ctx.config.defaults, set));
        println!();
    }

    println!("DEPLOYMENT INSTRUCTIONS:");
    println!("1. Copy the JavaScript code to your app.js file");
    println!("2. Replace the SECURITY_CONFIG object");
    println!("3. Commit to your repository (safe - passwords are hashed)");
    println!("4. Users can login with the credentials above");
}

pub fn login_table(defaults: &DefaultsSection, set: &CredentialSet) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Role").add_attribute(Attribute::Bold),
        Cell::new("Email").add_attribute(Attribute::Bold),
        Cell::new("Username").add_attribute(Attribute::Bold),
        Cell::new("Password").add_attribute(Attribute::Bold),
    ]);

    for (idx, cred) in set.users().iter().enumerate() {
        let password = known_password(defaults, set.salt(), cred)
            .unwrap_or("[Use password you entered]");
        table.add_row(vec![
            (idx + 1).to_string(),
            cred.role().as_str().to_uppercase(),
            cred.email().to_string(),
            cred.username().to_string(),
            password.to_string(),
        ]);
    }
    table
}

/// Hash column content: a prefix, never the whole digest.
pub fn hash_preview(cred: &Credential) -> String {
    format!("{}...", preview(cred.password_hash()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::preset_entries;
    use crate::core::deriver::build_set;
    use crate::models::credential::{Identity, Role};
    use crate::models::entry::UserEntry;

    #[test]
    fn test_known_password_for_presets() {
        let defaults = DefaultsSection::default();
        let salt = Salt::from_existing(defaults.salt.as_str()).unwrap();
        let set = build_set(salt, &preset_entries(&defaults).unwrap());
        assert_eq!(
            known_password(&defaults, set.salt(), &set.users()[0]),
            Some("VegStore2025!")
        );
    }

    #[test]
    fn test_known_password_hidden_when_hash_differs() {
        let defaults = DefaultsSection::default();
        let salt = Salt::from_existing(defaults.salt.as_str()).unwrap();
        let entries = vec![UserEntry::new(
            Identity::new("impostor", "owner@greenstore.local"),
            "something-else",
            Role::Admin,
        )];
        let set = build_set(salt, &entries);
        assert_eq!(known_password(&defaults, set.salt(), &set.users()[0]), None);
    }

    #[test]
    fn test_login_table_lists_every_user() {
        let defaults = DefaultsSection::default();
        let salt = Salt::from_existing(defaults.salt.as_str()).unwrap();
        let set = build_set(salt, &preset_entries(&defaults).unwrap());
        let rendered = login_table(&defaults, &set).to_string();
        assert!(rendered.contains("store_owner"));
        assert!(rendered.contains("MANAGER"));
        assert!(rendered.contains("Helper123!"));
    }

    #[test]
    fn test_hash_preview_is_truncated() {
        let defaults = DefaultsSection::default();
        let salt = Salt::from_existing(defaults.salt.as_str()).unwrap();
        let set = build_set(salt, &preset_entries(&defaults).unwrap());
        assert_eq!(hash_preview(&set.users()[0]), "1f653436d38f776ecca9...");
    }
}
