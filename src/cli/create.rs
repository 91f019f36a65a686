//! Custom users: salt selection, prompting, validation, and export.

use crate::cli::{report, CliContext};
use crate::core::validation::{self, Rejection};
use crate::core::{artifacts, deriver, salt::Salt};
use crate::models::entry::UserEntry;
use anyhow::{bail, Context, Result};
use clap::Args;
use dialoguer::{Confirm, Input, Password};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Reuse an existing salt so earlier hashes stay valid
    #[arg(long, value_name = "SALT", conflicts_with = "new_salt")]
    pub salt: Option<String>,

    /// Generate a fresh salt without asking
    #[arg(long)]
    pub new_salt: bool,

    /// Read users from a TOML file instead of prompting
    #[arg(long, value_name = "PATH")]
    pub users_file: Option<PathBuf>,
}

/// Batch input for `--users-file`.
#[derive(Debug, Deserialize)]
struct UsersFile {
    #[serde(default)]
    salt: Option<String>,
    #[serde(default)]
    users: Vec<RawUser>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    role: String,
}

pub fn run(ctx: &CliContext, args: CreateArgs) -> Result<()> {
    let min_len = ctx.config.policy.min_password_length;

    let batch = match &args.users_file {
        Some(path) => Some(load_users_file(path)?),
        None => None,
    };

    if ctx.non_interactive && batch.is_none() {
        bail!("--non-interactive requires --users-file for create");
    }

    let file_salt = batch.as_ref().and_then(|b| b.salt.clone());
    let salt = choose_salt(ctx, args.salt.or(file_salt), args.new_salt)?;

    let entries = match batch {
        Some(file) => entries_from_file(file, min_len),
        None => prompt_users(min_len)?,
    };

    let set = deriver::build_set(salt, &entries);
    drop(entries);

    artifacts::write_artifacts(&ctx.paths, &set)?;
    report::print_summary(ctx, &set);
    Ok(())
}

fn choose_salt(ctx: &CliContext, supplied: Option<String>, force_new: bool) -> Result<Salt> {
    let existing = match supplied {
        Some(s) => Some(s),
        None if force_new || ctx.non_interactive => None,
        None => {
            let reuse = Confirm::new()
                .with_prompt("Do you have an existing salt to use?")
                .default(false)
                .interact()
                .context("read salt choice")?;
            if reuse {
                let s: String = Input::new()
                    .with_prompt("Enter your existing salt")
                    .interact_text()
                    .context("read existing salt")?;
                Some(s)
            } else {
                None
            }
        }
    };

    match existing {
        Some(text) => {
            let salt = Salt::from_existing(text.trim()).context("use existing salt")?;
            report::salt_warning(salt.format_warning());
            println!("Using existing salt: {}...", salt.preview());
            Ok(salt)
        }
        None => {
            let salt = Salt::generate().context("generate salt")?;
            println!("Generated new salt: {}", salt);
            println!("IMPORTANT: Save this salt! You'll need it to add users later.");
            Ok(salt)
        }
    }
}

fn load_users_file(path: &Path) -> Result<UsersFile> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read users file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parse users file {}", path.display()))
}

/// Validate batch input; rejected entries are skipped with a warning.
fn entries_from_file(file: UsersFile, min_len: usize) -> Vec<UserEntry> {
    let mut entries = Vec::new();
    for (idx, raw) in file.users.into_iter().enumerate() {
        let password = Zeroizing::new(raw.password);
        match validation::validate_entry(&raw.username, &raw.email, &password, &raw.role, min_len) {
            Ok(entry) => entries.push(entry),
            Err(rejection) => {
                eprintln!("warning: skipping user #{} ({}): {}", idx + 1, raw.username, rejection);
            }
        }
    }
    entries
}

fn prompt_users(min_len: usize) -> Result<Vec<UserEntry>> {
    let mut entries = Vec::new();
    loop {
        println!();
        println!("Add New User");
        println!("{}", "-".repeat(30));

        let entry = prompt_user(min_len)?;
        println!(
            "Added user: {} ({}) - Role: {}",
            entry.identity.username, entry.identity.email, entry.role
        );
        entries.push(entry);

        let another = Confirm::new()
            .with_prompt("Add another user?")
            .default(false)
            .interact()
            .context("read confirmation")?;
        if !another {
            break;
        }
    }
    Ok(entries)
}

/// Prompt field by field; a rejected field is asked again.
fn prompt_user(min_len: usize) -> Result<UserEntry> {
    let username: String = Input::new()
        .with_prompt("Username")
        .validate_with(|s: &String| validation::validate_username(s).map(|_| ()).map_err(reason))
        .interact_text()
        .context("read username")?;

    let email: String = Input::new()
        .with_prompt("Email")
        .validate_with(|s: &String| validation::validate_email(s).map(|_| ()).map_err(reason))
        .interact_text()
        .context("read email")?;

    let password = loop {
        let pw = Zeroizing::new(
            Password::new()
                .with_prompt("Password (hidden)")
                .interact()
                .context("read password")?,
        );
        match validation::validate_password(&pw, min_len) {
            Ok(()) => break pw,
            Err(rejection) => eprintln!("error: {}", rejection),
        }
    };

    let role: String = Input::new()
        .with_prompt("Role (admin/manager/user)")
        .default(crate::constants::DEFAULT_ROLE.to_string())
        .validate_with(|s: &String| validation::validate_role(s).map(|_| ()).map_err(reason))
        .interact_text()
        .context("read role")?;

    validation::validate_entry(&username, &email, &password, &role, min_len)
        .map_err(|r| anyhow::anyhow!("invalid user: {}", r))
}

fn reason(rejection: Rejection) -> String {
    rejection.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::credential::Role;

    fn parse(text: &str) -> UsersFile {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn test_users_file_parses() {
        let file = parse(
            r#"
salt = "abc"

[[users]]
username = "clerk"
email = "clerk@shop.local"
password = "Clerk2025!"
role = "manager"
"#,
        );
        assert_eq!(file.salt.as_deref(), Some("abc"));
        let entries = entries_from_file(file, 8);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role, Role::Manager);
    }

    #[test]
    fn test_users_file_skips_rejected_entries() {
        let file = parse(
            r#"
[[users]]
username = "ok"
email = "ok@shop.local"
password = "longenough"

[[users]]
username = "short"
email = "short@shop.local"
password = "tiny"

[[users]]
username = ""
email = "anon@shop.local"
password = "longenough"

[[users]]
username = "bad-role"
email = "bad@shop.local"
password = "longenough"
role = "owner"
"#,
        );
        let entries = entries_from_file(file, 8);
        let names: Vec<&str> = entries.iter().map(|e| e.identity.username.as_str()).collect();
        assert_eq!(names, vec!["ok"]);
        assert_eq!(entries[0].role, Role::User);
    }

    #[test]
    fn test_users_file_empty() {
        let file = parse("");
        assert!(file.salt.is_none());
        assert!(entries_from_file(file, 8).is_empty());
    }
}
