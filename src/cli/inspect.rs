//! Read back a generated credentials document and cross-check its snippet.

use crate::cli::{report, CliContext};
use crate::core::{artifacts, export};
use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct InspectArgs {
    /// Credentials document (default: the configured output data file)
    #[arg(value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Client snippet to compare against the document
    #[arg(long, value_name = "PATH")]
    pub snippet: Option<PathBuf>,

    /// Compare against the configured output snippet file
    #[arg(long, conflicts_with = "snippet")]
    pub check: bool,

    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Serialize)]
struct InspectItem<'a> {
    username: &'a str,
    email: &'a str,
    role: &'a str,
    hash_preview: String,
    created: String,
}

pub fn run(ctx: &CliContext, args: InspectArgs) -> Result<()> {
    if args.format != "table" && args.format != "json" {
        bail!("invalid format: {} (use table|json)", args.format);
    }

    let data_path = args.data.unwrap_or_else(|| ctx.paths.data_file.clone());
    let set = artifacts::read_back(&data_path)?;

    let items: Vec<InspectItem> = set
        .users()
        .iter()
        .map(|cred| InspectItem {
            username: cred.username(),
            email: cred.email(),
            role: cred.role().as_str(),
            hash_preview: report::hash_preview(cred),
            created: cred.created().to_string(),
        })
        .collect();

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&items).context("serialize inspect output")?;
        println!("{}", json);
    } else {
        println!("Document: {}", data_path.display());
        println!("Salt: {}...", set.salt().preview());
        println!("Generated: {}", set.generated());
        if items.is_empty() {
            println!("No users in document");
        } else {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec![
                Cell::new("Username").add_attribute(Attribute::Bold),
                Cell::new("Email").add_attribute(Attribute::Bold),
                Cell::new("Role").add_attribute(Attribute::Bold),
                Cell::new("Hash").add_attribute(Attribute::Bold),
                Cell::new("Created").add_attribute(Attribute::Bold),
            ]);
            for item in &items {
                table.add_row(vec![
                    item.username.to_string(),
                    item.email.to_string(),
                    item.role.to_string(),
                    item.hash_preview.clone(),
                    item.created.clone(),
                ]);
            }
            println!("{}", table);
        }
    }

    let snippet_path = match (args.snippet, args.check) {
        (Some(path), _) => Some(path),
        (None, true) => Some(ctx.paths.snippet_file.clone()),
        (None, false) => None,
    };
    let Some(snippet_path) = snippet_path else {
        return Ok(());
    };

    let snippet = artifacts::read_snippet(&snippet_path)?;
    let issues = export::check_consistency(&set, &snippet);
    if issues.is_empty() {
        eprintln!(
            "  [PASS] {} matches {} ({} users)",
            snippet_path.display(),
            data_path.display(),
            set.len()
        );
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  [FAIL] {}", issue);
    }
    eprintln!("Consistency check: {} issues", issues.len());
    std::process::exit(1);
}
