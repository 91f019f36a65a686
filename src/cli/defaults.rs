//! The predefined business accounts, derived with the deployed salt.

use crate::cli::{report, CliContext};
use crate::core::{artifacts, config, deriver, salt::Salt};
use crate::models::credential::CredentialSet;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug, Default)]
pub struct DefaultsArgs {}

pub fn run(ctx: &CliContext, _args: DefaultsArgs) -> Result<()> {
    let set = build_default_set(ctx)?;
    artifacts::write_artifacts(&ctx.paths, &set)?;
    println!("Generated default business users");
    report::print_summary(ctx, &set);
    Ok(())
}

/// Derive the configured preset table. Shared with `show`.
pub fn build_default_set(ctx: &CliContext) -> Result<CredentialSet> {
    let defaults = &ctx.config.defaults;
    let salt = Salt::from_existing(defaults.salt.as_str()).context("defaults salt")?;
    report::salt_warning(salt.format_warning());
    let entries = config::preset_entries(defaults)?;
    Ok(deriver::build_set(salt, &entries))
}
