//! Login details of the predefined accounts. Recomputes, writes nothing.

use crate::cli::{defaults, report, CliContext};
use anyhow::Result;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};

#[derive(Args, Debug, Default)]
pub struct ShowArgs {}

pub fn run(ctx: &CliContext, _args: ShowArgs) -> Result<()> {
    let set = defaults::build_default_set(ctx)?;

    if set.is_empty() {
        println!("No predefined users configured");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Role").add_attribute(Attribute::Bold),
        Cell::new("Email").add_attribute(Attribute::Bold),
        Cell::new("Password").add_attribute(Attribute::Bold),
        Cell::new("Hash").add_attribute(Attribute::Bold),
    ]);

    for cred in set.users() {
        let password = report::known_password(&ctx.config.defaults, set.salt(), cred).unwrap_or("-");
        table.add_row(vec![
            cred.role().as_str().to_uppercase(),
            cred.email().to_string(),
            password.to_string(),
            report::hash_preview(cred),
        ]);
    }

    println!("Current User Credentials:");
    println!("{}", table);
    Ok(())
}
