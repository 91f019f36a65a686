use crate::cli::CliContext;
use crate::core::salt::Salt;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug, Default)]
pub struct SaltArgs {
    /// Number of salts to print
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

pub fn run(_ctx: &CliContext, args: SaltArgs) -> Result<()> {
    for _ in 0..args.count {
        let salt = Salt::generate().context("generate salt")?;
        println!("{}", salt);
    }
    Ok(())
}
