//! CLI routing and command dispatch.

use crate::core::config;
use crate::core::paths::OutputPaths;
use crate::models::config::ConfigFile;
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dialoguer::Select;
use std::path::PathBuf;

pub mod create;
pub mod defaults;
pub mod inspect;
pub mod report;
pub mod salt;
pub mod show;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub paths: OutputPaths,
    pub config: ConfigFile,
    pub non_interactive: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "greenstore-credgen",
    version,
    about = "Generate salted password hashes for the Greenstore business tracker"
)]
pub struct Cli {
    /// Directory the credential artifacts are written to
    #[arg(long, global = true, value_name = "PATH", env = "GREENSTORE_CREDGEN_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Config file (default: ./credgen.toml if present)
    #[arg(long, global = true, value_name = "PATH", env = "GREENSTORE_CREDGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run in non-interactive mode (no prompts, suitable for automation)
    #[arg(long, global = true, env = "GREENSTORE_CREDGEN_NON_INTERACTIVE")]
    pub non_interactive: bool,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Mode to run; prompts for one when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let loaded = config::resolve(self.config.as_deref()).context("load config")?;
        if let Some(w) = &loaded.warning {
            eprintln!("warning: {}", w);
        }
        if let Some(source) = &loaded.source {
            tracing::info!(config = %source.display(), "loaded config");
        }

        let paths = OutputPaths::resolve(self.out_dir, &loaded.config.output);
        let ctx = CliContext {
            paths,
            config: loaded.config,
            non_interactive: self.non_interactive,
        };

        let command = match self.command {
            Some(command) => command,
            None => choose_mode(&ctx)?,
        };

        match command {
            Commands::Create(args) => create::run(&ctx, args),
            Commands::Defaults(args) => defaults::run(&ctx, args),
            Commands::Show(args) => show::run(&ctx, args),
            Commands::Salt(args) => salt::run(&ctx, args),
            Commands::Inspect(args) => inspect::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create custom users interactively (or from a users file)
    Create(create::CreateArgs),
    /// Generate the predefined business users with the deployed salt
    Defaults(defaults::DefaultsArgs),
    /// Show the predefined users' login details (writes nothing)
    Show(show::ShowArgs),
    /// Print a freshly generated salt
    Salt(salt::SaltArgs),
    /// Read back a credentials document and check it against its snippet
    Inspect(inspect::InspectArgs),
}

impl Commands {
    /// Command name for messages.
    pub fn name(&self) -> &str {
        match self {
            Commands::Create(_) => "create",
            Commands::Defaults(_) => "defaults",
            Commands::Show(_) => "show",
            Commands::Salt(_) => "salt",
            Commands::Inspect(_) => "inspect",
        }
    }
}

/// The menu shown when no subcommand is given.
fn choose_mode(ctx: &CliContext) -> Result<Commands> {
    if ctx.non_interactive {
        bail!("--non-interactive requires a subcommand (create|defaults|show|salt|inspect)");
    }

    println!("Greenstore business tracker - secure password generator");
    println!();
    let items = [
        "Interactive - Create custom users",
        "Default - Use predefined business users",
        "View existing - Show current user credentials",
    ];
    let choice = Select::new()
        .with_prompt("Choose mode")
        .items(&items)
        .default(0)
        .interact()
        .context("read mode selection")?;

    let command = match choice {
        0 => Commands::Create(create::CreateArgs::default()),
        1 => Commands::Defaults(defaults::DefaultsArgs::default()),
        _ => Commands::Show(show::ShowArgs::default()),
    };
    tracing::debug!(mode = command.name(), "selected mode");
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_with_salt() {
        let cli = Cli::try_parse_from([
            "greenstore-credgen",
            "--out-dir",
            "/tmp/out",
            "create",
            "--salt",
            "abc",
        ])
        .unwrap();
        assert_eq!(cli.out_dir, Some(PathBuf::from("/tmp/out")));
        match cli.command {
            Some(Commands::Create(args)) => assert_eq!(args.salt.as_deref(), Some("abc")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_salt_and_new_salt_conflict() {
        let res = Cli::try_parse_from(["greenstore-credgen", "create", "--salt", "abc", "--new-salt"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["greenstore-credgen", "-vv"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_choose_mode_refuses_non_interactive() {
        let ctx = CliContext {
            paths: OutputPaths::resolve(None, &Default::default()),
            config: ConfigFile::default(),
            non_interactive: true,
        };
        assert!(choose_mode(&ctx).is_err());
    }
}
