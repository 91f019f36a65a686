use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = greenstore_credgen::cli::Cli::parse();
    greenstore_credgen::util::logging::init(cli.verbose);
    cli.run()
}
