use anyhow::Result;
use clap::Parser;
use soletrack::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
