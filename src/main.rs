use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod export;
mod supplier;

#[cfg(test)]
mod test_utils;

use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing
    model::init_tracing();

    let cli = Cli::parse();
    cli.run()?;

    Ok(())
}
