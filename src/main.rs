use anyhow::{Context, Result};
use birthdays::RosterConfig;
use birthdays::cli::Cli;
use birthdays::logger;
use chrono::Local;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    // The only place the clock is read
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(%today, "Reference date");

    let config = RosterConfig::from_file(&cli.roster)
        .with_context(|| format!("Could not load roster from {}", cli.roster.display()))?;

    let output = cli.report(config, today)?;
    print!("{output}");

    Ok(())
}
