// Event Calendar Application
// Main entry point

use anyhow::Result;
use clap::Parser;

use event_calendar::cli::{self, Cli};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::debug!("Starting event-calendar");

    cli::run(Cli::parse())
}
