//! Cultivation engine simulator.
//!
//! Loads content from a data directory, replays a scripted scenario against
//! a character in fixed ticks, and reports each tick.
//!
//! # Examples
//!
//! ```bash
//! # Thirty one-second ticks of the viper ambush
//! cargo run -p cultivation-sim -- run --scenario viper_ambush
//!
//! # Same run as JSON, coarse ticks
//! SIM_TICK_SECONDS=5 cargo run -p cultivation-sim -- run -s viper_ambush -n 6 -f json
//! ```

mod commands;
mod config;
mod logging;
mod simulation;

use anyhow::Result;
use clap::Parser;
use commands::{ListEffects, Run};

/// Status-effect and regeneration simulator
#[derive(Parser)]
#[command(name = "cultivation-sim")]
#[command(about = "Tick-loop simulator for the cultivation engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Log effect lifecycle events (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a character through a scenario
    Run(Run),

    /// List the effect catalog
    Effects(ListEffects),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SIM_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose)?;

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Effects(cmd) => cmd.execute(),
    }
}
