//! Tic-tac-toe terminal front end.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, TuiConfig, init_tracing, run_tui};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(&config)?;
    run_tui(&config)
}
