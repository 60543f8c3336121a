use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hotseat_chess::config::ConsoleConfig;
use hotseat_chess::console::console_top::run_stdio_loop;

fn main() -> ExitCode {
    let config = ConsoleConfig::parse();

    // Diagnostics go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "console loop failed");
            ExitCode::FAILURE
        }
    }
}
