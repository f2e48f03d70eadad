//! # receipt-cli
//!
//! Console front-end for salestax-core.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  receipt-cli parse "1 book at 12.49" ──► one receipt                   │
//! │  receipt-cli parse < orders.txt      ──► one receipt per line          │
//! │  receipt-cli manual                  ──► prompts, then one receipt     │
//! │  receipt-cli demo                    ──► the three reference baskets   │
//! │                                                                         │
//! │  Receipts go to stdout; logs go to stderr.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod commands;
mod config;
mod output;

use std::io;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{CommandLine, Commands};
use commands::{demo, manual, parse};
use config::CliConfig;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let config = CliConfig::load()?;

    init_tracing(&config.log_filter);

    let format = commands.format.unwrap_or(config.format);
    let strict = commands.strict || config.strict;
    debug!(?format, strict, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands.command {
        Commands::Parse { text } => parse::parse(&text, io::stdin().lock(), &mut out, format, strict),
        Commands::Manual => manual::manual(io::stdin().lock(), &mut out, format),
        Commands::Demo => demo::demo(&mut out, format),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (overrides everything)
/// - `SALESTAX_LOG=warn` - Default filter when `RUST_LOG` is unset
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
