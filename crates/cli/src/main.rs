//! Patterns CLI - Mediator and Visitor demos
//!
//! Usage:
//! ```bash
//! patterns                            # full scripted run, waits for Enter
//! patterns --no-pause --demo mediator
//! patterns --demo visitor --format html,xml,json --escape
//! patterns --print-config
//! patterns -vv                        # debug logs on stderr
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use patterns_serializers::SerializationFormat;
use tracing::Level;

mod config;
mod demo;

use config::{DemoConfig, DemoSelection};

/// Mediator workflow and Visitor serialization demos
#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Demo to run
    #[arg(long, value_enum, default_value = "all")]
    pub demo: DemoSelection,

    /// Visitors applied to the bank, in order (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [SerializationFormat::Html, SerializationFormat::Xml]
    )]
    pub format: Vec<SerializationFormat>,

    /// Escape markup characters in account fields
    #[arg(long)]
    pub escape: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn to_config(&self) -> DemoConfig {
        DemoConfig {
            demo: self.demo,
            formats: self.format.clone(),
            escape: self.escape,
            pause: !self.no_pause,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // stdout carries the demo output only
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.to_config();
    tracing::debug!(?config, "Resolved configuration");

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    demo::run(&config, &mut stdout.lock())?;

    if config.pause {
        demo::wait_for_ack(&mut std::io::stdin().lock()).context("Pause failed")?;
    }

    Ok(())
}
