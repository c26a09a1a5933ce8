//! Scripted demo runs
//!
//! Everything is written to the given writer so the runs can be checked in
//! tests without touching stdout.

use crate::config::DemoConfig;
use anyhow::{Context, Result};
use patterns_core::{sample_bank, workflow_script, ManagerMediator, Participant};
use patterns_serializers::SerializationFormat;
use std::io::{BufRead, Write};

/// Customer -> Programmer -> Tester -> Customer, one line per message.
pub fn run_mediator(out: &mut dyn Write) -> Result<()> {
    let customer = Participant::customer();
    let programmer = Participant::programmer();
    let tester = Participant::tester();
    let mediator = ManagerMediator::new(&customer, &programmer, &tester)?;

    for (role, message) in workflow_script() {
        tracing::info!(from = %role, "Sending message");
        if let Some(notification) = mediator.participant(role).send(message, &mediator) {
            writeln!(out, "{}", notification).context("Failed to write notification")?;
        }
    }

    Ok(())
}

/// Apply each visitor to the whole bank, one line per account.
pub fn run_visitor(
    out: &mut dyn Write,
    formats: &[SerializationFormat],
    escape: bool,
) -> Result<()> {
    let bank = sample_bank();

    for format in formats {
        tracing::info!(%format, accounts = bank.len(), "Serializing bank");
        let visitor = format.visitor(escape);
        for block in bank.accept(&*visitor) {
            writeln!(out, "{}", block).context("Failed to write account block")?;
        }
    }

    Ok(())
}

/// Run the selected demos, separated by a blank line.
pub fn run(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    if config.demo.runs_mediator() {
        run_mediator(out)?;
    }
    if config.demo.runs_mediator() && config.demo.runs_visitor() {
        writeln!(out).context("Failed to write separator")?;
    }
    if config.demo.runs_visitor() {
        run_visitor(out, &config.formats, config.escape)?;
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Block until the user acknowledges with a line (or input ends).
pub fn wait_for_ack(input: &mut dyn BufRead) -> Result<()> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read acknowledgement")?;
    Ok(())
}
