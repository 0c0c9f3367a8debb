//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `check_xmpp_dns` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C cancellation
//! - Printing the report
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use check_xmpp_dns::initialization::{init_logger_with, init_transport};
use check_xmpp_dns::{render_json, render_text, run_check, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    config.validate().context("Invalid options")?;

    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted, cancelling outstanding DNS queries");
            ctrl_c_token.cancel();
        }
    });

    let transport = init_transport();
    match run_check(&config, &transport, &cancel).await {
        Ok(report) => {
            let output = match config.format {
                OutputFormat::Text => render_text(&report),
                OutputFormat::Json => {
                    render_json(&report).context("Failed to serialize report")?
                }
            };
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            eprintln!("check_xmpp_dns error: {e}");
            process::exit(1);
        }
    }
}
