// file: src/main.rs
// version: 1.0.0
// guid: 4518788a-b40c-4c74-90d3-73ee7cb36e9c

//! CrackTime Analyzer - Main entry point

use clap::Parser;
use cracktime_analyzer::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    config::ConfigLoader,
    logging::logger,
    AnalyzerError,
};
use tokio::signal;
use tracing::warn;

/// Exit code for invalid input (empty password, unknown preset, ...)
const EXIT_USAGE: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let logging = if cli.log_json {
        logger::init_json_logger(cli.verbose, cli.quiet)
    } else {
        logger::init_logger(cli.verbose, cli.quiet)
    };
    if let Err(e) = logging {
        eprintln!("warning: {}", e);
    }

    let is_gui = matches!(cli.command, Commands::Gui { .. });

    let shutdown_signal = async {
        if signal::ctrl_c().await.is_err() {
            // no handler available: never resolve
            std::future::pending::<()>().await;
        }
        warn!("Received Ctrl+C, exiting");
    };

    let outcome = if is_gui {
        // raw mode delivers Ctrl+C as a key event to the GUI itself
        run(cli).await
    } else {
        tokio::select! {
            result = run(cli) => result,
            _ = shutdown_signal => std::process::exit(130), // Standard exit code for Ctrl+C
        }
    };

    if let Err(e) = outcome {
        eprintln!("error: {:#}", e);
        let code = match e.downcast_ref::<AnalyzerError>() {
            Some(err) if err.is_user_error() => EXIT_USAGE,
            _ => 1,
        };
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    use anyhow::Context;

    let config = ConfigLoader::new()
        .load_or_default(cli.config.as_deref())
        .context("loading configuration")?;

    match cli.command {
        Commands::Analyze(args) => analyze_command(&config, args).await?,
        Commands::Presets { json } => presets_command(&config, json).await?,
        Commands::Gui { output_prefix } => gui_command(config, output_prefix).await?,
    }

    Ok(())
}
