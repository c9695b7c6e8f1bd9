// src/main.rs

use anyhow::Result;
use clap::Parser;
use folder_index::cli::Cli;
use folder_index::config::ConfigBuilder;
use folder_index::run;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::debug!("Starting folder-index v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration & Execution ---
    let cli = Cli::parse();
    let config = ConfigBuilder::from_cli(cli).build()?;
    log::debug!("Configuration built successfully.");

    // --- Error Handling ---
    if let Err(e) = run(&config) {
        if e.is_terminal_collection_error() {
            // The run produced no manifest, but the pipeline itself is
            // intact; report and exit cleanly.
            eprintln!("folder-index: {}", e);
            return Ok(());
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
