use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

use toolshed::catalog::Catalog;
use toolshed::catalog::path_store::PathStore;
use toolshed::cli::{Cli, Commands};
use toolshed::config::Config;
use toolshed::launcher::Dispatcher;
use toolshed::shell::Shell;

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolshed")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolshed.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Catalog directory from the CLI flag, then config, then the saved path.
fn resolve_catalog_dir(cli: &Cli, config: &Config, store: &PathStore) -> Result<PathBuf> {
    if let Some(dir) = &cli.catalog {
        return Ok(dir.clone());
    }
    if let Some(dir) = &config.catalog_dir {
        return Ok(dir.clone());
    }
    store
        .load()
        .context("Failed to read saved catalog path")?
        .ok_or_else(|| eyre!("No catalog path set. Run: toolshed add-path /path/to/catalog"))
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let store = PathStore::default_location().context("Failed to locate data directory")?;

    // Saving a path must work before any catalog exists
    if let Some(Commands::AddPath { path }) = &cli.command {
        store.save(path).context("Failed to save catalog path")?;
        println!("{} {}", "Catalog path saved:".green(), path.display());
        return Ok(());
    }

    let catalog_dir = resolve_catalog_dir(cli, config, &store)?;
    let catalog = Catalog::load(&catalog_dir).context("Failed to load catalog")?;
    if catalog.is_empty() {
        println!(
            "{} {}",
            "Catalog is empty:".yellow(),
            catalog.dir.display()
        );
    }
    let dispatcher = Dispatcher::for_current_os(&config.launch);
    info!("Using {} launcher", dispatcher.platform().name());

    let stdin = io::stdin();
    let mut shell = Shell::new(
        &catalog,
        &dispatcher,
        config.display.clone(),
        store,
        stdin.lock(),
        io::stdout(),
    );

    match &cli.command {
        None => shell.repl().context("Interactive prompt failed"),
        Some(command) => shell.run(command).context("Command failed"),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
