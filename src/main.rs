//! Pagoda - a data-driven static page renderer.
//!
//! Plain HTML templates carry a fixed vocabulary of element ids; one JSON
//! document supplies the content. Building parses each template, populates
//! the targeted elements and writes the result to the output directory.

mod cli;
mod config;
mod core;
mod data;
mod dom;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::{SiteConfig, clear_clean_flag, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Build { .. } => build_site(&config, false),
        Commands::Serve { .. } => serve(&config),
        Commands::Check { args } => cli::check::check_site(&config, args),
    }
}

/// Serve command: bind, build once, then run the request loop.
///
/// Binding before the initial build wires up graceful shutdown early; a
/// failed initial build still serves whatever output already exists while
/// the watcher retries on the next change.
fn serve(config: &SiteConfig) -> Result<()> {
    let bound_server = cli::serve::bind_server()?;

    match build_site(config, false) {
        Ok(()) => {
            core::set_healthy(true);
            // Keep --clean to the first build; watch rebuilds must not
            // wipe the output on every change
            clear_clean_flag();
        }
        Err(e) => {
            core::set_healthy(false);
            crate::log!("build"; "initial build failed: {e:#}");
        }
    }

    bound_server.run()
}
