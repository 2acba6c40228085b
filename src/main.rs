//! Evochord CLI - Chord Evolution Installation Node
//!
//! Command-line entry point for the Evochord installation.

use clap::Parser;
use env_logger::Env;
use log::info;

use evochord::cli::{commands, Cli, Commands};
use evochord::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Evochord v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Evochord v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run {
            config,
            host,
            port,
            seed,
        } => commands::run(config.as_deref(), host, port, seed),
        Commands::Audition {
            config,
            seed,
            generations,
        } => commands::audition(config.as_deref(), seed, generations),
        Commands::ShowConfig { config } => commands::show_config(config.as_deref()),
    }
}
