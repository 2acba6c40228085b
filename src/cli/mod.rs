//! CLI Module
//!
//! Command-line interface for the Evochord installation node.

pub mod commands;

use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Evochord - genetic chord evolution streamed over OSC
#[derive(Parser, Debug)]
#[command(name = "evochord")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the installation loop (runs until interrupted)
    #[command(name = "run")]
    Run {
        /// Configuration file (JSON); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Patch host to send to (overrides the config file)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Patch UDP port to send to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Evolve each target offline and print the trajectory
    #[command(name = "audition")]
    Audition {
        /// Configuration file (JSON); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed for a reproducible audition
        #[arg(long)]
        seed: Option<u64>,

        /// Generations per target (overrides the config budget)
        #[arg(short, long)]
        generations: Option<u64>,
    },

    /// Print the effective configuration as JSON
    #[command(name = "show-config")]
    ShowConfig {
        /// Configuration file (JSON); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
