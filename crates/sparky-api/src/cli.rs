//! CLI command definitions for the `sparky` binary.
//!
//! Uses clap derive macros for argument parsing.

use clap::{Parser, Subcommand};

/// YouTube lesson summaries and auto-electrician chat.
#[derive(Parser)]
#[command(name = "sparky", version, about, long_about = None)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,

        /// Host address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}
