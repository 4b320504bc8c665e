//! Sparky CLI and REST API entry point.
//!
//! Binary name: `sparky`
//!
//! Parses CLI arguments, loads configuration from the environment, wires the
//! services, then starts the REST API server.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sparky_infra::config::ServiceConfig;

use sparky_api::cli::{Cli, Commands};
use sparky_api::http;
use sparky_api::state::LiveState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap runs so env-backed args like PORT see it.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,sparky=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port, host } => {
            let config = ServiceConfig::from_env()?;
            let state = LiveState::init(&config);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Sparky API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
