#![deny(unsafe_code)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod common;
mod config;
mod gui;
mod input;
mod monitor;
mod timer;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "slimevr-reset-timer")]
#[command(version)]
#[command(about = "Periodic tracker-reset shortcut timer for SlimeVR", long_about = None)]
struct Cli {
    /// Enable debug mode with verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter_directives = if cli.debug {
        "info,slimevr_reset_timer=debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // The countdown and the process watchers run here; the GUI owns the
    // main thread, so the runtime only needs a couple of workers.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    gui::run_app(runtime.handle().clone())
}
