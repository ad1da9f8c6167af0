#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use hapil_core::QuoteStore;
use tracing_subscriber::EnvFilter;

/// Seed for the quote picker, set from command line
static SESSION_SEED: OnceLock<Option<u64>> = OnceLock::new();

/// Get the session seed (None means OS entropy)
pub fn get_session_seed() -> Option<u64> {
    SESSION_SEED.get().copied().flatten()
}

/// Hapil - one excerpt before sleep
#[derive(Parser, Debug)]
#[command(name = "hapil-desktop")]
#[command(about = "Hapil - a random literary excerpt before sleep")]
struct Args {
    /// Load quotes from this JSON file instead of the bundled set
    #[arg(short, long)]
    quotes: Option<PathBuf>,

    /// Seed the quote picker for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_store(path: Option<&Path>) -> anyhow::Result<QuoteStore> {
    match path {
        Some(path) => QuoteStore::from_path(path)
            .with_context(|| format!("failed to load quotes from {}", path.display())),
        None => QuoteStore::load().context("bundled quote data is invalid"),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let store = match load_store(args.quotes.as_deref()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let _ = SESSION_SEED.set(args.seed);

    tracing::info!(
        "Starting with {} quotes (seed: {:?})",
        store.len(),
        args.seed
    );

    // Narrow reading column, phone-like proportions
    let window_width = 480.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("하필")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(store)
        .launch(app::App);
}
