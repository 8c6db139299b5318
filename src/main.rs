#![deny(unsafe_code)]

mod common;
mod config;
mod constants;
mod launcher;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

use crate::common::display::FixedDisplays;
use crate::common::types::Dimensions;
use crate::config::SettingsStore;
use crate::launcher::{Command, Launcher};

#[derive(Parser)]
#[command(name = "launcher-config")]
#[command(version)]
#[command(about = "Game launcher settings: resolution, display, language and key bindings", long_about = None)]
struct Cli {
    /// Settings file (defaults to <config dir>/launcher-config/settings.dat)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of attached displays
    #[arg(long, global = true, default_value_t = 1)]
    screens: u8,

    /// Display mode reported by the platform, e.g. 1920x1080 (repeatable).
    /// Without any, the builtin resolution list is offered.
    #[arg(long = "mode", global = true, value_name = "WxH")]
    modes: Vec<Dimensions>,

    /// Log debug output (healed fields, clamped indices)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so command output stays clean)
    let level = if cli.verbose {
        TraceLevel::DEBUG
    } else {
        TraceLevel::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let store = cli
        .config
        .map(SettingsStore::new)
        .unwrap_or_default();
    let displays = FixedDisplays::new(cli.screens, cli.modes);

    let launcher = Launcher::new(store, displays);
    launcher.execute(cli.command, &mut std::io::stdout().lock())
}
