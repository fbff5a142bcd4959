//! Modular Media Player (mmp) - Main entry point
//!
//! Interactive console player: build a playlist from composed media items,
//! play it, and switch the rendering backend at any time.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mmp_common::config::{OutputFormat, Overrides, SettingsResolver};
use mmp_common::RendererKind;
use mmp_player::Session;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for mmp
#[derive(Parser, Debug)]
#[command(name = "mmp")]
#[command(about = "Modular Media Player: composable sources, features and renderers")]
#[command(version)]
struct Args {
    /// Initial renderer (hardware or software)
    #[arg(short, long, env = "MMP_RENDERER", value_parser = parse_renderer)]
    renderer: Option<RendererKind>,

    /// Playback event output format (text or json)
    #[arg(short, long, env = "MMP_OUTPUT_FORMAT", value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Config file (defaults to $MMP_CONFIG, then ~/.config/mmp/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, env = "MMP_LOG_LEVEL")]
    log_level: Option<String>,
}

fn parse_renderer(s: &str) -> std::result::Result<RendererKind, String> {
    RendererKind::from_str(s).ok_or_else(|| format!("unknown renderer '{}'", s))
}

fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    OutputFormat::from_str(s).ok_or_else(|| format!("unknown output format '{}'", s))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = SettingsResolver::new(args.config)
        .resolve(Overrides {
            renderer: args.renderer,
            output_format: args.format,
            log_level: args.log_level,
        })
        .context("Failed to resolve settings")?;

    // Diagnostics go to stderr; stdout carries the menu protocol
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "mmp={level},mmp_player={level},mmp_common={level}",
                    level = settings.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(
        "Starting Modular Media Player v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    for warning in &settings.warnings {
        warn!("{}", warning);
    }
    if let Some(path) = &settings.config_file {
        info!("Config file: {}", path.display());
    }
    info!(
        "Renderer: {}, output format: {}",
        settings.renderer, settings.output_format
    );

    let stdin = io::stdin();
    let mut session = Session::new(
        stdin.lock(),
        io::stdout(),
        settings.renderer,
        settings.output_format,
    );
    session.run().context("Session ended with an error")?;

    Ok(())
}
