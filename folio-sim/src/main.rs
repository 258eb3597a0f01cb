//! `folio-sim`: replay carousel input scenarios against a headless page.

mod replay;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use folio_config::{ConfigLoader, ConfigLoaderOptions};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(
    name = "folio-sim",
    about = "Replay carousel input scenarios against a headless page"
)]
struct Cli {
    /// Scenario file (TOML). Defaults to a built-in desktop walk.
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Carousel configuration file (folio.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
    /// Override the scenario's card count
    #[arg(long)]
    cards: Option<usize>,
    /// Override the scenario's card width (px)
    #[arg(long)]
    card_width: Option<f32>,
    /// Override the scenario's initial viewport width (px)
    #[arg(long)]
    viewport: Option<f32>,
    /// Replay in real time through the async event loop
    #[arg(long)]
    realtime: bool,
    /// Print a JSON report to stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let load = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config.clone(),
        env_file: Some(cli.env_file.clone()),
    })
    .load()
    .context("failed to load carousel configuration")?;

    if load.metadata.env_file_loaded {
        info!(path = %cli.env_file.display(), "loaded .env file");
    }
    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }

    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::from_path(path)
            .with_context(|| format!("invalid scenario {}", path.display()))?,
        None => Scenario::walk(),
    };
    if let Some(cards) = cli.cards {
        scenario.cards = cards;
    }
    if let Some(width) = cli.card_width {
        scenario.card_width = width;
    }
    if let Some(width) = cli.viewport {
        scenario.viewport_width = width;
    }

    info!(
        cards = scenario.cards,
        steps = scenario.steps.len(),
        realtime = cli.realtime,
        "replaying scenario"
    );

    let report = if cli.realtime {
        replay::replay_realtime(&scenario, load.config).await?
    } else {
        replay::replay_virtual(&scenario, load.config)
    };

    info!(
        current = report.final_snapshot.current_slide,
        visible = report.final_snapshot.visible_cards,
        offset_px = report.page.track_offset_px,
        "replay finished"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
