#![deny(clippy::all, clippy::pedantic)]
//! Entry point for the forager runtime binary.
//!
//! Loads a JSON run configuration (all fields optional, see
//! [`config::RunConfig`]), applies CLI overrides, and rolls out episodes
//! headlessly, logging one line per episode.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use forager::app;
use forager::config::{PolicyKind, RunConfig};

#[derive(Parser, Debug)]
#[command(about = "Headless pellet-foraging arena rollouts")]
struct Cli {
    /// Path to a JSON run configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the number of episodes to roll out.
    #[arg(long)]
    episodes: Option<u32>,
    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Override the decision strategy.
    #[arg(long, value_enum)]
    policy: Option<PolicyKind>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(episodes) = cli.episodes {
        config.episodes = episodes;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }

    app::run(&config)?;
    Ok(())
}
