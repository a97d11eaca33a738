//! Run configuration: a serde-deserialized JSON file plus CLI overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use arena::ArenaConfig;
use serde::{Deserialize, Serialize};

/// Which decision strategy drives the rollouts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Uniform random actions (untrained stand-in).
    #[default]
    Random,
    /// Manual-axes policy with the axes fixed from `heuristic_axes`.
    Heuristic,
}

/// Everything a run needs: the arena parameters plus loop-level knobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub arena: ArenaConfig,
    /// Episodes to roll out before exiting.
    pub episodes: u32,
    /// Simulated seconds per tick.
    pub dt: f32,
    /// RNG seed for the environment and the policy.
    pub seed: u64,
    pub policy: PolicyKind,
    /// Axes handed to the heuristic policy: `[horizontal, vertical]`.
    pub heuristic_axes: [f32; 2],
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            episodes: 10,
            dt: 0.02,
            seed: 0,
            policy: PolicyKind::Random,
            heuristic_axes: [0.0, 1.0],
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse as a
    /// `RunConfig`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading run config {}", path.display()))?;
        let config: RunConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing run config {}", path.display()))?;
        Ok(config)
    }
}
