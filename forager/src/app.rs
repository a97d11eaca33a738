//! The rollout loop: the explicit replacement for the host engine's
//! callback dispatch.

use anyhow::Result;
use arena::{ArenaEnv, Outcome};
use policy::{HeuristicPolicy, Policy, RandomPolicy};

use crate::config::{PolicyKind, RunConfig};

/// Aggregate result of a run, for logging and for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunSummary {
    pub episodes: u32,
    pub cleared: u32,
    pub wall_contacts: u32,
    pub timeouts: u32,
    /// Mean cumulative reward per episode.
    pub mean_reward: f32,
}

/// Build the configured decision strategy.
#[must_use]
pub fn make_policy(config: &RunConfig) -> Box<dyn Policy> {
    match config.policy {
        PolicyKind::Random => Box::new(RandomPolicy::new(config.seed)),
        PolicyKind::Heuristic => Box::new(HeuristicPolicy::with_axes(
            config.heuristic_axes[0],
            config.heuristic_axes[1],
        )),
    }
}

/// Roll out `config.episodes` episodes and return the summary.
///
/// # Errors
///
/// Fails if the arena configuration does not validate.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    anyhow::ensure!(config.dt > 0.0, "dt must be positive, got {}", config.dt);
    let mut env = ArenaEnv::new(config.arena.clone(), config.seed)?;
    let mut policy = make_policy(config);

    let mut summary = RunSummary::default();
    let mut total_reward = 0.0_f32;

    tracing::info!(
        episodes = config.episodes,
        pellets = config.arena.pellet_count,
        policy = ?config.policy,
        "starting rollouts"
    );

    for episode in 1..=config.episodes {
        env.begin_episode();
        policy.on_episode_begin();

        let mut ticks = 0_u32;
        let outcome = loop {
            let obs = env.observe();
            let action = policy.act(&obs);
            let report = env.tick(config.dt, action);
            ticks += 1;
            if let Some(outcome) = report.outcome {
                break outcome;
            }
        };

        match outcome {
            Outcome::Cleared => summary.cleared += 1,
            Outcome::WallContact => summary.wall_contacts += 1,
            Outcome::TimedOut => summary.timeouts += 1,
        }
        total_reward += env.episode_reward;
        tracing::info!(
            episode,
            ticks,
            reward = env.episode_reward,
            outcome = ?outcome,
            marker = ?env.marker,
            "episode finished"
        );
    }

    summary.episodes = config.episodes;
    if config.episodes > 0 {
        summary.mean_reward = total_reward / config.episodes as f32;
    }
    tracing::info!(
        cleared = summary.cleared,
        wall_contacts = summary.wall_contacts,
        timeouts = summary.timeouts,
        mean_reward = summary.mean_reward,
        "run finished"
    );
    Ok(summary)
}
