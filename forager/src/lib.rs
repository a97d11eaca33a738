//! # Forager
//!
//! Headless runtime for the pellet-foraging training arena.
//!
//! ## Overview
//!
//! Environments of this kind usually live inside a game engine that drives
//! a fixed callback sequence (initialize, episode begin, per-frame update,
//! decision callbacks, collision callbacks) while an external RL framework
//! supplies the actions. Here that dispatch is an explicit loop owned by
//! [`app::run`]:
//!
//! 1. `env.begin_episode()` — respawn the agent, rescatter pellets, arm the
//!    episode timer;
//! 2. each tick: `env.observe()` → `policy.act(obs)` → `env.tick(dt, act)`;
//! 3. on a terminal tick (arena cleared, wall contact, timeout), log the
//!    outcome and go back to 1, until the configured episode count is done.
//!
//! ## Crates
//!
//! -   [`arena`] holds the environment itself;
//! -   [`policy`] holds the decision strategies the loop can drive.
//!
//! The binary reads a JSON run configuration (see [`config::RunConfig`])
//! with CLI overrides for the common knobs.

pub mod app;
pub mod config;
