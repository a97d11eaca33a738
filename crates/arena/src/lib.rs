#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Forager Arena
//!
//! The environment core for the pellet-foraging trainer: a walled square in
//! which a single agent collects scattered pellets under a time budget.
//!
//! This crate owns everything the host-side simulation loop needs to run an
//! episode, while staying completely agnostic of how actions are produced
//! (a trained policy, a random stand-in, manual input — see the `policy`
//! crate).
//!
//! ## Key components
//!
//! -   **Environment:** [`ArenaEnv`] in the [`env`] module is the main entry
//!     point. It owns the agent body, the live pellets, the episode timer,
//!     and the per-episode reward accumulator, and advances all of them one
//!     tick at a time.
//! -   **Pellets:** live pellets are held in a [`PelletArena`], an
//!     id-indexed record store with explicit removal ([`pellet`] module).
//!     Its size is, at every instant, the number of live uncollected
//!     pellets.
//! -   **Placement:** [`placer::scatter`] scatters pellets with a
//!     bounded-retry rejection sampler. Dense configurations can exhaust the
//!     retry budget, in which case a violating position is accepted — an
//!     intentional approximation, see the module docs.
//! -   **Timer:** [`EpisodeTimer`] is the two-state deadline machine that
//!     turns a tick into a timeout.
//!
//! ## Episode lifecycle
//!
//! ```rust
//! use arena::{ArenaConfig, ArenaEnv, Action};
//!
//! let mut env = ArenaEnv::new(ArenaConfig::default(), 7).unwrap();
//! env.begin_episode();
//! let report = env.tick(0.02, Action { turn: 0.0, forward: 1.0 });
//! assert!(report.outcome.is_none() || report.reward_delta != 0.0);
//! ```
//!
//! Every terminal path (all pellets cleared, wall contact, timer expiry)
//! clears the remaining pellets and reports an [`Outcome`]; the caller is
//! expected to call [`ArenaEnv::begin_episode`] again to start the next
//! episode.

pub mod config;
pub mod env;
pub mod error;
pub mod pellet;
pub mod placer;
pub mod timer;
pub mod types;

pub use config::ArenaConfig;
pub use env::{ArenaEnv, StepReport, CLEAR_BONUS, PELLET_REWARD, TERMINAL_PENALTY};
pub use error::ConfigError;
pub use pellet::{Pellet, PelletArena, PelletId};
pub use timer::EpisodeTimer;
pub use types::{Action, AgentBody, CollisionTag, Marker, Observation, Outcome};
