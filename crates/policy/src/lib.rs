//! Decision strategies for the foraging arena.
//!
//! The environment is decoupled from any particular training framework: it
//! only ever sees something implementing [`Policy`]. A trained network, a
//! random stand-in, and the manual-input path all plug in the same way.

mod heuristic;
mod random;

pub use heuristic::HeuristicPolicy;
pub use random::RandomPolicy;

use arena::{Action, Observation};

/// A decision strategy mapping observations to actions.
///
/// Inspired by classic frameworks like OpenAI Gym, this is the seam between
/// the simulation and whatever produces actions. Each decision tick the
/// driving loop calls [`act`] with the current observation and applies the
/// returned action verbatim.
///
/// [`act`]: Policy::act
pub trait Policy {
    /// Produce the action for one decision tick.
    fn act(&mut self, obs: &Observation) -> Action;

    /// Called when a fresh episode starts. Stateless policies can ignore it.
    fn on_episode_begin(&mut self) {}
}
