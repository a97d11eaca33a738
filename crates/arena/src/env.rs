//! The environment proper: one agent, one walled square, N pellets, one
//! deadline.
//!
//! [`ArenaEnv`] exposes no engine-style callback surface; instead there are
//! three explicit operations the simulation loop calls in order:
//! [`begin_episode`], [`observe`], and [`tick`]. Collision detection is
//! proximity based — there is no physics engine underneath, only the
//! kinematic step applied inside `tick`.
//!
//! [`begin_episode`]: ArenaEnv::begin_episode
//! [`observe`]: ArenaEnv::observe
//! [`tick`]: ArenaEnv::tick

use crate::config::ArenaConfig;
use crate::error::ConfigError;
use crate::pellet::{PelletArena, PelletId};
use crate::placer;
use crate::timer::EpisodeTimer;
use crate::types::{Action, AgentBody, CollisionTag, Marker, Observation, Outcome};
use glam::Vec3;

/// Reward for picking up a pellet.
pub const PELLET_REWARD: f32 = 10.0;
/// Additional reward when the pickup empties the arena.
pub const CLEAR_BONUS: f32 = 5.0;
/// Penalty shared by the wall-contact and timeout terminals.
pub const TERMINAL_PENALTY: f32 = -15.0;

/// What one tick did: the reward delta it produced, the collision events
/// it saw, and whether it ended the episode.
#[derive(Clone, Debug, Default)]
pub struct StepReport {
    pub reward_delta: f32,
    pub events: Vec<CollisionTag>,
    pub outcome: Option<Outcome>,
}

impl StepReport {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

/// The foraging environment.
///
/// State fields are public: the driving loop and the tests inspect and
/// occasionally pose the agent directly.
pub struct ArenaEnv {
    pub config: ArenaConfig,
    pub agent: AgentBody,
    pub pellets: PelletArena,
    pub timer: EpisodeTimer,
    /// Simulated time, seconds since construction.
    pub clock: f32,
    /// Cumulative reward over the current episode.
    pub episode_reward: f32,
    pub marker: Marker,
    /// Episodes begun since construction.
    pub episodes: u64,
    rng: fastrand::Rng,
}

impl ArenaEnv {
    /// Build an environment from a validated configuration and an RNG seed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration cannot be run.
    pub fn new(config: ArenaConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawn_height = config.spawn_height;
        Ok(Self {
            config,
            agent: AgentBody {
                pos: Vec3::new(0.0, spawn_height, 0.0),
                yaw: 0.0,
            },
            pellets: PelletArena::new(),
            timer: EpisodeTimer::Expired,
            clock: 0.0,
            episode_reward: 0.0,
            marker: Marker::Neutral,
            episodes: 0,
            rng: fastrand::Rng::with_seed(seed),
        })
    }

    /// Reset for a fresh episode: re-randomize the agent's position inside
    /// the spawn square (yaw carries over), replace every pellet, and arm
    /// the timer relative to the current clock.
    ///
    /// Idempotent in the sense that calling it repeatedly always leaves
    /// exactly `pellet_count` fresh pellets and a full time budget.
    pub fn begin_episode(&mut self) {
        self.episodes += 1;
        self.episode_reward = 0.0;
        self.agent.pos = placer::sample_spawn_point(&self.config, &mut self.rng);
        placer::scatter(&mut self.pellets, self.agent.pos, &self.config, &mut self.rng);
        self.timer = EpisodeTimer::start(self.clock, self.config.episode_time);
        tracing::debug!(
            episode = self.episodes,
            pellets = self.pellets.len(),
            "episode begun"
        );
    }

    /// The 3-scalar observation handed to the policy: the agent's position.
    #[must_use]
    pub fn observe(&self) -> Observation {
        Observation([self.agent.pos.x, self.agent.pos.y, self.agent.pos.z])
    }

    /// Advance the simulation by `dt` seconds under `action`.
    ///
    /// Order within a tick: kinematic step, pellet pickups, wall contact,
    /// timer. The first terminal event wins; all terminal paths clear the
    /// remaining pellets and stamp the outcome marker.
    pub fn tick(&mut self, dt: f32, action: Action) -> StepReport {
        self.clock += dt;

        let scale = self.config.move_speed * dt;
        self.agent.yaw += action.turn * scale;
        let step = self.agent.forward() * (action.forward * scale);
        self.agent.pos += step;

        let mut report = StepReport::default();

        let picked: Vec<PelletId> = self
            .pellets
            .iter()
            .filter(|p| p.pos.distance(self.agent.pos) <= self.config.pickup_radius)
            .map(|p| p.id)
            .collect();
        for id in picked {
            self.pellets.remove(id);
            report.events.push(CollisionTag::Pellet(id));
            report.reward_delta += PELLET_REWARD;
        }

        if !report.events.is_empty() && self.pellets.is_empty() {
            report.reward_delta += CLEAR_BONUS;
            self.finish(Outcome::Cleared, &mut report);
        } else if self.outside_walls() {
            report.events.push(CollisionTag::Wall);
            report.reward_delta += TERMINAL_PENALTY;
            self.finish(Outcome::WallContact, &mut report);
        } else if self.timer.check(self.clock) {
            report.reward_delta += TERMINAL_PENALTY;
            self.finish(Outcome::TimedOut, &mut report);
        }

        self.episode_reward += report.reward_delta;
        report
    }

    fn outside_walls(&self) -> bool {
        let half = self.config.wall_half_extent;
        self.agent.pos.x.abs() > half || self.agent.pos.z.abs() > half
    }

    fn finish(&mut self, outcome: Outcome, report: &mut StepReport) {
        self.pellets.clear();
        self.marker = Marker::for_outcome(outcome);
        report.outcome = Some(outcome);
    }
}
