use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Geometry, timing, and reward-relevant parameters of the arena.
///
/// Defaults: an 8×8 spawn square centred on the origin, pellets at height
/// 0.3, a 5-unit separation target with 10 placement retries, movement
/// speed 4, and a 30-second episode budget.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of pellets scattered at episode begin.
    pub pellet_count: usize,
    /// Scale applied to both action channels.
    pub move_speed: f32,
    /// Episode time budget, seconds of simulated time.
    pub episode_time: f32,
    /// Half-extent of the square pellets and the agent spawn into.
    pub spawn_half_extent: f32,
    /// Height pellets and the agent sit at.
    pub spawn_height: f32,
    /// Desired minimum distance between pellets, and pellet to agent.
    pub min_separation: f32,
    /// Placement resample budget per pellet before giving up.
    pub max_retries: u32,
    /// Half-extent of the walled square. Crossing it is a wall contact.
    pub wall_half_extent: f32,
    /// Agent-to-pellet distance that counts as a pickup.
    pub pickup_radius: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            pellet_count: 2,
            move_speed: 4.0,
            episode_time: 30.0,
            spawn_half_extent: 4.0,
            spawn_height: 0.3,
            min_separation: 5.0,
            max_retries: 10,
            wall_half_extent: 5.0,
            pickup_radius: 0.5,
        }
    }
}

impl ArenaConfig {
    /// Check the configuration for values the simulation cannot run with.
    ///
    /// Note this accepts dense configurations where `pellet_count` pellets
    /// cannot all honor `min_separation`; the placer degrades instead of
    /// failing (see [`crate::placer`]).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("move_speed", self.move_speed),
            ("episode_time", self.episode_time),
            ("spawn_half_extent", self.spawn_half_extent),
            ("pickup_radius", self.pickup_radius),
        ] {
            if value <= 0.0 || value.is_nan() {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.min_separation < 0.0 {
            return Err(ConfigError::NegativeSeparation(self.min_separation));
        }
        if self.wall_half_extent <= self.spawn_half_extent {
            return Err(ConfigError::SpawnOutsideWalls {
                spawn: self.spawn_half_extent,
                wall: self.wall_half_extent,
            });
        }
        Ok(())
    }
}
