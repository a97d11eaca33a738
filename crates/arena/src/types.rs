use crate::pellet::PelletId;
use glam::Vec3;

/// The agent's rigid body, reduced to what the kinematic step needs.
#[derive(Copy, Clone, Debug)]
pub struct AgentBody {
    pub pos: Vec3,
    /// Heading around the vertical axis, radians.
    pub yaw: f32,
}

impl AgentBody {
    /// Unit vector the agent is facing, in the ground plane.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }
}

/// Fixed-size numeric summary of state handed to the deciding policy.
///
/// Deliberately minimal: the agent's position, nothing else. Pellet
/// positions are not observable; a trained policy has to find them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Observation(pub [f32; 3]);

impl Observation {
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// Two continuous action channels, each nominally in `[-1, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Action {
    /// Yaw rate command.
    pub turn: f32,
    /// Forward speed command along the current heading.
    pub forward: f32,
}

/// Tag carried by a collision event. The two tagged entity kinds the agent
/// can touch are pellets and the walls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionTag {
    Pellet(PelletId),
    Wall,
}

/// How an episode ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every pellet collected.
    Cleared,
    /// Agent left the walled square.
    WallContact,
    /// Time budget exhausted.
    TimedOut,
}

/// Human-visible outcome indicator painted on the environment floor.
///
/// Display only; no learning signal reads it. Persists until the next
/// terminal event overwrites it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    Neutral,
    /// Success: all pellets collected.
    Green,
    /// Failure: wall contact.
    Red,
    /// Timeout.
    Black,
}

impl Marker {
    #[must_use]
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Cleared => Marker::Green,
            Outcome::WallContact => Marker::Red,
            Outcome::TimedOut => Marker::Black,
        }
    }
}
