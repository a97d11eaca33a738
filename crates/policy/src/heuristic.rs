use arena::{Action, Observation};

use crate::Policy;

/// Manual-override policy for debugging: two raw input axes mapped directly
/// onto the action channels, horizontal onto turn and vertical onto
/// forward. Whoever owns the input device (or a script) updates the axes
/// between decision ticks.
#[derive(Debug, Default)]
pub struct HeuristicPolicy {
    horizontal: f32,
    vertical: f32,
}

impl HeuristicPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed axes, for scripted runs ("hold forward").
    #[must_use]
    pub fn with_axes(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }

    pub fn set_axes(&mut self, horizontal: f32, vertical: f32) {
        self.horizontal = horizontal;
        self.vertical = vertical;
    }
}

impl Policy for HeuristicPolicy {
    fn act(&mut self, _obs: &Observation) -> Action {
        Action {
            turn: self.horizontal,
            forward: self.vertical,
        }
    }
}
