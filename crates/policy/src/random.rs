use arena::{Action, Observation};

use crate::Policy;

/// Uniform random actions in `[-1, 1]` on both channels. The stand-in for
/// an untrained network, and a convenient smoke-test driver.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    fn axis(&mut self) -> f32 {
        2.0 * self.rng.f32() - 1.0
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _obs: &Observation) -> Action {
        Action {
            turn: self.axis(),
            forward: self.axis(),
        }
    }
}
