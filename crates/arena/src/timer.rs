/// Per-episode deadline, as a two-state machine.
///
/// `Running { deadline }` becomes `Expired` on the first check at or past
/// the deadline. A fresh deadline is armed at every episode begin; there is
/// no pause or resume.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EpisodeTimer {
    Running { deadline: f32 },
    Expired,
}

impl EpisodeTimer {
    /// Arm the timer `budget` seconds past `now`.
    #[must_use]
    pub fn start(now: f32, budget: f32) -> Self {
        EpisodeTimer::Running {
            deadline: now + budget,
        }
    }

    /// Advance the state machine. Returns `true` on the transition tick
    /// only; once `Expired`, further checks return `false`.
    pub fn check(&mut self, now: f32) -> bool {
        match *self {
            EpisodeTimer::Running { deadline } if now >= deadline => {
                *self = EpisodeTimer::Expired;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, EpisodeTimer::Expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_exactly_once() {
        let mut t = EpisodeTimer::start(1.0, 2.0);
        assert!(!t.check(2.9));
        assert!(t.check(3.0), "boundary counts as expired");
        assert!(t.is_expired());
        assert!(!t.check(4.0), "transition fires once");
    }

    #[test]
    fn restart_rearms_relative_to_new_now() {
        let mut t = EpisodeTimer::start(0.0, 1.0);
        assert!(t.check(1.0));
        t = EpisodeTimer::start(10.0, 1.0);
        assert!(!t.check(10.5));
        assert!(t.check(11.0));
    }
}
