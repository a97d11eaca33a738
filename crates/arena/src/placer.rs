//! Bounded-retry pellet scattering.
//!
//! For each pellet a candidate position is sampled uniformly in the spawn
//! square and rejected while it sits closer than `min_separation` to any
//! already-placed pellet or to the agent. After `max_retries` rejected
//! candidates the current candidate is accepted *even if it still
//! violates separation*. That give-up branch is an accepted approximation:
//! under dense configurations (large `pellet_count` relative to the square
//! and the separation target) pellets may overlap. The branch logs a
//! warning so dense runs are at least visible.

use glam::Vec3;

use crate::config::ArenaConfig;
use crate::pellet::PelletArena;

/// Uniform sample in the spawn square at spawn height.
pub(crate) fn sample_spawn_point(cfg: &ArenaConfig, rng: &mut fastrand::Rng) -> Vec3 {
    let half = cfg.spawn_half_extent;
    Vec3::new(
        half * (2.0 * rng.f32() - 1.0),
        cfg.spawn_height,
        half * (2.0 * rng.f32() - 1.0),
    )
}

fn separated(candidate: Vec3, agent_pos: Vec3, arena: &PelletArena, min_dist: f32) -> bool {
    if candidate.distance(agent_pos) < min_dist {
        return false;
    }
    arena.iter().all(|p| candidate.distance(p.pos) >= min_dist)
}

/// Clear `arena` and scatter `cfg.pellet_count` fresh pellets.
///
/// Terminates after at most `pellet_count * (max_retries + 1)` samples.
pub fn scatter(
    arena: &mut PelletArena,
    agent_pos: Vec3,
    cfg: &ArenaConfig,
    rng: &mut fastrand::Rng,
) {
    arena.clear();

    for _ in 0..cfg.pellet_count {
        let mut candidate = sample_spawn_point(cfg, rng);
        let mut retries = 0;
        while !separated(candidate, agent_pos, arena, cfg.min_separation) {
            if retries >= cfg.max_retries {
                // Retry budget exhausted: keep the violating position.
                tracing::warn!(
                    placed = arena.len(),
                    retries,
                    "pellet separation given up after retry budget"
                );
                break;
            }
            candidate = sample_spawn_point(cfg, rng);
            retries += 1;
        }
        arena.spawn(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(count: usize, half_extent: f32, separation: f32) -> ArenaConfig {
        ArenaConfig {
            pellet_count: count,
            spawn_half_extent: half_extent,
            min_separation: separation,
            wall_half_extent: half_extent + 1.0,
            ..ArenaConfig::default()
        }
    }

    #[test]
    fn samples_stay_in_bounds() {
        let cfg = cfg(0, 4.0, 5.0);
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..1000 {
            let p = sample_spawn_point(&cfg, &mut rng);
            assert!(p.x.abs() <= 4.0 && p.z.abs() <= 4.0);
            assert!((p.y - cfg.spawn_height).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn scatter_always_yields_requested_count() {
        // Impossible density: separation cannot be honored, the give-up
        // branch must still produce every pellet.
        let cfg = cfg(20, 2.0, 50.0);
        let mut arena = PelletArena::new();
        let mut rng = fastrand::Rng::with_seed(11);
        scatter(&mut arena, Vec3::ZERO, &cfg, &mut rng);
        assert_eq!(arena.len(), 20);
    }

    #[test]
    fn scatter_terminates_with_zero_pellets() {
        let cfg = cfg(0, 4.0, 5.0);
        let mut arena = PelletArena::new();
        let mut rng = fastrand::Rng::with_seed(5);
        scatter(&mut arena, Vec3::ZERO, &cfg, &mut rng);
        assert!(arena.is_empty());
    }
}
