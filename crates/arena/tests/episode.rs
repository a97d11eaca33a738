use arena::{
    Action, ArenaConfig, ArenaEnv, CollisionTag, Marker, Outcome, CLEAR_BONUS, PELLET_REWARD,
    TERMINAL_PENALTY,
};
use glam::Vec3;

const DT: f32 = 0.02;

fn env_with(count: usize) -> ArenaEnv {
    let cfg = ArenaConfig {
        pellet_count: count,
        spawn_half_extent: 40.0,
        wall_half_extent: 41.0,
        episode_time: 1_000.0,
        ..ArenaConfig::default()
    };
    let mut env = ArenaEnv::new(cfg, 123).unwrap();
    env.begin_episode();
    env
}

/// Park the agent on top of a live pellet so the next tick picks it up.
fn move_onto_some_pellet(env: &mut ArenaEnv) {
    let target = env.pellets.iter().next().expect("a live pellet").pos;
    env.agent.pos = target;
}

#[test]
fn non_final_pickup_rewards_without_ending_episode() {
    let mut env = env_with(3);
    move_onto_some_pellet(&mut env);
    let before = env.pellets.len();

    let report = env.tick(DT, Action::default());

    assert_eq!(report.reward_delta, PELLET_REWARD);
    assert_eq!(env.pellets.len(), before - 1);
    assert!(report.outcome.is_none());
    assert!(matches!(report.events[..], [CollisionTag::Pellet(_)]));
}

#[test]
fn final_pickup_adds_bonus_and_ends_episode() {
    let mut env = env_with(1);
    move_onto_some_pellet(&mut env);

    let report = env.tick(DT, Action::default());

    assert_eq!(report.reward_delta, PELLET_REWARD + CLEAR_BONUS);
    assert_eq!(report.outcome, Some(Outcome::Cleared));
    assert!(env.pellets.is_empty());
    assert_eq!(env.marker, Marker::Green);
}

#[test]
fn wall_contact_ends_episode_regardless_of_pellets() {
    let mut env = env_with(3);
    env.agent.pos = Vec3::new(env.config.wall_half_extent + 1.0, 0.3, 0.0);

    let report = env.tick(DT, Action::default());

    assert_eq!(report.reward_delta, TERMINAL_PENALTY);
    assert_eq!(report.outcome, Some(Outcome::WallContact));
    assert!(env.pellets.is_empty(), "terminal paths clear remaining pellets");
    assert_eq!(env.marker, Marker::Red);
    assert!(report.events.contains(&CollisionTag::Wall));
}

#[test]
fn timer_expiry_penalizes_and_ends_episode() {
    let cfg = ArenaConfig {
        pellet_count: 2,
        spawn_half_extent: 40.0,
        wall_half_extent: 41.0,
        episode_time: 0.5,
        ..ArenaConfig::default()
    };
    let mut env = ArenaEnv::new(cfg, 77).unwrap();
    env.begin_episode();

    let mut last = None;
    for _ in 0..100 {
        let report = env.tick(DT, Action::default());
        if report.is_terminal() {
            last = Some(report);
            break;
        }
    }
    let report = last.expect("episode must time out");

    assert_eq!(report.outcome, Some(Outcome::TimedOut));
    assert_eq!(report.reward_delta, TERMINAL_PENALTY);
    assert!(env.pellets.is_empty());
    assert_eq!(env.marker, Marker::Black);
    // 0.5s budget at 0.02s ticks: expiry on the 25th tick.
    assert!(env.clock >= 0.5);
}

#[test]
fn begin_episode_fully_replaces_state_each_time() {
    let mut env = env_with(4);
    let first_ids: Vec<_> = env.pellets.iter().map(|p| p.id).collect();
    env.episode_reward = -3.0;

    // advance the clock, then restart twice
    for _ in 0..10 {
        env.tick(DT, Action { turn: 0.2, forward: 0.4 });
    }
    env.begin_episode();
    env.begin_episode();

    assert_eq!(env.pellets.len(), 4);
    assert_eq!(env.episode_reward, 0.0);
    assert_eq!(env.episodes, 3);
    for p in env.pellets.iter() {
        assert!(!first_ids.contains(&p.id));
    }
    // deadline is relative to the new start time
    match env.timer {
        arena::EpisodeTimer::Running { deadline } => {
            assert!((deadline - (env.clock + env.config.episode_time)).abs() < 1e-3);
        }
        arena::EpisodeTimer::Expired => panic!("timer must be running after a restart"),
    }
}

#[test]
fn cumulative_reward_tracks_deltas() {
    let mut env = env_with(2);
    move_onto_some_pellet(&mut env);
    env.tick(DT, Action::default());
    assert_eq!(env.episode_reward, PELLET_REWARD);

    move_onto_some_pellet(&mut env);
    env.tick(DT, Action::default());
    assert_eq!(
        env.episode_reward,
        2.0 * PELLET_REWARD + CLEAR_BONUS
    );
}

#[test]
fn forward_action_moves_along_heading() {
    let mut env = env_with(0);
    env.agent.pos = Vec3::new(0.0, 0.3, 0.0);
    env.agent.yaw = 0.0; // facing +z

    env.tick(1.0, Action { turn: 0.0, forward: 1.0 });

    let expected = env.config.move_speed;
    assert!((env.agent.pos.z - expected).abs() < 1e-4);
    assert!(env.agent.pos.x.abs() < 1e-4);
}
