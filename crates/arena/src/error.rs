use thiserror::Error;

/// Rejected run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("minimum pellet separation must be non-negative, got {0}")]
    NegativeSeparation(f32),
    #[error(
        "spawn square (half-extent {spawn}) must lie strictly inside the walls (half-extent {wall})"
    )]
    SpawnOutsideWalls { spawn: f32, wall: f32 },
}
