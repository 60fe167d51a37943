use thiserror::Error;

/// Rejected game configuration. Raised once when a [`crate::Game`] is built.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be a finite non-negative number, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("flap velocity must be negative (upward), got {0}")]
    FlapNotUpward(f32),
    #[error(
        "no room to place a gap: gap height {gap_height} plus two margins of {min_margin} exceeds screen height {screen_height}"
    )]
    EmptyGapRange {
        gap_height: f32,
        min_margin: f32,
        screen_height: f32,
    },
    #[error("avatar of size {avatar_size} cannot fit through a gap of height {gap_height}")]
    AvatarTooLarge { avatar_size: f32, gap_height: f32 },
    #[error("avatar column {avatar_x} lies outside the screen width {screen_width}")]
    AvatarOffScreen { avatar_x: f32, screen_width: f32 },
    #[error("unknown speed preset {0:?} (expected desktop or touch)")]
    UnknownPreset(String),
    #[error("could not read settings file")]
    Io(#[from] std::io::Error),
    #[error("could not parse settings")]
    Parse(#[from] serde_json::Error),
}

/// Failure inside a best-score backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unsupported best-score format version {0}")]
    UnsupportedVersion(u32),
    #[error("best-score storage is unavailable")]
    Unavailable,
}
