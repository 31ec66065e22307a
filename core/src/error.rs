use crate::types::{Action, PlayerId};

/// Problems found while loading or validating a [`MatchConfig`](crate::config::MatchConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tick rate must be positive")]
    ZeroTickRate,

    #[error("arena {width}x{height} cannot hold a fighter above the ground line")]
    ArenaTooSmall { width: i32, height: i32 },

    #[error("{player} has no frames for {action:?}")]
    EmptyAnimation { player: PlayerId, action: Action },

    #[error("{player} sprite scale must be positive (got {scale})")]
    InvalidScale { player: PlayerId, scale: i32 },
}
