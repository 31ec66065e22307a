use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::input::KeyBindings;
use crate::types::*;

/// Balance numbers, kept apart from the mechanics that use them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub run_speed: i32,
    pub gravity: i32,
    pub jump_velocity: i32,
    pub ground_margin: i32,
    pub attack_damage: i32,
    pub attack_recovery_ticks: u32,
    pub animation_frame_ms: u64,
    /// Hitbox delay per attack, indexed `[player][attack]`.
    pub impact_ms: [[u64; 2]; 2],
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            run_speed: RUN_SPEED,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            ground_margin: GROUND_MARGIN,
            attack_damage: ATTACK_DAMAGE,
            attack_recovery_ticks: ATTACK_RECOVERY_TICKS,
            animation_frame_ms: ANIMATION_FRAME_MS,
            impact_ms: ATTACK_IMPACT_MS,
        }
    }
}

impl Tuning {
    pub fn impact_ms(&self, player: PlayerId, kind: AttackKind) -> u64 {
        self.impact_ms[player.index()][kind.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Default for Arena {
    fn default() -> Self {
        Arena {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Geometry of a sprite sheet: square cells of `frame_size`, one row per action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub frame_size: i32,
    pub scale: i32,
    /// Cell offset from the body's top-left corner, in unscaled pixels.
    pub offset: [i32; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

/// Per-character data handed to a fighter when it is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterSpec {
    pub name: String,
    pub sprite: SpriteSheet,
    pub frames: FrameCounts,
    pub cue: Cue,
    pub spawn: SpawnPoint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub tick_rate: u32,
    pub arena: Arena,
    pub tuning: Tuning,
    /// Fighter specs, `[player_one, player_two]`.
    pub roster: [FighterSpec; 2],
    pub bindings: [KeyBindings; 2],
    pub intro_count: u32,
    pub intro_step_ms: u64,
    pub round_over_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        crate::init::default_config()
    }
}

impl MatchConfig {
    /// Parse a config from JSON, filling omitted fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let Arena { width, height } = self.arena;
        if width < BODY_WIDTH || height - self.tuning.ground_margin < BODY_HEIGHT {
            return Err(ConfigError::ArenaTooSmall { width, height });
        }
        for player in PlayerId::BOTH {
            let spec = &self.roster[player.index()];
            if spec.sprite.scale <= 0 {
                return Err(ConfigError::InvalidScale {
                    player,
                    scale: spec.sprite.scale,
                });
            }
            for action in ALL_ACTIONS {
                if spec.frames.len(action) == 0 {
                    return Err(ConfigError::EmptyAnimation { player, action });
                }
            }
        }
        Ok(())
    }

    /// Simulation time at `tick`, on a fixed cadence of `tick_rate` steps per second.
    pub fn tick_to_ms(&self, tick: Tick) -> u64 {
        tick * 1000 / self.tick_rate as u64
    }
}

const ALL_ACTIONS: [Action; 7] = [
    Action::Idle,
    Action::Run,
    Action::Jump,
    Action::Attack1,
    Action::Attack2,
    Action::Hit,
    Action::Death,
];
