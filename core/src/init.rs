use crate::config::*;
use crate::constants::*;
use crate::fighter::Fighter;
use crate::input::KeyBindings;
use crate::types::*;

/// Sword fighter, player one's default. Spawns on the left facing right.
pub fn warrior() -> FighterSpec {
    FighterSpec {
        name: "warrior".into(),
        sprite: SpriteSheet {
            frame_size: WARRIOR_SIZE,
            scale: WARRIOR_SCALE,
            offset: WARRIOR_OFFSET,
        },
        frames: WARRIOR_FRAMES,
        cue: Cue::Sword,
        spawn: SpawnPoint {
            x: PLAYER_ONE_SPAWN_X,
            y: SPAWN_Y,
            facing: Facing::Right,
        },
    }
}

/// Magic fighter, player two's default. Spawns on the right facing left.
pub fn wizard() -> FighterSpec {
    FighterSpec {
        name: "wizard".into(),
        sprite: SpriteSheet {
            frame_size: WIZARD_SIZE,
            scale: WIZARD_SCALE,
            offset: WIZARD_OFFSET,
        },
        frames: WIZARD_FRAMES,
        cue: Cue::Magic,
        spawn: SpawnPoint {
            x: PLAYER_TWO_SPAWN_X,
            y: SPAWN_Y,
            facing: Facing::Left,
        },
    }
}

pub fn default_config() -> MatchConfig {
    MatchConfig {
        tick_rate: TICK_RATE,
        arena: Arena::default(),
        tuning: Tuning::default(),
        roster: [warrior(), wizard()],
        bindings: [
            KeyBindings::for_player(PlayerId::One),
            KeyBindings::for_player(PlayerId::Two),
        ],
        intro_count: INTRO_COUNT,
        intro_step_ms: INTRO_STEP_MS,
        round_over_ms: ROUND_OVER_MS,
    }
}

/// Fresh fighters for a new round, `[player_one, player_two]`.
pub fn spawn_fighters(config: &MatchConfig, now_ms: u64) -> [Fighter; 2] {
    PlayerId::BOTH.map(|player| {
        Fighter::spawn(player, &config.roster[player.index()], &config.tuning, now_ms)
    })
}
