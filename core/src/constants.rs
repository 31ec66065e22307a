use crate::types::FrameCounts;

// Distances are in arena pixels, velocities in pixels per tick at 60 Hz.

// Physics
pub const RUN_SPEED: i32 = 10;
pub const GRAVITY: i32 = 2;
pub const JUMP_VELOCITY: i32 = -30;
/// Distance from the bottom of the arena to the ground line.
pub const GROUND_MARGIN: i32 = 110;

// Body hitbox
pub const BODY_WIDTH: i32 = 80;
pub const BODY_HEIGHT: i32 = 180;

// Health / combat
pub const MAX_HEALTH: i32 = 100;
pub const ATTACK_DAMAGE: i32 = 10;
/// Hitbox depth in body widths, measured from the attacker's centre.
pub const HITBOX_REACH: i32 = 2;
/// Ticks an attack or hit-stun locks out new attacks once its animation ends.
pub const ATTACK_RECOVERY_TICKS: u32 = 20;

// Impact frames: delay between declaring an attack and resolving its hitbox.
// Indexed [player][attack].
pub const ATTACK_IMPACT_MS: [[u64; 2]; 2] = [[500, 350], [400, 500]];

// Animation
pub const ANIMATION_FRAME_MS: u64 = 100;

// Tick rate
pub const TICK_RATE: u32 = 60;

// Arena
pub const ARENA_WIDTH: i32 = 1000;
pub const ARENA_HEIGHT: i32 = 600;

// Round lifecycle
pub const INTRO_COUNT: u32 = 3;
pub const INTRO_STEP_MS: u64 = 1000;
pub const ROUND_OVER_MS: u64 = 2000;

// Roster
pub const WARRIOR_SIZE: i32 = 162;
pub const WARRIOR_SCALE: i32 = 4;
pub const WARRIOR_OFFSET: [i32; 2] = [72, 56];
pub const WARRIOR_FRAMES: FrameCounts = FrameCounts {
    idle: 10,
    run: 8,
    jump: 1,
    attack1: 7,
    attack2: 7,
    hit: 3,
    death: 7,
};

pub const WIZARD_SIZE: i32 = 250;
pub const WIZARD_SCALE: i32 = 3;
pub const WIZARD_OFFSET: [i32; 2] = [112, 107];
pub const WIZARD_FRAMES: FrameCounts = FrameCounts {
    idle: 8,
    run: 8,
    jump: 1,
    attack1: 8,
    attack2: 8,
    hit: 3,
    death: 7,
};

pub const SPAWN_Y: i32 = 310;
pub const PLAYER_ONE_SPAWN_X: i32 = 200;
pub const PLAYER_TWO_SPAWN_X: i32 = 700;
