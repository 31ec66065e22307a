use serde::{Deserialize, Serialize};

use crate::config::{Arena, Tuning};
use crate::types::*;

/// The physical part of a fighter: body rectangle and vertical motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
    pub vel_y: i32,
    /// Set by a jump, cleared on landing.
    pub airborne: bool,
}

/// Net displacement for one tick, already clamped to the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    pub dx: i32,
    pub dy: i32,
    pub vel_y: i32,
    pub landed: bool,
}

/// Start a jump if grounded. A jump while airborne is ignored.
pub fn apply_jump(b: &Body, tuning: &Tuning) -> Body {
    if b.airborne {
        return *b;
    }
    Body {
        vel_y: tuning.jump_velocity,
        airborne: true,
        ..*b
    }
}

/// Add gravity to vy. Applies in every state, including death.
pub fn apply_gravity(b: &Body, tuning: &Tuning) -> Body {
    Body {
        vel_y: b.vel_y + tuning.gravity,
        ..*b
    }
}

/// Clamp the requested horizontal step to the arena walls and the vertical
/// step to the ground line. The position itself is not touched.
pub fn clamp_motion(b: &Body, dx: i32, arena: &Arena, tuning: &Tuning) -> Motion {
    let mut dx = dx;
    let mut dy = b.vel_y;
    let mut vel_y = b.vel_y;
    let mut landed = false;

    if b.rect.left() + dx < 0 {
        dx = -b.rect.left();
    }
    if b.rect.right() + dx > arena.width {
        dx = arena.width - b.rect.right();
    }

    let ground = arena.height - tuning.ground_margin;
    if b.rect.bottom() + dy > ground {
        vel_y = 0;
        landed = true;
        dy = ground - b.rect.bottom();
    }

    Motion {
        dx,
        dy,
        vel_y,
        landed,
    }
}

/// Apply a clamped motion to the body.
pub fn integrate(b: &Body, motion: &Motion) -> Body {
    Body {
        rect: Rect {
            x: b.rect.x + motion.dx,
            y: b.rect.y + motion.dy,
            ..b.rect
        },
        vel_y: motion.vel_y,
        airborne: b.airborne && !motion.landed,
    }
}

/// Face the opponent. Ties face left.
pub fn facing_towards(own: &Rect, other: &Rect) -> Facing {
    if other.center_x() > own.center_x() {
        Facing::Right
    } else {
        Facing::Left
    }
}

/// Attack volume: `reach` body widths deep, from the body's centre toward `facing`.
pub fn hitbox(own: &Rect, facing: Facing, reach: i32) -> Rect {
    let depth = reach * own.width;
    let x = match facing {
        Facing::Right => own.center_x(),
        Facing::Left => own.center_x() - depth,
    };
    Rect {
        x,
        y: own.y,
        width: depth,
        height: own.height,
    }
}
