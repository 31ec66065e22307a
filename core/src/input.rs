use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{button, PlayerId, PlayerInput};

/// Raw keyboard state as polled by the front-end, one snapshot per tick.
pub trait KeyState {
    fn is_pressed(&self, key: &str) -> bool;
}

impl KeyState for HashSet<String> {
    fn is_pressed(&self, key: &str) -> bool {
        self.contains(key)
    }
}

impl KeyState for [&str] {
    fn is_pressed(&self, key: &str) -> bool {
        self.contains(&key)
    }
}

/// Physical key names for one player's logical buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub jump: String,
    pub attack1: String,
    pub attack2: String,
}

impl KeyBindings {
    pub fn for_player(player: PlayerId) -> Self {
        let keys = match player {
            PlayerId::One => ["a", "d", "w", "r", "t"],
            PlayerId::Two => ["left", "right", "up", "kp1", "kp2"],
        };
        KeyBindings {
            left: keys[0].into(),
            right: keys[1].into(),
            jump: keys[2].into(),
            attack1: keys[3].into(),
            attack2: keys[4].into(),
        }
    }

    /// Level-triggered: a held key reports pressed on every tick.
    pub fn sample<K: KeyState + ?Sized>(&self, keys: &K) -> PlayerInput {
        let mut buttons = 0;
        for (key, mask) in [
            (&self.left, button::LEFT),
            (&self.right, button::RIGHT),
            (&self.jump, button::JUMP),
            (&self.attack1, button::ATTACK1),
            (&self.attack2, button::ATTACK2),
        ] {
            if keys.is_pressed(key) {
                buttons |= mask;
            }
        }
        PlayerInput { buttons }
    }
}
