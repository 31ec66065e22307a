use serde::{Deserialize, Serialize};

use crate::types::{Action, FrameCounts};

/// Frame sequencing for the active action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animator {
    action: Action,
    frame_index: usize,
    updated_at: u64,
}

/// What happened when the sequence ran past its last frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleEnd {
    /// Wrapped back to frame 0 after a full cycle of this action.
    Completed(Action),
    /// Held on the last frame; the owner is dead.
    Frozen,
}

impl Animator {
    pub fn new(now_ms: u64) -> Self {
        Animator {
            action: Action::Idle,
            frame_index: 0,
            updated_at: now_ms,
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Switch action. Re-entering the current action keeps its frame and clock.
    /// Returns whether the action changed.
    pub fn enter(&mut self, action: Action, now_ms: u64) -> bool {
        if action == self.action {
            return false;
        }
        log::trace!("{:?} -> {:?}", self.action, action);
        self.action = action;
        self.frame_index = 0;
        self.updated_at = now_ms;
        true
    }

    /// Advance one frame once more than `frame_ms` has passed since the last
    /// advance. At the end of the sequence the index wraps, or pins on the
    /// last frame when `alive` is false.
    pub fn advance(
        &mut self,
        now_ms: u64,
        frame_ms: u64,
        frames: &FrameCounts,
        alive: bool,
    ) -> Option<CycleEnd> {
        if now_ms.saturating_sub(self.updated_at) > frame_ms {
            self.frame_index += 1;
            self.updated_at = now_ms;
        }

        let len = frames.len(self.action);
        if self.frame_index < len {
            return None;
        }
        if !alive {
            self.frame_index = len.saturating_sub(1);
            return Some(CycleEnd::Frozen);
        }
        self.frame_index = 0;
        Some(CycleEnd::Completed(self.action))
    }
}
