use serde::{Deserialize, Serialize};

/// Single-shot countdown polled once per tick.
///
/// The bound action is the payload `T`: `tick` hands it back exactly once,
/// on the first poll at or after `duration_ms` since the last `activate`.
/// Activating an armed timer restarts the countdown; there is no cancel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedAction<T> {
    duration_ms: u64,
    armed_at: Option<u64>,
    action: T,
}

impl<T: Copy> DelayedAction<T> {
    pub fn new(duration_ms: u64, action: T) -> Self {
        DelayedAction {
            duration_ms,
            armed_at: None,
            action,
        }
    }

    pub fn activate(&mut self, now_ms: u64) {
        self.armed_at = Some(now_ms);
    }

    pub fn tick(&mut self, now_ms: u64) -> Option<T> {
        let armed_at = self.armed_at?;
        if now_ms.saturating_sub(armed_at) >= self.duration_ms {
            self.armed_at = None;
            return Some(self.action);
        }
        None
    }

    pub fn is_active(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn armed_at(&self) -> Option<u64> {
        self.armed_at
    }
}
