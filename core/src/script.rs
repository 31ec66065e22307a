use crate::types::{button, PlayerInput};

/// Mulberry32, a small deterministic 32-bit generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Mulberry32 { state: seed }
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let mut t = self.state.wrapping_add(0x6d2b79f5);
        self.state = t;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        (t ^ (t >> 14)) as f64 / 4294967296.0
    }

    /// Integer in `[min, max]` inclusive.
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        let span = (max - min + 1) as f64;
        min + (self.next_f64() * span).floor() as u32
    }
}

/// Seeded button masher: each player holds a random button combination for a
/// random number of ticks, then picks another. Used to generate replay
/// transcripts and soak-test the simulation.
#[derive(Clone, Debug)]
pub struct ScriptedInput {
    rng: Mulberry32,
    held: [PlayerInput; 2],
    remaining: [u32; 2],
}

const MIN_HOLD_TICKS: u32 = 3;
const MAX_HOLD_TICKS: u32 = 24;

impl ScriptedInput {
    pub fn new(seed: u32) -> Self {
        ScriptedInput {
            rng: Mulberry32::new(seed),
            held: [PlayerInput::default(); 2],
            remaining: [0; 2],
        }
    }

    pub fn next_tick(&mut self) -> [PlayerInput; 2] {
        for slot in 0..2 {
            if self.remaining[slot] == 0 {
                self.held[slot] = self.pick();
                self.remaining[slot] = self.rng.range(MIN_HOLD_TICKS, MAX_HOLD_TICKS);
            }
            self.remaining[slot] -= 1;
        }
        self.held
    }

    pub fn transcript(seed: u32, ticks: usize) -> Vec<[PlayerInput; 2]> {
        let mut script = ScriptedInput::new(seed);
        (0..ticks).map(|_| script.next_tick()).collect()
    }

    fn pick(&mut self) -> PlayerInput {
        let mut buttons = match self.rng.range(0, 2) {
            0 => 0,
            1 => button::LEFT,
            _ => button::RIGHT,
        };
        // Jumps and attacks are rarer than walking.
        if self.rng.next_f64() < 0.15 {
            buttons |= button::JUMP;
        }
        match self.rng.range(0, 5) {
            0 => buttons |= button::ATTACK1,
            1 => buttons |= button::ATTACK2,
            _ => {}
        }
        PlayerInput { buttons }
    }
}
