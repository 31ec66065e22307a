use serde::{Deserialize, Serialize};

// ── Primitives ──────────────────────────────────────────────

/// Axis-aligned rectangle, top-left anchored, integer pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

pub type Tick = u64;

// ── Identity ────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Zero-based slot, for indexing per-player arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "P{}", self.number())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Right,
    Left,
}

impl Facing {
    /// Whether the sprite must be mirrored; sheets are drawn facing right.
    pub fn is_flipped(self) -> bool {
        self == Facing::Left
    }
}

// ── Input ───────────────────────────────────────────────────

/// Button bitmask constants.
pub mod button {
    pub const LEFT: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const JUMP: u8 = 4;
    pub const ATTACK1: u8 = 8;
    pub const ATTACK2: u8 = 16;
}

/// Instantaneous pressed state of one player's logical buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub buttons: u8,
}

impl PlayerInput {
    pub const fn new(buttons: u8) -> Self {
        PlayerInput { buttons }
    }

    pub fn pressed(&self, mask: u8) -> bool {
        self.buttons & mask != 0
    }
}

pub const NULL_INPUT: PlayerInput = PlayerInput { buttons: 0 };

// ── Actions ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    Attack1,
    Attack2,
}

impl AttackKind {
    pub fn index(self) -> usize {
        match self {
            AttackKind::Attack1 => 0,
            AttackKind::Attack2 => 1,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(AttackKind::Attack1),
            2 => Some(AttackKind::Attack2),
            _ => None,
        }
    }

    pub fn action(self) -> Action {
        match self {
            AttackKind::Attack1 => Action::Attack1,
            AttackKind::Attack2 => Action::Attack2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Idle,
    Run,
    Jump,
    Attack1,
    Attack2,
    Hit,
    Death,
}

impl Action {
    pub fn is_attack(self) -> bool {
        matches!(self, Action::Attack1 | Action::Attack2)
    }

    /// Row of this action's strip in a fighter sprite sheet.
    pub fn sheet_row(self) -> i32 {
        match self {
            Action::Idle => 0,
            Action::Run => 1,
            Action::Jump => 2,
            Action::Attack1 => 3,
            Action::Attack2 => 4,
            Action::Hit => 5,
            Action::Death => 6,
        }
    }
}

/// Number of animation frames for each action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCounts {
    pub idle: usize,
    pub run: usize,
    pub jump: usize,
    pub attack1: usize,
    pub attack2: usize,
    pub hit: usize,
    pub death: usize,
}

impl FrameCounts {
    pub fn len(&self, action: Action) -> usize {
        match action {
            Action::Idle => self.idle,
            Action::Run => self.run,
            Action::Jump => self.jump,
            Action::Attack1 => self.attack1,
            Action::Attack2 => self.attack2,
            Action::Hit => self.hit,
            Action::Death => self.death,
        }
    }
}

// ── Audio / rendering seams ─────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Sword,
    Magic,
}

/// Receives one cue per hitbox resolution. Playback is fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Sink that drops every cue, for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}

impl<A: AudioSink + ?Sized> AudioSink for &mut A {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }
}

/// Everything a renderer needs to blit one fighter for the current tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub player: PlayerId,
    pub action: Action,
    pub frame_index: usize,
    /// Source cell in the sheet, in unscaled pixels.
    pub source: Rect,
    /// Top-left draw position in arena pixels.
    pub draw_x: i32,
    pub draw_y: i32,
    pub scale: i32,
    pub flipped: bool,
}

pub trait RenderSink {
    fn draw_fighter(&mut self, frame: &SpriteFrame);
}

// ── Interaction ─────────────────────────────────────────────

/// Read-only view of a fighter, taken at the start of a tick so both
/// fighters observe the same state of each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterView {
    pub player: PlayerId,
    pub rect: Rect,
    pub health: i32,
    pub alive: bool,
}

/// A hitbox that connected. Applied to `target` at the step boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strike {
    pub attacker: PlayerId,
    pub target: PlayerId,
    pub kind: AttackKind,
    pub damage: i32,
    pub hitbox: Rect,
}

// ── Replay I/O ──────────────────────────────────────────────

/// Input to a headless replay run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayInput {
    pub config: crate::config::MatchConfig,
    /// One entry per tick, `[player_one, player_two]`.
    pub transcript: Vec<[PlayerInput; 2]>,
}

/// Outcome of a replay run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub ticks: Tick,
    pub rounds_completed: u32,
    /// Rounds won per player.
    pub score: [u32; 2],
    /// Player with more round wins, `None` on a tie.
    pub leader: Option<PlayerId>,
    pub final_health: [i32; 2],
    /// SHA-256 of the input transcript.
    pub transcript_hash: [u8; 32],
}
