pub mod animation;
pub mod config;
pub mod constants;
pub mod error;
pub mod fighter;
pub mod hash;
pub mod init;
pub mod input;
pub mod physics;
pub mod script;
pub mod step;
pub mod timer;
pub mod types;

pub use config::{Arena, FighterSpec, MatchConfig, SpawnPoint, SpriteSheet, Tuning};
pub use constants::*;
pub use error::ConfigError;
pub use fighter::Fighter;
pub use hash::*;
pub use init::*;
pub use input::{KeyBindings, KeyState};
pub use script::ScriptedInput;
pub use step::{simulate, Match, RoundOutcome, RoundPhase};
pub use timer::DelayedAction;
pub use types::*;
