use sha2::{Digest, Sha256};

use crate::types::PlayerInput;

/// SHA-256 of an input transcript, one byte per player per tick.
pub fn hash_transcript(transcript: &[[PlayerInput; 2]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for tick_inputs in transcript {
        for input in tick_inputs {
            hasher.update([input.buttons]);
        }
    }
    hasher.finalize().into()
}
