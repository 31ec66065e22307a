//! Generates replay JSON for the duel-replay binary.
//!
//! Usage:
//!   cargo run -p duel-core --example gen-transcript -- [idle|brawl|rush|short] [seed] > replay.json

use duel_core::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "idle".to_string());
    let seed: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let config = default_config();
    // Two minutes at the configured tick rate.
    let match_ticks = config.tick_rate as usize * 120;

    let transcript: Vec<[PlayerInput; 2]> = match mode.as_str() {
        "idle" => vec![[NULL_INPUT; 2]; match_ticks],
        "brawl" => ScriptedInput::transcript(seed, match_ticks),
        "rush" => {
            // P1 walks into range and swings; P2 stands still.
            let mut game = Match::new(config.clone(), Silent).unwrap_or_else(|e| {
                eprintln!("Invalid config: {e}");
                std::process::exit(1);
            });
            let mut transcript = Vec::with_capacity(match_ticks);
            for _ in 0..match_ticks {
                let p1 = if game.fighter(PlayerId::One).rect().x < 560 {
                    PlayerInput::new(button::RIGHT)
                } else {
                    PlayerInput::new(button::ATTACK1)
                };
                let inputs = [p1, NULL_INPUT];
                game.step(&inputs);
                transcript.push(inputs);
            }
            transcript
        }
        "short" => vec![[NULL_INPUT; 2]; 100],
        _ => {
            eprintln!(
                "Unknown mode: {}. Use 'idle', 'brawl', 'rush', or 'short'",
                mode
            );
            std::process::exit(1);
        }
    };

    let input = ReplayInput { config, transcript };

    // Verify by running the sim
    match simulate(&input, Silent) {
        Ok(report) => {
            eprintln!("=== Sim result ({} mode, seed {}) ===", mode, seed);
            eprintln!("Ticks: {}", report.ticks);
            eprintln!("Rounds: {}", report.rounds_completed);
            eprintln!("Score: P1={}, P2={}", report.score[0], report.score[1]);
            eprintln!(
                "Health: P1={}, P2={}",
                report.final_health[0], report.final_health[1]
            );
        }
        Err(e) => {
            eprintln!("Simulation rejected config: {e}");
            std::process::exit(1);
        }
    }

    match serde_json::to_string(&input) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to encode replay: {e}");
            std::process::exit(1);
        }
    }
}
