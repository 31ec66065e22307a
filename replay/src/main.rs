use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use duel_core::{simulate, Cue, MatchReport, ReplayInput};

/// Counts cues instead of playing them.
#[derive(Default)]
struct CueCounter {
    sword: u32,
    magic: u32,
}

impl duel_core::AudioSink for CueCounter {
    fn play(&mut self, cue: Cue) {
        log::trace!("cue {:?}", cue);
        match cue {
            Cue::Sword => self.sword += 1,
            Cue::Magic => self.magic += 1,
        }
    }
}

fn load_input() -> Result<ReplayInput> {
    let path = std::env::args().skip(1).find(|a| !a.starts_with("--"));

    let json_str = match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read replay file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read replay from stdin")?;
            buf
        }
    };

    serde_json::from_str(&json_str).context("failed to parse ReplayInput JSON")
}

fn print_result(report: &MatchReport) {
    println!("=== Replay Result ===");
    match report.leader {
        Some(player) => println!("Leader: {}", player),
        None => println!("Leader: none (tied)"),
    }
    println!("Rounds: {}", report.rounds_completed);
    println!("Score: P1={}, P2={}", report.score[0], report.score[1]);
    println!(
        "Final health: P1={}, P2={}",
        report.final_health[0], report.final_health[1]
    );
    println!("Transcript hash: {}", hex::encode(report.transcript_hash));
}

fn main() -> Result<()> {
    env_logger::init();
    let as_json = std::env::args().any(|a| a == "--json");

    log::info!("loading replay");
    let input = load_input()?;
    log::info!(
        "replay loaded: {} ticks at {} Hz",
        input.transcript.len(),
        input.config.tick_rate
    );

    let start = Instant::now();
    let mut cues = CueCounter::default();
    let report = simulate(&input, &mut cues).context("replay config rejected")?;
    log::info!(
        "simulated in {:.1}ms, cues: {} sword, {} magic",
        start.elapsed().as_secs_f64() * 1000.0,
        cues.sword,
        cues.magic
    );

    if as_json {
        let artifacts = serde_json::json!({
            "ticks": report.ticks,
            "rounds_completed": report.rounds_completed,
            "score": report.score,
            "leader": report.leader,
            "final_health": report.final_health,
            "transcript_hash": hex::encode(report.transcript_hash),
        });
        println!("{}", serde_json::to_string_pretty(&artifacts)?);
    } else {
        print_result(&report);
    }
    Ok(())
}
