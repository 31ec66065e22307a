use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::error::ConfigError;
use crate::fighter::Fighter;
use crate::hash::hash_transcript;
use crate::init::spawn_fighters;
use crate::types::*;

/// Where the current round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Countdown before fighters may move. `count` reaches zero, then Fighting.
    /// The step clock restarts at every round start, so each round gets the
    /// full countdown.
    Intro { count: u32, last_step_ms: u64 },
    Fighting,
    /// A fighter went down. Fighters keep simulating with controls frozen
    /// until the next round starts.
    Over { winner: PlayerId, since_ms: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    pub winner: PlayerId,
    pub tick: Tick,
    pub score: [u32; 2],
}

/// Drives two fighters through rounds on a fixed tick cadence.
///
/// Sub-step order per tick:
///  1. Intro countdown, or `move` both fighters against start-of-tick views
///  2. Apply strikes that connected
///  3. `update` both fighters
///  4. Round-end check (player one's defeat is checked first) and scoring
///  5. Round restart once the round-over delay has passed
///  6. Advance tick
pub struct Match<A> {
    config: MatchConfig,
    fighters: [Fighter; 2],
    phase: RoundPhase,
    tick: Tick,
    round: u32,
    score: [u32; 2],
    audio: A,
}

impl<A: AudioSink> Match<A> {
    pub fn new(config: MatchConfig, audio: A) -> Result<Self, ConfigError> {
        config.validate()?;
        let fighters = spawn_fighters(&config, 0);
        let phase = intro_phase(&config, 0);
        log::info!("round 1 starts");
        Ok(Match {
            config,
            fighters,
            phase,
            tick: 0,
            round: 1,
            score: [0; 2],
            audio,
        })
    }

    /// Advance one tick. Returns the outcome on the tick a round is decided.
    pub fn step(&mut self, inputs: &[PlayerInput; 2]) -> Option<RoundOutcome> {
        let now = self.now_ms();

        match self.phase {
            RoundPhase::Intro {
                count,
                last_step_ms,
            } => {
                if now - last_step_ms > self.config.intro_step_ms {
                    self.phase = match count - 1 {
                        0 => RoundPhase::Fighting,
                        count => RoundPhase::Intro {
                            count,
                            last_step_ms: now,
                        },
                    };
                }
            }
            RoundPhase::Fighting | RoundPhase::Over { .. } => {
                let round_over = matches!(self.phase, RoundPhase::Over { .. });
                self.move_fighters(inputs, round_over, now);
            }
        }

        for fighter in &mut self.fighters {
            fighter.update(now);
        }

        let mut outcome = None;
        match self.phase {
            RoundPhase::Over { since_ms, .. } => {
                if now - since_ms > self.config.round_over_ms {
                    self.start_round(now);
                }
            }
            _ => {
                if let Some(winner) = self.decide_round() {
                    self.score[winner.index()] += 1;
                    self.phase = RoundPhase::Over {
                        winner,
                        since_ms: now,
                    };
                    log::info!(
                        "round {} to {} (score {}-{})",
                        self.round,
                        winner,
                        self.score[0],
                        self.score[1]
                    );
                    outcome = Some(RoundOutcome {
                        round: self.round,
                        winner,
                        tick: self.tick,
                        score: self.score,
                    });
                }
            }
        }

        self.tick += 1;
        outcome
    }

    fn move_fighters(&mut self, inputs: &[PlayerInput; 2], round_over: bool, now: u64) {
        let arena = self.config.arena;
        let views = self.fighters.each_ref().map(Fighter::view);

        let mut strikes = Vec::new();
        for player in PlayerId::BOTH {
            let opponent = views[player.opponent().index()];
            strikes.extend(self.fighters[player.index()].move_fighter(
                &arena,
                &opponent,
                inputs[player.index()],
                round_over,
                now,
                &mut self.audio,
            ));
        }
        for strike in &strikes {
            self.fighters[strike.target.index()].receive_strike(strike);
        }
    }

    fn decide_round(&self) -> Option<PlayerId> {
        let [one, two] = &self.fighters;
        if !one.is_alive() {
            Some(PlayerId::Two)
        } else if !two.is_alive() {
            Some(PlayerId::One)
        } else {
            None
        }
    }

    fn start_round(&mut self, now: u64) {
        self.round += 1;
        self.fighters = spawn_fighters(&self.config, now);
        self.phase = intro_phase(&self.config, now);
        log::info!("round {} starts", self.round);
    }

    pub fn render(&self, sink: &mut dyn RenderSink) {
        for fighter in &self.fighters {
            sink.draw_fighter(&fighter.sprite_frame());
        }
    }

    pub fn report(&self, transcript: &[[PlayerInput; 2]]) -> MatchReport {
        let [one, two] = self.score;
        let leader = match one.cmp(&two) {
            core::cmp::Ordering::Greater => Some(PlayerId::One),
            core::cmp::Ordering::Less => Some(PlayerId::Two),
            core::cmp::Ordering::Equal => None,
        };
        let rounds_completed = one + two;
        MatchReport {
            ticks: self.tick,
            rounds_completed,
            score: self.score,
            leader,
            final_health: self.fighters.each_ref().map(Fighter::health),
            transcript_hash: hash_transcript(transcript),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.config.tick_to_ms(self.tick)
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Remaining intro count, if the round has not started yet.
    pub fn intro_count(&self) -> Option<u32> {
        match self.phase {
            RoundPhase::Intro { count, .. } => Some(count),
            _ => None,
        }
    }

    pub fn score(&self) -> [u32; 2] {
        self.score
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn fighter(&self, player: PlayerId) -> &Fighter {
        &self.fighters[player.index()]
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn into_audio(self) -> A {
        self.audio
    }
}

fn intro_phase(config: &MatchConfig, now: u64) -> RoundPhase {
    if config.intro_count == 0 {
        RoundPhase::Fighting
    } else {
        RoundPhase::Intro {
            count: config.intro_count,
            last_step_ms: now,
        }
    }
}

/// Run a whole transcript headlessly.
pub fn simulate<A: AudioSink>(input: &ReplayInput, audio: A) -> Result<MatchReport, ConfigError> {
    let mut game = Match::new(input.config.clone(), audio)?;
    for tick_inputs in &input.transcript {
        game.step(tick_inputs);
    }
    Ok(game.report(&input.transcript))
}
