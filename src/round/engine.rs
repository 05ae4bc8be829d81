//! Round engine: generation and phase transitions.
//!
//! All transitions are synchronous and caller-driven. The engine owns no
//! timer; the UI driver calls `advance()` once per reveal tick.
//!
//! | Phase          | Valid operation | Next phase                     |
//! |----------------|-----------------|--------------------------------|
//! | NotStarted     | `generate()`    | Revealing                      |
//! | Revealing      | `advance()`     | Revealing or AwaitingAnswer    |
//! | AwaitingAnswer | `submit()`      | Completed                      |
//! | Completed      | `restart()`     | Revealing (new round)          |

use tracing::debug;

use super::answer::ClaimedSum;
use super::state::{Phase, Round, Verdict};
use crate::core::config::{EngineConfig, SEQUENCE_LEN};
use crate::core::error::{EngineError, Result};
use crate::core::rng::{GameRng, GameRngState};
use crate::scoring::score_delta;

/// Result of a successful `submit()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// The round, now `Completed`.
    pub round: Round,
    pub verdict: Verdict,
    /// Signed point adjustment the caller forwards to the score store.
    pub score_delta: i64,
}

/// Generates rounds and applies their transitions.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    rng: GameRng,
}

impl RoundEngine {
    /// Create an engine from configuration.
    ///
    /// Without a configured seed, the RNG is seeded from entropy.
    pub fn new(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self { rng }
    }

    /// Create an engine with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Resume an engine from a saved RNG checkpoint.
    pub fn from_rng_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    /// Checkpoint of the RNG; the next `generate()` is reproducible from it.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Produce a new round in `Revealing` with `cursor == 0`.
    ///
    /// Each digit is drawn uniformly from 0..=9, redrawing while it equals
    /// the previously accepted digit.
    pub fn generate(&mut self) -> Round {
        let mut sequence = [0u8; SEQUENCE_LEN];
        let mut previous = None;
        for slot in sequence.iter_mut() {
            let digit = self.rng.gen_digit(previous);
            *slot = digit;
            previous = Some(digit);
        }

        let round = Round::revealing(sequence);
        debug!(target_sum = round.target_sum, "round generated");
        round
    }

    /// Reveal the next digit.
    ///
    /// Moves to `AwaitingAnswer` once the last digit has been revealed.
    pub fn advance(&self, round: &Round) -> Result<Round> {
        if round.phase != Phase::Revealing {
            return Err(EngineError::invalid_state("advance", round.phase));
        }

        let mut next = round.clone();
        next.cursor += 1;
        if next.cursor == next.sequence.len() {
            next.phase = Phase::AwaitingAnswer;
        }
        Ok(next)
    }

    /// Evaluate the claimed sum and complete the round.
    ///
    /// A `ClaimedSum::Malformed` claim is scored as incorrect.
    pub fn submit(
        &self,
        round: &Round,
        claim: impl Into<ClaimedSum>,
    ) -> Result<Submission> {
        if round.phase != Phase::AwaitingAnswer {
            return Err(EngineError::invalid_state("submit", round.phase));
        }

        let verdict = if claim.into().matches(round.target_sum) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };

        let mut completed = round.clone();
        completed.phase = Phase::Completed;
        completed.verdict = Some(verdict);

        Ok(Submission {
            round: completed,
            verdict,
            score_delta: score_delta(verdict),
        })
    }

    /// Discard the current round and generate a new one.
    pub fn restart(&mut self) -> Round {
        self.generate()
    }
}
