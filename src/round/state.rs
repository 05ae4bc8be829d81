//! Round state: the digit sequence, reveal progress, phase and verdict.
//!
//! ## Phase
//!
//! Monotonic lifecycle of a round:
//! `NotStarted → Revealing → AwaitingAnswer → Completed`.
//! A restart never rewinds a round; it replaces it with a new one.
//!
//! ## Round
//!
//! Immutable value. `RoundEngine` transitions return a new `Round` and leave
//! the input untouched, so a failed transition can never leave a half-updated
//! round behind.

use serde::{Deserialize, Serialize};

use crate::core::config::{MAX_DIGIT, SEQUENCE_LEN};
use crate::core::error::EngineError;

/// Lifecycle phase of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No round has been generated yet.
    #[default]
    NotStarted,
    /// Digits are being revealed one per tick.
    Revealing,
    /// All digits shown; waiting for the claimed sum.
    AwaitingAnswer,
    /// Answer evaluated; only a restart is valid.
    Completed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Revealing => "revealing",
            Phase::AwaitingAnswer => "awaiting answer",
            Phase::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Outcome of comparing a claimed sum with the true sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    /// Check if the verdict is `Correct`.
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

/// One play-through of the memory game.
///
/// Deserialization goes through `RoundRepr` and rejects rounds whose sum,
/// cursor or phase disagree with the sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RoundRepr")]
pub struct Round {
    pub(crate) sequence: [u8; SEQUENCE_LEN],
    pub(crate) target_sum: i64,
    pub(crate) cursor: usize,
    pub(crate) phase: Phase,
    pub(crate) verdict: Option<Verdict>,
}

impl Round {
    /// Build a fresh round in `Revealing` from already validated digits.
    pub(crate) fn revealing(sequence: [u8; SEQUENCE_LEN]) -> Self {
        let target_sum = sequence.iter().map(|&d| i64::from(d)).sum();
        Self {
            sequence,
            target_sum,
            cursor: 0,
            phase: Phase::Revealing,
            verdict: None,
        }
    }

    /// Build a round from explicit digits, e.g. to replay a recorded round.
    ///
    /// Fails if a digit exceeds `MAX_DIGIT` or two neighbours are equal.
    ///
    /// ```
    /// use sum_recall::round::{Phase, Round};
    ///
    /// let round = Round::from_digits([3, 7, 2, 7, 1, 9, 0, 4, 6, 5]).unwrap();
    /// assert_eq!(round.target_sum(), 44);
    /// assert_eq!(round.phase(), Phase::Revealing);
    ///
    /// assert!(Round::from_digits([1, 1, 2, 3, 4, 5, 6, 7, 8, 9]).is_err());
    /// ```
    pub fn from_digits(sequence: [u8; SEQUENCE_LEN]) -> Result<Self, EngineError> {
        if let Some(pos) = sequence.iter().position(|&d| d > MAX_DIGIT) {
            return Err(EngineError::InvalidSequence {
                reason: format!("digit {} at index {} exceeds {}", sequence[pos], pos, MAX_DIGIT),
            });
        }
        if let Some(pos) = sequence.windows(2).position(|w| w[0] == w[1]) {
            return Err(EngineError::InvalidSequence {
                reason: format!("digit {} repeats at index {}", sequence[pos], pos + 1),
            });
        }
        Ok(Self::revealing(sequence))
    }

    /// The full digit sequence.
    #[must_use]
    pub fn sequence(&self) -> &[u8; SEQUENCE_LEN] {
        &self.sequence
    }

    /// Sum of the sequence, fixed at generation time.
    #[must_use]
    pub fn target_sum(&self) -> i64 {
        self.target_sum
    }

    /// Number of digits revealed so far.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Verdict, set only once the round is `Completed`.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Digit exposed by the most recent `advance()`, i.e. `sequence[cursor - 1]`.
    #[must_use]
    pub fn current_digit(&self) -> Option<u8> {
        self.cursor.checked_sub(1).map(|i| self.sequence[i])
    }

    /// Digits revealed so far, in order.
    #[must_use]
    pub fn revealed(&self) -> &[u8] {
        &self.sequence[..self.cursor]
    }

    /// Digits still to be revealed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        SEQUENCE_LEN - self.cursor
    }
}

/// Unchecked wire form of `Round`.
#[derive(Deserialize)]
struct RoundRepr {
    sequence: [u8; SEQUENCE_LEN],
    target_sum: i64,
    cursor: usize,
    phase: Phase,
    verdict: Option<Verdict>,
}

impl TryFrom<RoundRepr> for Round {
    type Error = EngineError;

    fn try_from(repr: RoundRepr) -> Result<Self, Self::Error> {
        let fresh = Round::from_digits(repr.sequence)?;
        let invalid = |reason: String| -> Result<Self, EngineError> {
            Err(EngineError::InvalidSequence { reason })
        };

        if repr.target_sum != fresh.target_sum {
            return invalid(format!(
                "target sum {} does not match digit sum {}",
                repr.target_sum, fresh.target_sum
            ));
        }
        if repr.cursor > SEQUENCE_LEN {
            return invalid(format!("cursor {} exceeds {}", repr.cursor, SEQUENCE_LEN));
        }

        let consistent = match repr.phase {
            Phase::NotStarted => false,
            Phase::Revealing => repr.cursor < SEQUENCE_LEN && repr.verdict.is_none(),
            Phase::AwaitingAnswer => repr.cursor == SEQUENCE_LEN && repr.verdict.is_none(),
            Phase::Completed => repr.cursor == SEQUENCE_LEN && repr.verdict.is_some(),
        };
        if !consistent {
            return invalid(format!(
                "phase {} does not fit cursor {} and verdict {:?}",
                repr.phase, repr.cursor, repr.verdict
            ));
        }

        Ok(Self {
            cursor: repr.cursor,
            phase: repr.phase,
            verdict: repr.verdict,
            ..fresh
        })
    }
}
