//! Score policy: fixed point deltas and how they combine with a total.
//!
//! Totals are not clamped. A player on 3 points who answers wrong ends on -4.

use crate::core::config::{CORRECT_DELTA, INCORRECT_DELTA};
use crate::round::Verdict;

/// Point adjustment for a verdict.
#[must_use]
pub fn score_delta(verdict: Verdict) -> i64 {
    match verdict {
        Verdict::Correct => CORRECT_DELTA,
        Verdict::Incorrect => INCORRECT_DELTA,
    }
}

/// New total after applying `delta`. Saturates only at the `i64` bounds.
#[must_use]
pub fn apply_delta(current: i64, delta: i64) -> i64 {
    current.saturating_add(delta)
}

impl Verdict {
    /// Feedback text shown to the player.
    ///
    /// English defaults. The Croatian app UI shows "Točan odgovor, bravo samo
    /// tako nastavi!" and "Netočan odgovor, pokušaj ponovo!"; localized drivers
    /// should map `Verdict` to their own strings instead of using these.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Correct => "Correct answer, well done, keep it up!",
            Verdict::Incorrect => "Wrong answer, try again!",
        }
    }
}
