//! One player's play session: a round engine bound to a user and a score store.
//!
//! `GameSession` is the caller-side glue around `RoundEngine`. It holds the
//! live round, turns raw text into a `ClaimedSum`, and forwards the score
//! delta to the `UserScore` collaborator for the session's user.
//!
//! ```
//! use sum_recall::core::EngineConfig;
//! use sum_recall::round::{Phase, Verdict};
//! use sum_recall::session::GameSession;
//! use sum_recall::store::{MemoryStore, Profile, UserId};
//!
//! let user = UserId::new("u1");
//! let mut store = MemoryStore::new("https://cdn.example");
//! store.insert_user(user.clone(), Profile::named("Ana").with_points(12));
//!
//! let mut session = GameSession::new(user, store, &EngineConfig::new().with_seed(42));
//! let target = session.start().target_sum();
//!
//! while session.phase() == Phase::Revealing {
//!     session.tick().unwrap();
//! }
//!
//! let outcome = session.submit_raw(&target.to_string()).unwrap();
//! assert_eq!(outcome.verdict, Verdict::Correct);
//! assert_eq!(outcome.total, 17);
//! ```

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result, SessionError, StoreError};
use crate::round::{ClaimedSum, Phase, Round, RoundEngine, Verdict};
use crate::store::{UserId, UserScore};

/// What one reveal tick exposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Digit to display now.
    pub digit: u8,
    /// Digits revealed so far, including this one.
    pub cursor: usize,
    /// True once the last digit is shown and an answer is expected.
    pub awaiting_answer: bool,
}

/// Result of a submitted answer, after the score store was updated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub score_delta: i64,
    /// The user's total after applying `score_delta`.
    pub total: i64,
    pub message: &'static str,
}

/// A play session for a single user.
pub struct GameSession<S> {
    user: UserId,
    store: S,
    engine: RoundEngine,
    round: Option<Round>,
    reveal_interval: Duration,
}

impl<S: UserScore> GameSession<S> {
    /// Create a session. No round exists until `start()`.
    pub fn new(user: UserId, store: S, config: &EngineConfig) -> Self {
        Self {
            user,
            store,
            engine: RoundEngine::new(config),
            round: None,
            reveal_interval: config.reveal_interval,
        }
    }

    #[must_use]
    pub fn user(&self) -> &UserId {
        &self.user
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session and hand back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// How often the driver should call `tick()`.
    #[must_use]
    pub fn reveal_interval(&self) -> Duration {
        self.reveal_interval
    }

    /// The live round, if one was started.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Phase of the live round, `NotStarted` before the first `start()`.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::NotStarted, Round::phase)
    }

    /// The user's current total from the score store.
    pub fn points(&self) -> Result<i64, StoreError> {
        self.store.get_points(&self.user).map_err(|e| {
            warn!(user_id = %self.user, error = %e, "failed to read points");
            e
        })
    }

    /// Generate the first round. Same as `restart()` if one already exists.
    pub fn start(&mut self) -> &Round {
        self.restart()
    }

    /// Discard the live round, if any, and generate a new one.
    pub fn restart(&mut self) -> &Round {
        let round = self.engine.restart();
        debug!(user_id = %self.user, "round started");
        self.round.insert(round)
    }

    /// Reveal the next digit.
    pub fn tick(&mut self) -> Result<Reveal> {
        let current = self
            .round
            .as_ref()
            .ok_or_else(|| EngineError::invalid_state("advance", Phase::NotStarted))?;

        let next = self.engine.advance(current)?;
        let reveal = Reveal {
            digit: next.current_digit().unwrap_or_default(),
            cursor: next.cursor(),
            awaiting_answer: next.phase() == Phase::AwaitingAnswer,
        };
        self.round = Some(next);
        Ok(reveal)
    }

    /// Coerce raw text input and submit it.
    ///
    /// Unparseable input is scored as a wrong answer, not rejected.
    pub fn submit_raw(&mut self, input: &str) -> Result<Outcome, SessionError> {
        let claim = ClaimedSum::parse(input);
        if claim == ClaimedSum::Malformed {
            debug!(user_id = %self.user, "malformed answer scored as incorrect");
        }
        self.submit(claim)
    }

    /// Evaluate the claim, complete the round and update the user's points.
    ///
    /// The round is `Completed` once the engine accepts the claim, even if the
    /// score store then fails; the store error is returned to the caller.
    pub fn submit(&mut self, claim: impl Into<ClaimedSum>) -> Result<Outcome, SessionError> {
        let current = self
            .round
            .as_ref()
            .ok_or_else(|| EngineError::invalid_state("submit", Phase::NotStarted))?;

        let submission = self.engine.submit(current, claim)?;
        let verdict = submission.verdict;
        let delta = submission.score_delta;
        self.round = Some(submission.round);

        let total = self.store.apply_delta(&self.user, delta).map_err(|e| {
            warn!(user_id = %self.user, delta, error = %e, "failed to apply score delta");
            e
        })?;

        info!(
            user_id = %self.user,
            correct = verdict.is_correct(),
            delta,
            total,
            "round completed"
        );

        Ok(Outcome {
            verdict,
            score_delta: delta,
            total,
            message: verdict.message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Profile};

    fn session(points: i64) -> GameSession<MemoryStore> {
        let user = UserId::new("u1");
        let mut store = MemoryStore::new("https://cdn.example");
        store.insert_user(user.clone(), Profile::named("Ana").with_points(points));
        GameSession::new(user, store, &EngineConfig::new().with_seed(7))
    }

    #[test]
    fn test_not_started() {
        let mut s = session(0);
        assert_eq!(s.phase(), Phase::NotStarted);
        assert!(s.round().is_none());

        let err = s.tick().unwrap_err();
        assert_eq!(err, EngineError::invalid_state("advance", Phase::NotStarted));

        let err = s.submit_raw("10").unwrap_err();
        assert!(matches!(
            err,
            SessionError::Engine(EngineError::InvalidState { phase: Phase::NotStarted, .. })
        ));
        assert_eq!(s.points().unwrap(), 0);
    }

    #[test]
    fn test_tick_reveals_sequence() {
        let mut s = session(0);
        let sequence = *s.start().sequence();

        for (i, &digit) in sequence.iter().enumerate() {
            let reveal = s.tick().unwrap();
            assert_eq!(reveal.digit, digit);
            assert_eq!(reveal.cursor, i + 1);
            assert_eq!(reveal.awaiting_answer, i + 1 == sequence.len());
        }

        assert_eq!(s.phase(), Phase::AwaitingAnswer);
        assert!(s.tick().is_err());
    }

    #[test]
    fn test_submit_before_reveal_finishes_leaves_points() {
        let mut s = session(12);
        let target = s.start().target_sum();
        s.tick().unwrap();

        let err = s.submit(target).unwrap_err();
        assert!(matches!(err, SessionError::Engine(_)));
        assert_eq!(s.phase(), Phase::Revealing);
        assert_eq!(s.round().unwrap().cursor(), 1);
        assert_eq!(s.points().unwrap(), 12);
    }

    #[test]
    fn test_malformed_answer_costs_points() {
        let mut s = session(12);
        s.start();
        while s.phase() == Phase::Revealing {
            s.tick().unwrap();
        }

        let outcome = s.submit_raw("twelve").unwrap();
        assert_eq!(outcome.verdict, Verdict::Incorrect);
        assert_eq!(outcome.total, 5);
        assert_eq!(outcome.message, Verdict::Incorrect.message());
    }

    #[test]
    fn test_missing_user_store_error() {
        let store = MemoryStore::new("https://cdn.example");
        let mut s = GameSession::new(UserId::new("ghost"), store, &EngineConfig::new().with_seed(1));
        let target = s.start().target_sum();
        while s.phase() == Phase::Revealing {
            s.tick().unwrap();
        }

        let err = s.submit(target).unwrap_err();
        assert_eq!(
            err,
            SessionError::Store(StoreError::UserNotFound(UserId::new("ghost")))
        );
        assert_eq!(s.phase(), Phase::Completed);
    }

    #[test]
    fn test_reveal_interval_from_config() {
        let s = session(0);
        assert_eq!(s.reveal_interval(), Duration::from_millis(800));
        assert_eq!(s.user(), &UserId::new("u1"));
    }
}
