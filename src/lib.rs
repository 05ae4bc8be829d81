//! # sum-recall
//!
//! Round engine and scoring core for an arithmetic memory minigame.
//!
//! A round reveals ten single-digit numbers one at a time. The player then
//! enters their sum: a correct answer is worth +5 points, anything else
//! (including unparseable input) costs 7. Totals are unclamped.
//!
//! ## Design Principles
//!
//! 1. **Caller-driven**: The engine owns no timers. The UI calls `advance()`
//!    once per reveal tick, at the cadence in `EngineConfig`.
//!
//! 2. **Immutable rounds**: Transitions return a new `Round`. A rejected
//!    transition leaves the input round exactly as it was.
//!
//! 3. **Explicit users**: Score and profile stores take a `UserId` on every
//!    call. Nothing reads an ambient session.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration and policy constants, error types
//! - `round`: Round state, answer coercion, `RoundEngine`
//! - `scoring`: Point deltas and total arithmetic
//! - `store`: Score/profile collaborator traits, in-memory store, leaderboard
//! - `session`: One user's play session wired to a score store

pub mod core;
pub mod round;
pub mod scoring;
pub mod store;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, EngineConfig,
    EngineError, StoreError, SessionError,
    SEQUENCE_LEN, MAX_DIGIT, CORRECT_DELTA, INCORRECT_DELTA,
};

pub use crate::round::{Phase, Round, Verdict, ClaimedSum, RoundEngine, Submission};

pub use crate::scoring::{apply_delta, score_delta};

pub use crate::store::{
    UserId, UserScore, UserProfile, Profile, MemoryStore,
    LeaderboardEntry,
};

pub use crate::session::{GameSession, Outcome, Reveal};
