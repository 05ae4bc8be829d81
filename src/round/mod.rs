//! The memory-game round: state, answer coercion and the engine driving it.

pub mod state;
pub mod answer;
pub mod engine;

pub use state::{Phase, Round, Verdict};
pub use answer::ClaimedSum;
pub use engine::{RoundEngine, Submission};
