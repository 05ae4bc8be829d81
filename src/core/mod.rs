//! Core building blocks: RNG, configuration and error types.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState};
pub use config::{
    EngineConfig, CORRECT_DELTA, DEFAULT_PROFILE_IMAGE, DEFAULT_REVEAL_INTERVAL, INCORRECT_DELTA,
    MAX_DIGIT, SEQUENCE_LEN, UNKNOWN_USER_NAME,
};
pub use error::{EngineError, SessionError, StoreError};
