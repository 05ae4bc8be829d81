//! Engine configuration and fixed game policy.
//!
//! Only the seed and the advisory reveal cadence are configurable.
//! Sequence shape and point deltas are fixed policy and live here as
//! constants so every module agrees on them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of digits revealed in one round.
pub const SEQUENCE_LEN: usize = 10;

/// Largest digit that can appear in a sequence (smallest is 0).
pub const MAX_DIGIT: u8 = 9;

/// Points awarded for a correct sum.
pub const CORRECT_DELTA: i64 = 5;

/// Points applied for an incorrect sum (including malformed answers).
pub const INCORRECT_DELTA: i64 = -7;

/// Default time each digit stays on screen.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(800);

/// Avatar shown for profiles that never uploaded an image.
pub const DEFAULT_PROFILE_IMAGE: &str =
    "https://uvlyxwknrtgayncklxjc.supabase.co/storage/v1/object/public/MathApp/pngwing.com.png";

/// Leaderboard display name for profiles with an empty name.
pub const UNKNOWN_USER_NAME: &str = "Unknown user";

/// Round engine configuration.
///
/// ```
/// use std::time::Duration;
/// use sum_recall::core::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_seed(42)
///     .with_reveal_interval(Duration::from_millis(500));
///
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// How long the UI driver should show each digit.
    ///
    /// Advisory only: the engine never sleeps, the caller owns the timer.
    pub reveal_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with entropy seeding and the default cadence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed (reproducible rounds).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the reveal cadence.
    #[must_use]
    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.reveal_interval, Duration::from_millis(800));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_seed(9)
            .with_reveal_interval(Duration::from_millis(250));

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.reveal_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_config_serde() {
        let config = EngineConfig::new().with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
