//! Shared helpers for integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use sum_recall::round::{Phase, Round, RoundEngine};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Advance until the round stops revealing.
#[allow(dead_code)]
pub fn reveal_all(engine: &RoundEngine, mut round: Round) -> Round {
    while round.phase() == Phase::Revealing {
        round = engine.advance(&round).unwrap();
    }
    round
}
