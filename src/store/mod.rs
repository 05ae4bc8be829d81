//! External collaborators: the score store and the profile store.
//!
//! The engine never talks to these directly. `GameSession` forwards score
//! deltas to a `UserScore`; profile screens use a `UserProfile`. Every call
//! takes an explicit `UserId` rather than reading an ambient "current user".
//!
//! `MemoryStore` implements both traits in memory and is what the tests
//! run against.

pub mod profile;
pub mod memory;
pub mod leaderboard;

use serde::{Deserialize, Serialize};

use crate::core::error::StoreError;

pub use profile::Profile;
pub use memory::MemoryStore;
pub use leaderboard::{rank, LeaderboardEntry};

/// Opaque user identifier issued by the authentication provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Create a new user ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Point totals per user.
///
/// `apply_delta` is a read-modify-write of the stored total. No atomicity is
/// required beyond eventual consistency of what the player sees.
pub trait UserScore {
    /// Current total. A user with no stored points reads as 0.
    fn get_points(&self, user: &UserId) -> Result<i64, StoreError>;

    /// Add `delta` to the stored total and return the new total.
    ///
    /// Totals are not clamped and may go negative.
    fn apply_delta(&mut self, user: &UserId, delta: i64) -> Result<i64, StoreError>;
}

/// Profile documents and avatar uploads.
pub trait UserProfile {
    fn get_profile(&self, user: &UserId) -> Result<Profile, StoreError>;

    /// Overwrite the stored profile with `profile`.
    fn save_profile(&mut self, user: &UserId, profile: &Profile) -> Result<(), StoreError>;

    /// Store an image and return its public URL.
    ///
    /// Keys come from `object_key`, so two uploads by the same user within
    /// one millisecond share a key: the second replaces the first and both
    /// calls return the same URL.
    fn upload_object(&mut self, user: &UserId, bytes: &[u8]) -> Result<String, StoreError>;
}

/// Object key for an uploaded avatar: `{user}-{unix_millis}.jpg`.
#[must_use]
pub fn object_key(user: &UserId, unix_millis: u128) -> String {
    format!("{}-{}.jpg", user, unix_millis)
}
