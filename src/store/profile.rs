//! User profile document.

use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_PROFILE_IMAGE;

/// Profile fields stored per user, including the point total.
///
/// Missing fields deserialize to their defaults, so a document without
/// `points` reads as 0 points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Free-text, as typed by the user.
    pub age: String,
    pub bio: String,
    pub points: i64,
    /// Public avatar URL.
    pub profile_image: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            bio: String::new(),
            points: 0,
            profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
        }
    }
}

impl Profile {
    /// Create an empty profile with the given display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_profile_image(mut self, url: impl Into<String>) -> Self {
        self.profile_image = url.into();
        self
    }
}
