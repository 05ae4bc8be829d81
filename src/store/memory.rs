//! In-memory implementation of the score and profile stores.

use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashMap;
use tracing::debug;

use super::leaderboard::{rank, LeaderboardEntry};
use super::{object_key, Profile, UserId, UserProfile, UserScore};
use crate::core::error::StoreError;
use crate::scoring::apply_delta;

/// Profiles and uploaded objects held in memory.
///
/// Points live inside the profile document, so `UserScore` and
/// `UserProfile` see the same total.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    profiles: FxHashMap<UserId, Profile>,
    objects: FxHashMap<String, Vec<u8>>,
    public_base: String,
}

impl MemoryStore {
    /// Create an empty store serving uploads under `public_base`.
    pub fn new(public_base: impl Into<String>) -> Self {
        Self {
            profiles: FxHashMap::default(),
            objects: FxHashMap::default(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Insert or replace a user's profile.
    pub fn insert_user(&mut self, user: UserId, profile: Profile) {
        self.profiles.insert(user, profile);
    }

    /// Bytes stored under `key`, if any.
    #[must_use]
    pub fn object(&self, key: &str) -> Option<&[u8]> {
        self.objects.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// All users ranked by points.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        rank(self.profiles.iter())
    }

    fn profile_mut(&mut self, user: &UserId) -> Result<&mut Profile, StoreError> {
        self.profiles
            .get_mut(user)
            .ok_or_else(|| StoreError::UserNotFound(user.clone()))
    }
}

impl UserScore for MemoryStore {
    fn get_points(&self, user: &UserId) -> Result<i64, StoreError> {
        self.profiles
            .get(user)
            .map(|p| p.points)
            .ok_or_else(|| StoreError::UserNotFound(user.clone()))
    }

    fn apply_delta(&mut self, user: &UserId, delta: i64) -> Result<i64, StoreError> {
        let profile = self.profile_mut(user)?;
        profile.points = apply_delta(profile.points, delta);
        debug!(user_id = %user, delta, total = profile.points, "points updated");
        Ok(profile.points)
    }
}

impl UserProfile for MemoryStore {
    fn get_profile(&self, user: &UserId) -> Result<Profile, StoreError> {
        self.profiles
            .get(user)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound(user.clone()))
    }

    fn save_profile(&mut self, user: &UserId, profile: &Profile) -> Result<(), StoreError> {
        self.profiles.insert(user.clone(), profile.clone());
        Ok(())
    }

    /// Same-millisecond uploads by one user overwrite each other.
    fn upload_object(&mut self, user: &UserId, bytes: &[u8]) -> Result<String, StoreError> {
        if bytes.is_empty() {
            return Err(StoreError::Upload("empty object".to_string()));
        }

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .as_millis();
        let key = object_key(user, millis);
        let url = format!("{}/{}", self.public_base, key);

        self.objects.insert(key, bytes.to_vec());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(user: &str, points: i64) -> (MemoryStore, UserId) {
        let mut store = MemoryStore::new("https://cdn.example/public/");
        let id = UserId::new(user);
        store.insert_user(id.clone(), Profile::named(user).with_points(points));
        (store, id)
    }

    #[test]
    fn test_get_points() {
        let (store, id) = store_with("ana", 12);
        assert_eq!(store.get_points(&id).unwrap(), 12);
    }

    #[test]
    fn test_missing_user() {
        let store = MemoryStore::new("https://cdn.example");
        let ghost = UserId::new("ghost");
        assert_eq!(
            store.get_points(&ghost),
            Err(StoreError::UserNotFound(ghost.clone()))
        );
        assert!(store.get_profile(&ghost).is_err());
    }

    #[test]
    fn test_apply_delta_read_modify_write() {
        let (mut store, id) = store_with("ana", 12);
        assert_eq!(store.apply_delta(&id, 5).unwrap(), 17);
        assert_eq!(store.apply_delta(&id, -7).unwrap(), 10);
        assert_eq!(store.get_points(&id).unwrap(), 10);
    }

    #[test]
    fn test_apply_delta_goes_negative() {
        let (mut store, id) = store_with("ana", 3);
        assert_eq!(store.apply_delta(&id, -7).unwrap(), -4);
    }

    #[test]
    fn test_profile_save_and_points_shared() {
        let (mut store, id) = store_with("ana", 0);
        let mut profile = store.get_profile(&id).unwrap();
        profile.bio = "likes sums".to_string();
        store.save_profile(&id, &profile).unwrap();

        store.apply_delta(&id, 5).unwrap();
        let stored = store.get_profile(&id).unwrap();
        assert_eq!(stored.bio, "likes sums");
        assert_eq!(stored.points, 5);
    }

    #[test]
    fn test_upload_object() {
        let (mut store, id) = store_with("ana", 0);
        let url = store.upload_object(&id, b"jpegbytes").unwrap();

        let prefix = "https://cdn.example/public/ana-";
        assert!(url.starts_with(prefix));
        assert!(url.ends_with(".jpg"));

        let key = url.trim_start_matches("https://cdn.example/public/");
        assert_eq!(store.object(key), Some(&b"jpegbytes"[..]));
        assert_eq!(store.object_count(), 1);
    }

    #[test]
    fn test_upload_key_collision_overwrites() {
        let (mut store, id) = store_with("ana", 0);
        let mut urls = Vec::new();
        for i in 0..50u8 {
            urls.push(store.upload_object(&id, &[i + 1]).unwrap());
        }

        // Colliding uploads share one object; every returned URL still resolves.
        for url in &urls {
            let key = url.trim_start_matches("https://cdn.example/public/");
            assert!(store.object(key).is_some());
        }
        urls.sort();
        urls.dedup();
        assert_eq!(store.object_count(), urls.len());
    }

    #[test]
    fn test_upload_empty_fails() {
        let (mut store, id) = store_with("ana", 0);
        assert!(matches!(
            store.upload_object(&id, &[]),
            Err(StoreError::Upload(_))
        ));
    }
}
