//! User profile service facade.
//!
//! Avatar/banner uploads go through the browser-facing multipart endpoint and
//! are out of this client's scope; the facade covers the JSON surface.

use std::sync::Arc;

use serde::Deserialize;

use crate::http::{ApiClient, ApiError};

const BASE: &str = "/profiles";

/// Profile record as the profile service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub about_section: Option<String>,
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    #[serde(default)]
    pub favorite_games: Vec<String>,
}

/// Search hit from the profile service.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSummary {
    #[serde(alias = "_id", alias = "user_id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Facade over the user profile microservice.
pub struct ProfileService {
    api: Arc<ApiClient>,
}

impl ProfileService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.api.get(&format!("{BASE}/{user_id}")).await
    }

    pub async fn search(&self, username: &str) -> Result<Vec<ProfileSummary>, ApiError> {
        let path = format!("{BASE}/search?username={}", urlencoding::encode(username));
        self.api.get(&path).await
    }

    pub async fn update_username(
        &self,
        user_id: &str,
        new_username: &str,
    ) -> Result<UserProfile, ApiError> {
        let path = format!(
            "{BASE}/update-username/{user_id}?new_username={}",
            urlencoding::encode(new_username)
        );
        self.api.put(&path, None).await
    }

    pub async fn update_email(
        &self,
        user_id: &str,
        new_email: &str,
    ) -> Result<UserProfile, ApiError> {
        let path = format!(
            "{BASE}/update-email/{user_id}?new_email={}",
            urlencoding::encode(new_email)
        );
        self.api.put(&path, None).await
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_profile_full() {
        let json = r#"{
            "user_id": "u1",
            "avatar_url": "/media/u1/avatar.jpg",
            "banner_url": "/media/u1/banner.jpg",
            "bio": "night owl",
            "about_section": "mostly RPGs",
            "favorite_genres": ["RPG"],
            "favorite_games": ["g1", "g2"]
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user_id, "u1");
        assert_eq!(profile.favorite_games.len(), 2);
    }

    #[test]
    fn deserialize_profile_minimal() {
        let profile: UserProfile = serde_json::from_str(r#"{"user_id":"u1"}"#).unwrap();
        assert!(profile.avatar_url.is_none());
        assert!(profile.favorite_genres.is_empty());
    }

    #[test]
    fn summary_accepts_id_aliases() {
        let a: ProfileSummary = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
        let b: ProfileSummary = serde_json::from_str(r#"{"_id":"u2","username":"kay"}"#).unwrap();
        assert_eq!(a.id, "u1");
        assert_eq!(b.id, "u2");
        assert_eq!(b.username.as_deref(), Some("kay"));
    }
}
