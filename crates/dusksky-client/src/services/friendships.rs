//! Friendship service facade.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::http::{ApiClient, ApiError};

const BASE: &str = "/friendships";

/// A friendship edge (or pending request) between two users.
#[derive(Debug, Clone, Deserialize)]
pub struct Friendship {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Friendship {
    /// The other end of the edge, seen from `user_id`.
    pub fn partner_of(&self, user_id: &str) -> &str {
        if self.receiver_id == user_id {
            &self.sender_id
        } else {
            &self.receiver_id
        }
    }
}

/// Facade over the friendship microservice.
pub struct FriendshipService {
    api: Arc<ApiClient>,
}

impl FriendshipService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Accepted friendships of a user.
    pub async fn friends_of(&self, user_id: &str) -> Result<Vec<Friendship>, ApiError> {
        self.api.get(&format!("{BASE}/user/{user_id}")).await
    }

    /// Requests still waiting on this user.
    pub async fn pending(&self, user_id: &str) -> Result<Vec<Friendship>, ApiError> {
        self.api.get(&format!("{BASE}/pending/{user_id}")).await
    }

    pub async fn send_request(
        &self,
        sender_id: &str,
        receiver_id: &str,
    ) -> Result<Friendship, ApiError> {
        self.api
            .post(
                BASE,
                Some(&json!({
                    "sender_id": sender_id,
                    "receiver_id": receiver_id,
                })),
            )
            .await
    }

    pub async fn accept(&self, request_id: &str) -> Result<Friendship, ApiError> {
        self.api.put(&format!("{BASE}/{request_id}/accept"), None).await
    }

    pub async fn reject(&self, request_id: &str) -> Result<Friendship, ApiError> {
        self.api.put(&format!("{BASE}/{request_id}/reject"), None).await
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_friendship() {
        let json = r#"{"id":"f1","sender_id":"u1","receiver_id":"u2","status":"accepted"}"#;
        let friendship: Friendship = serde_json::from_str(json).unwrap();
        assert_eq!(friendship.sender_id, "u1");
        assert_eq!(friendship.status.as_deref(), Some("accepted"));
    }

    #[test]
    fn partner_of_picks_the_other_end() {
        let friendship = Friendship {
            id: "f1".into(),
            sender_id: "u1".into(),
            receiver_id: "u2".into(),
            status: None,
        };
        assert_eq!(friendship.partner_of("u2"), "u1");
        assert_eq!(friendship.partner_of("u1"), "u2");
    }
}
