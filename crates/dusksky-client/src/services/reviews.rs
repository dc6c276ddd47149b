//! Review service facade.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{ApiClient, ApiError};

const BASE: &str = "/reviews";

/// Review as the review service returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub game_id: String,
    pub content: String,
    pub rating: f32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating a review.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_id: String,
    pub game_id: String,
    pub content: String,
    pub rating: f32,
}

/// Facade over the review microservice.
pub struct ReviewService {
    api: Arc<ApiClient>,
}

impl ReviewService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn top(&self, limit: usize) -> Result<Vec<Review>, ApiError> {
        self.api.get(&format!("{BASE}/top?limit={limit}")).await
    }

    pub async fn from_friends(
        &self,
        friend_ids: &[String],
        limit: usize,
    ) -> Result<Vec<Review>, ApiError> {
        let query = friend_ids_query(friend_ids);
        self.api
            .get(&format!("{BASE}/friends?{query}&limit={limit}"))
            .await
    }

    pub async fn add(&self, review: &NewReview) -> Result<Review, ApiError> {
        let body = serde_json::to_value(review)?;
        self.api.post(&format!("{BASE}/"), Some(&body)).await
    }

    pub async fn like(&self, review_id: &str, user_id: &str) -> Result<Value, ApiError> {
        self.api
            .put(&format!("{BASE}/{review_id}/like?user_id={user_id}"), None)
            .await
    }

    pub async fn unlike(&self, review_id: &str, user_id: &str) -> Result<Value, ApiError> {
        self.api
            .put(&format!("{BASE}/{review_id}/unlike?user_id={user_id}"), None)
            .await
    }

    pub async fn delete(&self, review_id: &str, user_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .api
            .delete_maybe(&format!("{BASE}/{review_id}?user_id={user_id}"))
            .await?;
        Ok(())
    }

    pub async fn recent_by_game(
        &self,
        game_id: &str,
        limit: usize,
    ) -> Result<Vec<Review>, ApiError> {
        self.api
            .get(&format!("{BASE}/game/{game_id}/recent?limit={limit}"))
            .await
    }

    pub async fn top_by_game(&self, game_id: &str, limit: usize) -> Result<Vec<Review>, ApiError> {
        self.api
            .get(&format!("{BASE}/game/{game_id}/top?limit={limit}"))
            .await
    }

    pub async fn friends_by_game(
        &self,
        game_id: &str,
        friend_ids: &[String],
        limit: usize,
    ) -> Result<Vec<Review>, ApiError> {
        let query = friend_ids_query(friend_ids);
        self.api
            .get(&format!("{BASE}/game/{game_id}/friends?{query}&limit={limit}"))
            .await
    }
}

/// Repeated `friend_ids` query parameters, one per id.
fn friend_ids_query(friend_ids: &[String]) -> String {
    friend_ids
        .iter()
        .map(|id| format!("friend_ids={id}"))
        .collect::<Vec<_>>()
        .join("&")
}
