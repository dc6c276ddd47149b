//! Comment service facade.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::http::{ApiClient, ApiError};

const BASE: &str = "/comments";

/// Moderation state of a comment. Closed set; the moderation tools move
/// comments between these states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Visible,
    Hidden,
    Deleted,
}

impl CommentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Deleted => "deleted",
        }
    }
}

/// Comment as the comment service returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub review_id: String,
    pub user_id: String,
    #[serde(alias = "text")]
    pub content: String,
    #[serde(default)]
    pub status: Option<CommentStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Facade over the comment microservice.
pub struct CommentService {
    api: Arc<ApiClient>,
}

impl CommentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn by_review(&self, review_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.api.get(&format!("{BASE}/review/{review_id}")).await
    }

    pub async fn add(
        &self,
        review_id: &str,
        user_id: &str,
        content: &str,
    ) -> Result<Comment, ApiError> {
        self.api
            .post(
                BASE,
                Some(&json!({
                    "reviewId": review_id,
                    "userId": user_id,
                    "content": content,
                })),
            )
            .await
    }

    pub async fn all(&self) -> Result<Vec<Comment>, ApiError> {
        self.api.get(BASE).await
    }

    pub async fn get(&self, comment_id: &str) -> Result<Comment, ApiError> {
        self.api.get(&format!("{BASE}/{comment_id}")).await
    }

    /// Move a comment to another moderation state.
    pub async fn update_status(
        &self,
        comment_id: &str,
        status: CommentStatus,
    ) -> Result<Value, ApiError> {
        self.api
            .put(&format!("{BASE}/{comment_id}?status={}", status.as_str()), None)
            .await
    }

    pub async fn delete(&self, comment_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self.api.delete_maybe(&format!("{BASE}/{comment_id}")).await?;
        Ok(())
    }
}
