//! Game list service facade.
//!
//! The list service expects identifiers merged into write payloads
//! (`id` on list updates, `Id`/`ListId` on item writes); the facade does that
//! merging so callers only hand over domain data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::http::{ApiClient, ApiError};

const BASE: &str = "/lists";

/// Curated game list as the list service returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameList {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub likes: i64,
}

/// Payload for creating or updating a list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListData {
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub is_public: bool,
}

/// Entry of a game list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListItem {
    pub id: String,
    pub list_id: String,
    pub game_id: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Payload for adding or updating a list item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemData {
    pub game_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Facade over the game list microservice.
pub struct GameListService {
    api: Arc<ApiClient>,
}

impl GameListService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn by_user(&self, user_id: &str) -> Result<Vec<GameList>, ApiError> {
        self.api.get(&format!("{BASE}/user/{user_id}")).await
    }

    pub async fn get(&self, list_id: &str) -> Result<GameList, ApiError> {
        self.api.get(&format!("{BASE}/{list_id}")).await
    }

    pub async fn create(&self, list: &ListData) -> Result<GameList, ApiError> {
        let body = serde_json::to_value(list)?;
        self.api.post(BASE, Some(&body)).await
    }

    pub async fn update(&self, list_id: &str, list: &ListData) -> Result<GameList, ApiError> {
        let mut body = serde_json::to_value(list)?;
        if let Some(obj) = body.as_object_mut() {
            obj.insert("id".into(), json!(list_id));
        }
        self.api.put(&format!("{BASE}/{list_id}"), Some(&body)).await
    }

    pub async fn delete(&self, list_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self.api.delete_maybe(&format!("{BASE}/{list_id}")).await?;
        Ok(())
    }

    pub async fn most_recent(&self) -> Result<Vec<GameList>, ApiError> {
        self.api.get(&format!("{BASE}/recent")).await
    }

    pub async fn most_liked(&self) -> Result<Vec<GameList>, ApiError> {
        self.api.get(&format!("{BASE}/popular")).await
    }

    /// Like a list. The endpoint answers 204 on success, occasionally a
    /// refreshed list body.
    pub async fn like(&self, list_id: &str) -> Result<Option<GameList>, ApiError> {
        self.api
            .put_maybe(&format!("{BASE}/like/{list_id}"), Some(&json!({})))
            .await
    }

    pub async fn unlike(&self, list_id: &str) -> Result<Option<GameList>, ApiError> {
        self.api
            .put_maybe(&format!("{BASE}/unlike/{list_id}"), Some(&json!({})))
            .await
    }

    pub async fn items(&self, list_id: &str) -> Result<Vec<GameListItem>, ApiError> {
        self.api.get(&format!("{BASE}/{list_id}/items")).await
    }

    pub async fn add_item(
        &self,
        list_id: &str,
        item: &ListItemData,
    ) -> Result<GameListItem, ApiError> {
        let mut body = serde_json::to_value(item)?;
        if let Some(obj) = body.as_object_mut() {
            obj.insert("ListId".into(), json!(list_id));
        }
        self.api.post(&format!("{BASE}/{list_id}/items"), Some(&body)).await
    }

    pub async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        item: &ListItemData,
    ) -> Result<GameListItem, ApiError> {
        let mut body = serde_json::to_value(item)?;
        if let Some(obj) = body.as_object_mut() {
            obj.insert("Id".into(), json!(item_id));
            obj.insert("ListId".into(), json!(list_id));
        }
        self.api
            .put(&format!("{BASE}/{list_id}/items/{item_id}"), Some(&body))
            .await
    }

    pub async fn delete_item(&self, list_id: &str, item_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .api
            .delete_maybe(&format!("{BASE}/{list_id}/items/{item_id}"))
            .await?;
        Ok(())
    }
}
