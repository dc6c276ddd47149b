//! Play-status tracking service facade.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::http::{ApiClient, ApiError};

const BASE: &str = "/api/trackings";

/// Play status of a tracked game. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingStatus {
    Playing,
    Played,
    Backlog,
    Abandoned,
}

impl TrackingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Played => "played",
            Self::Backlog => "backlog",
            Self::Abandoned => "abandoned",
        }
    }
}

/// Tracking record as the tracking service returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracking {
    pub id: String,
    pub user_id: String,
    pub game_id: String,
    pub status: TrackingStatus,
    #[serde(default)]
    pub liked: bool,
}

/// Payload for creating or updating a tracking record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingData {
    pub user_id: String,
    pub game_id: String,
    pub status: TrackingStatus,
    pub liked: bool,
}

/// Facade over the tracking microservice.
pub struct TrackingService {
    api: Arc<ApiClient>,
}

impl TrackingService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn by_user(&self, user_id: &str) -> Result<Vec<Tracking>, ApiError> {
        self.api.get(&format!("{BASE}/user/{user_id}")).await
    }

    pub async fn get(&self, tracking_id: &str) -> Result<Tracking, ApiError> {
        self.api.get(&format!("{BASE}/{tracking_id}")).await
    }

    pub async fn create(&self, tracking: &TrackingData) -> Result<Tracking, ApiError> {
        let body = serde_json::to_value(tracking)?;
        self.api.post(BASE, Some(&body)).await
    }

    pub async fn update(
        &self,
        tracking_id: &str,
        tracking: &TrackingData,
    ) -> Result<Tracking, ApiError> {
        let body = serde_json::to_value(tracking)?;
        self.api.put(&format!("{BASE}/{tracking_id}"), Some(&body)).await
    }

    pub async fn delete(&self, tracking_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self.api.delete_maybe(&format!("{BASE}/{tracking_id}")).await?;
        Ok(())
    }

    /// Ids of the user's games in a given play status.
    pub async fn game_ids_by_status(
        &self,
        user_id: &str,
        status: TrackingStatus,
    ) -> Result<Vec<String>, ApiError> {
        self.api
            .get(&format!("{BASE}/user/{user_id}/status/{}", status.as_str()))
            .await
    }

    /// Ids of the games the user has liked.
    pub async fn liked_game_ids(&self, user_id: &str) -> Result<Vec<String>, ApiError> {
        self.api.get(&format!("{BASE}/user/{user_id}/liked")).await
    }

    /// The user's tracking record for one game, if any.
    pub async fn lookup(
        &self,
        user_id: &str,
        game_id: &str,
    ) -> Result<Option<Tracking>, ApiError> {
        self.api
            .post(
                &format!("{BASE}/lookup"),
                Some(&json!({"userId": user_id, "gameId": game_id})),
            )
            .await
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_tracking() {
        let json = r#"{"id":"t1","userId":"u1","gameId":"g1","status":"playing","liked":true}"#;
        let tracking: Tracking = serde_json::from_str(json).unwrap();
        assert_eq!(tracking.status, TrackingStatus::Playing);
        assert!(tracking.liked);
    }

    #[test]
    fn liked_defaults_to_false() {
        let json = r#"{"id":"t1","userId":"u1","gameId":"g1","status":"backlog"}"#;
        let tracking: Tracking = serde_json::from_str(json).unwrap();
        assert!(!tracking.liked);
    }

    #[test]
    fn unknown_status_fails() {
        let json = r#"{"id":"t1","userId":"u1","gameId":"g1","status":"paused"}"#;
        assert!(serde_json::from_str::<Tracking>(json).is_err());
    }

    #[test]
    fn tracking_data_serializes_camel_case() {
        let body = serde_json::to_value(TrackingData {
            user_id: "u1".into(),
            game_id: "g1".into(),
            status: TrackingStatus::Abandoned,
            liked: false,
        })
        .unwrap();
        assert_eq!(body["userId"], "u1");
        assert_eq!(body["status"], "abandoned");
    }
}
