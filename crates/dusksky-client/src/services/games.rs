//! Game catalog service facade.

use std::sync::Arc;

use serde::Deserialize;

use crate::http::{ApiClient, ApiError};

const BASE: &str = "/api/game";

/// Catalog entry as the game service returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub header_url: Option<String>,
    #[serde(default)]
    pub random_screenshot: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub average_rating: Option<f32>,
}

/// Facade over the game catalog microservice.
pub struct GameService {
    api: Arc<ApiClient>,
}

impl GameService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn popular(&self) -> Result<Vec<Game>, ApiError> {
        self.api.get(&format!("{BASE}/popular")).await
    }

    pub async fn get(&self, game_id: &str) -> Result<Game, ApiError> {
        self.api.get(&format!("{BASE}/{game_id}")).await
    }

    pub async fn search(&self, name: &str) -> Result<Vec<Game>, ApiError> {
        let path = format!("{BASE}/search?name={}", urlencoding::encode(name));
        self.api.get(&path).await
    }

    /// Pull a game into the catalog from its Steam app id.
    pub async fn import_from_steam(&self, steam_app_id: u64) -> Result<Game, ApiError> {
        self.api.post(&format!("{BASE}/import/{steam_app_id}"), None).await
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_game_full() {
        let json = r#"{
            "id": "g1",
            "name": "Unrailed!",
            "headerUrl": "https://cdn.example/header.jpg",
            "randomScreenshot": "https://cdn.example/shot.jpg",
            "developer": "Indoor Astronaut",
            "genres": ["Party", "Co-op"],
            "averageRating": 4.2
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.name, "Unrailed!");
        assert_eq!(game.genres.len(), 2);
        assert!(game.average_rating.is_some());
    }

    #[test]
    fn deserialize_game_minimal() {
        let game: Game = serde_json::from_str(r#"{"id":"g1","name":"AIR"}"#).unwrap();
        assert!(game.header_url.is_none());
        assert!(game.genres.is_empty());
        assert!(game.average_rating.is_none());
    }
}
