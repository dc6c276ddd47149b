//! Composed home-feed fetch.
//!
//! Pulls the pieces of the landing view together: the user's friends, their
//! recent reviews (or the site-wide top list for friendless users), and the
//! popular-games rail. Every review is decorated with author and game data;
//! each of those lookups degrades independently, so one dead microservice
//! costs placeholders, not the feed.

use std::sync::Arc;

use futures_util::future::join_all;

use crate::enrich::best_effort;
use crate::http::{ApiClient, ApiError};
use crate::services::games::Game;
use crate::services::reviews::Review;
use crate::services::{
    AuthService, FriendshipService, GameService, ProfileService, ReviewService,
};

const DEFAULT_AVATAR: &str = "/assets/default_avatar.jpg";
const GAME_PLACEHOLDER: &str = "/assets/game_placeholder.png";
const FEED_LIMIT: usize = 6;

/// A review decorated with author and game presentation data.
#[derive(Debug, Clone)]
pub struct EnrichedReview {
    pub review: Review,
    pub username: String,
    pub avatar: String,
    pub game_title: String,
    pub game_image: String,
}

/// Everything the landing view needs.
#[derive(Debug, Clone, Default)]
pub struct HomeData {
    pub has_friends: bool,
    pub reviews: Vec<EnrichedReview>,
    pub games: Vec<Game>,
}

/// Composed fetcher over the per-resource facades.
pub struct HomeFeed {
    friendships: FriendshipService,
    reviews: ReviewService,
    auth: AuthService,
    profiles: ProfileService,
    games: GameService,
}

impl HomeFeed {
    pub fn new(api: &Arc<ApiClient>) -> Self {
        Self {
            friendships: FriendshipService::new(Arc::clone(api)),
            reviews: ReviewService::new(Arc::clone(api)),
            auth: AuthService::new(Arc::clone(api)),
            profiles: ProfileService::new(Arc::clone(api)),
            games: GameService::new(Arc::clone(api)),
        }
    }

    /// Fetch the feed. Never fails: a broken primary fetch yields an empty
    /// feed, broken secondary lookups yield placeholders.
    pub async fn fetch(&self, user_id: &str) -> HomeData {
        match self.fetch_inner(user_id).await {
            Ok(data) => data,
            Err(error) => {
                tracing::warn!(%error, "home feed fetch failed, serving empty feed");
                HomeData::default()
            }
        }
    }

    async fn fetch_inner(&self, user_id: &str) -> Result<HomeData, ApiError> {
        let friends = self.friendships.friends_of(user_id).await?;
        let friend_ids: Vec<String> = friends
            .iter()
            .map(|f| f.partner_of(user_id).to_string())
            .collect();
        let has_friends = !friend_ids.is_empty();

        let reviews = if has_friends {
            self.reviews.from_friends(&friend_ids, FEED_LIMIT).await?
        } else {
            self.reviews.top(FEED_LIMIT).await?
        };

        let reviews = join_all(reviews.into_iter().map(|r| self.enrich(r))).await;

        let games = best_effort("popular games", self.games.popular(), Vec::new()).await;

        Ok(HomeData { has_friends, reviews, games })
    }

    /// Decorate one review; the three lookups run concurrently and degrade
    /// independently.
    async fn enrich(&self, review: Review) -> EnrichedReview {
        let username = best_effort(
            "review author",
            async { Ok(self.auth.get_user(&review.user_id).await?.username) },
            String::new(),
        );
        let avatar = best_effort(
            "author avatar",
            async {
                let profile = self.profiles.get(&review.user_id).await?;
                Ok(profile.avatar_url.unwrap_or_else(|| DEFAULT_AVATAR.to_string()))
            },
            DEFAULT_AVATAR.to_string(),
        );
        let game = best_effort(
            "reviewed game",
            async {
                let game = self.games.get(&review.game_id).await?;
                let image = game
                    .header_url
                    .unwrap_or_else(|| GAME_PLACEHOLDER.to_string());
                Ok((game.name, image))
            },
            ("Unknown game".to_string(), GAME_PLACEHOLDER.to_string()),
        );

        let (username, avatar, (game_title, game_image)) =
            tokio::join!(username, avatar, game);

        EnrichedReview { review, username, avatar, game_title, game_image }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::{Session, TokenStorage};

    async fn feed_against(server: &mockito::Server) -> (HomeFeed, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let session = Arc::new(Session::new(TokenStorage::new(dir.path().join("token"))));
        let api = Arc::new(ApiClient::new(&server.url(), session).unwrap());
        (HomeFeed::new(&api), dir)
    }

    #[tokio::test]
    async fn friendless_user_gets_top_reviews() {
        let mut server = mockito::Server::new_async().await;

        let _friends = server
            .mock("GET", "/friendships/user/u1")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;
        let _top = server
            .mock("GET", "/reviews/top?limit=6")
            .with_status(200)
            .with_body(
                r#"[{"id":"r1","userId":"u2","gameId":"g1","content":"fine","rating":4.0}]"#,
            )
            .create_async()
            .await;
        let _author = server
            .mock("GET", "/auth/users/u2")
            .with_status(200)
            .with_body(r#"{"_id":"u2","username":"bram"}"#)
            .create_async()
            .await;
        let _profile = server
            .mock("GET", "/profiles/u2")
            .with_status(200)
            .with_body(r#"{"user_id":"u2","avatar_url":"/media/u2.jpg"}"#)
            .create_async()
            .await;
        let _game = server
            .mock("GET", "/api/game/g1")
            .with_status(200)
            .with_body(r#"{"id":"g1","name":"AIR","headerUrl":"/media/g1.jpg"}"#)
            .create_async()
            .await;
        let _popular = server
            .mock("GET", "/api/game/popular")
            .with_status(200)
            .with_body(r#"[{"id":"g1","name":"AIR"}]"#)
            .create_async()
            .await;

        let (feed, _dir) = feed_against(&server).await;
        let data = feed.fetch("u1").await;

        assert!(!data.has_friends);
        assert_eq!(data.reviews.len(), 1);
        let enriched = &data.reviews[0];
        assert_eq!(enriched.username, "bram");
        assert_eq!(enriched.avatar, "/media/u2.jpg");
        assert_eq!(enriched.game_title, "AIR");
        assert_eq!(data.games.len(), 1);
    }

    #[tokio::test]
    async fn dead_lookups_degrade_to_placeholders() {
        let mut server = mockito::Server::new_async().await;

        let _friends = server
            .mock("GET", "/friendships/user/u1")
            .with_status(200)
            .with_body(r#"[{"id":"f1","sender_id":"u2","receiver_id":"u1"}]"#)
            .create_async()
            .await;
        let _reviews = server
            .mock("GET", "/reviews/friends?friend_ids=u2&limit=6")
            .with_status(200)
            .with_body(
                r#"[{"id":"r1","userId":"u2","gameId":"g1","content":"fine","rating":4.0}]"#,
            )
            .create_async()
            .await;
        // Author, profile, game, and popular endpoints are all down.
        let _author = server
            .mock("GET", "/auth/users/u2")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;
        let _profile = server
            .mock("GET", "/profiles/u2")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;
        let _game = server
            .mock("GET", "/api/game/g1")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;
        let _popular = server
            .mock("GET", "/api/game/popular")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let (feed, _dir) = feed_against(&server).await;
        let data = feed.fetch("u1").await;

        assert!(data.has_friends);
        assert_eq!(data.reviews.len(), 1);
        let enriched = &data.reviews[0];
        assert_eq!(enriched.username, "");
        assert_eq!(enriched.avatar, DEFAULT_AVATAR);
        assert_eq!(enriched.game_title, "Unknown game");
        assert_eq!(enriched.game_image, GAME_PLACEHOLDER);
        assert!(data.games.is_empty());
    }

    #[tokio::test]
    async fn broken_primary_fetch_serves_empty_feed() {
        let mut server = mockito::Server::new_async().await;
        let _friends = server
            .mock("GET", "/friendships/user/u1")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let (feed, _dir) = feed_against(&server).await;
        let data = feed.fetch("u1").await;
        assert!(!data.has_friends);
        assert!(data.reviews.is_empty());
        assert!(data.games.is_empty());
    }
}
