//! Service facades.
//!
//! One module per backend microservice. Each facade maps domain operations
//! onto fixed URL templates and the request pipeline; no facade retries,
//! caches, or deduplicates calls.

pub mod auth;
pub mod comments;
pub mod friendships;
pub mod games;
pub mod lists;
pub mod moderation;
pub mod profiles;
pub mod reviews;
pub mod tracking;

pub use auth::AuthService;
pub use comments::CommentService;
pub use friendships::FriendshipService;
pub use games::GameService;
pub use lists::GameListService;
pub use moderation::ModerationService;
pub use profiles::ProfileService;
pub use reviews::ReviewService;
pub use tracking::TrackingService;
