//! Dusk Sky CLI Library
//!
//! Terminal client for the Dusk Sky platform. One module per subcommand,
//! plus shared output formatting.

pub mod auth_cmd;
pub mod comments_cmd;
pub mod fmt;
pub mod friends_cmd;
pub mod games_cmd;
pub mod home_cmd;
pub mod lists_cmd;
pub mod moderation_cmd;
pub mod profile_cmd;
pub mod reviews_cmd;
pub mod tracking_cmd;
pub mod util;
