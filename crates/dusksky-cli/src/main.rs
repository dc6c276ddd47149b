//! Dusk Sky CLI
//!
//! Terminal client for the Dusk Sky social game-cataloguing platform. Builds
//! the session and API client once, here at the application root, and hands
//! them to the per-resource command modules.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dusksky_client::{ApiClient, Session, TokenStorage};

use dusksky_cli::{
    auth_cmd, comments_cmd, friends_cmd, games_cmd, home_cmd, lists_cmd, moderation_cmd,
    profile_cmd, reviews_cmd, tracking_cmd,
};

#[derive(Parser, Debug)]
#[command(name = "dusksky")]
#[command(version, about = "Dusk Sky platform client", long_about = None)]
struct Cli {
    /// API gateway base URL (overrides config file and environment).
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Account and session operations.
    Auth {
        #[command(subcommand)]
        action: auth_cmd::AuthAction,
    },
    /// Game catalog operations.
    Games {
        #[command(subcommand)]
        action: games_cmd::GamesAction,
    },
    /// Review operations.
    Reviews {
        #[command(subcommand)]
        action: reviews_cmd::ReviewsAction,
    },
    /// Comment operations.
    Comments {
        #[command(subcommand)]
        action: comments_cmd::CommentsAction,
    },
    /// Friendship operations.
    Friends {
        #[command(subcommand)]
        action: friends_cmd::FriendsAction,
    },
    /// Curated game list operations.
    Lists {
        #[command(subcommand)]
        action: lists_cmd::ListsAction,
    },
    /// Play-status tracking operations.
    Tracking {
        #[command(subcommand)]
        action: tracking_cmd::TrackingAction,
    },
    /// Report and sanction triage (moderators).
    Moderation {
        #[command(subcommand)]
        action: moderation_cmd::ModerationAction,
    },
    /// User profile operations.
    Profile {
        #[command(subcommand)]
        action: profile_cmd::ProfileAction,
    },
    /// Show the personalized home feed.
    Home {
        /// User whose feed to fetch (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = dusksky_core::config::load_config()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("dusksky={}", config.log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url = cli.base_url.unwrap_or_else(|| config.base_url.clone());
    let token_path = config
        .token_path
        .clone()
        .or_else(TokenStorage::default_path)
        .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;

    debug!(%base_url, token_path = %token_path.display(), "starting dusksky CLI");

    let session = Arc::new(Session::new(TokenStorage::new(token_path)));
    let api = Arc::new(ApiClient::new(&base_url, session)?);

    match cli.command {
        Command::Auth { action } => auth_cmd::run(action, &api).await,
        Command::Games { action } => games_cmd::run(action, &api).await,
        Command::Reviews { action } => reviews_cmd::run(action, &api).await,
        Command::Comments { action } => comments_cmd::run(action, &api).await,
        Command::Friends { action } => friends_cmd::run(action, &api).await,
        Command::Lists { action } => lists_cmd::run(action, &api).await,
        Command::Tracking { action } => tracking_cmd::run(action, &api).await,
        Command::Moderation { action } => moderation_cmd::run(action, &api).await,
        Command::Profile { action } => profile_cmd::run(action, &api).await,
        Command::Home { user } => home_cmd::run(user, &api).await,
    }
}
