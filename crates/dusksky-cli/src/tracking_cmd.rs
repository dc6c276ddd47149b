//! Play-status tracking subcommands.

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::ApiClient;
use dusksky_client::services::TrackingService;
use dusksky_client::services::tracking::{TrackingData, TrackingStatus};

use crate::fmt::write_tracking_line;
use crate::util::resolve_user;

/// Tracking subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum TrackingAction {
    /// All tracking records of a user.
    ByUser {
        /// User ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Start (or file) a tracking record for a game.
    Set {
        /// Game ID.
        game_id: String,
        /// Play status: playing, played, backlog, abandoned.
        status: String,
        /// Mark the game as liked.
        #[arg(long)]
        liked: bool,
        /// User ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Update an existing tracking record.
    Update {
        /// Tracking record ID.
        id: String,
        /// Game ID.
        game_id: String,
        /// Play status: playing, played, backlog, abandoned.
        status: String,
        #[arg(long)]
        liked: bool,
        #[arg(long)]
        user: Option<String>,
    },
    /// Delete a tracking record.
    Delete {
        /// Tracking record ID.
        id: String,
    },
    /// Game IDs of a user in one play status.
    Status {
        /// Play status: playing, played, backlog, abandoned.
        status: String,
        #[arg(long)]
        user: Option<String>,
    },
    /// Game IDs a user has liked.
    Liked {
        #[arg(long)]
        user: Option<String>,
    },
    /// The user's tracking record for one game.
    Lookup {
        /// Game ID.
        game_id: String,
        #[arg(long)]
        user: Option<String>,
    },
}

fn parse_status(status: &str) -> anyhow::Result<TrackingStatus> {
    match status {
        "playing" => Ok(TrackingStatus::Playing),
        "played" => Ok(TrackingStatus::Played),
        "backlog" => Ok(TrackingStatus::Backlog),
        "abandoned" => Ok(TrackingStatus::Abandoned),
        other => {
            anyhow::bail!("unknown play status '{other}' (playing, played, backlog, abandoned)")
        }
    }
}

/// Execute a tracking subcommand.
pub async fn run(action: TrackingAction, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    let tracking = TrackingService::new(Arc::clone(api));
    let mut out = io::stdout();

    match action {
        TrackingAction::ByUser { user } => {
            let user_id = resolve_user(api.session(), user)?;
            for record in tracking.by_user(&user_id).await? {
                write_tracking_line(&mut out, &record)?;
            }
        }
        TrackingAction::Set { game_id, status, liked, user } => {
            let user_id = resolve_user(api.session(), user)?;
            let status = parse_status(&status)?;
            let record = tracking
                .create(&TrackingData { user_id, game_id, status, liked })
                .await?;
            writeln!(out, "Tracking {} created", record.id)?;
        }
        TrackingAction::Update { id, game_id, status, liked, user } => {
            let user_id = resolve_user(api.session(), user)?;
            let status = parse_status(&status)?;
            tracking
                .update(&id, &TrackingData { user_id, game_id, status, liked })
                .await?;
            writeln!(out, "Tracking {id} updated")?;
        }
        TrackingAction::Delete { id } => {
            tracking.delete(&id).await?;
            writeln!(out, "Deleted {id}")?;
        }
        TrackingAction::Status { status, user } => {
            let user_id = resolve_user(api.session(), user)?;
            let status = parse_status(&status)?;
            for game_id in tracking.game_ids_by_status(&user_id, status).await? {
                writeln!(out, "  {game_id}")?;
            }
        }
        TrackingAction::Liked { user } => {
            let user_id = resolve_user(api.session(), user)?;
            for game_id in tracking.liked_game_ids(&user_id).await? {
                writeln!(out, "  {game_id}")?;
            }
        }
        TrackingAction::Lookup { game_id, user } => {
            let user_id = resolve_user(api.session(), user)?;
            match tracking.lookup(&user_id, &game_id).await? {
                Some(record) => write_tracking_line(&mut out, &record)?,
                None => writeln!(out, "No tracking for game {game_id}")?,
            }
        }
    }
    Ok(())
}
