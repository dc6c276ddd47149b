//! Review subcommands.

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::ApiClient;
use dusksky_client::services::ReviewService;
use dusksky_client::services::reviews::NewReview;

use crate::fmt::write_review_line;
use crate::util::resolve_user;

/// Review subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum ReviewsAction {
    /// List the site-wide top reviews.
    Top {
        /// Maximum results.
        #[arg(short, long, default_value = "6")]
        limit: usize,
    },
    /// Write a review.
    Add {
        /// Game ID.
        #[arg(short, long)]
        game: String,
        /// Star rating, 0 to 5.
        #[arg(short, long)]
        rating: f32,
        /// Review text.
        content: String,
        /// Author user ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Like a review.
    Like {
        /// Review ID.
        review_id: String,
        /// Liking user ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Remove a like.
    Unlike {
        /// Review ID.
        review_id: String,
        /// User ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Delete a review.
    Delete {
        /// Review ID.
        review_id: String,
        /// Owning user ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Recent reviews of a game.
    GameRecent {
        /// Game ID.
        game_id: String,
        #[arg(short, long, default_value = "6")]
        limit: usize,
    },
    /// Top reviews of a game.
    GameTop {
        /// Game ID.
        game_id: String,
        #[arg(short, long, default_value = "6")]
        limit: usize,
    },
}

/// Execute a reviews subcommand.
pub async fn run(action: ReviewsAction, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    let reviews = ReviewService::new(Arc::clone(api));
    let mut out = io::stdout();

    match action {
        ReviewsAction::Top { limit } => {
            for review in reviews.top(limit).await? {
                write_review_line(&mut out, &review)?;
            }
        }
        ReviewsAction::Add { game, rating, content, user } => {
            let user_id = resolve_user(api.session(), user)?;
            let review = reviews
                .add(&NewReview { user_id, game_id: game, content, rating })
                .await?;
            writeln!(out, "Review {} created", review.id)?;
        }
        ReviewsAction::Like { review_id, user } => {
            let user_id = resolve_user(api.session(), user)?;
            reviews.like(&review_id, &user_id).await?;
            writeln!(out, "Liked {review_id}")?;
        }
        ReviewsAction::Unlike { review_id, user } => {
            let user_id = resolve_user(api.session(), user)?;
            reviews.unlike(&review_id, &user_id).await?;
            writeln!(out, "Unliked {review_id}")?;
        }
        ReviewsAction::Delete { review_id, user } => {
            let user_id = resolve_user(api.session(), user)?;
            reviews.delete(&review_id, &user_id).await?;
            writeln!(out, "Deleted {review_id}")?;
        }
        ReviewsAction::GameRecent { game_id, limit } => {
            for review in reviews.recent_by_game(&game_id, limit).await? {
                write_review_line(&mut out, &review)?;
            }
        }
        ReviewsAction::GameTop { game_id, limit } => {
            for review in reviews.top_by_game(&game_id, limit).await? {
                write_review_line(&mut out, &review)?;
            }
        }
    }
    Ok(())
}
