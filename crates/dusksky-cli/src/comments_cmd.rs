//! Comment subcommands.

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::ApiClient;
use dusksky_client::services::CommentService;
use dusksky_client::services::comments::CommentStatus;

use crate::util::resolve_user;

/// Comment subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum CommentsAction {
    /// List comments on a review.
    ByReview {
        /// Review ID.
        review_id: String,
    },
    /// Comment on a review.
    Add {
        /// Review ID.
        review_id: String,
        /// Comment text.
        content: String,
        /// Author user ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Show one comment.
    Get {
        /// Comment ID.
        id: String,
    },
    /// Move a comment to another moderation state (visible, hidden, deleted).
    SetStatus {
        /// Comment ID.
        id: String,
        /// New status.
        status: String,
    },
    /// Delete a comment.
    Delete {
        /// Comment ID.
        id: String,
    },
}

fn parse_status(status: &str) -> anyhow::Result<CommentStatus> {
    match status {
        "visible" => Ok(CommentStatus::Visible),
        "hidden" => Ok(CommentStatus::Hidden),
        "deleted" => Ok(CommentStatus::Deleted),
        other => anyhow::bail!("unknown comment status '{other}' (visible, hidden, deleted)"),
    }
}

/// Execute a comments subcommand.
pub async fn run(action: CommentsAction, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    let comments = CommentService::new(Arc::clone(api));
    let mut out = io::stdout();

    match action {
        CommentsAction::ByReview { review_id } => {
            for comment in comments.by_review(&review_id).await? {
                writeln!(out, "  {}  by:{}  {}", comment.id, comment.user_id, comment.content)?;
            }
        }
        CommentsAction::Add { review_id, content, user } => {
            let user_id = resolve_user(api.session(), user)?;
            let comment = comments.add(&review_id, &user_id, &content).await?;
            writeln!(out, "Comment {} created", comment.id)?;
        }
        CommentsAction::Get { id } => {
            let comment = comments.get(&id).await?;
            writeln!(out, "  Comment:  {}", comment.id)?;
            writeln!(out, "  Review:   {}", comment.review_id)?;
            writeln!(out, "  Author:   {}", comment.user_id)?;
            writeln!(out, "  Text:     {}", comment.content)?;
            if let Some(status) = comment.status {
                writeln!(out, "  Status:   {}", status.as_str())?;
            }
        }
        CommentsAction::SetStatus { id, status } => {
            let status = parse_status(&status)?;
            comments.update_status(&id, status).await?;
            writeln!(out, "Comment {} is now {}", id, status.as_str())?;
        }
        CommentsAction::Delete { id } => {
            comments.delete(&id).await?;
            writeln!(out, "Deleted {id}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_statuses() {
        assert_eq!(parse_status("visible").unwrap(), CommentStatus::Visible);
        assert_eq!(parse_status("hidden").unwrap(), CommentStatus::Hidden);
    }

    #[test]
    fn parse_unknown_status_fails() {
        assert!(parse_status("shadowbanned").is_err());
    }
}
