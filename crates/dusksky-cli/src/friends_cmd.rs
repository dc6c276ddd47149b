//! Friendship subcommands.

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::ApiClient;
use dusksky_client::services::FriendshipService;

use crate::util::resolve_user;

/// Friendship subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum FriendsAction {
    /// List a user's friends.
    List {
        /// User ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// List pending friend requests for a user.
    Pending {
        /// User ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Send a friend request.
    Send {
        /// Receiving user ID.
        receiver_id: String,
        /// Sending user ID (defaults to the logged-in user).
        #[arg(long)]
        sender: Option<String>,
    },
    /// Accept a friend request.
    Accept {
        /// Request ID.
        request_id: String,
    },
    /// Reject a friend request.
    Reject {
        /// Request ID.
        request_id: String,
    },
}

/// Execute a friends subcommand.
pub async fn run(action: FriendsAction, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    let friendships = FriendshipService::new(Arc::clone(api));
    let mut out = io::stdout();

    match action {
        FriendsAction::List { user } => {
            let user_id = resolve_user(api.session(), user)?;
            for friendship in friendships.friends_of(&user_id).await? {
                writeln!(out, "  {}", friendship.partner_of(&user_id))?;
            }
        }
        FriendsAction::Pending { user } => {
            let user_id = resolve_user(api.session(), user)?;
            for request in friendships.pending(&user_id).await? {
                writeln!(out, "  {}  from:{}", request.id, request.sender_id)?;
            }
        }
        FriendsAction::Send { receiver_id, sender } => {
            let sender_id = resolve_user(api.session(), sender)?;
            let friendship = friendships.send_request(&sender_id, &receiver_id).await?;
            writeln!(out, "Request {} sent to {}", friendship.id, receiver_id)?;
        }
        FriendsAction::Accept { request_id } => {
            friendships.accept(&request_id).await?;
            writeln!(out, "Accepted {request_id}")?;
        }
        FriendsAction::Reject { request_id } => {
            friendships.reject(&request_id).await?;
            writeln!(out, "Rejected {request_id}")?;
        }
    }
    Ok(())
}
