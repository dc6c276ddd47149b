//! Game list subcommands.

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::ApiClient;
use dusksky_client::services::GameListService;
use dusksky_client::services::lists::{ListData, ListItemData};

use crate::fmt::write_list_line;
use crate::util::resolve_user;

/// List subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum ListsAction {
    /// Lists owned by a user.
    ByUser {
        /// User ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Show one list and its items.
    Get {
        /// List ID.
        id: String,
    },
    /// Create a list.
    Create {
        /// List name.
        name: String,
        /// Description.
        #[arg(short, long, default_value = "")]
        description: String,
        /// Make the list private.
        #[arg(long)]
        private: bool,
        /// Owner user ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Update a list's name, description, or visibility.
    Update {
        /// List ID.
        id: String,
        /// New name.
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(long)]
        private: bool,
        #[arg(long)]
        user: Option<String>,
    },
    /// Delete a list.
    Delete {
        /// List ID.
        id: String,
    },
    /// Most recently created lists.
    Recent,
    /// Most liked lists.
    Popular,
    /// Like a list.
    Like {
        /// List ID.
        id: String,
    },
    /// Remove a like.
    Unlike {
        /// List ID.
        id: String,
    },
    /// Add a game to a list.
    AddItem {
        /// List ID.
        list_id: String,
        /// Game ID.
        game_id: String,
        /// Optional note on the entry.
        #[arg(short, long)]
        comment: Option<String>,
    },
    /// Update a list entry's note.
    UpdateItem {
        /// List ID.
        list_id: String,
        /// Item ID.
        item_id: String,
        /// Game ID.
        game_id: String,
        #[arg(short, long)]
        comment: Option<String>,
    },
    /// Remove a game from a list.
    RemoveItem {
        /// List ID.
        list_id: String,
        /// Item ID.
        item_id: String,
    },
}

/// Execute a lists subcommand.
#[allow(clippy::too_many_lines)]
pub async fn run(action: ListsAction, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    let lists = GameListService::new(Arc::clone(api));
    let mut out = io::stdout();

    match action {
        ListsAction::ByUser { user } => {
            let user_id = resolve_user(api.session(), user)?;
            for list in lists.by_user(&user_id).await? {
                write_list_line(&mut out, &list)?;
            }
        }
        ListsAction::Get { id } => {
            let list = lists.get(&id).await?;
            write_list_line(&mut out, &list)?;
            if let Some(description) = &list.description {
                writeln!(out, "      {description}")?;
            }
            for item in lists.items(&id).await? {
                let note = item.comment.as_deref().unwrap_or("");
                writeln!(out, "      {}  game:{}  {note}", item.id, item.game_id)?;
            }
        }
        ListsAction::Create { name, description, private, user } => {
            let user_id = resolve_user(api.session(), user)?;
            let list = lists
                .create(&ListData { user_id, name, description, is_public: !private })
                .await?;
            writeln!(out, "List {} created", list.id)?;
        }
        ListsAction::Update { id, name, description, private, user } => {
            let user_id = resolve_user(api.session(), user)?;
            lists
                .update(&id, &ListData { user_id, name, description, is_public: !private })
                .await?;
            writeln!(out, "List {id} updated")?;
        }
        ListsAction::Delete { id } => {
            lists.delete(&id).await?;
            writeln!(out, "Deleted {id}")?;
        }
        ListsAction::Recent => {
            for list in lists.most_recent().await? {
                write_list_line(&mut out, &list)?;
            }
        }
        ListsAction::Popular => {
            for list in lists.most_liked().await? {
                write_list_line(&mut out, &list)?;
            }
        }
        ListsAction::Like { id } => {
            let _ = lists.like(&id).await?;
            writeln!(out, "Liked {id}")?;
        }
        ListsAction::Unlike { id } => {
            let _ = lists.unlike(&id).await?;
            writeln!(out, "Unliked {id}")?;
        }
        ListsAction::AddItem { list_id, game_id, comment } => {
            let item = lists.add_item(&list_id, &ListItemData { game_id, comment }).await?;
            writeln!(out, "Added item {}", item.id)?;
        }
        ListsAction::UpdateItem { list_id, item_id, game_id, comment } => {
            lists
                .update_item(&list_id, &item_id, &ListItemData { game_id, comment })
                .await?;
            writeln!(out, "Updated item {item_id}")?;
        }
        ListsAction::RemoveItem { list_id, item_id } => {
            lists.delete_item(&list_id, &item_id).await?;
            writeln!(out, "Removed item {item_id}")?;
        }
    }
    Ok(())
}
