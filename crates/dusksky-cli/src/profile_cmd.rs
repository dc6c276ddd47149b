//! User profile subcommands.

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::ApiClient;
use dusksky_client::services::ProfileService;

use crate::util::resolve_user;

/// Profile subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum ProfileAction {
    /// Show a profile.
    Show {
        /// User ID (defaults to the logged-in user).
        #[arg(long)]
        user: Option<String>,
    },
    /// Search profiles by username.
    Search {
        /// Username fragment.
        name: String,
    },
    /// Change a username.
    SetUsername {
        /// New username.
        new_username: String,
        #[arg(long)]
        user: Option<String>,
    },
    /// Change an email address.
    SetEmail {
        /// New email.
        new_email: String,
        #[arg(long)]
        user: Option<String>,
    },
}

/// Execute a profile subcommand.
pub async fn run(action: ProfileAction, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    let profiles = ProfileService::new(Arc::clone(api));
    let mut out = io::stdout();

    match action {
        ProfileAction::Show { user } => {
            let user_id = resolve_user(api.session(), user)?;
            let profile = profiles.get(&user_id).await?;
            writeln!(out, "  User:   {}", profile.user_id)?;
            if let Some(bio) = &profile.bio {
                writeln!(out, "  Bio:    {bio}")?;
            }
            if let Some(about) = &profile.about_section {
                writeln!(out, "  About:  {about}")?;
            }
            if !profile.favorite_genres.is_empty() {
                writeln!(out, "  Genres: {}", profile.favorite_genres.join(", "))?;
            }
            if let Some(avatar) = &profile.avatar_url {
                writeln!(out, "  Avatar: {avatar}")?;
            }
        }
        ProfileAction::Search { name } => {
            let results = profiles.search(&name).await?;
            if results.is_empty() {
                writeln!(out, "No profiles matching '{name}'")?;
            }
            for profile in results {
                let username = profile.username.as_deref().unwrap_or("?");
                writeln!(out, "  {}  {}", profile.id, username)?;
            }
        }
        ProfileAction::SetUsername { new_username, user } => {
            let user_id = resolve_user(api.session(), user)?;
            profiles.update_username(&user_id, &new_username).await?;
            writeln!(out, "Username changed to {new_username}")?;
        }
        ProfileAction::SetEmail { new_email, user } => {
            let user_id = resolve_user(api.session(), user)?;
            profiles.update_email(&user_id, &new_email).await?;
            writeln!(out, "Email changed to {new_email}")?;
        }
    }
    Ok(())
}
