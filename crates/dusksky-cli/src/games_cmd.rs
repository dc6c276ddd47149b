//! Game catalog subcommands.

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::ApiClient;
use dusksky_client::services::GameService;

use crate::fmt::{write_game_detail, write_game_line};

/// Game subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum GamesAction {
    /// List the currently popular games.
    Popular,
    /// Show one game.
    Get {
        /// Game ID.
        id: String,
    },
    /// Search the catalog by name.
    Search {
        /// Name fragment to search for.
        name: String,
    },
    /// Import a game from Steam into the catalog.
    Import {
        /// Steam app ID.
        steam_app_id: u64,
    },
}

/// Execute a games subcommand.
pub async fn run(action: GamesAction, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    let games = GameService::new(Arc::clone(api));
    let mut out = io::stdout();

    match action {
        GamesAction::Popular => {
            for game in games.popular().await? {
                write_game_line(&mut out, &game)?;
            }
        }
        GamesAction::Get { id } => {
            let game = games.get(&id).await?;
            write_game_detail(&mut out, &game)?;
        }
        GamesAction::Search { name } => {
            let results = games.search(&name).await?;
            if results.is_empty() {
                writeln!(out, "No games matching '{name}'")?;
            }
            for game in results {
                write_game_line(&mut out, &game)?;
            }
        }
        GamesAction::Import { steam_app_id } => {
            let game = games.import_from_steam(steam_app_id).await?;
            writeln!(out, "Imported:")?;
            write_game_detail(&mut out, &game)?;
        }
    }
    Ok(())
}
