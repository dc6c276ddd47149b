//! Home feed subcommand.

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::ApiClient;
use dusksky_client::home::HomeFeed;

use crate::fmt::{write_enriched_review, write_game_line};
use crate::util::resolve_user;

/// Fetch and print the personalized home feed.
pub async fn run(user: Option<String>, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    let user_id = resolve_user(api.session(), user)?;
    let feed = HomeFeed::new(api);
    let data = feed.fetch(&user_id).await;

    let mut out = io::stdout();
    if data.has_friends {
        writeln!(out, "Latest from your friends:")?;
    } else {
        writeln!(out, "Top reviews on Dusk Sky:")?;
    }
    if data.reviews.is_empty() {
        writeln!(out, "  (nothing yet)")?;
    }
    for review in &data.reviews {
        write_enriched_review(&mut out, review)?;
    }

    if !data.games.is_empty() {
        writeln!(out)?;
        writeln!(out, "Popular right now:")?;
        for game in &data.games {
            write_game_line(&mut out, game)?;
        }
    }
    Ok(())
}
