//! Output formatting helpers.

use std::io::{self, Write};

use dusksky_client::Role;
use dusksky_client::home::EnrichedReview;
use dusksky_client::services::games::Game;
use dusksky_client::services::lists::GameList;
use dusksky_client::services::moderation::{Report, Sanction};
use dusksky_client::services::reviews::Review;
use dusksky_client::services::tracking::Tracking;

pub fn role_str(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Moderator => "moderator",
        Role::Admin => "admin",
    }
}

pub fn write_review_line(w: &mut impl Write, review: &Review) -> io::Result<()> {
    writeln!(
        w,
        "  {}  {:.1}/5  game:{}  by:{}",
        review.id, review.rating, review.game_id, review.user_id
    )
}

pub fn write_enriched_review(w: &mut impl Write, review: &EnrichedReview) -> io::Result<()> {
    let author = if review.username.is_empty() {
        "(unknown)"
    } else {
        review.username.as_str()
    };
    writeln!(
        w,
        "  {:.1}/5  {}  by {}",
        review.review.rating, review.game_title, author
    )?;
    writeln!(w, "      {}", review.review.content)
}

pub fn write_game_line(w: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(w, "  {}  {}", game.id, game.name)
}

pub fn write_game_detail(w: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(w, "  ID:        {}", game.id)?;
    writeln!(w, "  Name:      {}", game.name)?;
    if let Some(developer) = &game.developer {
        writeln!(w, "  Developer: {developer}")?;
    }
    if !game.genres.is_empty() {
        writeln!(w, "  Genres:    {}", game.genres.join(", "))?;
    }
    if let Some(rating) = game.average_rating {
        writeln!(w, "  Rating:    {rating:.1}/5")?;
    }
    if let Some(url) = &game.header_url {
        writeln!(w, "  Header:    {url}")?;
    }
    Ok(())
}

pub fn write_list_line(w: &mut impl Write, list: &GameList) -> io::Result<()> {
    let visibility = if list.is_public { "public" } else { "private" };
    writeln!(
        w,
        "  {}  {}  ({}; {} likes)",
        list.id, list.name, visibility, list.likes
    )
}

pub fn write_report_detail(w: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(w, "  Report:   {}", report.id)?;
    writeln!(w, "  Target:   {}", report.reported_user_id)?;
    writeln!(w, "  Content:  {:?}", report.content_type)?;
    writeln!(w, "  Status:   {:?}", report.status)?;
    if let Some(reason) = &report.reason {
        writeln!(w, "  Reason:   {reason}")?;
    }
    if let Some(at) = &report.reported_at {
        writeln!(w, "  Filed:    {at}")?;
    }
    Ok(())
}

pub fn write_sanction_line(w: &mut impl Write, sanction: &Sanction) -> io::Result<()> {
    let status = sanction.calculated_status.as_deref().unwrap_or("unknown");
    writeln!(
        w,
        "  {}  user:{}  {:?}  ({status})",
        sanction.id, sanction.user_id, sanction.sanction_type
    )
}

pub fn write_tracking_line(w: &mut impl Write, tracking: &Tracking) -> io::Result<()> {
    let liked = if tracking.liked { "  [liked]" } else { "" };
    writeln!(
        w,
        "  {}  game:{}  {}{}",
        tracking.id,
        tracking.game_id,
        tracking.status.as_str(),
        liked
    )
}
