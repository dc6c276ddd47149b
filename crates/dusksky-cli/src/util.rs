//! Small shared helpers for the command modules.

use dusksky_client::Session;

/// The id of the logged-in user, for commands that default to "me".
pub fn current_user_id(session: &Session) -> anyhow::Result<String> {
    session
        .claims()?
        .map(|claims| claims.user_id)
        .ok_or_else(|| anyhow::anyhow!("Not logged in. Use `dusksky auth login`"))
}

/// Resolve an explicit `--user` argument against the session default.
pub fn resolve_user(session: &Session, user: Option<String>) -> anyhow::Result<String> {
    match user {
        Some(user) => Ok(user),
        None => current_user_id(session),
    }
}
