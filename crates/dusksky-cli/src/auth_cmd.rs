//! Auth subcommands: login, register, logout, status.
//!
//! User-facing output uses writeln! to stdout (this is a CLI binary, not debug output).

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::services::AuthService;
use dusksky_client::{ApiClient, Session};

use crate::fmt::role_str;

/// Auth subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum AuthAction {
    /// Log in to the platform.
    Login {
        /// Username.
        #[arg(short, long)]
        username: String,
        /// Password.
        #[arg(short, long)]
        password: String,
    },
    /// Create an account.
    Register {
        /// Username.
        #[arg(short, long)]
        username: String,
        /// Email address.
        #[arg(short, long)]
        email: String,
        /// Password.
        #[arg(short, long)]
        password: String,
    },
    /// Log out and drop the stored token.
    Logout,
    /// Show current session status.
    Status,
}

/// Execute an auth subcommand.
pub async fn run(action: AuthAction, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    match action {
        AuthAction::Login { username, password } => login(api, &username, &password).await,
        AuthAction::Register { username, email, password } => {
            register(api, &username, &email, &password).await
        }
        AuthAction::Logout => {
            api.session().clear_token()?;
            let mut out = io::stdout();
            writeln!(out, "Logged out")?;
            Ok(())
        }
        AuthAction::Status => {
            status(api.session());
            Ok(())
        }
    }
}

async fn login(api: &Arc<ApiClient>, username: &str, password: &str) -> anyhow::Result<()> {
    let auth = AuthService::new(Arc::clone(api));
    let outcome = auth.login(username, password).await?;

    let mut out = io::stdout();
    writeln!(out, "Logged in as {} ({})", username, role_str(outcome.claims.role))?;
    Ok(())
}

async fn register(
    api: &Arc<ApiClient>,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let auth = AuthService::new(Arc::clone(api));
    auth.register(username, email, password).await?;

    let mut out = io::stdout();
    writeln!(out, "Account created for {username}")?;
    writeln!(out, "Log in with: dusksky auth login -u {username} -p <password>")?;
    Ok(())
}

fn status(session: &Session) {
    let mut out = io::stdout();
    match session.claims() {
        Ok(Some(claims)) => {
            if session.is_logged_in() {
                let _ = writeln!(out, "Logged in as: {}", claims.username.as_deref().unwrap_or("?"));
                let _ = writeln!(out, "User ID: {}", claims.user_id);
                let _ = writeln!(out, "Role: {}", role_str(claims.role));
                if let Some(exp) = claims.exp {
                    let _ = writeln!(out, "Token expires: {exp} (unix)");
                }
            } else {
                let _ = writeln!(out, "Session expired; log in again");
            }
        }
        Ok(None) => {
            let _ = writeln!(out, "Not logged in");
        }
        Err(e) => {
            let _ = writeln!(out, "Stored token is unusable ({e}); log in again");
        }
    }
}
