//! Session management.
//!
//! Single source of truth for the current authentication state. A [`Session`]
//! is an ordinary value built once by the application root and shared via
//! `Arc`; there is no ambient global. The raw token and its decoded claims
//! live and die together: claims are computed exactly once per token write
//! and discarded on every clear.

mod claims;
mod storage;
mod watch;

#[cfg(test)]
mod tests;

pub use claims::{Claims, DecodeError, Role, decode_claims};
pub use storage::TokenStorage;
pub use watch::SubscriptionId;

use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use watch::SessionWatchers;

/// Session store failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid token: {0}")]
    Decode(#[from] DecodeError),

    #[error("token storage failed: {0}")]
    Storage(#[from] std::io::Error),
}

#[derive(Default)]
struct State {
    token: Option<String>,
    claims: Option<Claims>,
    /// Whether durable storage has been consulted. Rehydration happens at
    /// most once per session, even when no token is found.
    rehydrated: bool,
}

/// The current authentication state: raw token, decoded claims, watchers.
pub struct Session {
    storage: TokenStorage,
    state: Mutex<State>,
    watchers: SessionWatchers,
}

impl Session {
    pub fn new(storage: TokenStorage) -> Self {
        Self {
            storage,
            state: Mutex::new(State::default()),
            watchers: SessionWatchers::default(),
        }
    }

    /// Store a freshly issued token.
    ///
    /// The payload is decoded before anything is persisted, so a malformed
    /// token is rejected loudly and leaves the session untouched. On success
    /// the decoded claims snapshot is returned and every watcher is notified
    /// synchronously, in registration order.
    pub fn set_token(&self, token: &str) -> Result<Claims, SessionError> {
        let claims = decode_claims(token)?;
        self.storage.save(token)?;
        {
            let mut state = self.lock_state();
            state.token = Some(token.to_string());
            state.claims = Some(claims.clone());
            state.rehydrated = true;
        }
        self.watchers.notify();
        Ok(claims)
    }

    /// The current raw token.
    ///
    /// When nothing is cached in memory, durable storage is consulted once;
    /// a token found there is decoded exactly as in [`Session::set_token`]
    /// but rehydration is silent (no watcher notification).
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        let mut state = self.lock_state();
        if state.token.is_none() && !state.rehydrated {
            state.rehydrated = true;
            if let Some(stored) = self.storage.load()? {
                let claims = decode_claims(&stored)?;
                state.claims = Some(claims);
                state.token = Some(stored);
            }
        }
        Ok(state.token.clone())
    }

    /// The decoded claims snapshot, populating from durable storage if
    /// needed.
    pub fn claims(&self) -> Result<Option<Claims>, SessionError> {
        self.token()?;
        Ok(self.lock_state().claims.clone())
    }

    /// Drop the token and claims from memory and durable storage, then
    /// notify every watcher.
    pub fn clear_token(&self) -> Result<(), SessionError> {
        self.storage.remove()?;
        {
            let mut state = self.lock_state();
            state.token = None;
            state.claims = None;
            state.rehydrated = true;
        }
        self.watchers.notify();
        Ok(())
    }

    /// Whether the session currently holds an unexpired token.
    ///
    /// Expiry is evaluated lazily on each call; there is no timer. Absent or
    /// malformed tokens and claims without an expiration are simply "not
    /// logged in", never errors.
    pub fn is_logged_in(&self) -> bool {
        match self.claims() {
            Ok(Some(claims)) => claims.exp.is_some_and(|exp| now_secs() < exp),
            _ => false,
        }
    }

    /// Register a callback invoked after every successful token write or
    /// clear.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        self.watchers.subscribe(callback)
    }

    /// Remove a previously registered callback. Removal only affects
    /// notifications after the current one.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.watchers.unsubscribe(id)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn now_secs() -> i64 {
    #[allow(clippy::cast_possible_wrap)]
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    secs
}
