//! Tests for the session store.

#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use tempfile::TempDir;

use super::{DecodeError, Role, Session, SessionError, TokenStorage};

fn forge_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.sig")
}

fn future_exp() -> i64 {
    4_102_444_800 // 2100-01-01
}

fn test_session() -> (Session, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(TokenStorage::new(dir.path().join("token")));
    (session, dir)
}

#[test]
fn set_token_returns_decoded_claims() {
    let (session, _dir) = test_session();
    let token = forge_token(&json!({
        "_id": "u1",
        "username": "alice",
        "role": "admin",
        "exp": future_exp(),
    }));

    let claims = session.set_token(&token).unwrap();
    assert_eq!(claims.user_id, "u1");
    assert_eq!(claims.role, Role::Admin);

    let cached = session.claims().unwrap().unwrap();
    assert_eq!(cached, claims);
    assert_eq!(session.token().unwrap().as_deref(), Some(token.as_str()));
}

#[test]
fn malformed_token_is_rejected_and_nothing_is_stored() {
    let (session, _dir) = test_session();
    let err = session.set_token("no-payload-segment").unwrap_err();
    assert!(matches!(err, SessionError::Decode(DecodeError::MissingPayload)));

    assert!(session.token().unwrap().is_none());
    assert!(session.claims().unwrap().is_none());
    assert!(!session.is_logged_in());
}

#[test]
fn clear_token_removes_everything() {
    let (session, _dir) = test_session();
    let token = forge_token(&json!({"_id": "u1", "exp": future_exp()}));
    session.set_token(&token).unwrap();

    session.clear_token().unwrap();
    assert!(session.token().unwrap().is_none());
    assert!(session.claims().unwrap().is_none());
    assert!(!session.is_logged_in());
}

#[test]
fn set_clear_set_yields_identical_claims() {
    let (session, _dir) = test_session();
    let token = forge_token(&json!({"_id": "u1", "role": "moderator", "exp": future_exp()}));

    let first = session.set_token(&token).unwrap();
    session.clear_token().unwrap();
    let second = session.set_token(&token).unwrap();
    assert_eq!(first, second);
}

#[test]
fn is_logged_in_tracks_expiry() {
    let (session, _dir) = test_session();

    let live = forge_token(&json!({"_id": "u1", "exp": future_exp()}));
    session.set_token(&live).unwrap();
    assert!(session.is_logged_in());

    let expired = forge_token(&json!({"_id": "u1", "exp": 1_000_000_000}));
    session.set_token(&expired).unwrap();
    assert!(!session.is_logged_in());
}

#[test]
fn claims_without_exp_are_never_logged_in() {
    let (session, _dir) = test_session();
    let token = forge_token(&json!({"_id": "u1"}));
    session.set_token(&token).unwrap();
    assert!(!session.is_logged_in());
    // Still present as claims, though.
    assert!(session.claims().unwrap().is_some());
}

#[test]
fn token_rehydrates_from_durable_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    let token = forge_token(&json!({"_id": "u7", "exp": future_exp()}));

    let first = Session::new(TokenStorage::new(&path));
    first.set_token(&token).unwrap();
    drop(first);

    let second = Session::new(TokenStorage::new(&path));
    assert_eq!(second.token().unwrap().as_deref(), Some(token.as_str()));
    assert_eq!(second.claims().unwrap().unwrap().user_id, "u7");
    assert!(second.is_logged_in());
}

#[test]
fn rehydration_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    let token = forge_token(&json!({"_id": "u7", "exp": future_exp()}));

    Session::new(TokenStorage::new(&path)).set_token(&token).unwrap();

    let session = Session::new(TokenStorage::new(&path));
    let fired = Arc::new(AtomicUsize::new(0));
    {
        let fired = Arc::clone(&fired);
        session.subscribe(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }
    assert!(session.token().unwrap().is_some());
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn rehydration_happens_at_most_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    let session = Session::new(TokenStorage::new(&path));

    // Nothing on disk: the first lookup marks the session rehydrated.
    assert!(session.token().unwrap().is_none());

    // A token appearing on disk afterwards is not picked up.
    std::fs::write(&path, forge_token(&json!({"_id": "late"}))).unwrap();
    assert!(session.token().unwrap().is_none());
}

#[test]
fn rehydrating_a_malformed_stored_token_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "garbage-token").unwrap();

    let session = Session::new(TokenStorage::new(&path));
    let err = session.token().unwrap_err();
    assert!(matches!(err, SessionError::Decode(_)));
    // But the status query stays an answer, not an error.
    assert!(!session.is_logged_in());
}

#[test]
fn every_write_and_clear_notifies_exactly_once() {
    let (session, _dir) = test_session();
    let fired = Arc::new(AtomicUsize::new(0));
    {
        let fired = Arc::clone(&fired);
        session.subscribe(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }

    let token = forge_token(&json!({"_id": "u1", "exp": future_exp()}));
    session.set_token(&token).unwrap();
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    session.clear_token().unwrap();
    assert_eq!(fired.load(Ordering::SeqCst), 2);

    session.set_token(&token).unwrap();
    assert_eq!(fired.load(Ordering::SeqCst), 3);
}

#[test]
fn rejected_set_token_does_not_notify() {
    let (session, _dir) = test_session();
    let fired = Arc::new(AtomicUsize::new(0));
    {
        let fired = Arc::clone(&fired);
        session.subscribe(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }
    let _ = session.set_token("malformed");
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn sessions_are_isolated_per_storage() {
    let (a, _dir_a) = test_session();
    let (b, _dir_b) = test_session();

    let token = forge_token(&json!({"_id": "u1", "exp": future_exp()}));
    a.set_token(&token).unwrap();
    assert!(a.is_logged_in());
    assert!(!b.is_logged_in());
}
