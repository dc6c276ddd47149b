//! Decoded token claims for Dusk Sky sessions.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to extract claims from a bearer token.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("token payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("token payload is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// User role carried in the token. Closed set; unknown values fail decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Admin,
}

/// Claims embedded in the payload segment of an auth-service token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    #[serde(rename = "_id")]
    pub user_id: String,
    /// Username, when the auth service includes it.
    #[serde(default)]
    pub username: Option<String>,
    /// Role of the subject.
    #[serde(default)]
    pub role: Role,
    /// Expiration (unix timestamp, seconds). Tokens without one never count
    /// as logged in.
    #[serde(default)]
    pub exp: Option<i64>,
    /// Friend user IDs, when the auth service includes them.
    #[serde(default)]
    pub friends: Vec<String>,
}

impl Claims {
    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Decode the claims of a dot-delimited bearer token.
///
/// Only the payload segment is inspected; the client holds no signing secret
/// and never verifies signatures. Malformed tokens fail loudly rather than
/// yielding partial claims.
pub fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let payload = token.split('.').nth(1).ok_or(DecodeError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn forge_token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn decode_full_payload() {
        let token = forge_token(&json!({
            "_id": "u1",
            "username": "alice",
            "role": "moderator",
            "exp": 4_102_444_800_i64,
            "friends": ["u2", "u3"],
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, "u1");
        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert!(claims.is_moderator());
        assert_eq!(claims.exp, Some(4_102_444_800));
        assert_eq!(claims.friends, vec!["u2", "u3"]);
    }

    #[test]
    fn decode_minimal_payload() {
        let token = forge_token(&json!({"_id": "u1"}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, "u1");
        assert_eq!(claims.role, Role::User);
        assert!(claims.exp.is_none());
        assert!(claims.username.is_none());
        assert!(claims.friends.is_empty());
    }

    #[test]
    fn token_without_payload_segment_fails() {
        let err = decode_claims("justonesegment").unwrap_err();
        assert!(matches!(err, DecodeError::MissingPayload));
    }

    #[test]
    fn invalid_base64_payload_fails() {
        let err = decode_claims("header.!!!.sig").unwrap_err();
        assert!(matches!(err, DecodeError::Encoding(_)));
    }

    #[test]
    fn invalid_json_payload_fails() {
        let body = URL_SAFE_NO_PAD.encode(b"not json");
        let err = decode_claims(&format!("header.{body}.sig")).unwrap_err();
        assert!(matches!(err, DecodeError::Syntax(_)));
    }

    #[test]
    fn unknown_role_fails() {
        let token = forge_token(&json!({"_id": "u1", "role": "overlord"}));
        let err = decode_claims(&token).unwrap_err();
        assert!(matches!(err, DecodeError::Syntax(_)));
    }

    #[test]
    fn padded_payload_still_decodes() {
        let body = base64::engine::general_purpose::URL_SAFE.encode(br#"{"_id":"u1"}"#);
        let claims = decode_claims(&format!("h.{body}.s")).unwrap();
        assert_eq!(claims.user_id, "u1");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
