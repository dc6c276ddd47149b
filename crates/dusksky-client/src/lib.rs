//! Dusk Sky Client SDK
//!
//! Rust client for the Dusk Sky social game-cataloguing platform:
//! - Session store: bearer-token lifecycle, decoded claims, change watchers
//! - Request pipeline: authorized JSON calls with normalized error handling
//! - Service facades: one module per backend microservice
//! - Best-effort enrichment for composed fetches (home feed)

pub mod enrich;
pub mod home;
pub mod http;
pub mod services;
pub mod session;

pub use http::{ApiClient, ApiError};
pub use session::{Claims, DecodeError, Role, Session, SessionError, TokenStorage};
