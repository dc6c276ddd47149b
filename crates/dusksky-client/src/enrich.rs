//! Best-effort enrichment.
//!
//! Secondary lookups that decorate a primary object (author names, game
//! artwork) degrade to a fallback instead of failing the whole view. This is
//! the single place that policy lives; call sites pick only the fallback.

use std::future::Future;

use crate::http::ApiError;

/// Await a lookup; on failure log it and substitute `fallback`.
pub async fn best_effort<T, F>(what: &'static str, fut: F, fallback: T) -> T
where
    F: Future<Output = Result<T, ApiError>>,
{
    match fut.await {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, what, "lookup failed, substituting fallback");
            fallback
        }
    }
}
