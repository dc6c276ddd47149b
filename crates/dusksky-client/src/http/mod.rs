//! Authenticated request pipeline.
//!
//! Every outbound call in the SDK goes through [`ApiClient`]: consistent
//! request construction, bearer authorization from the session, and
//! normalized error extraction. No facade builds requests on its own.

mod client;


pub use client::{ApiClient, ApiError};
