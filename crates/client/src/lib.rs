//! Perfee Client
//!
//! Reqwest-based implementation of the `BackendApi` trait: one method per
//! backend endpoint, shared envelope unwrapping, and uniform translation of
//! failures into Korean user-facing messages.

pub mod client;

pub use client::HttpBackendClient;
pub use perfee_types::{BackendApi, BackendResult, ClientError};
