//! Perfee API
//!
//! Axum router and handlers mirroring the site's pages and actions.

pub mod handlers;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod pagination;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;
