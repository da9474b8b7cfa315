//! Shared test infrastructure for the e2e suites

pub mod test_server;

#[allow(unused_imports)]
pub use test_server::TestServer;
