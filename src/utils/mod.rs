//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`HttpFetcher`] - Network fetching over the Fetch API
//! - [`dom`] - Window, location and layout helpers

pub mod dom;
mod fetch;

pub use fetch::HttpFetcher;
