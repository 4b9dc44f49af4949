//! Library crate for the now-playing scraper.

// Re-export the main modules needed for integration tests
pub mod common;
pub mod domain;
pub mod infra;
pub mod observability;
pub mod poller;
pub mod scrapers;

// Re-export commonly used types
pub use domain::Song;
