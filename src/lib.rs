//! Shared library for the Smart Campus advisor.
//! Contains the intent resolver, course-plan recommender, assistant wiring,
//! and configuration used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;

/// Returns the current version of the `campus-advisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
