//! Shared test fixtures for StampFinder crates.
//!
//! This crate provides data builders and small catalogs for testing.
//!
//! - [`stamps`] - Stamp builder and the three-stamp reference scenario
//! - [`catalog`] - A small catalog with shops
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! stampfinder-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use stampfinder_test::stamps::{StampBuilder, scenario_stamps};
//! use stampfinder_test::catalog::sample_catalog;
//! ```

pub mod catalog;
pub mod stamps;

// Re-export commonly used fixtures at crate root for convenience
pub use catalog::sample_catalog;
pub use stamps::{scenario_stamps, shared, StampBuilder};
