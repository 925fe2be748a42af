//! # Brickset Shared
//!
//! Error and configuration types used across all Brickset crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
