//! NearGuard Common Utilities
//!
//! Shared infrastructure for all NearGuard crates:
//! - Error types and result aliases
//! - Monitoring clock for timestamping sensor samples
//! - Tracing/logging initialization
//! - Threshold and logging configuration

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
