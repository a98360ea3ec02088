//! Clock utilities for timestamping sensor samples.
//!
//! Both sensor streams stamp their samples against a single monotonic epoch
//! captured when the monitoring session starts, so pose frames and motion
//! samples share a timeline even though they arrive independently.

use std::time::Instant;

/// A session clock providing monotonic timestamps relative to a fixed
/// epoch (the moment monitoring started).
#[derive(Debug, Clone)]
pub struct SessionClock {
    /// The instant monitoring started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl SessionClock {
    /// Create a new session clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Get nanoseconds elapsed since the session started.
    pub fn elapsed_ns(&self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }

    /// Get seconds elapsed since the session started.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// Convert an elapsed nanosecond value to seconds.
    pub fn ns_to_secs(ns: u64) -> f64 {
        ns as f64 / 1_000_000_000.0
    }

    /// Convert seconds to nanoseconds.
    pub fn secs_to_ns(secs: f64) -> u64 {
        (secs * 1_000_000_000.0) as u64
    }
}
