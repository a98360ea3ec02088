//! NearGuard Estimator
//!
//! Turns raw sensor samples into the values the rest of the system acts on:
//! - **Distance:** face distance in centimeters from a pose sample, with a
//!   sentinel fallback when tracking is lost
//! - **Reset:** whether a motion sample warrants re-acquiring tracking
//! - **Feedback:** warning color and pulse period derived from distance
//!
//! Every function here is a total, stateless transform: no I/O, no hidden
//! state, no platform dependencies. All inputs are data; all outputs are data.
//! Deliberately absent: smoothing, debouncing, and hysteresis — each sample is
//! judged on its own.

pub mod distance;
pub mod feedback;
pub mod motion;

pub use distance::{estimate_distance, DISTANCE_SENTINEL_CM};
pub use feedback::{pulse_period_secs, warning_color};
pub use motion::{should_reset, RESET_ACCEL_THRESHOLD};
