//! Warning feedback derived from the distance estimate.
//!
//! The presentation contract is fixed: a red-to-green ramp over the
//! `[20, 60]` cm range, clamped at both ends, and a pulse animation whose
//! period shrinks as the face gets closer, clamped to `[0.5, 2.0]` seconds.

use nearguard_sensor_model::feedback::WarningColor;

/// Near edge of the warning ramp (cm); at or inside this the color is red.
pub const WARN_NEAR_CM: f64 = 20.0;

/// Far edge of the warning ramp (cm); at or beyond this the color is green.
pub const WARN_FAR_CM: f64 = 60.0;

/// Shortest pulse period (seconds), face at its closest.
pub const PULSE_MIN_SECS: f64 = 0.5;

/// Longest pulse period (seconds), face comfortably far away.
pub const PULSE_MAX_SECS: f64 = 2.0;

/// Map a distance to a warning color on the fixed red→green ramp.
pub fn warning_color(distance_cm: f64) -> WarningColor {
    let t = (distance_cm - WARN_NEAR_CM) / (WARN_FAR_CM - WARN_NEAR_CM);
    WarningColor::lerp(WarningColor::RED, WarningColor::GREEN, t)
}

/// Map a distance to a pulse animation period in seconds.
pub fn pulse_period_secs(distance_cm: f64) -> f64 {
    (distance_cm / 40.0).clamp(PULSE_MIN_SECS, PULSE_MAX_SECS)
}
