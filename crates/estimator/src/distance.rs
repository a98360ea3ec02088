//! Face distance estimation from pose samples.

use nearguard_sensor_model::sample::PoseSample;

/// Distance reported when no face anchor exists for a frame (cm).
pub const DISTANCE_SENTINEL_CM: f64 = 50.0;

/// The tracking source reports a face in front of the screen as a negative
/// z-translation in meters; negate and scale to centimeters from the device.
const Z_METERS_TO_DISTANCE_CM: f64 = -100.0;

/// Estimate the face distance in centimeters for one tracking frame.
///
/// Absence of a pose (tracking lost) yields [`DISTANCE_SENTINEL_CM`], never
/// an error. With a pose, the result is exact arithmetic on `translation.z`
/// with no clamping.
pub fn estimate_distance(pose: Option<&PoseSample>) -> f64 {
    match pose {
        Some(p) => p.translation.z * Z_METERS_TO_DISTANCE_CM,
        None => DISTANCE_SENTINEL_CM,
    }
}
