//! Sensor sample types for the NearGuard streams.
//!
//! Pose frames arrive once per tracking frame; motion samples arrive at a
//! fixed interval (0.5 s nominal). Both stamp a shared monotonic timeline.
//! Translation components are in meters with z pointing away from the
//! observer, so a face in front of the screen has a negative z. Acceleration
//! components are user-induced acceleration in g with gravity removed.

use serde::{Deserialize, Serialize};

/// Monotonic timestamp in nanoseconds since session start.
pub type TimestampNs = u64;

/// A 3-component vector. Units depend on context (meters for translation,
/// g for acceleration).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Largest absolute component.
    pub fn max_abs_component(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

/// Unit quaternion orientation, `(x, y, z, w)` component order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rigid transform of a tracked face relative to the sensing device.
///
/// Only `translation.z` is consumed by the estimator; orientation is carried
/// so adapters can hand the full anchor transform through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    /// Monotonic nanoseconds since session start.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// Face position relative to the device, meters.
    pub translation: Vec3,

    /// Face orientation relative to the device.
    pub rotation: Quaternion,
}

impl PoseSample {
    /// A pose at the given z-translation with identity rotation.
    pub fn at_z(timestamp_ns: TimestampNs, z: f64) -> Self {
        Self {
            timestamp_ns,
            translation: Vec3::new(0.0, 0.0, z),
            rotation: Quaternion::IDENTITY,
        }
    }
}

/// One tracking frame. The face anchor may be absent (tracking lost);
/// absence is a valid, expected state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Monotonic nanoseconds since session start.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// The tracked pose, if any face anchor exists this frame.
    pub pose: Option<PoseSample>,
}

impl PoseFrame {
    /// A frame carrying a tracked pose.
    pub fn tracked(pose: PoseSample) -> Self {
        Self {
            timestamp_ns: pose.timestamp_ns,
            pose: Some(pose),
        }
    }

    /// A frame in which tracking had no face anchor.
    pub fn lost(timestamp_ns: TimestampNs) -> Self {
        Self {
            timestamp_ns,
            pose: None,
        }
    }
}

/// One user-acceleration sample with gravity removed, in g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    /// Monotonic nanoseconds since session start.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// User acceleration per axis, in g.
    pub accel: Vec3,
}

impl MotionSample {
    pub fn new(timestamp_ns: TimestampNs, x: f64, y: f64, z: f64) -> Self {
        Self {
            timestamp_ns,
            accel: Vec3::new(x, y, z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_abs_component() {
        assert_eq!(Vec3::new(0.05, -0.25, 0.1).max_abs_component(), 0.25);
        assert_eq!(Vec3::ZERO.max_abs_component(), 0.0);
        assert_eq!(Vec3::new(-0.3, 0.1, 0.2).max_abs_component(), 0.3);
    }

    #[test]
    fn test_pose_frame_constructors() {
        let pose = PoseSample::at_z(42, -0.5);
        let frame = PoseFrame::tracked(pose);
        assert_eq!(frame.timestamp_ns, 42);
        assert_eq!(frame.pose.unwrap().translation.z, -0.5);

        let lost = PoseFrame::lost(99);
        assert_eq!(lost.timestamp_ns, 99);
        assert!(lost.pose.is_none());
    }

    #[test]
    fn test_sample_serde_round_trip() {
        let sample = MotionSample::new(1_000_000, 0.05, -0.25, 0.1);
        let json = serde_json::to_string(&sample).unwrap();
        let parsed: MotionSample = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample);
    }
}
