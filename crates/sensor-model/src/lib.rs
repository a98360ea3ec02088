//! NearGuard Sensor Model
//!
//! Plain data types flowing through the proximity pipeline: pose frames from
//! the face-tracking source, motion samples from the accelerometer, and the
//! derived feedback values handed to a presentation layer.
//!
//! This crate holds no logic beyond small accessors; all computation lives in
//! `nearguard-estimator`.

pub mod feedback;
pub mod sample;

pub use feedback::WarningColor;
pub use sample::{MotionSample, PoseFrame, PoseSample, Quaternion, TimestampNs, Vec3};
