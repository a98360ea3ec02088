//! NearGuard Monitor
//!
//! Coordinates the two sensor streams around the pure estimator. Pose frames
//! and motion samples arrive on independent mpsc channels at source-controlled
//! rates; the monitor applies the estimator to each sample in arrival order
//! and owns the only two outputs:
//!
//! - the published distance, a `watch` channel with this monitor as its single
//!   writer (the presentation layer reads or awaits changes on its own
//!   context, so no further locking is needed)
//! - fire-and-forget reset requests to the tracking collaborator, which
//!   discards its accumulated anchors and restarts from a clean state
//!
//! Pausing suppresses distance publication but keeps evaluating motion
//! samples; the motion stream is never stopped by a pause.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nearguard_common::config::ThresholdConfig;
use nearguard_common::error::NearguardResult;
use nearguard_estimator::distance::{estimate_distance, DISTANCE_SENTINEL_CM};
use nearguard_estimator::motion::should_reset;
use nearguard_sensor_model::sample::{MotionSample, PoseFrame, TimestampNs, Vec3};
use tokio::sync::{mpsc, watch};

/// Buffered pose frames before the tracking source sees backpressure.
pub const POSE_CHANNEL_CAPACITY: usize = 64;

/// Buffered motion samples; the stream is slow (0.5 s interval), so small.
pub const MOTION_CHANNEL_CAPACITY: usize = 8;

/// Outstanding reset requests before further ones are dropped.
pub const RESET_CHANNEL_CAPACITY: usize = 4;

/// Monitor decision thresholds.
#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    /// Per-axis acceleration (g) above which a reset request is emitted.
    pub reset_accel: f64,

    /// Distance (cm) below which a too-close warning is logged.
    pub warn_near_cm: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        ThresholdConfig::default().into()
    }
}

impl From<ThresholdConfig> for MonitorConfig {
    fn from(thresholds: ThresholdConfig) -> Self {
        Self {
            reset_accel: thresholds.reset_accel,
            warn_near_cm: thresholds.warn_near_cm,
        }
    }
}

/// Request to the tracking collaborator to discard anchors and restart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetRequest {
    /// Timestamp of the motion sample that triggered the request.
    pub timestamp_ns: TimestampNs,

    /// The offending acceleration, for diagnostics.
    pub accel: Vec3,
}

/// The channel endpoints handed to sensor adapters and the presentation layer.
pub struct MonitorChannels {
    /// Tracking source pushes one frame per tracking update.
    pub pose_tx: mpsc::Sender<PoseFrame>,

    /// Motion source pushes one sample per sampling interval.
    pub motion_tx: mpsc::Sender<MotionSample>,

    /// Presentation layer observes the published distance here.
    pub distance_rx: watch::Receiver<f64>,

    /// Tracking collaborator drains reset requests here.
    pub reset_rx: mpsc::Receiver<ResetRequest>,
}

/// Counters reported when a monitoring session ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonitorStats {
    /// Pose frames consumed (tracked or lost).
    pub frames_seen: u64,

    /// Motion samples consumed.
    pub motion_samples_seen: u64,

    /// Reset requests emitted.
    pub resets_requested: u64,
}

/// The proximity monitor that couples the sensor streams to the estimator.
pub struct ProximityMonitor {
    config: MonitorConfig,
    pose_rx: mpsc::Receiver<PoseFrame>,
    motion_rx: mpsc::Receiver<MotionSample>,
    distance_tx: watch::Sender<f64>,
    reset_tx: mpsc::Sender<ResetRequest>,
    paused: Arc<AtomicBool>,
    stop_flag: Arc<AtomicBool>,
    stats: MonitorStats,
}

impl ProximityMonitor {
    /// Create a monitor and the channel endpoints for its collaborators.
    ///
    /// The published distance starts at the sentinel, matching a session in
    /// which no face has been tracked yet.
    pub fn new(config: MonitorConfig) -> (Self, MonitorChannels) {
        let (pose_tx, pose_rx) = mpsc::channel(POSE_CHANNEL_CAPACITY);
        let (motion_tx, motion_rx) = mpsc::channel(MOTION_CHANNEL_CAPACITY);
        let (distance_tx, distance_rx) = watch::channel(DISTANCE_SENTINEL_CM);
        let (reset_tx, reset_rx) = mpsc::channel(RESET_CHANNEL_CAPACITY);

        let monitor = Self {
            config,
            pose_rx,
            motion_rx,
            distance_tx,
            reset_tx,
            paused: Arc::new(AtomicBool::new(false)),
            stop_flag: Arc::new(AtomicBool::new(false)),
            stats: MonitorStats::default(),
        };

        let channels = MonitorChannels {
            pose_tx,
            motion_tx,
            distance_rx,
            reset_rx,
        };

        (monitor, channels)
    }

    /// Flag that suppresses distance publication while set.
    pub fn pause_flag(&self) -> Arc<AtomicBool> {
        self.paused.clone()
    }

    /// Flag that ends the run loop at the next delivered sample.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Consume samples until both inbound channels close or the stop flag is
    /// set. Returns session counters.
    pub async fn run(mut self) -> NearguardResult<MonitorStats> {
        tracing::info!(
            reset_accel = self.config.reset_accel,
            warn_near_cm = self.config.warn_near_cm,
            "Proximity monitor started"
        );

        let mut pose_open = true;
        let mut motion_open = true;

        while (pose_open || motion_open) && !self.stop_flag.load(Ordering::Relaxed) {
            tokio::select! {
                frame = self.pose_rx.recv(), if pose_open => match frame {
                    Some(frame) => self.on_pose_frame(frame),
                    None => pose_open = false,
                },
                sample = self.motion_rx.recv(), if motion_open => match sample {
                    Some(sample) => self.on_motion_sample(sample),
                    None => motion_open = false,
                },
            }
        }

        tracing::info!(
            frames = self.stats.frames_seen,
            motion_samples = self.stats.motion_samples_seen,
            resets = self.stats.resets_requested,
            "Proximity monitor stopped"
        );
        Ok(self.stats)
    }

    fn on_pose_frame(&mut self, frame: PoseFrame) {
        self.stats.frames_seen += 1;
        let distance_cm = estimate_distance(frame.pose.as_ref());

        if self.paused.load(Ordering::Relaxed) {
            tracing::trace!(distance_cm, "Paused, distance not published");
            return;
        }

        self.distance_tx.send_replace(distance_cm);

        if distance_cm < self.config.warn_near_cm {
            tracing::warn!(distance_cm, "Face too close to screen");
        } else {
            tracing::trace!(distance_cm, tracked = frame.pose.is_some(), "Distance published");
        }
    }

    fn on_motion_sample(&mut self, sample: MotionSample) {
        self.stats.motion_samples_seen += 1;

        if !should_reset(&sample, self.config.reset_accel) {
            return;
        }

        self.stats.resets_requested += 1;
        tracing::info!(
            ax = sample.accel.x,
            ay = sample.accel.y,
            az = sample.accel.z,
            "Device moved, requesting tracking reset"
        );

        let request = ResetRequest {
            timestamp_ns: sample.timestamp_ns,
            accel: sample.accel,
        };
        // Fire-and-forget: if the collaborator is behind, dropping the
        // request is harmless since the next jolt emits another.
        if let Err(e) = self.reset_tx.try_send(request) {
            tracing::warn!(error = %e, "Reset request dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearguard_sensor_model::sample::PoseSample;

    fn spawn_monitor() -> (
        MonitorChannels,
        Arc<AtomicBool>,
        tokio::task::JoinHandle<NearguardResult<MonitorStats>>,
    ) {
        let (monitor, channels) = ProximityMonitor::new(MonitorConfig::default());
        let paused = monitor.pause_flag();
        let task = tokio::spawn(monitor.run());
        (channels, paused, task)
    }

    #[tokio::test]
    async fn test_tracked_frame_publishes_distance() {
        let (mut channels, _paused, task) = spawn_monitor();

        let frame = PoseFrame::tracked(PoseSample::at_z(1, -0.32));
        channels.pose_tx.send(frame).await.unwrap();

        channels.distance_rx.changed().await.unwrap();
        assert!((*channels.distance_rx.borrow() - 32.0).abs() < 1e-9);

        drop(channels.pose_tx);
        drop(channels.motion_tx);
        let stats = task.await.unwrap().unwrap();
        assert_eq!(stats.frames_seen, 1);
    }

    #[tokio::test]
    async fn test_lost_frame_publishes_sentinel() {
        let (mut channels, _paused, task) = spawn_monitor();

        channels
            .pose_tx
            .send(PoseFrame::tracked(PoseSample::at_z(1, -0.25)))
            .await
            .unwrap();
        channels.distance_rx.changed().await.unwrap();
        assert!((*channels.distance_rx.borrow() - 25.0).abs() < 1e-9);

        // Tracking loss overrides the prior reading with the sentinel.
        channels.pose_tx.send(PoseFrame::lost(2)).await.unwrap();
        channels.distance_rx.changed().await.unwrap();
        assert_eq!(*channels.distance_rx.borrow(), DISTANCE_SENTINEL_CM);

        drop(channels.pose_tx);
        drop(channels.motion_tx);
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_jolt_emits_reset_request() {
        let (mut channels, _paused, task) = spawn_monitor();

        let sample = MotionSample::new(7, 0.05, -0.25, 0.1);
        channels.motion_tx.send(sample).await.unwrap();

        let request = channels.reset_rx.recv().await.unwrap();
        assert_eq!(request.timestamp_ns, 7);
        assert_eq!(request.accel, Vec3::new(0.05, -0.25, 0.1));

        drop(channels.pose_tx);
        drop(channels.motion_tx);
        let stats = task.await.unwrap().unwrap();
        assert_eq!(stats.resets_requested, 1);
        assert_eq!(stats.motion_samples_seen, 1);
    }

    #[tokio::test]
    async fn test_threshold_boundary_emits_no_reset() {
        let (channels, _paused, task) = spawn_monitor();

        channels
            .motion_tx
            .send(MotionSample::new(1, 0.2, 0.2, 0.2))
            .await
            .unwrap();
        channels
            .motion_tx
            .send(MotionSample::new(2, 0.1, 0.1, 0.1))
            .await
            .unwrap();

        drop(channels.pose_tx);
        drop(channels.motion_tx);
        let stats = task.await.unwrap().unwrap();
        assert_eq!(stats.motion_samples_seen, 2);
        assert_eq!(stats.resets_requested, 0);
    }

    #[tokio::test]
    async fn test_pause_suppresses_publication_but_not_resets() {
        let (mut channels, paused, task) = spawn_monitor();
        paused.store(true, Ordering::SeqCst);

        // Pose frames are consumed but not published while paused.
        channels
            .pose_tx
            .send(PoseFrame::tracked(PoseSample::at_z(1, -0.1)))
            .await
            .unwrap();

        // Motion keeps being evaluated while paused.
        channels
            .motion_tx
            .send(MotionSample::new(2, 0.0, 0.3, 0.0))
            .await
            .unwrap();
        let request = channels.reset_rx.recv().await.unwrap();
        assert_eq!(request.timestamp_ns, 2);

        drop(channels.pose_tx);
        drop(channels.motion_tx);
        let stats = task.await.unwrap().unwrap();
        assert_eq!(stats.frames_seen, 1);
        assert_eq!(stats.resets_requested, 1);

        // The paused frame never reached the watch channel.
        assert_eq!(*channels.distance_rx.borrow(), DISTANCE_SENTINEL_CM);
    }

    #[tokio::test]
    async fn test_stop_flag_ends_run_with_streams_still_open() {
        let (monitor, mut channels) = ProximityMonitor::new(MonitorConfig::default());
        let stop = monitor.stop_flag();
        let task = tokio::spawn(monitor.run());

        channels
            .pose_tx
            .send(PoseFrame::tracked(PoseSample::at_z(1, -0.4)))
            .await
            .unwrap();
        channels.distance_rx.changed().await.unwrap();

        // The flag is only observed when a delivered sample wakes the loop
        // (the select blocks while the streams are idle), so one more frame
        // is delivered after setting it.
        stop.store(true, Ordering::SeqCst);
        channels
            .pose_tx
            .send(PoseFrame::tracked(PoseSample::at_z(2, -0.3)))
            .await
            .unwrap();

        // Both senders are still alive: termination came from the flag,
        // not from channel closure. The second frame may or may not be
        // consumed before the loop notices the flag.
        let stats = task.await.unwrap().unwrap();
        assert!(stats.frames_seen >= 1);
        drop(channels.pose_tx);
        drop(channels.motion_tx);
    }

    #[tokio::test]
    async fn test_distance_starts_at_sentinel() {
        let (monitor, channels) = ProximityMonitor::new(MonitorConfig::default());
        assert_eq!(*channels.distance_rx.borrow(), DISTANCE_SENTINEL_CM);
        drop(monitor);
    }
}
