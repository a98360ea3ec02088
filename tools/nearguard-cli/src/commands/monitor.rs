//! Run a simulated monitoring session.
//!
//! Synthetic producers stand in for the two hardware sources: a tracking
//! source emitting pose frames at a fixed frame rate (with a short dropout
//! every couple of seconds) and a motion source emitting acceleration samples
//! every 0.5 s (with an occasional jolt that exceeds the reset threshold).

use std::time::Duration;

use nearguard_common::clock::SessionClock;
use nearguard_common::config::AppConfig;
use nearguard_estimator::feedback;
use nearguard_monitor::{MonitorChannels, MonitorConfig, ProximityMonitor};
use nearguard_sensor_model::sample::{MotionSample, PoseFrame, PoseSample};
use tokio::time::interval;

/// Motion sampling interval of the simulated accelerometer.
const MOTION_INTERVAL: Duration = Duration::from_millis(500);

pub async fn run(duration_secs: f64, approach_rate: f64, frame_rate: u32) -> anyhow::Result<()> {
    let config = AppConfig::load();
    let frame_rate = frame_rate.max(1);

    println!("Simulated monitoring session");
    println!("  Duration: {duration_secs} s");
    println!("  Approach rate: {approach_rate} cm/s");
    println!("  Pose frame rate: {frame_rate} Hz");
    println!();

    let (monitor, channels) = ProximityMonitor::new(MonitorConfig::from(config.thresholds));
    let MonitorChannels {
        pose_tx,
        motion_tx,
        mut distance_rx,
        mut reset_rx,
    } = channels;

    let monitor_task = tokio::spawn(monitor.run());
    let clock = SessionClock::start();
    tracing::debug!(started = clock.epoch_wall(), "Session clock anchored");

    // Simulated tracking source: the face starts at 45 cm and bounces
    // between 15 and 45 cm; every ~2 s one frame loses the anchor.
    let pose_clock = clock.clone();
    let pose_task = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis((1000 / u64::from(frame_rate)).max(1)));
        let dropout_every = u64::from(frame_rate) * 2;
        let mut frame: u64 = 0;
        loop {
            ticker.tick().await;
            if pose_clock.elapsed_secs() >= duration_secs {
                break;
            }
            frame += 1;
            let now_ns = pose_clock.elapsed_ns();
            let sample = if frame % dropout_every == 0 {
                PoseFrame::lost(now_ns)
            } else {
                let distance_cm =
                    bounce(15.0, 45.0, 45.0 - approach_rate * pose_clock.elapsed_secs());
                PoseFrame::tracked(PoseSample::at_z(now_ns, distance_cm / -100.0))
            };
            if pose_tx.send(sample).await.is_err() {
                break;
            }
        }
    });

    // Simulated motion source: mostly still, one jolt every fifth sample.
    let motion_clock = clock.clone();
    let motion_task = tokio::spawn(async move {
        let mut ticker = interval(MOTION_INTERVAL);
        let mut tick: u64 = 0;
        loop {
            ticker.tick().await;
            if motion_clock.elapsed_secs() >= duration_secs {
                break;
            }
            tick += 1;
            let now_ns = motion_clock.elapsed_ns();
            let sample = if tick % 5 == 0 {
                MotionSample::new(now_ns, 0.05, -0.25, 0.1)
            } else {
                MotionSample::new(now_ns, 0.02, 0.01, 0.03)
            };
            if motion_tx.send(sample).await.is_err() {
                break;
            }
        }
    });

    // Presentation stand-in: print the reading whenever it moves by at
    // least a centimeter.
    let reader_task = tokio::spawn(async move {
        let mut last_printed = f64::NAN;
        while distance_rx.changed().await.is_ok() {
            let distance_cm = *distance_rx.borrow_and_update();
            if (distance_cm - last_printed).abs() < 1.0 {
                continue;
            }
            last_printed = distance_cm;
            let (r, g, b) = feedback::warning_color(distance_cm).to_rgb8();
            println!(
                "  distance {distance_cm:6.1} cm   color #{r:02x}{g:02x}{b:02x}   pulse {:.2} s",
                feedback::pulse_period_secs(distance_cm)
            );
        }
    });

    // Tracking-collaborator stand-in: acknowledge reset requests.
    let reset_task = tokio::spawn(async move {
        while let Some(request) = reset_rx.recv().await {
            println!(
                "  reset requested at t={:.1} s (accel {:.2}, {:.2}, {:.2} g)",
                SessionClock::ns_to_secs(request.timestamp_ns),
                request.accel.x,
                request.accel.y,
                request.accel.z,
            );
        }
    });

    pose_task.await?;
    motion_task.await?;

    // Producers are done and their senders dropped; the monitor drains the
    // channels and returns its counters.
    let stats = monitor_task.await??;
    reader_task.await?;
    reset_task.await?;

    println!();
    println!("Session finished:");
    println!("  Pose frames: {}", stats.frames_seen);
    println!("  Motion samples: {}", stats.motion_samples_seen);
    println!("  Resets requested: {}", stats.resets_requested);

    Ok(())
}

/// Reflect an unbounded coordinate into `[min, max]` (triangle wave), so the
/// simulated face approaches, turns around, and retreats indefinitely.
fn bounce(min: f64, max: f64, value: f64) -> f64 {
    let span = max - min;
    let cycle = 2.0 * span;
    let phase = ((value - min) % cycle + cycle) % cycle;
    if phase <= span {
        min + phase
    } else {
        min + cycle - phase
    }
}
