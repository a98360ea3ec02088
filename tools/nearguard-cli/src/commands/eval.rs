//! One-shot evaluation of pose and motion samples.

use nearguard_common::config::AppConfig;
use nearguard_estimator::{distance, feedback, motion};
use nearguard_sensor_model::sample::{MotionSample, PoseSample};

pub fn run(pose_z: Option<f64>, accel: Option<Vec<f64>>) -> anyhow::Result<()> {
    let config = AppConfig::load();

    let pose = pose_z.map(|z| PoseSample::at_z(0, z));
    let distance_cm = distance::estimate_distance(pose.as_ref());
    let color = feedback::warning_color(distance_cm);
    let (r, g, b) = color.to_rgb8();

    match pose_z {
        Some(z) => println!("Pose z: {z} m"),
        None => println!("Pose: tracking lost"),
    }
    println!("  Distance: {distance_cm:.1} cm");
    println!("  Warning color: #{r:02x}{g:02x}{b:02x}");
    println!(
        "  Pulse period: {:.2} s",
        feedback::pulse_period_secs(distance_cm)
    );
    if distance_cm < config.thresholds.warn_near_cm {
        println!(
            "  TOO CLOSE (below {} cm)",
            config.thresholds.warn_near_cm
        );
    }

    if let Some(accel) = accel {
        anyhow::ensure!(accel.len() == 3, "--accel takes exactly three values");
        let sample = MotionSample::new(0, accel[0], accel[1], accel[2]);
        let reset = motion::should_reset(&sample, config.thresholds.reset_accel);
        println!();
        println!(
            "Motion sample: ({}, {}, {}) g",
            accel[0], accel[1], accel[2]
        );
        println!(
            "  Re-acquire tracking: {}",
            if reset { "yes" } else { "no" }
        );
    }

    Ok(())
}
