//! Reset decisions from device-motion samples.

use nearguard_sensor_model::sample::MotionSample;

/// Per-axis user acceleration (g) above which tracking is re-acquired.
pub const RESET_ACCEL_THRESHOLD: f64 = 0.2;

/// Decide whether a motion sample warrants re-acquiring face tracking.
///
/// True iff any axis strictly exceeds `threshold` in magnitude. A component
/// exactly equal to the threshold does not trigger. Pure per-sample
/// predicate; no debouncing across samples.
pub fn should_reset(sample: &MotionSample, threshold: f64) -> bool {
    sample.accel.max_abs_component() > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_jolt_on_one_axis_triggers() {
        let sample = MotionSample::new(0, 0.05, -0.25, 0.1);
        assert!(should_reset(&sample, RESET_ACCEL_THRESHOLD));
    }

    #[test]
    fn test_mild_motion_does_not_trigger() {
        let sample = MotionSample::new(0, 0.1, 0.1, 0.1);
        assert!(!should_reset(&sample, RESET_ACCEL_THRESHOLD));
    }

    #[test]
    fn test_exact_threshold_does_not_trigger() {
        // Strict inequality: a component at exactly the threshold stays quiet.
        for sample in [
            MotionSample::new(0, 0.2, 0.0, 0.0),
            MotionSample::new(0, 0.0, -0.2, 0.0),
            MotionSample::new(0, 0.0, 0.0, 0.2),
        ] {
            assert!(!should_reset(&sample, RESET_ACCEL_THRESHOLD));
        }
    }

    #[test]
    fn test_negative_axis_counts_by_magnitude() {
        let sample = MotionSample::new(0, -0.21, 0.0, 0.0);
        assert!(should_reset(&sample, RESET_ACCEL_THRESHOLD));
    }

    proptest! {
        #[test]
        fn prop_matches_per_axis_disjunction(
            x in -1.0f64..1.0,
            y in -1.0f64..1.0,
            z in -1.0f64..1.0,
        ) {
            let sample = MotionSample::new(0, x, y, z);
            let expected = x.abs() > 0.2 || y.abs() > 0.2 || z.abs() > 0.2;
            prop_assert_eq!(should_reset(&sample, 0.2), expected);
        }
    }
}
