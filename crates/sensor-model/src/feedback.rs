//! Feedback values derived from the distance estimate.

use serde::{Deserialize, Serialize};

/// A warning color with normalized `[0.0, 1.0]` channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarningColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl WarningColor {
    /// Full-danger color (face at or inside the near edge of the ramp).
    pub const RED: WarningColor = WarningColor {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };

    /// All-clear color (face at or beyond the far edge of the ramp).
    pub const GREEN: WarningColor = WarningColor {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };

    /// Linear interpolation between two colors; `t` is clamped to `[0, 1]`.
    pub fn lerp(a: WarningColor, b: WarningColor, t: f64) -> WarningColor {
        let t = t.clamp(0.0, 1.0);
        WarningColor {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
        }
    }

    /// Convert to 8-bit channels for terminal / UI output.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}
