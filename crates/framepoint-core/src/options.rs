use serde::{Deserialize, Serialize};

use crate::position::clamp_axis;

/// Tunable limits for a framing session.
///
/// The defaults match what every shipped frontend uses; changing them only
/// affects sessions created afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingOptions {
    /// Minimum zoom (1.0 = cover fit, no zoom).
    pub min_scale: f64,
    /// Maximum zoom.
    pub max_scale: f64,
    /// Step applied per zoom-in/zoom-out action.
    pub zoom_step: f64,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 3.0,
            zoom_step: 0.2,
        }
    }
}

impl FramingOptions {
    /// Constrain a raw zoom value into the allowed range.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        clamp_axis(scale, self.min_scale, self.max_scale)
    }

    pub fn scale_in_range(&self, scale: f64) -> bool {
        scale >= self.min_scale && scale <= self.max_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = FramingOptions::default();
        assert_eq!(o.min_scale, 1.0);
        assert_eq!(o.max_scale, 3.0);
        assert_eq!(o.zoom_step, 0.2);
    }

    #[test]
    fn clamp_scale() {
        let o = FramingOptions::default();
        assert_eq!(o.clamp_scale(0.3), 1.0);
        assert_eq!(o.clamp_scale(7.0), 3.0);
        assert_eq!(o.clamp_scale(2.2), 2.2);
    }
}
