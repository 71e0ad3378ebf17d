use serde::{Deserialize, Serialize};

/// Center of an axis in percent units.
pub const CENTER: f64 = 50.0;

/// Focal point and zoom for displaying an image inside a square viewport.
///
/// `x` and `y` are percentages in [0, 100] with 50 meaning the image center;
/// `scale` is the zoom multiplier on top of the cover fit (1.0 = the image's
/// shorter side exactly fills the viewport). A valid position keeps the
/// viewport fully covered by image content; see [`crate::bounds::PanBounds`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FramePosition {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for FramePosition {
    fn default() -> Self {
        Self {
            x: CENTER,
            y: CENTER,
            scale: 1.0,
        }
    }
}

impl FramePosition {
    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }
}

/// Constrain `value` to `[min, max]`.
///
/// Total ordering only — callers must never pass NaN, which would indicate an
/// upstream measurement failure.
pub fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
