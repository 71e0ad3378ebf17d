use crate::error::{FramepointError, Result};
use crate::metrics::ImageMetrics;
use crate::options::FramingOptions;
use crate::position::{clamp_axis, FramePosition, CENTER};

/// Maximum pan offset from center, per axis, in percent of the viewport side.
///
/// The image is fitted so its shorter side exactly covers the square viewport
/// at scale 1; the longer side's overhang, plus the extra overhang from
/// zooming past 1, is the pannable range. Zero on both axes means the focal
/// point is pinned to the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl PanBounds {
    /// Pan range for an image of the given intrinsic aspect ratio at `scale`.
    ///
    /// Landscape images overhang horizontally at scale 1, portrait images
    /// vertically, square images not at all. `aspect_ratio` must be finite
    /// and positive; [`ImageMetrics`] guarantees that at construction.
    pub fn compute(aspect_ratio: f64, scale: f64) -> Self {
        let zoom_overhang = (scale - 1.0) * 50.0;
        let (base_x, base_y) = if aspect_ratio > 1.0 {
            ((aspect_ratio - 1.0) / 2.0 * 100.0, 0.0)
        } else if aspect_ratio < 1.0 {
            (0.0, (1.0 / aspect_ratio - 1.0) / 2.0 * 100.0)
        } else {
            (0.0, 0.0)
        };
        Self {
            max_x: base_x + zoom_overhang,
            max_y: base_y + zoom_overhang,
        }
    }

    pub fn for_metrics(metrics: &ImageMetrics, scale: f64) -> Self {
        Self::compute(metrics.aspect_ratio(), scale)
    }

    /// Allowed focal-point range on the x axis, `(min, max)` in percent.
    pub fn x_range(&self) -> (f64, f64) {
        (CENTER - self.max_x, CENTER + self.max_x)
    }

    /// Allowed focal-point range on the y axis, `(min, max)` in percent.
    pub fn y_range(&self) -> (f64, f64) {
        (CENTER - self.max_y, CENTER + self.max_y)
    }

    /// Constrain a position's focal point into this range. The scale is left
    /// untouched; positions are clamped, never reset to center.
    pub fn clamp(&self, position: FramePosition) -> FramePosition {
        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();
        FramePosition {
            x: clamp_axis(position.x, x_min, x_max),
            y: clamp_axis(position.y, y_min, y_max),
            scale: position.scale,
        }
    }

    pub fn contains(&self, position: &FramePosition) -> bool {
        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();
        position.x >= x_min && position.x <= x_max && position.y >= y_min && position.y <= y_max
    }
}

/// Heal a position loaded from storage: clamp its scale into the allowed zoom
/// range, then its focal point into the pan bounds for that scale.
pub fn clamp_position(
    position: FramePosition,
    metrics: &ImageMetrics,
    options: &FramingOptions,
) -> FramePosition {
    let scale = options.clamp_scale(position.scale);
    PanBounds::for_metrics(metrics, scale).clamp(FramePosition { scale, ..position })
}

/// Strict counterpart of [`clamp_position`]: report a violation instead of
/// repairing it. Used by tooling; interactive paths self-heal.
pub fn validate_position(
    position: &FramePosition,
    metrics: &ImageMetrics,
    options: &FramingOptions,
) -> Result<()> {
    if !options.scale_in_range(position.scale) {
        return Err(FramepointError::ScaleOutOfRange {
            scale: position.scale,
            min: options.min_scale,
            max: options.max_scale,
        });
    }
    let bounds = PanBounds::for_metrics(metrics, position.scale);
    if !bounds.contains(position) {
        let (x_min, x_max) = bounds.x_range();
        let (y_min, y_max) = bounds.y_range();
        return Err(FramepointError::PositionOutOfBounds {
            x: position.x,
            y: position.y,
            x_min,
            x_max,
            y_min,
            y_max,
        });
    }
    Ok(())
}
