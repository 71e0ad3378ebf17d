use serde::Serialize;

use crate::bounds::clamp_position;
use crate::metrics::ImageMetrics;
use crate::options::FramingOptions;
use crate::position::{FramePosition, CENTER};

/// Display parameters for one framed image: where the cover-fitted, zoomed
/// image lands relative to the unit-square viewport.
///
/// Every render site — interactive preview, square thumbnail, circular
/// avatar, detail view — derives its drawing from this one struct, so a
/// photo framed once looks identical everywhere it is shown afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Projection {
    /// Top-left corner of the drawn image in viewport units (the viewport
    /// spans 0..1 on both axes; negative means overhang past the edge).
    pub origin_x: f64,
    pub origin_y: f64,
    /// Drawn size of the image in viewport units.
    pub width: f64,
    pub height: f64,
    /// Zoom multiplier applied on top of the cover fit.
    pub scale_factor: f64,
}

impl Projection {
    /// The sub-rectangle of the source image visible through the viewport,
    /// in normalized source coordinates (0..1 on both axes). This is the
    /// form uv-mapping texture renderers consume directly.
    pub fn source_window(&self) -> SourceWindow {
        SourceWindow {
            min_x: -self.origin_x / self.width,
            min_y: -self.origin_y / self.height,
            max_x: (1.0 - self.origin_x) / self.width,
            max_y: (1.0 - self.origin_y) / self.height,
        }
    }
}

/// Normalized sub-rectangle of the source image visible through the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SourceWindow {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SourceWindow {
    /// Convert to pixel coordinates of the source image:
    /// `(x, y, width, height)`.
    pub fn to_pixels(&self, metrics: &ImageMetrics) -> (f64, f64, f64, f64) {
        let w = metrics.width() as f64;
        let h = metrics.height() as f64;
        (
            self.min_x * w,
            self.min_y * h,
            (self.max_x - self.min_x) * w,
            (self.max_y - self.min_y) * h,
        )
    }
}

/// Cover-fit size of the image in viewport units at scale 1: the shorter
/// side matches the viewport exactly, the longer side overhangs.
pub fn cover_size(aspect_ratio: f64) -> (f64, f64) {
    if aspect_ratio >= 1.0 {
        (aspect_ratio, 1.0)
    } else {
        (1.0, 1.0 / aspect_ratio)
    }
}

/// Map a frame position to concrete display parameters.
///
/// Pure and deterministic. Assumes `position` already satisfies the
/// pan-bounds invariant; use [`project_clamped`] for positions from
/// untrusted storage.
pub fn project(position: &FramePosition, metrics: &ImageMetrics) -> Projection {
    let (cover_w, cover_h) = cover_size(metrics.aspect_ratio());
    let width = cover_w * position.scale;
    let height = cover_h * position.scale;

    // The focal point's offset from center shifts the image the opposite
    // way; one percent of position equals one percent of the viewport side.
    let origin_x = 0.5 - width / 2.0 + (CENTER - position.x) / 100.0;
    let origin_y = 0.5 - height / 2.0 + (CENTER - position.y) / 100.0;

    Projection {
        origin_x,
        origin_y,
        width,
        height,
        scale_factor: position.scale,
    }
}

/// Defensive variant of [`project`] that re-clamps the position first.
pub fn project_clamped(
    position: &FramePosition,
    metrics: &ImageMetrics,
    options: &FramingOptions,
) -> Projection {
    project(&clamp_position(*position, metrics, options), metrics)
}
