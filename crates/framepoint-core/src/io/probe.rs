use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use tracing::debug;

use crate::error::Result;
use crate::metrics::ImageMetrics;

/// Probe the natural dimensions of an image file without decoding pixels.
pub fn probe_path(path: &Path) -> Result<ImageMetrics> {
    let (width, height) = image::image_dimensions(path)?;
    debug!(path = %path.display(), width, height, "probed image dimensions");
    ImageMetrics::new(width, height)
}

/// Probe the natural dimensions of an in-memory encoded image.
pub fn probe_bytes(bytes: &[u8]) -> Result<ImageMetrics> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let (width, height) = reader.into_dimensions()?;
    ImageMetrics::new(width, height)
}
