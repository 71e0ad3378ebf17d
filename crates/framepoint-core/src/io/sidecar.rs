use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::bounds::clamp_position;
use crate::error::Result;
use crate::metrics::ImageMetrics;
use crate::options::FramingOptions;
use crate::position::FramePosition;

/// Suffix appended to the image filename, e.g. `photo.jpg.frame.json`.
pub const SIDECAR_SUFFIX: &str = ".frame.json";

/// Sidecar path for an image: the full image filename with
/// [`SIDECAR_SUFFIX`] appended, so `cat.jpg` and `cat.png` never collide.
pub fn sidecar_path(image_path: &Path) -> PathBuf {
    let mut name = image_path.as_os_str().to_os_string();
    name.push(SIDECAR_SUFFIX);
    PathBuf::from(name)
}

/// Read a persisted position as stored, without healing. Parse failures are
/// real errors (corrupt file); out-of-range values are the caller's concern.
pub fn read_position(sidecar: &Path) -> Result<FramePosition> {
    let data = fs::read_to_string(sidecar)?;
    Ok(serde_json::from_str(&data)?)
}

/// Load the persisted position for an image, healing out-of-bounds values
/// against the image's current metrics. Returns `None` if no sidecar exists.
pub fn load_position(
    image_path: &Path,
    metrics: &ImageMetrics,
    options: &FramingOptions,
) -> Result<Option<FramePosition>> {
    let path = sidecar_path(image_path);
    if !path.exists() {
        return Ok(None);
    }
    let stored = read_position(&path)?;
    let healed = clamp_position(stored, metrics, options);
    if healed != stored {
        warn!(path = %path.display(), ?stored, ?healed, "stored frame position out of bounds, re-clamped");
    }
    Ok(Some(healed))
}

/// Persist a confirmed position next to its image. Returns the sidecar path.
pub fn save_position(image_path: &Path, position: &FramePosition) -> Result<PathBuf> {
    let path = sidecar_path(image_path);
    let json = serde_json::to_string_pretty(position)?;
    fs::write(&path, json)?;
    Ok(path)
}
