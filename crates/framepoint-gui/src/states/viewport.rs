use std::path::PathBuf;

use framepoint_core::metrics::ImageMetrics;

/// Loaded-image display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Natural dimensions of the loaded image.
    pub metrics: Option<ImageMetrics>,
    pub image_path: Option<PathBuf>,
}

impl ViewportState {
    pub fn clear(&mut self) {
        self.texture = None;
        self.metrics = None;
        self.image_path = None;
    }
}
