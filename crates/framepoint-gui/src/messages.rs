use std::path::PathBuf;

use framepoint_core::metrics::ImageMetrics;
use framepoint_core::options::FramingOptions;
use framepoint_core::position::FramePosition;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image, probe its natural dimensions, and read any stored
    /// position (healed against `options`).
    LoadImage {
        path: PathBuf,
        options: FramingOptions,
    },

    /// Persist a confirmed position to the image's sidecar.
    SavePosition {
        image_path: PathBuf,
        position: FramePosition,
    },

    /// Read framing options from a TOML file.
    ImportOptions { path: PathBuf },

    /// Write framing options to a TOML file.
    ExportOptions {
        path: PathBuf,
        options: FramingOptions,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        metrics: ImageMetrics,
        pixels: egui::ColorImage,
        stored: Option<FramePosition>,
    },

    /// Natural dimensions could not be determined; the framing session
    /// cannot open. The path is kept so the UI can offer a retry.
    LoadFailed { path: PathBuf, message: String },

    PositionSaved {
        position: FramePosition,
        sidecar: PathBuf,
    },

    OptionsImported {
        path: PathBuf,
        options: FramingOptions,
    },

    Error { message: String },
    Log { message: String },
}
