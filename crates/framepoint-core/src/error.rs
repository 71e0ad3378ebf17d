use thiserror::Error;

#[derive(Error, Debug)]
pub enum FramepointError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Focal point ({x:.1}, {y:.1}) outside pan bounds (x: {x_min:.1}..{x_max:.1}, y: {y_min:.1}..{y_max:.1})")]
    PositionOutOfBounds {
        x: f64,
        y: f64,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("Zoom {scale:.2} outside allowed range {min:.2}..{max:.2}")]
    ScaleOutOfRange { scale: f64, min: f64, max: f64 },

    #[error("Invalid position sidecar: {0}")]
    InvalidSidecar(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FramepointError>;
