use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use framepoint_core::io::probe::probe_path;
use framepoint_core::io::sidecar::load_position;
use framepoint_core::options::FramingOptions;
use framepoint_core::bounds::clamp_position;
use framepoint_core::position::FramePosition;
use framepoint_core::project::project;

#[derive(Args)]
pub struct ProjectArgs {
    /// Input image file
    pub file: PathBuf,

    /// Focal point x in percent (50 = center)
    #[arg(long, default_value = "50.0")]
    pub x: f64,

    /// Focal point y in percent (50 = center)
    #[arg(long, default_value = "50.0")]
    pub y: f64,

    /// Zoom multiplier
    #[arg(long, default_value = "1.0")]
    pub scale: f64,

    /// Use the position stored in the image's sidecar instead of the flags
    #[arg(long)]
    pub stored: bool,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ProjectArgs) -> Result<()> {
    let metrics = probe_path(&args.file)?;
    let options = FramingOptions::default();

    let requested = if args.stored {
        match load_position(&args.file, &metrics, &options)? {
            Some(p) => p,
            None => bail!("no frame position stored for {}", args.file.display()),
        }
    } else {
        FramePosition::new(args.x, args.y, args.scale)
    };

    // Out-of-range input is healed the same way display sites heal it.
    let position = clamp_position(requested, &metrics, &options);
    let projection = project(&position, &metrics);
    let window = projection.source_window();
    let (px, py, pw, ph) = window.to_pixels(&metrics);

    if args.json {
        let out = serde_json::json!({
            "position": position,
            "projection": projection,
            "source_window": window,
            "source_pixels": { "x": px, "y": py, "width": pw, "height": ph },
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Position:       x={:.1} y={:.1} scale={:.2}", position.x, position.y, position.scale);
    println!(
        "Drawn rect:     origin ({:.4}, {:.4})  size {:.4}x{:.4}  (viewport units)",
        projection.origin_x, projection.origin_y, projection.width, projection.height
    );
    println!(
        "Source window:  ({:.4}, {:.4}) .. ({:.4}, {:.4})  (normalized)",
        window.min_x, window.min_y, window.max_x, window.max_y
    );
    println!(
        "Source pixels:  {:.0},{:.0}  {:.0}x{:.0}",
        px, py, pw, ph
    );

    Ok(())
}
