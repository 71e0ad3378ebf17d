use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use framepoint_core::bounds::PanBounds;
use framepoint_core::io::probe::probe_path;
use framepoint_core::io::sidecar::{read_position, sidecar_path};
use framepoint_core::options::FramingOptions;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Zoom level to report pan bounds for
    #[arg(long, default_value = "1.0")]
    pub scale: f64,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let options = FramingOptions::default();
    if !options.scale_in_range(args.scale) {
        bail!(
            "scale {} outside allowed range {}..{}",
            args.scale,
            options.min_scale,
            options.max_scale
        );
    }

    let metrics = probe_path(&args.file)?;
    let bounds = PanBounds::for_metrics(&metrics, args.scale);
    let (x_min, x_max) = bounds.x_range();
    let (y_min, y_max) = bounds.y_range();

    let orientation = if metrics.width() > metrics.height() {
        "landscape"
    } else if metrics.width() < metrics.height() {
        "portrait"
    } else {
        "square"
    };

    println!("File:          {}", args.file.display());
    println!("Dimensions:    {}x{}", metrics.width(), metrics.height());
    println!("Aspect ratio:  {:.4} ({})", metrics.aspect_ratio(), orientation);
    println!("Zoom:          {:.2}", args.scale);
    println!("Pan range x:   {:.1} .. {:.1}  (max offset {:.1})", x_min, x_max, bounds.max_x);
    println!("Pan range y:   {:.1} .. {:.1}  (max offset {:.1})", y_min, y_max, bounds.max_y);

    let sidecar = sidecar_path(&args.file);
    if sidecar.exists() {
        let stored = read_position(&sidecar)?;
        println!(
            "Stored:        x={:.1} y={:.1} scale={:.2}",
            stored.x, stored.y, stored.scale
        );
    } else {
        println!("Stored:        none");
    }

    Ok(())
}
