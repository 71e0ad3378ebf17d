use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use framepoint_core::bounds::{clamp_position, validate_position};
use framepoint_core::io::probe::probe_path;
use framepoint_core::io::sidecar::{read_position, save_position, sidecar_path};
use framepoint_core::options::FramingOptions;

#[derive(Args)]
pub struct ValidateArgs {
    /// Input image file
    pub file: PathBuf,

    /// Rewrite the sidecar with the re-clamped position when invalid
    #[arg(long)]
    pub fix: bool,
}

pub fn run(args: &ValidateArgs) -> Result<()> {
    let metrics = probe_path(&args.file)?;
    let sidecar = sidecar_path(&args.file);

    if !sidecar.exists() {
        println!("No frame position stored for {}", args.file.display());
        return Ok(());
    }

    let stored = read_position(&sidecar)?;
    let options = FramingOptions::default();

    match validate_position(&stored, &metrics, &options) {
        Ok(()) => {
            println!(
                "OK: x={:.1} y={:.1} scale={:.2} fits {}x{}",
                stored.x,
                stored.y,
                stored.scale,
                metrics.width(),
                metrics.height()
            );
        }
        Err(err) => {
            let healed = clamp_position(stored, &metrics, &options);
            println!("INVALID: {err}");
            println!(
                "Re-clamped: x={:.1} y={:.1} scale={:.2}",
                healed.x, healed.y, healed.scale
            );
            if args.fix {
                save_position(&args.file, &healed)?;
                println!("Fixed: {}", sidecar.display());
            }
        }
    }

    Ok(())
}
