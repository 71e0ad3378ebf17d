use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use walkdir::WalkDir;

use framepoint_core::bounds::{clamp_position, validate_position};
use framepoint_core::io::probe::probe_path;
use framepoint_core::io::sidecar::{read_position, save_position, sidecar_path};
use framepoint_core::options::FramingOptions;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

#[derive(Args)]
pub struct ScanArgs {
    /// Photo library root
    pub dir: PathBuf,

    /// Rewrite sidecars whose positions fall outside bounds
    #[arg(long)]
    pub fix: bool,
}

enum Outcome {
    Valid,
    Healed { fixed: bool },
    Unreadable { message: String },
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let targets = collect_targets(&args.dir);
    if targets.is_empty() {
        println!("No framed images under {}", args.dir.display());
        return Ok(());
    }

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Checking positions");

    let options = FramingOptions::default();
    let outcomes: Vec<(PathBuf, Outcome)> = targets
        .par_iter()
        .map(|path| {
            let outcome = check_one(path, &options, args.fix);
            pb.inc(1);
            (path.clone(), outcome)
        })
        .collect();
    pb.finish_with_message("Done");

    report(&outcomes, args.fix);
    Ok(())
}

/// Images that have a position sidecar next to them.
fn collect_targets(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_image(path) && sidecar_path(path).exists())
        .collect()
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
}

fn check_one(path: &Path, options: &FramingOptions, fix: bool) -> Outcome {
    let metrics = match probe_path(path) {
        Ok(m) => m,
        Err(err) => {
            return Outcome::Unreadable {
                message: err.to_string(),
            }
        }
    };
    let stored = match read_position(&sidecar_path(path)) {
        Ok(p) => p,
        Err(err) => {
            return Outcome::Unreadable {
                message: err.to_string(),
            }
        }
    };

    if validate_position(&stored, &metrics, options).is_ok() {
        return Outcome::Valid;
    }

    let fixed = if fix {
        let healed = clamp_position(stored, &metrics, options);
        save_position(path, &healed).is_ok()
    } else {
        false
    };
    Outcome::Healed { fixed }
}

fn report(outcomes: &[(PathBuf, Outcome)], fix: bool) {
    let valid = outcomes
        .iter()
        .filter(|(_, o)| matches!(o, Outcome::Valid))
        .count();
    let drifted: Vec<_> = outcomes
        .iter()
        .filter(|(_, o)| matches!(o, Outcome::Healed { .. }))
        .collect();
    let unreadable: Vec<_> = outcomes
        .iter()
        .filter_map(|(path, o)| match o {
            Outcome::Unreadable { message } => Some((path, message)),
            _ => None,
        })
        .collect();

    println!();
    println!("Scanned {} framed images", outcomes.len());
    println!("  {} valid", style(valid).green());

    if !drifted.is_empty() {
        let label = if fix { "re-clamped" } else { "out of bounds" };
        println!("  {} {}", style(drifted.len()).yellow(), label);
        for (path, outcome) in &drifted {
            let note = match outcome {
                Outcome::Healed { fixed: true } => " (fixed)",
                _ => "",
            };
            println!("    {}{}", path.display(), note);
        }
        if !fix {
            println!("  Run again with --fix to rewrite them.");
        }
    }

    if !unreadable.is_empty() {
        println!("  {} unreadable", style(unreadable.len()).red());
        for (path, message) in &unreadable {
            println!("    {}: {}", path.display(), message);
        }
    }
}
