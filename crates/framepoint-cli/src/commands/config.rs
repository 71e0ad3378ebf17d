use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use framepoint_core::options::FramingOptions;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the options to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default framing options as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let options = FramingOptions::default();
    let toml_str = toml::to_string_pretty(&options)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write options to {}", path.display()))?;
        println!("Default options saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
