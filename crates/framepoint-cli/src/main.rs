mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "framepoint", about = "Photo framing position tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and pan bounds
    Info(commands::info::InfoArgs),
    /// Check a stored frame position against its image
    Validate(commands::validate::ValidateArgs),
    /// Print the display parameters for a frame position
    Project(commands::project::ProjectArgs),
    /// Sweep a photo library for drifted frame positions
    Scan(commands::scan::ScanArgs),
    /// Print or save the default framing options as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Project(args) => commands::project::run(args),
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
