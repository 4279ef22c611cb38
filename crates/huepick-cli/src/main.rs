//! huepick - color picking and conversion from the command line
//!
//! Works on screenshots instead of a live desktop, so every pick is
//! reproducible.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "huepick")]
#[command(author, version, about = "Color picker and converter")]
#[command(long_about = "
Samples colors from screenshots and converts between color models.

Examples:
  huepick convert '#ff8000'                     # Every model for a hex color
  huepick convert 54.29,80.81,69.89 --from lab  # Lab back to RGB
  huepick convert 60,-150,90 --from lab         # Reports out-of-gamut channels
  huepick name '#4682b4' --precise              # Nearest CSS name
  huepick sample shot.png --at 10,10 --at 200,40 -s 3 -f quadratic
  huepick sample shot.png --at 5,5 --simulate deuteranomaly
  huepick watch shot.png --path '0,0;100,0;100,50' --store
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every model
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Find the nearest named color
    #[command(visible_alias = "n")]
    Name(NameArgs),

    /// Sample a screenshot at fixed points
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// Run a picking session along a pointer path
    #[command(visible_alias = "w")]
    Watch(WatchArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Color: hex for rgb, otherwise comma-separated channels.
    /// Hue channels are in degrees, other [0, 1] channels as fractions.
    color: String,

    /// Model the input is expressed in
    #[arg(long, default_value = "rgb")]
    from: String,

    /// Reference illuminant for Lab/LCH
    #[arg(long)]
    illuminant: Option<String>,

    /// Standard observer (2 or 10)
    #[arg(long)]
    observer: Option<String>,
}

#[derive(Args)]
struct NameArgs {
    /// Color as hex
    color: String,

    /// Mark approximate matches with " ~"
    #[arg(short, long)]
    precise: bool,
}

#[derive(Args)]
struct SampleArgs {
    /// Screenshot (PNG)
    input: PathBuf,

    /// Pointer position X,Y (repeatable)
    #[arg(long = "at", required = true, value_name = "X,Y")]
    at: Vec<String>,

    /// Oversample radius in pixels
    #[arg(short = 's', long)]
    oversample: Option<u32>,

    /// Falloff: none, linear, quadratic, cubic, exponential
    #[arg(short, long)]
    falloff: Option<String>,

    /// Settings file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the display color under a vision deficiency
    #[arg(long, value_name = "KIND")]
    simulate: Option<String>,
}

#[derive(Args)]
struct WatchArgs {
    /// Screenshot (PNG)
    input: PathBuf,

    /// Pointer path, "X,Y;X,Y;..."
    #[arg(long, value_name = "PATH")]
    path: String,

    /// Ticks to run (default: one per path point)
    #[arg(long)]
    ticks: Option<usize>,

    /// Settings file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Store every sample into the swatch and print it at the end
    #[arg(long)]
    store: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "huepick_sample=debug,huepick_color=debug,info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Name(args) => commands::name::run(args, cli.verbose),
        Commands::Sample(args) => commands::sample::run(args, cli.verbose),
        Commands::Watch(args) => commands::watch::run(args, cli.verbose),
    }
}
