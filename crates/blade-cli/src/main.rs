//! blade-cli: Command-line interface for spanwise blade geometry extraction.
//!
//! Reads a triangle mesh of a blade-like part, samples evenly spaced stations
//! along its longest axis, and writes chord, thickness, twist and area per
//! station to a CSV table.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=blade_profile=info` - Basic operation logging
//! - `RUST_LOG=blade_profile::station=trace` - Every station, including sparse ones
//! - `RUST_LOG=blade_profile::timing=debug` - Performance timing
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Default analysis: 12 stations, blade_station_data.csv in the current directory
//! blade analyze blade.stl
//!
//! # Finer sampling along a forced axis, JSON report
//! blade --format json analyze blade.obj --stations 40 --axis z -o stations.csv
//! ```

use std::path::PathBuf;

use anyhow::Result;
use blade_profile::{DEFAULT_FILL_FACTOR, DEFAULT_OUTPUT_FILE, DEFAULT_STATION_COUNT, SpanAxis};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;

use commands::{analyze, info};

/// blade - Extract spanwise section geometry from blade meshes.
///
/// Samples chord length, thickness, twist and section area along the span of
/// a blade, wing or fin mesh.
#[derive(Parser)]
#[command(name = "blade")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the spanwise profile and write the station table
    Analyze {
        /// Input mesh file (STL or OBJ)
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Number of spanwise stations (at least 2)
        #[arg(long, short = 'n', default_value_t = DEFAULT_STATION_COUNT)]
        stations: usize,

        /// Share of the chord x thickness rectangle counted as section area
        #[arg(long, default_value_t = DEFAULT_FILL_FACTOR)]
        fill_factor: f64,

        /// Span axis (detected from the bounding box when omitted)
        #[arg(long)]
        axis: Option<AxisArg>,

        /// Process stations on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Display mesh statistics and the detected span axis
    Info {
        /// Input mesh file
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for SpanAxis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::X => SpanAxis::X,
            AxisArg::Y => SpanAxis::Y,
            AxisArg::Z => SpanAxis::Z,
        }
    }
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "blade_profile=info",
            2 => "blade_profile=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    miette::set_panic_hook();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Analyze {
            input,
            output,
            stations,
            fill_factor,
            axis,
            sequential,
        } => analyze::run(
            input,
            output,
            *stations,
            *fill_factor,
            axis.map(SpanAxis::from),
            *sequential,
            &cli,
        ),
        Commands::Info { input } => info::run(input, &cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            if let Some(blade_err) = e.downcast_ref::<blade_profile::BladeError>() {
                eprintln!("{}: {}", "Error".red().bold(), blade_err);
                eprintln!("  {}: {}", "Code".cyan(), blade_err.code());
                eprintln!(
                    "  {}: {}",
                    "Suggestion".green(),
                    blade_err.recovery_suggestion()
                );
                if let Some(location) = blade_err.location() {
                    eprintln!("  {}: {}", "Location".yellow(), location);
                }
            } else {
                eprintln!("{}: {}", "Error".red().bold(), e);
                for cause in e.chain().skip(1) {
                    eprintln!("  {}: {}", "Caused by".yellow(), cause);
                }
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
