//! Grover Command-Line Interface
//!
//! Builds the Grover search circuit for a tagged bit-string, draws it,
//! reports the final statevector and samples measurement counts.
//!
//! ```text
//! grover run --tagged 0110 --iterations auto
//! grover draw --decompose
//! grover statevector --tagged 101 --format json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::{OutputFormat, ProblemArgs};
use commands::{draw, run, statevector, version};

/// Grover - amplitude amplification for a single tagged bit-string
#[derive(Parser)]
#[command(name = "grover")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, simulate and sample the search circuit
    Run {
        #[command(flatten)]
        problem: ProblemArgs,

        /// Number of shots
        #[arg(short, long, env = "GROVER_SHOTS")]
        shots: Option<u32>,

        /// Seed for reproducible sampling
        #[arg(long, env = "GROVER_SEED")]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the circuit diagram
    Draw {
        #[command(flatten)]
        problem: ProblemArgs,

        /// Also print the bodies of Uf and Us
        #[arg(long)]
        decompose: bool,
    },

    /// Print the final statevector without sampling
    Statevector {
        #[command(flatten)]
        problem: ProblemArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            problem,
            shots,
            seed,
            format,
        } => run::execute(&problem, shots, seed, format),

        Commands::Draw { problem, decompose } => draw::execute(&problem, decompose),

        Commands::Statevector { problem, format } => statevector::execute(&problem, format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
