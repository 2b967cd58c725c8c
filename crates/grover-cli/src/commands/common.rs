//! Shared helpers for CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use serde::Serialize;

use grover_adapter_sim::{BasisEntry, ExecutionResult, Statevector};
use grover_core::{GroverConfig, Iterations, TaggedState, ValidatedConfig, success_probability};
use grover_ir::format_angle;

/// Amplitudes below this probability are shown without a phase.
const NEGLIGIBLE: f64 = 1e-12;

/// Flags that describe the search problem, shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ProblemArgs {
    /// YAML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tagged bit-string, qubit 0 first (e.g. 010)
    #[arg(short, long)]
    pub tagged: Option<String>,

    /// Register width; must match the tagged length
    #[arg(short = 'n', long)]
    pub qubits: Option<usize>,

    /// Number of Grover rounds, or "auto"
    #[arg(short, long, conflicts_with = "optimal")]
    pub iterations: Option<Iterations>,

    /// Use the optimal number of rounds
    #[arg(long)]
    pub optimal: bool,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Merge file, defaults and flags into a validated configuration.
pub fn load_config(
    problem: &ProblemArgs,
    shots: Option<u32>,
    seed: Option<u64>,
) -> Result<ValidatedConfig> {
    let mut config = match &problem.config {
        Some(path) => GroverConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GroverConfig::default(),
    };

    if let Some(tagged) = &problem.tagged {
        config.tagged.clone_from(tagged);
    }
    if problem.qubits.is_some() {
        config.num_qubits = problem.qubits;
    }
    if let Some(iterations) = problem.iterations {
        config.iterations = iterations;
    }
    if problem.optimal {
        config.iterations = Iterations::Optimal;
    }
    if let Some(shots) = shots {
        config.shots = shots;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    Ok(config.validate()?)
}

/// Print the problem being solved.
pub fn print_setup(config: &ValidatedConfig) {
    let n = config.num_qubits();
    println!(
        "{} Searching for {} among {} states ({} qubits)",
        style("→").cyan().bold(),
        style(format!("|{}⟩", config.tagged)).green().bold(),
        1usize << n,
        n
    );
    println!(
        "  Rounds: {}, expected success probability {:.2}%",
        config.iterations,
        success_probability(n, config.iterations) * 100.0
    );
}

fn format_amplitude(entry: &BasisEntry) -> String {
    format!("{:+.4}{:+.4}i", entry.amplitude.re, entry.amplitude.im)
}

fn format_phase(entry: &BasisEntry) -> String {
    if entry.probability < NEGLIGIBLE {
        "-".to_string()
    } else {
        format_angle(entry.phase)
    }
}

/// Print the statevector as a table grouped by Hamming weight.
///
/// The weight is the latitude a Q-sphere would place the state at; the phase
/// is its colour.
pub fn print_statevector(sv: &Statevector, tagged: &TaggedState) {
    println!(
        "\n{} Statevector ({} qubits):",
        style("✓").green().bold(),
        sv.num_qubits()
    );
    println!(
        "  {:>2}  {:<width$}  {:>17}  {:>7}  {:>6}",
        "w",
        "state",
        "amplitude",
        "prob",
        "phase",
        width = sv.num_qubits() + 2
    );

    let mut entries = sv.entries();
    entries.sort_by_key(|e| (e.hamming_weight, e.index));

    for entry in &entries {
        let ket = format!("|{}⟩", entry.bitstring);
        let ket = if entry.index == tagged.index() {
            style(ket).green().bold()
        } else {
            style(ket).cyan()
        };
        let bar = "█".repeat((entry.probability * 40.0).round() as usize);
        println!(
            "  {:>2}  {}  {:>17}  {:>7.4}  {:>6}  {}",
            entry.hamming_weight,
            ket,
            format_amplitude(entry),
            entry.probability,
            format_phase(entry),
            style(bar).green()
        );
    }
}

/// Print execution results in a table format.
pub fn print_results(result: &ExecutionResult, tagged: &TaggedState) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let sorted = result.counts.sorted();
    let total = result.counts.total_shots() as f64;
    let tagged = tagged.to_string();

    for (bitstring, count) in sorted.iter().take(32) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);
        let label = if *bitstring == tagged {
            style(*bitstring).green().bold()
        } else {
            style(*bitstring).cyan()
        };

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            label,
            count,
            prob,
            style(bar).green()
        );
    }

    if let Some(ms) = result.execution_time_ms {
        println!("\n  Execution time: {ms} ms");
    }
}

/// Print any serializable report as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{json}");
    Ok(())
}
