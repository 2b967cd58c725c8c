//! Run command implementation.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use grover_adapter_sim::{BasisEntry, ExecutionResult, Simulator};
use grover_core::{ValidatedConfig, grover_circuit, success_probability};
use grover_ir::{Circuit, TextDrawer};

use super::common::{
    OutputFormat, ProblemArgs, load_config, print_json, print_results, print_setup,
    print_statevector,
};

/// Everything a run produces, as printed by `--format json`.
#[derive(Serialize)]
struct RunReport<'a> {
    config: &'a ValidatedConfig,
    expected_success_probability: f64,
    statevector: Vec<BasisEntry>,
    result: &'a ExecutionResult,
}

/// Execute the run command.
pub fn execute(
    problem: &ProblemArgs,
    shots: Option<u32>,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(problem, shots, seed)?;
    let circuit = grover_circuit(&config)?;

    let mut simulator = Simulator::new();
    if let Some(seed) = config.seed {
        simulator = simulator.with_seed(seed);
    }
    let sv = simulator.statevector(&circuit)?;

    let mut measured = circuit.clone();
    measured.measure_all()?;

    match format {
        OutputFormat::Json => {
            let result = simulator.run(&measured, config.shots)?;
            print_json(&RunReport {
                config: &config,
                expected_success_probability: success_probability(
                    config.num_qubits(),
                    config.iterations,
                ),
                statevector: sv.entries(),
                result: &result,
            })
        }
        OutputFormat::Table => {
            print_setup(&config);
            print_statevector(&sv, &config.tagged);
            print_circuit(&measured)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(format!("Sampling {} shots...", config.shots));
            spinner.enable_steady_tick(std::time::Duration::from_millis(100));

            let result = simulator.run(&measured, config.shots)?;
            spinner.finish_and_clear();

            if let Some((top, count)) = result.counts.most_frequent() {
                info!("Most frequent outcome {} ({} shots)", top, count);
            }
            print_results(&result, &config.tagged);
            Ok(())
        }
    }
}

fn print_circuit(circuit: &Circuit) -> Result<()> {
    println!(
        "\n{} Circuit: depth {}, {} ops",
        style("✓").green().bold(),
        circuit.depth(),
        circuit.num_ops()
    );
    print!("{}", TextDrawer::new().render(circuit)?);
    Ok(())
}
