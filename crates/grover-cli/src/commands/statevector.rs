//! Statevector command implementation.

use anyhow::Result;

use grover_adapter_sim::Simulator;
use grover_core::grover_circuit;

use super::common::{
    OutputFormat, ProblemArgs, load_config, print_json, print_setup, print_statevector,
};

/// Execute the statevector command.
pub fn execute(problem: &ProblemArgs, format: OutputFormat) -> Result<()> {
    let config = load_config(problem, None, None)?;
    let circuit = grover_circuit(&config)?;
    let sv = Simulator::new().statevector(&circuit)?;

    match format {
        OutputFormat::Json => print_json(&sv.entries()),
        OutputFormat::Table => {
            print_setup(&config);
            print_statevector(&sv, &config.tagged);
            Ok(())
        }
    }
}
