//! Draw command implementation.

use anyhow::Result;
use console::style;

use grover_core::{diffusion, diffusion_circuit, measured_circuit, oracle, oracle_circuit};
use grover_ir::{Circuit, TextDrawer};

use super::common::{ProblemArgs, load_config};

/// Execute the draw command.
pub fn execute(problem: &ProblemArgs, decompose: bool) -> Result<()> {
    let config = load_config(problem, None, None)?;
    let drawer = TextDrawer::new();

    let circuit = measured_circuit(&config)?;
    print_section(&format!("Grover search for |{}⟩", config.tagged), &circuit, drawer)?;

    if decompose {
        let uf = oracle(&config.tagged)?;
        print_section(
            &format!("Uf (oracle, {} gates)", uf.flattened_len()),
            &oracle_circuit(&config.tagged)?,
            drawer,
        )?;

        let us = diffusion(config.num_qubits())?;
        print_section(
            &format!("Us (diffusion, {} gates)", us.flattened_len()),
            &diffusion_circuit(config.num_qubits())?,
            drawer,
        )?;
    }

    Ok(())
}

fn print_section(title: &str, circuit: &Circuit, drawer: TextDrawer) -> Result<()> {
    println!(
        "{} {} ({} qubits, depth {})",
        style("→").cyan().bold(),
        style(title).bold(),
        circuit.num_qubits(),
        circuit.depth()
    );
    println!("{}", drawer.render(circuit)?);
    Ok(())
}
