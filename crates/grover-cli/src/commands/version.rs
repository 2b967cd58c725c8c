//! Version command implementation.

use console::style;

use grover_adapter_sim::Simulator;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Grover search on a local statevector simulator",
        style("Grover").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  grover-ir           Circuit intermediate representation");
    println!("  grover-core         Oracle, diffusion and iteration driver");
    println!("  grover-adapter-sim  Statevector simulator and shot sampling");
    println!("  grover-cli          Command-line interface");
    println!();
    println!(
        "Supported widths: {}..={} qubits",
        grover_core::MIN_QUBITS,
        grover_core::MAX_QUBITS
    );
    println!(
        "Simulator:  statevector, up to {} qubits",
        Simulator::new().max_qubits()
    );
    println!("License:    {}", style(env!("CARGO_PKG_LICENSE")).dim());
}
