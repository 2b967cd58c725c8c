//! The diffusion operator `Us`, inversion about the mean.

use grover_ir::{Circuit, CustomGate, QubitId};

use crate::error::{GroverError, GroverResult};
use crate::tagged::{MAX_QUBITS, MIN_QUBITS};

/// Label drawn on the diffusion box.
pub const DIFFUSION_LABEL: &str = "Us";

/// Build the diffusion body as a plain circuit.
///
/// `H⊗n X⊗n`, then a Z on the all-ones state built as `H · MCX · H` on the
/// last qubit, then `X⊗n H⊗n`. Three qubits use a Toffoli for the MCX.
pub fn diffusion_circuit(num_qubits: usize) -> GroverResult<Circuit> {
    if !(MIN_QUBITS..=MAX_QUBITS).contains(&num_qubits) {
        return Err(GroverError::UnsupportedQubitCount(num_qubits));
    }

    let mut circuit = Circuit::with_size(DIFFUSION_LABEL, num_qubits as u32, 0);
    let qubits: Vec<QubitId> = (0..num_qubits).map(QubitId::from).collect();
    let (&last, controls) = qubits
        .split_last()
        .ok_or(GroverError::UnsupportedQubitCount(num_qubits))?;

    for &q in &qubits {
        circuit.h(q)?;
    }
    for &q in &qubits {
        circuit.x(q)?;
    }

    circuit.h(last)?;
    if let [c1, c2] = controls {
        circuit.ccx(*c1, *c2, last)?;
    } else {
        circuit.mcx(controls, last)?;
    }
    circuit.h(last)?;

    for &q in &qubits {
        circuit.x(q)?;
    }
    for &q in &qubits {
        circuit.h(q)?;
    }

    Ok(circuit)
}

/// The diffusion `Us` as a composite gate.
pub fn diffusion(num_qubits: usize) -> GroverResult<CustomGate> {
    Ok(diffusion_circuit(num_qubits)?.to_gate(DIFFUSION_LABEL)?)
}
