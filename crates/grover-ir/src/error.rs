//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors raised while building or transforming circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// An operand names a qubit the circuit does not have.
    #[error("Unknown qubit {qubit}{}", on_gate(.gate_name))]
    QubitNotFound {
        qubit: QubitId,
        /// Gate being applied, when known.
        gate_name: Option<String>,
    },

    /// An operand names a classical bit the circuit does not have.
    #[error("Unknown classical bit {clbit}{}", on_gate(.gate_name))]
    ClbitNotFound {
        clbit: ClbitId,
        gate_name: Option<String>,
    },

    /// The same qubit appears twice in one instruction.
    #[error("Qubit {qubit} used more than once{}", on_gate(.gate_name))]
    DuplicateQubit {
        qubit: QubitId,
        gate_name: Option<String>,
    },

    /// Operand count does not match the gate's arity.
    #[error("Gate '{gate_name}' acts on {expected} qubits but was given {got}")]
    QubitCountMismatch {
        gate_name: String,
        expected: u32,
        got: u32,
    },

    /// A multi-qubit measurement needs one classical bit per qubit.
    #[error("Measurement of {qubits} qubits into {clbits} classical bits")]
    MeasureArity { qubits: usize, clbits: usize },

    /// The wire structure of the DAG is broken.
    #[error("Invalid DAG structure: {0}")]
    InvalidDag(String),

    /// Composite gates may only contain gates.
    #[error("Cannot convert circuit to gate: '{0}' is not a unitary instruction")]
    NonUnitaryInstruction(String),
}

#[allow(clippy::ref_option)]
fn on_gate(gate_name: &Option<String>) -> String {
    gate_name
        .as_ref()
        .map(|name| format!(" in '{name}'"))
        .unwrap_or_default()
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
