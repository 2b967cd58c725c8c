//! Error types for the simulator.

use thiserror::Error;

/// Errors raised while simulating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit needs more qubits than the simulator allows.
    #[error("Circuit has {num_qubits} qubits but the simulator only supports {max_qubits}")]
    CircuitTooLarge {
        /// Qubits in the circuit.
        num_qubits: usize,
        /// Configured limit.
        max_qubits: usize,
    },

    /// Shot count must be at least one.
    #[error("shots must be at least 1, got {0}")]
    InvalidShots(u32),

    /// Sampling needs at least one measurement to produce counts.
    #[error("Circuit has no measurements; nothing to count")]
    NoMeasurements,

    /// A gate acts on a qubit after it was measured.
    #[error("Qubit q{0} is used after measurement; only terminal measurements are supported")]
    MidCircuitMeasurement(u32),

    /// Circuit IR error, e.g. while expanding a composite gate.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] grover_ir::IrError),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
