//! Error types for Grover circuit construction.

use thiserror::Error;

/// Errors raised while validating a search problem or building its circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroverError {
    /// Only 3, 4 and 5 qubits have oracle tables.
    #[error("Unsupported qubit count {0}: only 3, 4 or 5 qubits are supported")]
    UnsupportedQubitCount(usize),

    /// Tagged bit-string contains something other than `0` or `1`.
    #[error("Invalid character '{found}' at position {position} of tagged state; expected '0' or '1'")]
    InvalidBit {
        /// Character index in the tagged string.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Explicit qubit count disagrees with the tagged state.
    #[error("Tagged state '{tagged}' has {} bits but num_qubits is {num_qubits}", .tagged.len())]
    LengthMismatch {
        /// The tagged bit-string.
        tagged: String,
        /// The configured qubit count.
        num_qubits: usize,
    },

    /// Iteration count is neither a number nor `auto`.
    #[error("Invalid iteration count '{0}': expected a non-negative integer or 'auto'")]
    InvalidIterations(String),

    /// shots must be ≥ 1.
    #[error("shots must be at least 1, got {0}")]
    InvalidShots(u32),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] grover_ir::IrError),
}

/// Result type for Grover construction.
pub type GroverResult<T> = Result<T, GroverError>;
