//! Grover search over a single tagged bit-string.
//!
//! This crate assembles the circuit; simulation lives in
//! `grover-adapter-sim`. The pipeline is:
//!
//! 1. [`initial_state`]: Hadamard on every qubit
//! 2. [`oracle()`]: the phase oracle `Uf` for a [`TaggedState`]
//! 3. [`diffusion()`]: inversion about the mean, `Us`
//! 4. [`grover_circuit`]: `R` rounds of barrier, `Uf`, `Us`
//!
//! Registers of 3, 4 and 5 qubits are supported, each with a fixed oracle
//! decomposition into controlled phases and CNOTs.
//!
//! # Example
//!
//! ```rust
//! use grover_core::{GroverConfig, grover_circuit, success_probability};
//!
//! let config = GroverConfig::default().validate().unwrap();
//! let circuit = grover_circuit(&config).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 3);
//! assert!(success_probability(3, config.iterations) > 0.9);
//! ```

pub mod config;
pub mod diffusion;
pub mod error;
pub mod oracle;
pub mod search;
pub mod tagged;

pub use config::{GroverConfig, Iterations, ValidatedConfig};
pub use diffusion::{DIFFUSION_LABEL, diffusion, diffusion_circuit};
pub use error::{GroverError, GroverResult};
pub use oracle::{ORACLE_LABEL, PhaseStep, oracle, oracle_circuit, phase_table};
pub use search::{
    grover_circuit, initial_state, measured_circuit, optimal_iterations, success_probability,
};
pub use tagged::{MAX_QUBITS, MIN_QUBITS, TaggedState};
