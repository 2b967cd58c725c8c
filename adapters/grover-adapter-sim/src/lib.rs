//! Local statevector simulator for Grover search circuits.
//!
//! The simulator keeps the full statevector, so results are exact and the
//! only noise is sampling noise from a finite number of shots.
//!
//! # Features
//!
//! - **Exact Simulation**: [`Statevector`] evolved gate by gate, with
//!   composite gates expanded into their definitions
//! - **All Standard Gates**: every gate in `grover-ir`, including `cp` and `mcx`
//! - **Measurement Sampling**: [`Simulator::run`] samples terminal
//!   measurements into [`Counts`], reproducibly when seeded
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 5 | 512 B | Instant |
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//!
//! # Example
//!
//! ```rust
//! use grover_adapter_sim::Simulator;
//! use grover_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell", 2, 0);
//! circuit.h(QubitId(0)).unwrap().cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! let result = Simulator::new().with_seed(7).run(&circuit, 100).unwrap();
//! assert_eq!(result.counts.get("00") + result.counts.get("11"), 100);
//! ```

pub mod error;
mod result;
mod simulator;
mod statevector;

pub use error::{SimError, SimResult};
pub use result::{Counts, ExecutionResult};
pub use simulator::Simulator;
pub use statevector::{BasisEntry, Statevector};
