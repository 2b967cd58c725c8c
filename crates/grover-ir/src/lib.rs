//! Circuit intermediate representation for the Grover search workspace.
//!
//! The circuit IR uses a DAG (Directed Acyclic Graph) internally, which keeps
//! per-wire ordering explicit and makes depth calculation cheap. The
//! high-level [`Circuit`] API provides a fluent builder on top of it.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`]
//! - **Gates**: [`StandardGate`] for built-in gates and [`CustomGate`] for
//!   composite gates that carry their own instruction body
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **DAG**: [`CircuitDag`] for the internal graph representation
//! - **Circuit**: [`Circuit`] high-level builder API
//! - **Drawing**: [`TextDrawer`] for plain-text diagrams
//!
//! # Example: Packaging a Sub-circuit as a Gate
//!
//! ```rust
//! use grover_ir::{Circuit, Gate, QubitId};
//! use std::f64::consts::PI;
//!
//! // A controlled-Z built from a controlled phase.
//! let mut body = Circuit::with_size("cz_body", 2, 0);
//! body.cp(PI, QubitId(0), QubitId(1)).unwrap();
//! let cz = body.to_gate("my_cz").unwrap();
//!
//! let mut circuit = Circuit::with_size("main", 3, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit
//!     .append(Gate::custom(cz).with_label("CZ'"), [QubitId(0), QubitId(2)])
//!     .unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_clbits(), 3);
//! assert_eq!(circuit.num_ops(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 | Phase-family Cliffords and T gates |
//! | `P` | 1 | Phase gate |
//! | `CX`, `CZ` | 2 | Controlled-NOT and controlled-Z |
//! | `CP` | 2 | Controlled phase (`cu1`) |
//! | `Swap` | 2 | SWAP gate |
//! | `CCX` | 3 | Toffoli gate |
//! | `Mcx` | k+1 | Multi-controlled X |

pub mod circuit;
pub mod dag;
pub mod draw;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex, WireId};
pub use draw::TextDrawer;
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, GateKind, StandardGate, format_angle};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
