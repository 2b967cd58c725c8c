//! Instructions: a gate, measurement or barrier together with its operands.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{CustomGate, Gate, GateKind};
use crate::qubit::{ClbitId, QubitId};

/// What an instruction does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    Gate(Gate),
    /// Measure `qubits[i]` into `clbits[i]`.
    Measure,
    /// Ordering fence; leaves the state alone.
    Barrier,
}

/// A single step of a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub kind: InstructionKind,
    /// Quantum operands. For controlled gates the controls come first.
    pub qubits: Vec<QubitId>,
    /// Classical operands; only measurements have any.
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// A gate applied to `qubits`.
    pub fn gate(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate.into()),
            qubits: qubits.into_iter().collect(),
            clbits: Vec::new(),
        }
    }

    /// Measure one qubit into one classical bit.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    /// Measure several qubits at once, pairing them with `clbits` in order.
    pub fn measure_pairs(
        qubits: impl IntoIterator<Item = QubitId>,
        clbits: impl IntoIterator<Item = ClbitId>,
    ) -> IrResult<Self> {
        let qubits: Vec<_> = qubits.into_iter().collect();
        let clbits: Vec<_> = clbits.into_iter().collect();
        if qubits.len() != clbits.len() {
            return Err(IrError::MeasureArity {
                qubits: qubits.len(),
                clbits: clbits.len(),
            });
        }
        Ok(Self {
            kind: InstructionKind::Measure,
            qubits,
            clbits,
        })
    }

    /// A barrier across `qubits`.
    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Barrier,
            qubits: qubits.into_iter().collect(),
            clbits: Vec::new(),
        }
    }

    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    pub fn as_gate(&self) -> Option<&Gate> {
        match &self.kind {
            InstructionKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// The composite gate body, if this instruction applies one.
    pub fn as_custom(&self) -> Option<&CustomGate> {
        match &self.as_gate()?.kind {
            GateKind::Custom(custom) => Some(custom),
            GateKind::Standard(_) => None,
        }
    }

    /// Lower-case mnemonic: the gate name, `measure` or `barrier`.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Barrier => "barrier",
        }
    }

    /// Rewrite the qubit operands of this instruction through `map`.
    ///
    /// Used when a composite gate body is placed onto circuit qubits:
    /// local qubit `i` becomes `map[i]`.
    pub fn remap_qubits(&self, map: &[QubitId]) -> IrResult<Self> {
        let qubits = self
            .qubits
            .iter()
            .map(|q| {
                map.get(q.index()).copied().ok_or(IrError::QubitNotFound {
                    qubit: *q,
                    gate_name: Some(self.name().to_string()),
                })
            })
            .collect::<IrResult<Vec<_>>>()?;

        Ok(Self {
            qubits,
            ..self.clone()
        })
    }
}
