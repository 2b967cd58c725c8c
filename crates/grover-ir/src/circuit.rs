//! High-level circuit builder API.

use std::collections::BTreeMap;

use crate::dag::CircuitDag;
use crate::error::{IrError, IrResult};
use crate::gate::{CustomGate, Gate, StandardGate};
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{Clbit, ClbitId, Qubit, QubitId};

/// A quantum circuit.
///
/// This provides a high-level API for building quantum circuits,
/// with convenient methods for common gates and operations.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Classical bits in the circuit.
    clbits: Vec<Clbit>,
    /// The underlying DAG representation.
    dag: CircuitDag,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            clbits: vec![],
            dag: CircuitDag::new(),
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId::from(self.qubits.len());
        self.qubits.push(Qubit::new(id));
        self.dag.add_qubit(id);
        id
    }

    /// Add a quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        (0..size)
            .map(|i| {
                let id = QubitId::from(self.qubits.len());
                self.qubits.push(Qubit::with_register(id, &name, i));
                self.dag.add_qubit(id);
                id
            })
            .collect()
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(u32::try_from(self.clbits.len()).expect("ClbitId overflow"));
        self.clbits.push(Clbit::new(id));
        self.dag.add_clbit(id);
        id
    }

    fn standard(
        &mut self,
        gate: StandardGate,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::gate(gate, qubits))?;
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::H, [qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::X, [qubit])
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::Y, [qubit])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::Z, [qubit])
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::S, [qubit])
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::Sdg, [qubit])
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::T, [qubit])
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::Tdg, [qubit])
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::P(theta), [qubit])
    }

    // =========================================================================
    // Controlled and multi-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::CX, [control, target])
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::CZ, [control, target])
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::CP(theta), [control, target])
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::Swap, [q1, q2])
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.standard(StandardGate::CCX, [c1, c2, target])
    }

    /// Apply a multi-controlled X gate.
    pub fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> IrResult<&mut Self> {
        let gate = StandardGate::Mcx {
            controls: u32::try_from(controls.len()).unwrap_or(u32::MAX),
        };
        let qubits = controls.iter().copied().chain(std::iter::once(target));
        self.standard(gate, qubits)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Append a gate, standard or composite, on the given qubits.
    pub fn append(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::gate(gate, qubits))?;
        Ok(self)
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }

    /// Measure every qubit `i` into classical bit `i`, adding bits as needed.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        while self.clbits.len() < self.qubits.len() {
            self.add_clbit();
        }

        let qubits: Vec<_> = self.qubits.iter().map(|q| q.id).collect();
        let clbits: Vec<_> = self
            .clbits
            .iter()
            .map(|c| c.id)
            .take(qubits.len())
            .collect();

        self.dag.apply(Instruction::measure_pairs(qubits, clbits)?)?;
        Ok(self)
    }

    /// Apply a barrier to specified qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::barrier(qubits))?;
        Ok(self)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = self.qubits.iter().map(|q| q.id).collect();
        self.barrier(qubits)
    }

    /// Package this circuit as a composite gate.
    ///
    /// Qubit ids are allocated densely from zero, so the circuit's own qubit
    /// ids are already the gate's local qubits. Barriers and measurements
    /// cannot be part of a gate.
    pub fn to_gate(&self, name: impl Into<String>) -> IrResult<CustomGate> {
        let definition = self
            .instructions()
            .map(|inst| match inst.kind {
                InstructionKind::Gate(_) => Ok(inst.clone()),
                _ => Err(IrError::NonUnitaryInstruction(inst.name().to_string())),
            })
            .collect::<IrResult<Vec<_>>>()?;

        let num_qubits = u32::try_from(self.qubits.len()).unwrap_or(u32::MAX);
        Ok(CustomGate::new(name, num_qubits).with_definition(definition))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Get the circuit depth.
    pub fn depth(&self) -> usize {
        self.dag.depth()
    }

    /// Get the number of top-level operations.
    pub fn num_ops(&self) -> usize {
        self.dag.num_ops()
    }

    /// Iterate over instructions in the order they were applied.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.dag.topological_ops().map(|(_, inst)| inst)
    }

    /// Count top-level operations by name.
    ///
    /// Composite gates are counted under their label when they have one.
    pub fn count_ops(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for inst in self.instructions() {
            let name = inst
                .as_gate()
                .map_or_else(|| inst.name(), Gate::display_name);
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Get a reference to the underlying DAG.
    pub fn dag(&self) -> &CircuitDag {
        &self.dag
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the classical bits in the circuit.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
    }

    #[test]
    fn test_add_registers() {
        let mut circuit = Circuit::new("test");
        let qreg = circuit.add_qreg("search", 3);
        assert_eq!(qreg, vec![QubitId(0), QubitId(1), QubitId(2)]);
        assert_eq!(circuit.qubits()[2].to_string(), "search[2]");
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cp(PI / 2.0, QubitId(0), QubitId(2))
            .unwrap()
            .mcx(&[QubitId(0), QubitId(1)], QubitId(2))
            .unwrap();

        assert_eq!(circuit.num_ops(), 3);
        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_mcx_rejects_target_in_controls() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        let result = circuit.mcx(&[QubitId(0), QubitId(2)], QubitId(2));
        assert!(matches!(result, Err(IrError::DuplicateQubit { .. })));
    }

    #[test]
    fn test_measure_all_adds_clbits() {
        let mut circuit = Circuit::with_size("test", 4, 0);
        circuit.measure_all().unwrap();
        assert_eq!(circuit.num_clbits(), 4);
        assert_eq!(circuit.count_ops().get("measure"), Some(&1));
    }

    #[test]
    fn test_to_gate_roundtrip() {
        let mut body = Circuit::with_size("body", 2, 0);
        body.h(QubitId(0)).unwrap().cx(QubitId(0), QubitId(1)).unwrap();
        let gate = body.to_gate("bell_prep").unwrap();

        assert_eq!(gate.num_qubits, 2);
        assert_eq!(gate.definition.len(), 2);

        let mut outer = Circuit::with_size("outer", 3, 0);
        outer
            .append(Gate::custom(gate).with_label("B"), [QubitId(2), QubitId(0)])
            .unwrap();
        assert_eq!(outer.count_ops().get("B"), Some(&1));
    }

    #[test]
    fn test_to_gate_rejects_measurement() {
        let mut body = Circuit::with_size("body", 1, 1);
        body.h(QubitId(0)).unwrap().measure(QubitId(0), ClbitId(0)).unwrap();
        assert!(matches!(
            body.to_gate("bad"),
            Err(IrError::NonUnitaryInstruction(name)) if name == "measure"
        ));
    }

    #[test]
    fn test_append_wrong_arity() {
        let gate = CustomGate::new("three", 3);
        let mut circuit = Circuit::with_size("test", 3, 0);
        let result = circuit.append(gate, [QubitId(0), QubitId(1)]);
        assert!(matches!(result, Err(IrError::QubitCountMismatch { expected: 3, got: 2, .. })));
    }
}
