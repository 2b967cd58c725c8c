//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;
use serde::Serialize;
use std::f64::consts::PI;

use grover_ir::{Circuit, GateKind, Instruction, InstructionKind, IrError, QubitId, StandardGate};

use crate::error::{SimError, SimResult};

/// One basis state of a statevector, in the form shown by the `statevector`
/// report: a text stand-in for a Q-sphere, where the Hamming weight picks the
/// latitude and the phase picks the colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasisEntry {
    /// Basis index; bit `i` is qubit `i`.
    pub index: usize,
    /// Bit-string with qubit 0 first.
    pub bitstring: String,
    /// Complex amplitude.
    pub amplitude: Complex64,
    /// |amplitude|².
    pub probability: f64,
    /// Argument of the amplitude in radians, in (-π, π].
    pub phase: f64,
    /// Number of qubits in state |1⟩.
    pub hamming_weight: u32,
}

/// A statevector representing a quantum state.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Create the computational basis state `|index⟩`.
    pub fn basis(num_qubits: usize, index: usize) -> Self {
        let mut sv = Self::new(num_qubits);
        sv.amplitudes[0] = Complex64::new(0.0, 0.0);
        sv.amplitudes[index] = Complex64::new(1.0, 0.0);
        sv
    }

    /// Evolve |0...0⟩ through every unitary instruction of `circuit`.
    ///
    /// Measurements and barriers leave the state untouched.
    pub fn from_circuit(circuit: &Circuit) -> SimResult<Self> {
        let mut sv = Self::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            sv.apply(inst)?;
        }
        Ok(sv)
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurement probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Probability of a single basis state; zero when out of range.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes.get(index).map_or(0.0, Complex64::norm_sqr)
    }

    /// Euclidean norm of the state; 1 for any state reached by unitaries.
    pub fn norm(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt()
    }

    /// Inner product ⟨self|other⟩.
    pub fn inner(&self, other: &Statevector) -> Complex64 {
        self.amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Per-basis-state breakdown, in index order.
    pub fn entries(&self) -> Vec<BasisEntry> {
        self.amplitudes
            .iter()
            .enumerate()
            .map(|(index, amp)| BasisEntry {
                index,
                bitstring: self.outcome_to_bitstring(index),
                amplitude: *amp,
                probability: amp.norm_sqr(),
                phase: amp.arg(),
                hamming_weight: index.count_ones(),
            })
            .collect()
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) -> SimResult<()> {
        match &instruction.kind {
            InstructionKind::Gate(gate) => match &gate.kind {
                GateKind::Standard(std_gate) => {
                    let qubits = self.operands(std_gate, &instruction.qubits)?;
                    self.apply_standard_gate(std_gate, &qubits);
                }
                GateKind::Custom(custom) => {
                    for inner in &custom.definition {
                        self.apply(&inner.remap_qubits(&instruction.qubits)?)?;
                    }
                }
            },
            InstructionKind::Measure | InstructionKind::Barrier => {
                // These don't modify the statevector in simulation
            }
        }
        Ok(())
    }

    /// Bit positions of a standard gate's operands, checked against its arity
    /// and the register width.
    fn operands(&self, gate: &StandardGate, qubits: &[QubitId]) -> SimResult<Vec<usize>> {
        if gate.num_qubits() as usize != qubits.len() {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate.name().to_string(),
                expected: gate.num_qubits(),
                got: u32::try_from(qubits.len()).unwrap_or(u32::MAX),
            }
            .into());
        }
        qubits
            .iter()
            .map(|&qubit| {
                if qubit.index() < self.num_qubits {
                    Ok(qubit.index())
                } else {
                    Err(SimError::from(IrError::QubitNotFound {
                        qubit,
                        gate_name: Some(gate.name().to_string()),
                    }))
                }
            })
            .collect()
    }

    /// Apply a standard gate; `qubits` must already match its arity.
    fn apply_standard_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        match gate {
            // Single-qubit gates
            StandardGate::I => {}
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Y => self.apply_y(qubits[0]),
            StandardGate::Z => self.apply_phase(qubits[0], PI),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::S => self.apply_phase(qubits[0], PI / 2.0),
            StandardGate::Sdg => self.apply_phase(qubits[0], -PI / 2.0),
            StandardGate::T => self.apply_phase(qubits[0], PI / 4.0),
            StandardGate::Tdg => self.apply_phase(qubits[0], -PI / 4.0),
            StandardGate::P(theta) => self.apply_phase(qubits[0], *theta),

            // Controlled gates: every operand but the last is a control.
            StandardGate::CX | StandardGate::CCX | StandardGate::Mcx { .. } => {
                if let Some((target, controls)) = qubits.split_last() {
                    self.apply_mcx(controls, *target);
                }
            }
            StandardGate::CZ => self.apply_cp(qubits[0], qubits[1], PI),
            StandardGate::CP(theta) => self.apply_cp(qubits[0], qubits[1], *theta),
            StandardGate::Swap => self.apply_swap(qubits[0], qubits[1]),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
    }

    // =========================================================================
    // Multi-qubit gate implementations
    // =========================================================================

    fn apply_mcx(&mut self, controls: &[usize], target: usize) {
        let ctrl_mask: usize = controls.iter().map(|&c| 1 << c).sum();
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cp(&mut self, control: usize, target: usize, theta: f64) {
        let mask = (1 << control) | (1 << target);
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == mask {
                *amp *= phase;
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Sample a measurement outcome.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Rounding can leave the cumulative sum just under 1.
        self.amplitudes
            .iter()
            .rposition(|a| a.norm_sqr() > 0.0)
            .unwrap_or(self.amplitudes.len() - 1)
    }

    /// Convert a basis index to a bit-string with qubit 0 first.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits)
            .chars()
            .rev()
            .collect()
    }
}
