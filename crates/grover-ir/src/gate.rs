//! Quantum gate types.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;

/// Standard gates with known semantics.
///
/// Angles are in radians. Controlled gates list their controls first and
/// their target last in the instruction's qubit operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford and phase gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Phase gate diag(1, e^{iθ}).
    P(f64),

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// Controlled phase gate, the `cu1` of older toolkits.
    CP(f64),
    /// SWAP gate.
    Swap,

    // Multi-qubit gates
    /// Toffoli gate (CCX).
    CCX,
    /// Multi-controlled X with an arbitrary number of controls.
    Mcx {
        /// Number of control qubits.
        controls: u32,
    },
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::P(_) => "p",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::CP(_) => "cp",
            StandardGate::Swap => "swap",
            StandardGate::CCX => "ccx",
            StandardGate::Mcx { .. } => "mcx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::P(_) => 1,

            StandardGate::CX | StandardGate::CZ | StandardGate::CP(_) | StandardGate::Swap => 2,

            StandardGate::CCX => 3,
            StandardGate::Mcx { controls } => controls + 1,
        }
    }

    /// Number of leading operands that act as controls.
    #[inline]
    pub fn num_controls(&self) -> u32 {
        match self {
            StandardGate::CX | StandardGate::CZ | StandardGate::CP(_) => 1,
            StandardGate::CCX => 2,
            StandardGate::Mcx { controls } => *controls,
            _ => 0,
        }
    }

    /// Rotation angle, for the phase-type gates that carry one.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::P(theta) | StandardGate::CP(theta) => Some(*theta),
            _ => None,
        }
    }
}

/// A named gate defined by a sequence of instructions.
///
/// The definition addresses local qubits `0..num_qubits`; applying the gate
/// to a list of circuit qubits maps local qubit `i` to the `i`-th operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGate {
    /// The name of the gate.
    pub name: String,
    /// The number of qubits it operates on.
    pub num_qubits: u32,
    /// Body of the gate on local qubits.
    pub definition: Vec<Instruction>,
}

impl CustomGate {
    /// Create a custom gate with an empty body.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            definition: vec![],
        }
    }

    /// Attach the body of the gate.
    #[must_use]
    pub fn with_definition(mut self, definition: Vec<Instruction>) -> Self {
        self.definition = definition;
        self
    }

    /// Check that every body instruction fits the gate's local qubits.
    ///
    /// Each instruction must be a gate with the right operand count, address
    /// only qubits below `num_qubits`, and name no qubit twice. Nested
    /// composite gates are checked the same way.
    pub fn validate(&self) -> IrResult<()> {
        let context = || Some(self.name.clone());
        for inst in &self.definition {
            let gate = inst
                .as_gate()
                .ok_or_else(|| IrError::NonUnitaryInstruction(inst.name().to_string()))?;

            let got = inst.qubits.len();
            if gate.num_qubits() as usize != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected: gate.num_qubits(),
                    got: u32::try_from(got).unwrap_or(u32::MAX),
                });
            }

            let mut seen = FxHashSet::default();
            for &qubit in &inst.qubits {
                if qubit.0 >= self.num_qubits {
                    return Err(IrError::QubitNotFound {
                        qubit,
                        gate_name: context(),
                    });
                }
                if !seen.insert(qubit) {
                    return Err(IrError::DuplicateQubit {
                        qubit,
                        gate_name: context(),
                    });
                }
            }

            if let GateKind::Custom(inner) = &gate.kind {
                inner.validate()?;
            }
        }
        Ok(())
    }

    /// Number of primitive operations after recursively expanding the body.
    pub fn flattened_len(&self) -> usize {
        self.definition
            .iter()
            .map(|inst| match inst.as_gate().map(|g| &g.kind) {
                Some(GateKind::Custom(inner)) => inner.flattened_len(),
                _ => 1,
            })
            .sum()
    }
}

/// A quantum gate, either standard or custom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// A standard gate with known semantics.
    Standard(StandardGate),
    /// A composite gate with an instruction body.
    Custom(CustomGate),
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::Standard(g) => g.name(),
            GateKind::Custom(g) => &g.name,
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::Standard(g) => g.num_qubits(),
            GateKind::Custom(g) => g.num_qubits,
        }
    }
}

/// A gate with associated metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// Optional display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Create a new gate from a standard gate.
    pub fn standard(gate: StandardGate) -> Self {
        Self {
            kind: GateKind::Standard(gate),
            label: None,
        }
    }

    /// Create a new gate from a custom gate.
    pub fn custom(gate: CustomGate) -> Self {
        Self {
            kind: GateKind::Custom(gate),
            label: None,
        }
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// The label if one is set, otherwise the name.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.name())
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::standard(gate)
    }
}

impl From<CustomGate> for Gate {
    fn from(gate: CustomGate) -> Self {
        Gate::custom(gate)
    }
}

/// Format an angle as a multiple of π where it is a simple dyadic fraction.
///
/// Falls back to four decimals for anything else.
pub fn format_angle(theta: f64) -> String {
    const EPS: f64 = 1e-9;

    if theta.abs() < EPS {
        return "0".into();
    }

    for denom in [1u32, 2, 4, 8, 16, 32, 64] {
        let scaled = theta / PI * f64::from(denom);
        let numer = scaled.round();
        if (scaled - numer).abs() < EPS {
            let sign = if numer < 0.0 { "-" } else { "" };
            let numer = numer.abs() as i64;
            let head = if numer == 1 {
                "π".to_string()
            } else {
                format!("{numer}π")
            };
            return if denom == 1 {
                format!("{sign}{head}")
            } else {
                format!("{sign}{head}/{denom}")
            };
        }
    }

    format!("{theta:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CP(PI / 2.0).num_qubits(), 2);
        assert_eq!(StandardGate::CCX.num_qubits(), 3);
        assert_eq!(StandardGate::Mcx { controls: 4 }.num_qubits(), 5);

        assert_eq!(StandardGate::CX.num_controls(), 1);
        assert_eq!(StandardGate::Mcx { controls: 3 }.num_controls(), 3);
        assert_eq!(StandardGate::Swap.num_controls(), 0);
        assert_eq!(StandardGate::CP(PI / 4.0).angle(), Some(PI / 4.0));
        assert_eq!(StandardGate::H.angle(), None);
    }

    #[test]
    fn test_gate_creation() {
        let h = Gate::standard(StandardGate::H);
        assert_eq!(h.name(), "h");
        assert_eq!(h.display_name(), "h");
        assert!(h.label.is_none());

        let labeled = Gate::standard(StandardGate::H).with_label("had");
        assert_eq!(labeled.display_name(), "had");
    }

    #[test]
    fn test_custom_gate_flattened_len() {
        use crate::qubit::QubitId;

        let inner = CustomGate::new("inner", 1).with_definition(vec![
            Instruction::gate(StandardGate::H, [QubitId(0)]),
            Instruction::gate(StandardGate::X, [QubitId(0)]),
        ]);
        let outer = CustomGate::new("outer", 2).with_definition(vec![
            Instruction::gate(inner, [QubitId(1)]),
            Instruction::gate(StandardGate::CX, [QubitId(0), QubitId(1)]),
        ]);

        assert_eq!(outer.flattened_len(), 3);
    }

    #[test]
    fn test_format_angle() {
        assert_eq!(format_angle(0.0), "0");
        assert_eq!(format_angle(PI), "π");
        assert_eq!(format_angle(-PI), "-π");
        assert_eq!(format_angle(PI / 2.0), "π/2");
        assert_eq!(format_angle(-PI / 8.0), "-π/8");
        assert_eq!(format_angle(3.0 * PI / 4.0), "3π/4");
        assert_eq!(format_angle(1.0), "1.0000");
    }
}
