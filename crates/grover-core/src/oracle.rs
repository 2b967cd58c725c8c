//! The phase oracle `Uf`.
//!
//! The oracle is a multi-controlled phase flip on the all-ones state, built
//! from a fixed Gray-code sequence of controlled phases and CNOTs, and
//! conjugated with X on every qubit whose tagged bit is `0`. Each
//! controlled phase targets the last qubit and rotates by `±π/2^(n-2)`.

use grover_ir::{Circuit, CustomGate, IrResult, QubitId};
use std::f64::consts::PI;
use tracing::debug;

use crate::error::{GroverError, GroverResult};
use crate::tagged::TaggedState;

/// Label drawn on the oracle box.
pub const ORACLE_LABEL: &str = "Uf";

/// One step of a phase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStep {
    /// Controlled phase of `sign` unit angles from `control` onto the last qubit.
    Phase { sign: i8, control: u32 },
    /// CNOT between two control qubits.
    Cx { control: u32, target: u32 },
}

use PhaseStep::{Cx, Phase};

const fn p(sign: i8, control: u32) -> PhaseStep {
    Phase { sign, control }
}

const fn cx(control: u32, target: u32) -> PhaseStep {
    Cx { control, target }
}

/// Phase flip on |111⟩, unit angle π/2.
pub const TABLE_3: [PhaseStep; 5] = [p(1, 0), cx(0, 1), p(-1, 1), cx(0, 1), p(1, 1)];

/// Phase flip on |1111⟩, unit angle π/4.
pub const TABLE_4: [PhaseStep; 13] = [
    p(1, 0),
    cx(0, 1),
    p(-1, 1),
    cx(0, 1),
    p(1, 1),
    cx(1, 2),
    p(-1, 2),
    cx(0, 2),
    p(1, 2),
    cx(1, 2),
    p(-1, 2),
    cx(0, 2),
    p(1, 2),
];

/// Phase flip on |11111⟩, unit angle π/8.
pub const TABLE_5: [PhaseStep; 29] = [
    p(1, 0),
    cx(0, 1),
    p(-1, 1),
    cx(0, 1),
    p(1, 1),
    cx(1, 2),
    p(-1, 2),
    cx(0, 2),
    p(1, 2),
    cx(1, 2),
    p(-1, 2),
    cx(0, 2),
    p(1, 2),
    cx(0, 3),
    p(-1, 3),
    cx(2, 3),
    p(1, 3),
    cx(1, 3),
    p(-1, 3),
    cx(2, 3),
    p(1, 3),
    cx(0, 3),
    p(-1, 3),
    cx(2, 3),
    p(1, 3),
    cx(1, 3),
    p(-1, 3),
    cx(2, 3),
    p(1, 3),
];

/// The phase table for an `n`-qubit register, if one exists.
pub fn phase_table(num_qubits: usize) -> Option<&'static [PhaseStep]> {
    match num_qubits {
        3 => Some(&TABLE_3),
        4 => Some(&TABLE_4),
        5 => Some(&TABLE_5),
        _ => None,
    }
}

/// Unit rotation of the `n`-qubit table; `n` is at least 3.
fn unit_angle(num_qubits: usize) -> f64 {
    PI / f64::from(1u32 << (num_qubits - 2))
}

/// Append the all-ones phase flip for `n` qubits onto qubits `0..n`.
fn apply_phase_table(circuit: &mut Circuit, table: &[PhaseStep], num_qubits: usize) -> IrResult<()> {
    let unit = unit_angle(num_qubits);
    let last = QubitId::from(num_qubits - 1);
    for step in table {
        match *step {
            Phase { sign, control } => {
                circuit.cp(f64::from(sign) * unit, QubitId(control), last)?;
            }
            Cx { control, target } => {
                circuit.cx(QubitId(control), QubitId(target))?;
            }
        }
    }
    Ok(())
}

/// Build the oracle body as a plain circuit.
pub fn oracle_circuit(tagged: &TaggedState) -> GroverResult<Circuit> {
    let n = tagged.num_qubits();
    let table = phase_table(n).ok_or(GroverError::UnsupportedQubitCount(n))?;

    let mut circuit = Circuit::with_size(ORACLE_LABEL, n as u32, 0);
    let flips: Vec<QubitId> = tagged.zero_qubits().map(QubitId::from).collect();

    for &q in &flips {
        circuit.x(q)?;
    }
    apply_phase_table(&mut circuit, table, n)?;
    for &q in &flips {
        circuit.x(q)?;
    }

    debug!(
        "Built oracle for |{}⟩: {} X flips, {} table steps",
        tagged,
        flips.len(),
        table.len()
    );
    Ok(circuit)
}

/// The oracle `Uf` as a composite gate: `Uf|x⟩ = -|x⟩` for the tagged `x`.
pub fn oracle(tagged: &TaggedState) -> GroverResult<CustomGate> {
    Ok(oracle_circuit(tagged)?.to_gate(ORACLE_LABEL)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(phase_table(3).map(<[_]>::len), Some(5));
        assert_eq!(phase_table(4).map(<[_]>::len), Some(13));
        assert_eq!(phase_table(5).map(<[_]>::len), Some(29));
        assert!(phase_table(2).is_none());
        assert!(phase_table(6).is_none());
    }

    #[test]
    fn test_unit_angles() {
        assert!((unit_angle(3) - PI / 2.0).abs() < 1e-15);
        assert!((unit_angle(4) - PI / 4.0).abs() < 1e-15);
        assert!((unit_angle(5) - PI / 8.0).abs() < 1e-15);
    }

    #[test]
    fn test_narrow_registers_rejected_before_table() {
        assert!(phase_table(0).is_none());
        assert!(phase_table(1).is_none());
        assert!(matches!(
            TaggedState::new("1"),
            Err(GroverError::UnsupportedQubitCount(1))
        ));
    }

    #[test]
    fn test_phases_sum_to_pi() {
        // On |1...1⟩ the parity feeding every phase is 1.
        for n in 3..=5 {
            let table = phase_table(n).unwrap();
            let signs: i32 = table
                .iter()
                .filter_map(|s| match s {
                    Phase { sign, .. } => Some(i32::from(*sign)),
                    Cx { .. } => None,
                })
                .sum();
            assert_eq!(signs, 1, "n = {n}");
        }
    }

    #[test]
    fn test_oracle_gate_shape() {
        let tagged = TaggedState::new("010").unwrap();
        let gate = oracle(&tagged).unwrap();

        assert_eq!(gate.name, "Uf");
        assert_eq!(gate.num_qubits, 3);
        // Two X gates on each side for the zero bits plus the 5-step table.
        assert_eq!(gate.definition.len(), 4 + 5);
        assert_eq!(gate.definition[0].name(), "x");
        assert_eq!(gate.definition[2].name(), "cp");
    }

    #[test]
    fn test_all_ones_needs_no_flips() {
        let tagged = TaggedState::new("1111").unwrap();
        let circuit = oracle_circuit(&tagged).unwrap();
        let ops = circuit.count_ops();
        assert_eq!(ops.get("x"), None);
        assert_eq!(ops.get("cp"), Some(&7));
        assert_eq!(ops.get("cx"), Some(&6));
    }
}
