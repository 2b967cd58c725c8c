//! Plain-text circuit diagrams.
//!
//! Every instruction gets its own column. `cx(0, 2)` followed by
//! `cp(π/2, 1, 2)` renders as:
//!
//! ```text
//! q0: ─■──────────
//!      │
//! q1: ─┼────■─────
//!      │    │
//! q2: ─⊕──P(π/2)──
//! ```
//!
//! Composite gates are drawn as a labelled box on each qubit they touch,
//! or expanded into their bodies when [`TextDrawer::decompose`] is set.

use crate::circuit::Circuit;
use crate::error::IrResult;
use crate::gate::{GateKind, StandardGate, format_angle};
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::QubitId;

const WIRE: char = '─';
const CROSS: &str = "┼";
const VERTICAL: &str = "│";

/// Renders circuits as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDrawer {
    decompose: bool,
}

/// One column of the diagram: the cell text for every touched row, plus the
/// span of rows linked by a vertical connector.
struct Column {
    cells: Vec<(usize, String)>,
    span: Option<(usize, usize)>,
}

impl TextDrawer {
    /// Create a drawer that keeps composite gates folded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand composite gates into their definitions.
    #[must_use]
    pub fn decompose(mut self, decompose: bool) -> Self {
        self.decompose = decompose;
        self
    }

    /// Render the circuit to a multi-line string.
    pub fn render(&self, circuit: &Circuit) -> IrResult<String> {
        let mut flat = Vec::new();
        for inst in circuit.instructions() {
            self.flatten(inst, &mut flat)?;
        }

        let columns: Vec<Column> = flat.iter().map(column_for).collect();
        Ok(layout(circuit.num_qubits(), &columns))
    }

    fn flatten(&self, inst: &Instruction, out: &mut Vec<Instruction>) -> IrResult<()> {
        match inst.as_custom() {
            Some(custom) if self.decompose => {
                for inner in &custom.definition {
                    self.flatten(&inner.remap_qubits(&inst.qubits)?, out)?;
                }
            }
            _ => out.push(inst.clone()),
        }
        Ok(())
    }
}

fn standard_target(gate: &StandardGate) -> String {
    if let Some(theta) = gate.angle() {
        return format!("P({})", format_angle(theta));
    }
    match gate {
        StandardGate::CX | StandardGate::CCX | StandardGate::Mcx { .. } => "⊕".into(),
        StandardGate::CZ => "■".into(),
        StandardGate::Swap => "x".into(),
        other => other.name().to_uppercase(),
    }
}

fn column_for(inst: &Instruction) -> Column {
    let rows: Vec<usize> = inst.qubits.iter().map(|q: &QubitId| q.index()).collect();
    let span = match (rows.iter().min(), rows.iter().max()) {
        (Some(&lo), Some(&hi)) if lo != hi => Some((lo, hi)),
        _ => None,
    };

    let cells = match &inst.kind {
        InstructionKind::Barrier => rows.iter().map(|&r| (r, "░".to_string())).collect(),
        InstructionKind::Measure => rows.iter().map(|&r| (r, "M".to_string())).collect(),
        InstructionKind::Gate(gate) => match &gate.kind {
            GateKind::Custom(_) => {
                let label = format!("[{}]", gate.display_name());
                rows.iter().map(|&r| (r, label.clone())).collect()
            }
            GateKind::Standard(std_gate) => {
                let controls = std_gate.num_controls() as usize;
                rows.iter()
                    .enumerate()
                    .map(|(pos, &r)| {
                        if pos < controls {
                            (r, "■".to_string())
                        } else {
                            (r, standard_target(std_gate))
                        }
                    })
                    .collect()
            }
        },
    };

    // Barriers and measurements span rows without being a single operation.
    let span = if inst.is_gate() { span } else { None };

    Column { cells, span }
}

fn pad_center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

fn layout(num_qubits: usize, columns: &[Column]) -> String {
    let label_width = format!("q{}: ", num_qubits.saturating_sub(1)).chars().count();
    let mut wire_rows: Vec<String> = (0..num_qubits)
        .map(|q| format!("{:<label_width$}", format!("q{q}:")))
        .collect();
    let mut gap_rows: Vec<String> = vec![" ".repeat(label_width); num_qubits.saturating_sub(1)];

    for column in columns {
        let width = column
            .cells
            .iter()
            .map(|(_, text)| text.chars().count())
            .max()
            .unwrap_or(1)
            .max(1);

        for (row, line) in wire_rows.iter_mut().enumerate() {
            let cell = column
                .cells
                .iter()
                .find(|(r, _)| *r == row)
                .map(|(_, text)| text.as_str());
            let inside = column.span.is_some_and(|(lo, hi)| lo < row && row < hi);
            let text = match cell {
                Some(text) => text,
                None if inside => CROSS,
                None => "",
            };
            line.push(WIRE);
            line.push_str(&pad_center(text, width, WIRE));
            line.push(WIRE);
        }

        for (gap, line) in gap_rows.iter_mut().enumerate() {
            let linked = column.span.is_some_and(|(lo, hi)| lo <= gap && gap < hi);
            line.push(' ');
            line.push_str(&pad_center(if linked { VERTICAL } else { "" }, width, ' '));
            line.push(' ');
        }
    }

    let mut out = String::new();
    for (row, line) in wire_rows.iter().enumerate() {
        out.push_str(line);
        out.push(WIRE);
        out.push('\n');
        if let Some(gap) = gap_rows.get(row) {
            out.push_str(gap.trim_end());
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn lines(diagram: &str) -> Vec<&str> {
        diagram.lines().collect()
    }

    #[test]
    fn test_single_qubit_row() {
        let mut circuit = Circuit::with_size("t", 1, 0);
        circuit.h(QubitId(0)).unwrap().x(QubitId(0)).unwrap();

        let diagram = TextDrawer::new().render(&circuit).unwrap();
        assert_eq!(lines(&diagram), vec!["q0: ─H──X──"]);
    }

    #[test]
    fn test_controlled_phase_connects_rows() {
        let mut circuit = Circuit::with_size("t", 3, 0);
        circuit.cp(PI / 2.0, QubitId(0), QubitId(2)).unwrap();

        let diagram = TextDrawer::new().render(&circuit).unwrap();
        let rows = lines(&diagram);
        assert_eq!(rows.len(), 5);
        assert!(rows[0].contains('■'));
        assert!(rows[1].contains('│'));
        assert!(rows[2].contains('┼'));
        assert!(rows[4].contains("P(π/2)"));
    }

    #[test]
    fn test_composite_gate_folded_and_decomposed() {
        let mut body = Circuit::with_size("body", 2, 0);
        body.h(QubitId(0)).unwrap().cx(QubitId(0), QubitId(1)).unwrap();
        let gate = crate::gate::Gate::custom(body.to_gate("prep").unwrap()).with_label("Up");

        let mut circuit = Circuit::with_size("t", 2, 0);
        circuit.append(gate, [QubitId(1), QubitId(0)]).unwrap();

        let folded = TextDrawer::new().render(&circuit).unwrap();
        assert!(folded.contains("[Up]"));
        assert!(!folded.contains('⊕'));

        let expanded = TextDrawer::new().decompose(true).render(&circuit).unwrap();
        let rows = lines(&expanded);
        // Local qubit 0 lands on circuit qubit 1.
        assert!(rows[2].contains('H'));
        assert!(rows[0].contains('⊕'));
        assert!(!expanded.contains("[Up]"));
    }

    #[test]
    fn test_barrier_and_measure_cells() {
        let mut circuit = Circuit::with_size("t", 2, 0);
        circuit.barrier_all().unwrap().measure_all().unwrap();

        let diagram = TextDrawer::new().render(&circuit).unwrap();
        let rows = lines(&diagram);
        assert!(rows[0].contains('░') && rows[0].contains('M'));
        assert!(rows[2].contains('░') && rows[2].contains('M'));
        assert!(!rows[1].contains('│'));
    }
}
