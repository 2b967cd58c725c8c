//! Property-based tests for statevector evolution.
//!
//! Every circuit here is unitary, so norms are preserved and a circuit
//! followed by its inverse returns to |0...0⟩.

use grover_adapter_sim::{Simulator, Statevector};
use grover_ir::{Circuit, QubitId};
use proptest::prelude::*;

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    P(f64, u32),
    CX(u32, u32),
    CP(f64, u32, u32),
}

impl GateOp {
    fn apply(&self, circuit: &mut Circuit) {
        match *self {
            GateOp::H(q) => {
                let _ = circuit.h(QubitId(q));
            }
            GateOp::X(q) => {
                let _ = circuit.x(QubitId(q));
            }
            GateOp::P(theta, q) => {
                let _ = circuit.p(theta, QubitId(q));
            }
            GateOp::CX(c, t) => {
                let _ = circuit.cx(QubitId(c), QubitId(t));
            }
            GateOp::CP(theta, c, t) => {
                let _ = circuit.cp(theta, QubitId(c), QubitId(t));
            }
        }
    }

    fn inverse(&self) -> GateOp {
        match *self {
            GateOp::P(theta, q) => GateOp::P(-theta, q),
            GateOp::CP(theta, c, t) => GateOp::CP(-theta, c, t),
            ref other => other.clone(),
        }
    }
}

fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    let angle = -std::f64::consts::PI..std::f64::consts::PI;
    let pair = (0..num_qubits, 0..num_qubits).prop_filter("distinct qubits", |(a, b)| a != b);
    prop_oneof![
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits).prop_map(GateOp::X),
        (angle.clone(), 0..num_qubits).prop_map(|(t, q)| GateOp::P(t, q)),
        pair.clone().prop_map(|(c, t)| GateOp::CX(c, t)),
        (angle, pair).prop_map(|(t, (c, q))| GateOp::CP(t, c, q)),
    ]
}

fn arb_ops() -> impl Strategy<Value = (u32, Vec<GateOp>)> {
    (2_u32..=5).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_gate_op(n), 1..=20)))
}

proptest! {
    #[test]
    fn prop_norm_is_preserved((n, ops) in arb_ops()) {
        let mut circuit = Circuit::with_size("random", n, 0);
        for op in &ops {
            op.apply(&mut circuit);
        }

        let sv = Statevector::from_circuit(&circuit).unwrap();
        prop_assert!((sv.norm() - 1.0).abs() < 1e-9);
        let total: f64 = sv.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_inverse_returns_to_zero((n, ops) in arb_ops()) {
        let mut circuit = Circuit::with_size("mirror", n, 0);
        for op in &ops {
            op.apply(&mut circuit);
        }
        for op in ops.iter().rev() {
            op.inverse().apply(&mut circuit);
        }

        let sv = Statevector::from_circuit(&circuit).unwrap();
        prop_assert!((sv.probability(0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_counts_sum_to_shots((n, ops) in arb_ops(), shots in 1_u32..512, seed in any::<u64>()) {
        let mut circuit = Circuit::with_size("sampled", n, 0);
        for op in &ops {
            op.apply(&mut circuit);
        }
        circuit.measure_all().unwrap();

        let result = Simulator::new().with_seed(seed).run(&circuit, shots).unwrap();
        prop_assert_eq!(result.counts.total_shots(), u64::from(shots));
        for (bits, _) in result.counts.iter() {
            prop_assert_eq!(bits.len(), n as usize);
        }
    }
}
