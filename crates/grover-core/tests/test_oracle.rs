//! Tests for the oracle and diffusion operators on the statevector simulator.

use grover_adapter_sim::Statevector;
use grover_core::{TaggedState, diffusion, oracle};
use grover_ir::{Circuit, Gate, QubitId};
use num_complex::Complex64;
use proptest::prelude::*;

fn register(n: usize) -> Vec<QubitId> {
    (0..n).map(QubitId::from).collect()
}

/// Prepare basis state `index` with X gates.
fn basis_circuit(n: usize, index: usize) -> Circuit {
    let mut circuit = Circuit::with_size("basis", n as u32, 0);
    for q in 0..n {
        if (index >> q) & 1 == 1 {
            circuit.x(QubitId::from(q)).unwrap();
        }
    }
    circuit
}

fn approx_eq(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < 1e-9
}

// ---------------------------------------------------------------------------
// Oracle
// ---------------------------------------------------------------------------

#[test]
fn test_oracle_flips_only_the_tagged_basis_state() {
    for n in 3..=5 {
        let size = 1usize << n;
        for tagged_index in 0..size {
            let tagged = TaggedState::from_index(tagged_index, n).unwrap();
            let uf = Gate::custom(oracle(&tagged).unwrap()).with_label("Uf");

            for x in 0..size {
                let mut circuit = basis_circuit(n, x);
                circuit.append(uf.clone(), register(n)).unwrap();

                let sv = Statevector::from_circuit(&circuit).unwrap();
                let expected = if x == tagged_index { -1.0 } else { 1.0 };
                assert!(
                    approx_eq(sv.amplitudes()[x], Complex64::new(expected, 0.0)),
                    "n={n} tagged={tagged} x={x}: got {}",
                    sv.amplitudes()[x]
                );
            }
        }
    }
}

#[test]
fn test_oracle_is_self_inverse() {
    let tagged = TaggedState::new("1011").unwrap();
    let uf = oracle(&tagged).unwrap();

    let mut circuit = Circuit::with_size("twice", 4, 0);
    for q in 0..4 {
        circuit.h(QubitId(q)).unwrap();
    }
    let before = Statevector::from_circuit(&circuit).unwrap();
    circuit.append(uf.clone(), register(4)).unwrap();
    circuit.append(uf, register(4)).unwrap();
    let after = Statevector::from_circuit(&circuit).unwrap();

    assert!((after.inner(&before).norm() - 1.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Diffusion
// ---------------------------------------------------------------------------

#[test]
fn test_diffusion_matrix_elements() {
    // Us|x⟩ = |x⟩ - 2⟨s|x⟩|s⟩, i.e. -(2|s⟩⟨s| - I).
    for n in 3..=5 {
        let size = 1usize << n;
        let us = diffusion(n).unwrap();
        for x in [0, 1, size / 2, size - 1] {
            let mut circuit = basis_circuit(n, x);
            circuit.append(us.clone(), register(n)).unwrap();
            let sv = Statevector::from_circuit(&circuit).unwrap();

            for (y, amp) in sv.amplitudes().iter().enumerate() {
                let delta = if x == y { 1.0 } else { 0.0 };
                let expected = delta - 2.0 / size as f64;
                assert!(
                    approx_eq(*amp, Complex64::new(expected, 0.0)),
                    "n={n} x={x} y={y}: got {amp}"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Properties over arbitrary input states
// ---------------------------------------------------------------------------

fn arb_case() -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
    (3usize..=5).prop_flat_map(|n| {
        (
            Just(n),
            0..(1usize << n),
            prop::collection::vec(-3.0f64..3.0, n),
        )
    })
}

proptest! {
    #[test]
    fn prop_oracle_negates_tagged_amplitude((n, tagged_index, phases) in arb_case()) {
        let mut circuit = Circuit::with_size("input", n as u32, 0);
        for (q, theta) in phases.iter().enumerate() {
            circuit.h(QubitId::from(q)).unwrap();
            circuit.p(*theta, QubitId::from(q)).unwrap();
        }
        let before = Statevector::from_circuit(&circuit).unwrap();

        let tagged = TaggedState::from_index(tagged_index, n).unwrap();
        circuit.append(oracle(&tagged).unwrap(), register(n)).unwrap();
        let after = Statevector::from_circuit(&circuit).unwrap();

        for (i, (a, b)) in before.amplitudes().iter().zip(after.amplitudes()).enumerate() {
            let expected = if i == tagged_index { -a } else { *a };
            prop_assert!(approx_eq(*b, expected), "index {}: {} vs {}", i, b, expected);
        }
    }

    #[test]
    fn prop_diffusion_preserves_norm((n, _tagged, phases) in arb_case()) {
        let mut circuit = Circuit::with_size("input", n as u32, 0);
        for (q, theta) in phases.iter().enumerate() {
            circuit.h(QubitId::from(q)).unwrap();
            circuit.p(*theta, QubitId::from(q)).unwrap();
        }
        circuit.append(diffusion(n).unwrap(), register(n)).unwrap();

        let sv = Statevector::from_circuit(&circuit).unwrap();
        prop_assert!((sv.norm() - 1.0).abs() < 1e-9);
    }
}
