//! Grover iteration driver and analytic helpers.

use grover_ir::{Circuit, Gate, QubitId};
use std::f64::consts::PI;
use tracing::{info, instrument};

use crate::config::ValidatedConfig;
use crate::diffusion::{DIFFUSION_LABEL, diffusion};
use crate::error::GroverResult;
use crate::oracle::{ORACLE_LABEL, oracle};

/// Put every qubit of `circuit` into uniform superposition.
pub fn initial_state(circuit: &mut Circuit) -> GroverResult<()> {
    for q in 0..circuit.num_qubits() {
        circuit.h(QubitId::from(q))?;
    }
    Ok(())
}

/// Build the unmeasured search circuit.
///
/// Superposition, then `R` rounds of barrier, `Uf` and `Us`.
#[instrument(skip(config), fields(tagged = %config.tagged, iterations = config.iterations))]
pub fn grover_circuit(config: &ValidatedConfig) -> GroverResult<Circuit> {
    let n = config.num_qubits();
    let mut circuit = Circuit::with_size("grover", n as u32, 0);
    initial_state(&mut circuit)?;

    let uf = Gate::custom(oracle(&config.tagged)?).with_label(ORACLE_LABEL);
    let us = Gate::custom(diffusion(n)?).with_label(DIFFUSION_LABEL);
    let qubits: Vec<QubitId> = (0..n).map(QubitId::from).collect();

    for _ in 0..config.iterations {
        circuit.barrier_all()?;
        circuit.append(uf.clone(), qubits.iter().copied())?;
        circuit.append(us.clone(), qubits.iter().copied())?;
    }

    info!(
        "Built Grover circuit: {} qubits, {} rounds, depth {}",
        n,
        config.iterations,
        circuit.depth()
    );
    Ok(circuit)
}

/// The search circuit followed by a measurement of every qubit.
pub fn measured_circuit(config: &ValidatedConfig) -> GroverResult<Circuit> {
    let mut circuit = grover_circuit(config)?;
    circuit.measure_all()?;
    Ok(circuit)
}

/// Calculate the optimal number of Grover iterations.
///
/// For a single marked item in a space of size N = 2^n,
/// the optimal number of iterations is approximately π/4 * sqrt(N).
pub fn optimal_iterations(num_qubits: usize) -> u32 {
    let n = (1u64 << num_qubits) as f64;
    let optimal = (PI / 4.0 * n.sqrt()).round() as u32;
    optimal.max(1)
}

/// Probability of measuring the tagged state after `iterations` rounds.
pub fn success_probability(num_qubits: usize, iterations: u32) -> f64 {
    let n = (1u64 << num_qubits) as f64;
    let theta = (1.0 / n.sqrt()).asin();
    ((2.0 * f64::from(iterations) + 1.0) * theta).sin().powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroverConfig;

    fn validated(tagged: &str, iterations: u32) -> ValidatedConfig {
        GroverConfig {
            tagged: tagged.into(),
            iterations: crate::config::Iterations::Fixed(iterations),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_optimal_iterations() {
        assert_eq!(optimal_iterations(3), 2);
        assert_eq!(optimal_iterations(4), 3);
        assert_eq!(optimal_iterations(5), 4);
        assert_eq!(optimal_iterations(1), 1);
    }

    #[test]
    fn test_success_probability() {
        // One round on four items finds the answer with certainty.
        assert!((success_probability(2, 1) - 1.0).abs() < 1e-12);
        // No rounds leaves the uniform distribution.
        assert!((success_probability(3, 0) - 1.0 / 8.0).abs() < 1e-12);
        assert!((success_probability(3, 2) - 0.9453125).abs() < 1e-9);
    }

    #[test]
    fn test_circuit_layout() {
        let circuit = grover_circuit(&validated("010", 2)).unwrap();
        let ops = circuit.count_ops();

        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(ops.get("h"), Some(&3));
        assert_eq!(ops.get("barrier"), Some(&2));
        assert_eq!(ops.get("Uf"), Some(&2));
        assert_eq!(ops.get("Us"), Some(&2));
    }

    #[test]
    fn test_zero_rounds_is_superposition_only() {
        let circuit = grover_circuit(&validated("0000", 0)).unwrap();
        assert_eq!(circuit.num_ops(), 4);
    }

    #[test]
    fn test_measured_circuit() {
        let circuit = measured_circuit(&validated("10110", 1)).unwrap();
        assert_eq!(circuit.num_clbits(), 5);
        assert_eq!(circuit.count_ops().get("measure"), Some(&1));
    }
}
