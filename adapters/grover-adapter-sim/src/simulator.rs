//! Shot-based simulator.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::{debug, instrument};

use grover_ir::{Circuit, InstructionKind};

use crate::error::{SimError, SimResult};
use crate::result::{Counts, ExecutionResult};
use crate::statevector::Statevector;

/// Local statevector simulator.
///
/// Circuits may only measure at the end, so the state is evolved once and
/// every shot samples the same final distribution.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Maximum number of qubits supported.
    max_qubits: usize,
    /// Seed for reproducible sampling; entropy when `None`.
    seed: Option<u64>,
}

impl Simulator {
    /// Create a new simulator with default settings.
    pub fn new() -> Self {
        Self {
            max_qubits: 20,
            seed: None,
        }
    }

    /// Fix the sampling seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a simulator with custom max qubits.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Maximum circuit width this simulator accepts.
    pub fn max_qubits(&self) -> usize {
        self.max_qubits
    }

    /// Exact final state of `circuit`, ignoring any measurements.
    pub fn statevector(&self, circuit: &Circuit) -> SimResult<Statevector> {
        self.check_size(circuit)?;
        Statevector::from_circuit(circuit)
    }

    /// Simulate `circuit` and sample `shots` measurement outcomes.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    pub fn run(&self, circuit: &Circuit, shots: u32) -> SimResult<ExecutionResult> {
        if shots == 0 {
            return Err(SimError::InvalidShots(shots));
        }
        self.check_size(circuit)?;

        let start = Instant::now();
        let num_qubits = circuit.num_qubits();
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        // Measured (qubit, clbit) pairs; gates after a measurement are rejected.
        let mut measured = FxHashSet::default();
        let mut measurements = Vec::new();
        for inst in circuit.instructions() {
            match &inst.kind {
                InstructionKind::Measure => {
                    for (q, c) in inst.qubits.iter().zip(&inst.clbits) {
                        measured.insert(*q);
                        measurements.push((q.index(), c.0 as usize));
                    }
                }
                InstructionKind::Gate(_) => {
                    if let Some(q) = inst.qubits.iter().find(|q| measured.contains(*q)) {
                        return Err(SimError::MidCircuitMeasurement(q.0));
                    }
                }
                InstructionKind::Barrier => {}
            }
        }
        if measurements.is_empty() {
            return Err(SimError::NoMeasurements);
        }

        let sv = Statevector::from_circuit(circuit)?;
        debug!("Final state norm {:.12}", sv.norm());

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let num_clbits = circuit.num_clbits();
        let mut counts = Counts::new();
        for shot in 0..shots {
            let outcome = sv.sample(&mut rng);
            counts.insert(read_clbits(outcome, &measurements, num_clbits), 1);

            if shot > 0 && shot % 1000 == 0 {
                debug!("Completed {} shots", shot);
            }
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed_ms))
    }

    fn check_size(&self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() > self.max_qubits {
            return Err(SimError::CircuitTooLarge {
                num_qubits: circuit.num_qubits(),
                max_qubits: self.max_qubits,
            });
        }
        Ok(())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Classical register contents after measuring basis state `outcome`,
/// classical bit 0 first. Unwritten bits read as `0`.
fn read_clbits(outcome: usize, measurements: &[(usize, usize)], num_clbits: usize) -> String {
    let mut bits = vec![b'0'; num_clbits];
    for &(qubit, clbit) in measurements {
        if (outcome >> qubit) & 1 == 1 {
            bits[clbit] = b'1';
        }
    }
    bits.into_iter().map(char::from).collect()
}
