//! Benchmarks for circuit construction, depth and drawing.
//!
//! Run with: cargo bench -p grover-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use grover_ir::{Circuit, Gate, QubitId, TextDrawer};
use std::f64::consts::PI;

/// A phase ladder touching every qubit, similar in shape to an oracle body.
fn phase_ladder(n: u32) -> Circuit {
    let mut circuit = Circuit::with_size("ladder", n, 0);
    for i in 0..n {
        circuit.h(QubitId(i)).unwrap();
    }
    for i in 0..n - 1 {
        circuit.cp(PI / 4.0, QubitId(i), QubitId(n - 1)).unwrap();
        circuit.cx(QubitId(i), QubitId(i + 1)).unwrap();
    }
    circuit
}

fn bench_gate_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_addition");

    group.bench_function("h_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 5, 0);
        b.iter(|| {
            circuit.h(black_box(QubitId(0))).unwrap();
        });
    });

    group.bench_function("cp_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 5, 0);
        b.iter(|| {
            circuit
                .cp(black_box(PI / 8.0), black_box(QubitId(0)), black_box(QubitId(4)))
                .unwrap();
        });
    });

    group.finish();
}

fn bench_ladder(c: &mut Criterion) {
    let mut group = c.benchmark_group("phase_ladder");

    for num_qubits in &[3u32, 4, 5, 10] {
        group.bench_with_input(BenchmarkId::new("build", num_qubits), num_qubits, |b, &n| {
            b.iter(|| black_box(phase_ladder(n)));
        });

        let circuit = phase_ladder(*num_qubits);
        group.bench_with_input(BenchmarkId::new("depth", num_qubits), &circuit, |b, circuit| {
            b.iter(|| black_box(circuit.depth()));
        });
    }

    group.finish();
}

fn bench_drawing(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawing");

    let gate = phase_ladder(5).to_gate("ladder").unwrap();
    let mut circuit = Circuit::with_size("outer", 5, 0);
    for _ in 0..4 {
        circuit
            .append(Gate::custom(gate.clone()).with_label("L"), (0..5).map(QubitId))
            .unwrap();
    }

    group.bench_function("folded", |b| {
        b.iter(|| black_box(TextDrawer::new().render(&circuit).unwrap()));
    });
    group.bench_function("decomposed", |b| {
        b.iter(|| black_box(TextDrawer::new().decompose(true).render(&circuit).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_gate_addition, bench_ladder, bench_drawing);

criterion_main!(benches);
