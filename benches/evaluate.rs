//! Evaluation benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench evaluate
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use php_binop::config::EvaluatorConfig;
use php_binop::context::Snapshot;
use php_binop::evaluator::Evaluator;
use php_binop::operator::Operator;
use php_binop::value::{AnyKind, Value};
use php_binop::value_set::ValueSet;

// ============================================================================
// Helper: operand mix covering every dispatcher
// ============================================================================

fn operands(snapshot: &mut Snapshot) -> Vec<Value> {
    let mut values = vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(42),
        Value::Int(i32::MAX),
        Value::int_interval(-10, 10),
        Value::float(2.5),
        Value::float_interval(0.5, 1.5),
        Value::string("12abc"),
        Value::string(""),
        snapshot.new_array(2),
        snapshot.new_object(),
        snapshot.new_resource(),
    ];
    values.extend(AnyKind::ALL.into_iter().filter(|&k| k != AnyKind::Long).map(Value::any));
    values
}

// ============================================================================
// Benchmark: one operator over every pair of operand shapes
// ============================================================================

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate/pairs");

    let evaluator = Evaluator::new();
    let mut snapshot = Snapshot::new();
    let values = operands(&mut snapshot);
    group.throughput(Throughput::Elements((values.len() * values.len()) as u64));

    for op in [Operator::Equal, Operator::Add, Operator::Mod, Operator::BitAnd, Operator::Identical] {
        group.bench_with_input(BenchmarkId::new("op", op), &op, |b, &op| {
            b.iter(|| {
                for left in &values {
                    for right in &values {
                        let _ = black_box(evaluator.evaluate(&mut snapshot, left, op, right));
                    }
                }
                snapshot.take_warnings()
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: set fan-out with result collapsing
// ============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate/fan_out");

    for n in [4, 16, 64] {
        let left: ValueSet = (0..n).map(Value::Int).collect();
        let right: ValueSet = (0..n).map(|i| Value::int_interval(i, i + 10)).collect();
        group.throughput(Throughput::Elements((n * n) as u64));

        for collapse in [false, true] {
            let evaluator = Evaluator::with_config(EvaluatorConfig {
                collapse_results: collapse,
                ..Default::default()
            });
            group.bench_with_input(
                BenchmarkId::new(format!("collapse={}", collapse), n),
                &(left.clone(), right.clone()),
                |b, (left, right)| {
                    let mut snapshot = Snapshot::new();
                    b.iter(|| evaluator.evaluate_all(&mut snapshot, left, Operator::LessThan, right));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_pairs, bench_fan_out);

criterion_main!(benches);
