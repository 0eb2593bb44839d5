//! Criterion benchmarks for exact pedigree inference.
//!
//! Benchmarks assignment enumeration, joint-probability scoring, and the full
//! infer pipeline across pedigree sizes and both enumeration strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hd_config::ModelParams;
use hd_core::inference::{
    joint_probability, Assignment, ConstrainedEnumerator, EnumerationStrategy, Enumerator,
    ExhaustiveEnumerator, InferenceConfig, InferenceEngine,
};
use hd_core::pedigree::{Pedigree, PersonRecord, TraitEvidence};

// ── Helpers ──────────────────────────────────────────────────────────

/// Two founders followed by children of the previous two people; every
/// third person has an observed trait.
fn make_chain(n: usize) -> Pedigree {
    let records = (0..n).map(|i| {
        let evidence = match i % 3 {
            0 => TraitEvidence::Present,
            1 => TraitEvidence::Unknown,
            _ => TraitEvidence::Absent,
        };
        let record = PersonRecord::new(format!("P{i}")).with_evidence(evidence);
        if i >= 2 {
            record.with_parents(format!("P{}", i - 2), format!("P{}", i - 1))
        } else {
            record
        }
    });
    Pedigree::from_records(records).unwrap()
}

// ── Enumeration ──────────────────────────────────────────────────────

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference/enumerate");
    for n in [3, 5, 7] {
        let ped = make_chain(n);
        group.bench_function(BenchmarkId::new("exhaustive", n), |b| {
            b.iter(|| black_box(ExhaustiveEnumerator.assignments(&ped).unwrap().count()))
        });
        group.bench_function(BenchmarkId::new("constrained", n), |b| {
            b.iter(|| black_box(ConstrainedEnumerator.assignments(&ped).unwrap().count()))
        });
    }
    group.finish();
}

// ── Joint probability ────────────────────────────────────────────────

fn bench_joint(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference/joint");
    let model = ModelParams::default();
    for n in [3, 8] {
        let ped = make_chain(n);
        let assignment = Assignment::from_masks(n, 0b01, 0b10, 0b101);
        group.bench_function(BenchmarkId::new("people", n), |b| {
            b.iter(|| joint_probability(&ped, &model, black_box(&assignment)).unwrap())
        });
    }
    group.finish();
}

// ── Full pipeline ────────────────────────────────────────────────────

fn bench_infer(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference/infer");
    group.sample_size(20);
    for strategy in [EnumerationStrategy::Exhaustive, EnumerationStrategy::Constrained] {
        let engine = InferenceEngine::new(
            ModelParams::default(),
            InferenceConfig {
                strategy,
                ..InferenceConfig::default()
            },
        )
        .unwrap();
        for n in [3, 6] {
            let ped = make_chain(n);
            group.bench_function(BenchmarkId::new(format!("{strategy:?}"), n), |b| {
                b.iter(|| black_box(engine.infer(&ped).unwrap()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_joint, bench_infer);
criterion_main!(benches);
