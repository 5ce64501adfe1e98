//! Benchmark for condition tree evaluation
//!
//! Compares the recursive and iterative strategies on a small mixed tree and
//! on a deep chain.

use condition_tree::{
    create_and_condition, create_or_condition, evaluate, evaluate_iterative, false_condition,
    true_condition, Condition,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn reference_tree() -> Condition {
    create_or_condition(vec![
        create_and_condition(vec![
            true_condition(),
            create_or_condition(vec![false_condition(), false_condition()]),
        ]),
        create_and_condition(vec![
            true_condition(),
            false_condition(),
            create_or_condition(vec![false_condition(), true_condition()]),
        ]),
        create_and_condition(vec![
            create_and_condition(vec![
                create_or_condition(vec![true_condition(), true_condition()]),
                false_condition(),
            ]),
            false_condition(),
        ]),
    ])
}

/// Alternating OR/AND chain that never short-circuits early
fn deep_chain(depth: usize) -> Condition {
    (0..depth).fold(false_condition(), |acc, i| {
        if i % 2 == 0 {
            create_or_condition(vec![false_condition(), acc])
        } else {
            create_and_condition(vec![true_condition(), acc])
        }
    })
}

/// Wide OR whose only true child is last
fn wide_or(width: usize) -> Condition {
    let mut children: Vec<Condition> = (1..width).map(|_| false_condition()).collect();
    children.push(true_condition());
    create_or_condition(children)
}

fn bench_reference_tree(c: &mut Criterion) {
    let tree = reference_tree();

    c.bench_function("reference_tree_recursive", |b| {
        b.iter(|| evaluate(black_box(&tree)))
    });
    c.bench_function("reference_tree_iterative", |b| {
        b.iter(|| evaluate_iterative(black_box(&tree)))
    });
}

fn bench_deep_chain(c: &mut Criterion) {
    let tree = deep_chain(1_000);

    c.bench_function("deep_chain_recursive", |b| {
        b.iter(|| evaluate(black_box(&tree)))
    });
    c.bench_function("deep_chain_iterative", |b| {
        b.iter(|| evaluate_iterative(black_box(&tree)))
    });
}

fn bench_wide_or(c: &mut Criterion) {
    let tree = wide_or(10_000);

    c.bench_function("wide_or_recursive", |b| b.iter(|| evaluate(black_box(&tree))));
    c.bench_function("wide_or_iterative", |b| {
        b.iter(|| evaluate_iterative(black_box(&tree)))
    });
}

criterion_group!(benches, bench_reference_tree, bench_deep_chain, bench_wide_or);
criterion_main!(benches);
