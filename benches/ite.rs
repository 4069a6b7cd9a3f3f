//! ITE engine benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench ite
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use robdd::bdd::Bdd;
use robdd::config::BddConfig;
use robdd::reference::Ref;

// ============================================================================
// Helper: N-Queens Problem
// ============================================================================

fn solve_queens(bdd: &Bdd, n: usize) -> Ref {
    let mut vars = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            vars.push(bdd.create_variable(&format!("q{}_{}", i, j)).unwrap());
        }
    }
    let var = |i: usize, j: usize| vars[i * n + j];
    let not_both = |p: Ref, q: Ref| bdd.nand2(p, q).unwrap();

    let mut result = bdd.one();

    for i in 0..n {
        let row = bdd.or_many((0..n).map(|j| var(i, j))).unwrap();
        result = bdd.and2(result, row).unwrap();

        for j1 in 0..n {
            for j2 in (j1 + 1)..n {
                result = bdd.and2(result, not_both(var(i, j1), var(i, j2))).unwrap();
            }
        }
    }

    for j in 0..n {
        for i1 in 0..n {
            for i2 in (i1 + 1)..n {
                result = bdd.and2(result, not_both(var(i1, j), var(i2, j))).unwrap();
            }
        }
    }

    for i1 in 0..n {
        for j1 in 0..n {
            for i2 in (i1 + 1)..n {
                for j2 in 0..n {
                    let di = i2 - i1;
                    if j2 == j1 + di || (j1 >= di && j2 == j1 - di) {
                        result = bdd.and2(result, not_both(var(i1, j1), var(i2, j2))).unwrap();
                    }
                }
            }
        }
    }

    result
}

// ============================================================================
// Helper: Random Boolean Formula
// ============================================================================

fn build_random_formula(bdd: &Bdd, num_vars: usize, num_ops: usize, seed: u64) -> Ref {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let vars: Vec<Ref> = (0..num_vars)
        .map(|i| bdd.create_variable(&format!("x{}", i)).unwrap())
        .collect();

    let mut nodes: Vec<Ref> = vars
        .iter()
        .map(|&v| if rng.random_bool(0.5) { v } else { bdd.negate(v).unwrap() })
        .collect();

    for _ in 0..num_ops {
        let i = rng.random_range(0..nodes.len());
        let j = rng.random_range(0..nodes.len());
        if i == j {
            continue;
        }

        let (a, b) = (nodes[i], nodes[j]);
        nodes[i] = match rng.random_range(0..4) {
            0 => bdd.and2(a, b),
            1 => bdd.or2(a, b),
            2 => bdd.xor2(a, b),
            _ => bdd.imply2(a, b),
        }
        .unwrap();
    }

    bdd.and_many(nodes).unwrap()
}

fn bench_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("ite/queens");
    group.sample_size(10);

    for n in [4, 5, 6] {
        group.bench_with_input(BenchmarkId::new("queens", n), &n, |b, &n| {
            b.iter(|| {
                let bdd = Bdd::with_config(BddConfig::default().with_cache_bits(18));
                solve_queens(&bdd, n)
            });
        });
    }

    group.finish();
}

fn bench_random_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("ite/random_formula");

    for cache_bits in [12, 16] {
        let config = BddConfig::default().with_cache_bits(cache_bits);
        group.bench_with_input(
            BenchmarkId::new("v=16,ops=500", format!("2^{}", cache_bits)),
            &config,
            |b, config| {
                b.iter(|| {
                    let bdd = Bdd::with_config(config.clone());
                    build_random_formula(&bdd, 16, 500, 42)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_queens, bench_random_formula);
criterion_main!(benches);
