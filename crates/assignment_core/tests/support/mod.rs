//! Fixture matrices and variant lists shared by the integration test files.

use assignment_core::solver::SolverVariant;
use assignment_core::ProfitMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn m(rows: Vec<Vec<f64>>) -> ProfitMatrix {
    ProfitMatrix::new(rows).expect("fixture matrix must be valid")
}

pub fn known_optimum_3x3() -> ProfitMatrix {
    m(vec![
        vec![1.0, 2.0, 9.0],
        vec![7.0, 3.0, 4.0],
        vec![5.0, 8.0, 2.0],
    ])
}

pub fn trivial_1x1() -> ProfitMatrix {
    m(vec![vec![5.0]])
}

pub fn empty() -> ProfitMatrix {
    m(vec![])
}

pub fn equal_rows(n: usize, value: f64) -> ProfitMatrix {
    m(vec![vec![value; n]; n])
}

pub fn diagonal(n: usize) -> ProfitMatrix {
    let mut rows = vec![vec![0.0; n]; n];
    for (i, row) in rows.iter_mut().enumerate() {
        row[i] = 10.0;
    }
    m(rows)
}

pub fn random(n: usize, seed: u64) -> ProfitMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(0.0..100.0)).collect())
        .collect();
    m(rows)
}

pub const ALL_VARIANTS: [SolverVariant; 5] = [
    SolverVariant::JonkerVolgenant,
    SolverVariant::BellmanFord,
    SolverVariant::Classic,
    SolverVariant::KuhnMunkres,
    SolverVariant::BruteForce,
];

pub const NON_BRUTE_VARIANTS: [SolverVariant; 4] = [
    SolverVariant::JonkerVolgenant,
    SolverVariant::BellmanFord,
    SolverVariant::Classic,
    SolverVariant::KuhnMunkres,
];

pub fn is_permutation(values: &[usize], n: usize) -> bool {
    if values.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &j in values {
        if j >= n || seen[j] {
            return false;
        }
        seen[j] = true;
    }
    true
}
