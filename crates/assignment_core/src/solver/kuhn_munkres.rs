//! Kuhn–Munkres via a generic weighted-bipartite-matching primitive.
//!
//! The outer layer here is graph assembly and result interpretation, same as
//! the cost-based matching in this codebase that reaches for the same crate:
//! `pathfinding::kuhn_munkres` finds the *maximum* weight perfect matching
//! directly, so (unlike a minimizing primitive) profit weights are fed in
//! un-negated rather than built as `-profit[i][j]`.

use log::trace;
use pathfinding::kuhn_munkres::{kuhn_munkres, Weights};

use crate::error::AssignmentError;
use crate::matrix::ProfitMatrix;

use super::Assignment;

/// Scale factor to convert an `f64` profit into the `i64` weight the primitive expects.
const SCALE: f64 = 1_000_000.0;

struct ScaledWeights(Vec<Vec<i64>>);

impl Weights<i64> for ScaledWeights {
    fn rows(&self) -> usize {
        self.0.len()
    }

    fn columns(&self) -> usize {
        self.0.first().map_or(0, |r| r.len())
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.0[row][col]
    }

    fn neg(&self) -> Self {
        ScaledWeights(
            self.0
                .iter()
                .map(|r| r.iter().map(|&x| x.saturating_neg()).collect())
                .collect(),
        )
    }
}

fn to_weight(profit: f64) -> i64 {
    let w = profit * SCALE;
    if w >= i64::MAX as f64 {
        i64::MAX
    } else if w <= i64::MIN as f64 {
        i64::MIN
    } else {
        w as i64
    }
}

pub fn solve(matrix: &ProfitMatrix) -> Result<Assignment, AssignmentError> {
    let n = matrix.n();
    if n == 0 {
        return Ok(Assignment::new(Vec::new()));
    }

    let grid: Vec<Vec<i64>> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(|&p| to_weight(p)).collect())
        .collect();
    let weights = ScaledWeights(grid);

    let (_total, assignment) = kuhn_munkres(&weights);
    trace!("kuhn_munkres: solved n={n}");

    if assignment.len() != n {
        return Err(AssignmentError::InternalInvariant {
            solver: "kuhn_munkres",
            detail: format!("expected assignment of length {n}, got {}", assignment.len()),
        });
    }

    Ok(Assignment::new(assignment))
}
