//! The [`Assignment`] result type, the (driver, shipment, score) triple the
//! UI layer actually consumes, and the coordinator that wires matrix building
//! and solving together.

use crate::error::AssignmentError;
use crate::matrix::{build_matrix, ProfitMatrix};
use crate::solver::{self, SolverVariant};

/// A permutation of `0..N`: position `i` holds the column matched to row `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment(Vec<usize>);

impl Assignment {
    pub fn new(perm: Vec<usize>) -> Self {
        Self(perm)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of `matrix[i][assignment[i]]` over every row.
    pub fn total_score(&self, matrix: &ProfitMatrix) -> f64 {
        self.0.iter().enumerate().map(|(i, &j)| matrix.get(i, j)).sum()
    }
}

/// A single realized (driver, shipment, score) pairing, with padding rows and
/// columns already filtered out.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverAssignment {
    pub driver: String,
    pub shipment: String,
    pub score: f64,
}

/// Build the padded matrix, solve with `variant`, and emit only pairs where
/// both sides are real (not padding). The sole entry point the UI layer uses.
pub fn assign(
    drivers: &[String],
    shipments: &[String],
    variant: SolverVariant,
) -> Result<Vec<DriverAssignment>, AssignmentError> {
    let matrix = build_matrix(drivers, shipments);
    let assignment = solver::solve(&matrix, variant)?;

    let mut out = Vec::with_capacity(drivers.len().min(shipments.len()));
    for (i, &j) in assignment.as_slice().iter().enumerate() {
        if i < drivers.len() && j < shipments.len() {
            out.push(DriverAssignment {
                driver: drivers[i].clone(),
                shipment: shipments[j].clone(),
                score: matrix.get(i, j),
            });
        }
    }
    Ok(out)
}
