//! Typed error values shared by every fallible operation in the crate.

use thiserror::Error;

/// Everything that can go wrong building or solving an assignment problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignmentError {
    #[error("matrix is not square: {rows} rows but row {bad_row} has {bad_row_len} columns")]
    ShapeError {
        rows: usize,
        bad_row: usize,
        bad_row_len: usize,
    },

    #[error("matrix entry at ({row}, {col}) is not a finite number: {value}")]
    DomainError { row: usize, col: usize, value: f64 },

    #[error("brute-force solver refuses N = {n}, exceeds capacity threshold of {threshold}")]
    CapacityError { n: usize, threshold: usize },

    #[error("internal invariant violated in {solver}: {detail}")]
    InternalInvariant { solver: &'static str, detail: String },
}
