//! The square profit matrix the solvers operate on, and the builder that
//! derives one from driver/shipment lists.

use crate::error::AssignmentError;
use crate::score::score;

/// A square, row-major table of finite, non-negative profit values.
///
/// Construction is the only place squareness and finiteness are checked;
/// every solver downstream assumes both invariants already hold.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitMatrix {
    rows: Vec<Vec<f64>>,
}

impl ProfitMatrix {
    /// Validate and wrap a row-major matrix.
    ///
    /// Rejects non-square input and any non-finite entry (NaN or ±∞).
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AssignmentError> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AssignmentError::ShapeError {
                    rows: n,
                    bad_row: i,
                    bad_row_len: row.len(),
                });
            }
        }
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(AssignmentError::DomainError { row: i, col: j, value });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Side length `N` of the square matrix.
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// The matrix-wide maximum entry, used to convert profit to cost via `max - profit`.
    ///
    /// Returns 0.0 for an empty matrix.
    pub fn max_entry(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|r| r.iter().copied())
            .fold(f64::NEG_INFINITY, f64::max)
            .max(0.0)
    }
}

/// Build a padded, square [`ProfitMatrix`] from driver names and shipment addresses.
///
/// The side length is `N = max(drivers.len(), shipments.len())`. Cells where both
/// indices refer to a real driver and a real shipment hold `score(shipment, driver)`;
/// padding cells are zero.
pub fn build_matrix(drivers: &[String], shipments: &[String]) -> ProfitMatrix {
    let d = drivers.len();
    let s = shipments.len();
    let n = d.max(s);

    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..d {
        for j in 0..s {
            rows[i][j] = score(&shipments[j], &drivers[i]);
        }
    }

    ProfitMatrix::new(rows).expect("padded matrix built from finite scores is always valid")
}
