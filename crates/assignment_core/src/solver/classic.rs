//! Classical matrix-reduction Hungarian algorithm with greedy matching and
//! cover-adjustment.
//!
//! The repeated add/subtract-then-compare-to-zero pattern in steps 2-7 drifts
//! under `f64` on matrices much past 50x50: two floats that "should" be equal
//! after a chain of additions and subtractions stop comparing equal to zero,
//! and the zero-recognition the greedy match pass depends on silently breaks.
//! Every matrix entry is promoted to an exact rational up front (fixed-point
//! scaling of the input into a big-integer numerator/denominator) so the same
//! value added and subtracted always cancels exactly, no matter how many
//! reduction rounds run.

use log::{trace, warn};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::error::AssignmentError;
use crate::matrix::ProfitMatrix;

use super::Assignment;

const SOLVER_NAME: &str = "classic";

/// Fixed-point scale used to lift `f64` inputs into exact rationals. Ten
/// decimal digits of scaling is far past the precision a caller's f64 input
/// carries, so no information is lost in the promotion.
const PRECISION: i64 = 10_000_000_000;

type Q = BigRational;

fn exact(value: f64) -> Q {
    let scaled = (value * PRECISION as f64).round() as i64;
    Q::new(BigInt::from(scaled), BigInt::from(PRECISION))
}

pub fn solve(matrix: &ProfitMatrix) -> Result<Assignment, AssignmentError> {
    let n = matrix.n();
    if n == 0 {
        return Ok(Assignment::new(Vec::new()));
    }

    let m_max = matrix.max_entry();
    let mut cost: Vec<Vec<Q>> = (0..n)
        .map(|i| (0..n).map(|j| exact(m_max - matrix.get(i, j))).collect())
        .collect();

    for i in 0..n {
        let min = cost[i].iter().min().unwrap().clone();
        if !min.is_zero() {
            for j in 0..n {
                cost[i][j] = &cost[i][j] - &min;
            }
        }
    }
    for j in 0..n {
        let min = (0..n).map(|i| cost[i][j].clone()).min().unwrap();
        if !min.is_zero() {
            for i in 0..n {
                cost[i][j] = &cost[i][j] - &min;
            }
        }
    }

    // Each adjustment strictly shrinks the sum of uncovered minima, which is
    // bounded on a finite exact matrix; this is a defensive backstop against
    // an index-accounting bug turning that into an infinite loop.
    let safety_bound = 2 * n * n + 16;
    let mut iteration = 0usize;

    loop {
        iteration += 1;
        if iteration > safety_bound {
            return Err(AssignmentError::InternalInvariant {
                solver: SOLVER_NAME,
                detail: format!("reduction loop exceeded safety bound of {safety_bound} rounds"),
            });
        }

        let mut row_match: Vec<Option<usize>> = vec![None; n];
        let mut col_match: Vec<Option<usize>> = vec![None; n];
        for i in 0..n {
            for j in 0..n {
                if col_match[j].is_none() && cost[i][j].is_zero() {
                    row_match[i] = Some(j);
                    col_match[j] = Some(i);
                    break;
                }
            }
        }

        if row_match.iter().all(Option::is_some) {
            trace!("{SOLVER_NAME}: converged after {iteration} reduction round(s)");
            let mut result = vec![0usize; n];
            for (i, m) in row_match.into_iter().enumerate() {
                result[i] = m.expect("checked all Some above");
            }
            return Ok(Assignment::new(result));
        }

        let mut row_reach = vec![false; n];
        let mut col_reach = vec![false; n];
        for i in 0..n {
            row_reach[i] = row_match[i].is_none();
        }
        loop {
            let mut changed = false;
            for i in 0..n {
                if !row_reach[i] {
                    continue;
                }
                for j in 0..n {
                    if !col_reach[j] && cost[i][j].is_zero() {
                        col_reach[j] = true;
                        changed = true;
                    }
                }
            }
            for j in 0..n {
                if let (true, Some(i)) = (col_reach[j], col_match[j]) {
                    if !row_reach[i] {
                        row_reach[i] = true;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        let mut delta: Option<Q> = None;
        for i in 0..n {
            if !row_reach[i] {
                continue;
            }
            for j in 0..n {
                if col_reach[j] {
                    continue;
                }
                delta = Some(match delta {
                    None => cost[i][j].clone(),
                    Some(d) => {
                        if cost[i][j] < d {
                            cost[i][j].clone()
                        } else {
                            d
                        }
                    }
                });
            }
        }
        let delta = delta.ok_or_else(|| AssignmentError::InternalInvariant {
            solver: SOLVER_NAME,
            detail: "cover search left no uncovered cell to adjust".to_string(),
        })?;

        if delta.is_zero() {
            warn!("{SOLVER_NAME}: zero-delta adjustment at round {iteration}");
        }

        for i in 0..n {
            for j in 0..n {
                match (row_reach[i], col_reach[j]) {
                    (true, false) => cost[i][j] = &cost[i][j] - &delta,
                    (false, true) => cost[i][j] = &cost[i][j] + &delta,
                    _ => {}
                }
            }
        }
    }
}
