//! Jonker–Volgenant successive shortest paths with vertex potentials.
//!
//! The default solver (see [`crate::solver::SolverVariant::default`]). Works on
//! 1-indexed arrays of length `N+1` with column `0` as a sentinel unassigned
//! column, exactly as described for the matrix-reduction family this was derived
//! from — except here potentials replace explicit re-reduction, so reduced costs
//! stay non-negative without ever re-scanning the whole matrix.

use log::trace;

use crate::error::AssignmentError;
use crate::matrix::ProfitMatrix;

use super::Assignment;

const SOLVER_NAME: &str = "jonker_volgenant";

pub fn solve(matrix: &ProfitMatrix) -> Result<Assignment, AssignmentError> {
    let n = matrix.n();
    if n == 0 {
        return Ok(Assignment::new(Vec::new()));
    }

    let m_max = matrix.max_entry();

    // cost[0][*] and cost[*][0] stay zero: column/row 0 is the sentinel.
    let mut cost = vec![vec![0.0f64; n + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=n {
            cost[i][j] = m_max - matrix.get(i - 1, j - 1);
        }
    }

    let mut row_pot = vec![0.0f64; n + 1];
    let mut col_pot = vec![0.0f64; n + 1];
    // col_assignment[j] = row currently owning column j; 0 means unassigned.
    let mut col_assignment = vec![0usize; n + 1];
    let mut prev = vec![0usize; n + 1];

    for r in 1..=n {
        trace!("{SOLVER_NAME}: stage r={r}/{n}");
        col_assignment[0] = r;
        let mut cur = 0usize;
        let mut cheapest = vec![f64::INFINITY; n + 1];
        let mut visited = vec![false; n + 1];

        loop {
            visited[cur] = true;
            let owner = col_assignment[cur];

            let mut delta = f64::INFINITY;
            let mut next = None;
            for j in 1..=n {
                if visited[j] {
                    continue;
                }
                let rc = cost[owner][j] - row_pot[owner] - col_pot[j];
                if rc < cheapest[j] {
                    cheapest[j] = rc;
                    prev[j] = cur;
                }
                if cheapest[j] < delta {
                    delta = cheapest[j];
                    next = Some(j);
                }
            }

            let next = next.ok_or_else(|| AssignmentError::InternalInvariant {
                solver: SOLVER_NAME,
                detail: format!("no reachable unassigned column during stage r={r}"),
            })?;

            for j in 0..=n {
                if visited[j] {
                    row_pot[col_assignment[j]] += delta;
                    col_pot[j] -= delta;
                } else {
                    cheapest[j] -= delta;
                }
            }

            cur = next;
            if col_assignment[cur] != 0 {
                continue;
            }
            break;
        }

        // Augment: walk the breadcrumb trail back to the sentinel.
        while cur != 0 {
            let p = prev[cur];
            col_assignment[cur] = col_assignment[p];
            cur = p;
        }
    }

    let mut result = vec![0usize; n];
    for j in 1..=n {
        let row = col_assignment[j];
        if row == 0 {
            return Err(AssignmentError::InternalInvariant {
                solver: SOLVER_NAME,
                detail: format!("column {j} unassigned after all stages completed"),
            });
        }
        result[row - 1] = j - 1;
    }

    Ok(Assignment::new(result))
}
