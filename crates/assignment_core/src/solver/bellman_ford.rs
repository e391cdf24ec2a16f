//! Successive shortest paths via a fresh per-row residual graph, solved with a
//! general-purpose graph crate's Bellman–Ford routine (negative edge weights
//! show up in the reassignment deltas, which rules out Dijkstra here).

use log::trace;
use petgraph::algo::bellman_ford;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::AssignmentError;
use crate::matrix::ProfitMatrix;

use super::Assignment;

const SOLVER_NAME: &str = "bellman_ford";

pub fn solve(matrix: &ProfitMatrix) -> Result<Assignment, AssignmentError> {
    let n = matrix.n();
    if n == 0 {
        return Ok(Assignment::new(Vec::new()));
    }

    let m_max = matrix.max_entry();
    let mut cost = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in 0..n {
            cost[i][j] = m_max - matrix.get(i, j);
        }
    }

    // col_owner[j] = row currently holding column j, None while unmatched.
    let mut col_owner: Vec<Option<usize>> = vec![None; n];

    for r in 0..n {
        trace!("{SOLVER_NAME}: stage r={r}/{n}");
        let columns = augmenting_path(&cost, &col_owner, r, n)?;

        let old_owners: Vec<Option<usize>> = columns.iter().map(|&c| col_owner[c]).collect();
        col_owner[columns[0]] = Some(r);
        for i in 1..columns.len() {
            col_owner[columns[i]] = old_owners[i - 1];
        }
    }

    let mut result = vec![0usize; n];
    for (j, owner) in col_owner.into_iter().enumerate() {
        let row = owner.ok_or_else(|| AssignmentError::InternalInvariant {
            solver: SOLVER_NAME,
            detail: format!("column {j} left unassigned after all stages completed"),
        })?;
        result[row] = j;
    }

    Ok(Assignment::new(result))
}

/// Build the residual graph for driver `r` against the current matching and
/// return the column path `[c1, c2, ..., ck]` a shortest source-to-sink path
/// visits, in traversal order.
fn augmenting_path(
    cost: &[Vec<f64>],
    col_owner: &[Option<usize>],
    r: usize,
    n: usize,
) -> Result<Vec<usize>, AssignmentError> {
    let mut graph = DiGraph::<(), f64>::with_capacity(n + 2, n * n);
    let source = graph.add_node(());
    let col_nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();
    let sink = graph.add_node(());

    for j in 0..n {
        graph.add_edge(source, col_nodes[j], cost[r][j]);
    }
    for j in 0..n {
        match col_owner[j] {
            Some(d) => {
                for k in 0..n {
                    if k != j {
                        graph.add_edge(col_nodes[j], col_nodes[k], cost[d][k] - cost[d][j]);
                    }
                }
            }
            None => {
                graph.add_edge(col_nodes[j], sink, 0.0);
            }
        }
    }

    let paths = bellman_ford(&graph, source).map_err(|_| AssignmentError::InternalInvariant {
        solver: SOLVER_NAME,
        detail: format!("negative cycle detected while augmenting driver {r}"),
    })?;
    let preds = paths.predecessors;

    let no_path = || AssignmentError::InternalInvariant {
        solver: SOLVER_NAME,
        detail: format!("no augmenting path found for driver {r}"),
    };

    let mut columns_rev = Vec::new();
    let mut cur = preds[sink.index()].ok_or_else(no_path)?;
    loop {
        columns_rev.push(cur.index() - 1); // node index 1..=n maps to column index-1
        let p = preds[cur.index()].ok_or_else(no_path)?;
        if p == source {
            break;
        }
        cur = p;
    }
    columns_rev.reverse();
    Ok(columns_rev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_matrix_yields_empty_assignment() {
        let m = ProfitMatrix::new(vec![]).unwrap();
        assert_eq!(solve(&m).unwrap().as_slice(), &[] as &[usize]);
    }

    #[test]
    fn single_entry_matrix() {
        let m = ProfitMatrix::new(vec![vec![5.0]]).unwrap();
        assert_eq!(solve(&m).unwrap().as_slice(), &[0]);
    }

    #[test]
    fn known_optimum_3x3() {
        let m = ProfitMatrix::new(vec![
            vec![1.0, 2.0, 9.0],
            vec![7.0, 3.0, 4.0],
            vec![5.0, 8.0, 2.0],
        ])
        .unwrap();
        let a = solve(&m).unwrap();
        assert_eq!(a.total_score(&m), 24.0);
    }

    #[test]
    fn diagonal_optimum() {
        let n = 5;
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            rows[i][i] = 10.0;
        }
        let m = ProfitMatrix::new(rows).unwrap();
        let a = solve(&m).unwrap();
        assert_eq!(a.total_score(&m), 50.0);
    }
}
