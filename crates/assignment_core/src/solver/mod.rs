//! Solver variants for the assignment problem, dispatched by a tagged enum
//! rather than a type hierarchy — each variant is a plain function.

mod bellman_ford;
mod brute_force;
mod classic;
mod jonker_volgenant;
mod kuhn_munkres;

use log::debug;

use crate::error::AssignmentError;
use crate::matrix::ProfitMatrix;

pub use crate::assignment::Assignment;

/// Which algorithm to run. [`SolverVariant::JonkerVolgenant`] is the default:
/// it is the fastest in practice and the one the rest of the corpus would
/// reach for first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverVariant {
    #[default]
    JonkerVolgenant,
    BellmanFord,
    Classic,
    KuhnMunkres,
    BruteForce,
}

/// Solve the assignment problem for `matrix` using `variant`.
pub fn solve(matrix: &ProfitMatrix, variant: SolverVariant) -> Result<Assignment, AssignmentError> {
    debug!("solve: variant={variant:?} n={}", matrix.n());
    match variant {
        SolverVariant::JonkerVolgenant => jonker_volgenant::solve(matrix),
        SolverVariant::BellmanFord => bellman_ford::solve(matrix),
        SolverVariant::Classic => classic::solve(matrix),
        SolverVariant::KuhnMunkres => kuhn_munkres::solve(matrix),
        SolverVariant::BruteForce => brute_force::solve(matrix),
    }
}

/// Brute force's hard capacity ceiling, re-exported so callers can guard `N`
/// before choosing [`SolverVariant::BruteForce`].
pub const BRUTE_FORCE_MAX_N: usize = brute_force::MAX_N;
