//! # Assignment Core
//!
//! A maximum-profit assignment problem solver, with five interchangeable
//! solver variants cross-validated against each other, plus the
//! domain-specific scoring function that derives a profit matrix from driver
//! names and shipment addresses.
//!
//! ## Overview
//!
//! - **ScoreCalculator** ([`score`]): suitability score for a single
//!   (driver, shipment) pair.
//! - **MatrixBuilder** ([`build_matrix`]): pads a driver/shipment list pair
//!   into a square [`ProfitMatrix`].
//! - **Solvers** ([`solver`]): Jonker–Volgenant (default), Bellman–Ford,
//!   classical matrix-reduction Hungarian, Kuhn–Munkres, and brute force.
//! - **AssignmentCoordinator** ([`assign`]): the single entry point an outer
//!   UI layer needs — drivers and shipments in, realized pairings out.
//!
//! ## Example
//!
//! ```
//! use assignment_core::{assign, solver::SolverVariant};
//!
//! let drivers = vec!["Alice".to_string(), "Bob".to_string()];
//! let shipments = vec!["1 Main St".to_string(), "2 Oak Ave".to_string()];
//! let pairings = assign(&drivers, &shipments, SolverVariant::default()).unwrap();
//! assert_eq!(pairings.len(), 2);
//! ```

pub mod assignment;
pub mod error;
pub mod matrix;
pub mod score;
pub mod solver;

pub use assignment::{assign, Assignment, DriverAssignment};
pub use error::AssignmentError;
pub use matrix::{build_matrix, ProfitMatrix};
pub use score::score;
pub use solver::{solve, SolverVariant};
