//! Chronological backtracking search.
//!
//! Variables are bound in index order `0, 1, …, n-1` and each variable's
//! values are tried in ascending order. After every tentative assignment
//! the constraints that have just become applicable are checked, and a
//! violation abandons the branch immediately. The first solution found is
//! therefore the lexicographically smallest one.
//!
//! The search keeps an explicit stack of candidate values instead of
//! recursing, so its depth is not bounded by the call stack and it can
//! stop on a node budget, a time budget, or an external cancellation flag.
//!
//! # References
//!
//! - Golomb & Baumert (1965), "Backtrack Programming"
//! - Bitner & Reingold (1975), "Backtrack Programming Techniques"

mod config;
mod runner;
mod types;

pub use config::SolverConfig;
pub use runner::BacktrackRunner;
pub use types::{SearchStats, SolveResult, SolveStatus};
