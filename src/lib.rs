//! Domain-agnostic finite-domain constraint satisfaction engine.
//!
//! Provides a small, generic CSP core:
//!
//! - **Lifecycle**: reference-counted library activation that every
//!   other operation requires.
//! - **CSP model**: variables identified by index with domains `0..d`,
//!   constraints pairing an ordered variable tuple with a user-supplied
//!   checker, and problems that borrow those constraints.
//! - **Backtracking**: chronological depth-first search that evaluates
//!   each constraint as soon as its last variable is bound, with optional
//!   node/time budgets and cooperative cancellation.
//! - **Puzzles**: n-queens and sudoku clients built on the public API.
//!
//! # Architecture
//!
//! The core never interprets constraint semantics: checkers are opaque
//! predicates over `(constraint, assignment, context)`, and the auxiliary
//! context is a generic parameter threaded through untouched. Domain
//! knowledge (what a queen is, what a sudoku box is) lives entirely in
//! the consumers.
//!
//! # Example
//!
//! ```
//! use u_csp::csp::{Constraint, Problem};
//! use u_csp::lifecycle::Activation;
//!
//! fn less_than(c: &Constraint<()>, values: &[usize], _: &()) -> bool {
//!     values[c.variable(0)] < values[c.variable(1)]
//! }
//!
//! let _csp = Activation::new();
//! let constraints = vec![
//!     Constraint::new(2, less_than).unwrap().with_variables(&[0, 1]),
//!     Constraint::new(2, less_than).unwrap().with_variables(&[1, 2]),
//! ];
//!
//! let mut problem = Problem::new(3, constraints.len()).unwrap();
//! for variable in 0..3 {
//!     problem.set_domain(variable, 3);
//! }
//! for (index, constraint) in constraints.iter().enumerate() {
//!     problem.set_constraint(index, constraint);
//! }
//!
//! let mut values = [0; 3];
//! assert!(problem.solve(&mut values, &()));
//! assert_eq!(values, [0, 1, 2]);
//! ```

pub mod backtrack;
pub mod csp;
pub mod lifecycle;
pub mod puzzles;
