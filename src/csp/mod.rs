//! Constraint satisfaction model.
//!
//! A [`Problem`] is a list of variable domain sizes plus a list of borrowed
//! [`Constraint`]s. Variable `i` takes values in `0..domain(i)`; a
//! constraint names an ordered tuple of variables and a [`Checker`] that
//! accepts or rejects their current values.
//!
//! # Key Components
//!
//! - **Checker**: [`Checker`] — predicate over `(constraint, assignment, context)`
//! - **Constraint**: [`Constraint`] — variable tuple plus checker
//! - **Problem**: [`Problem`] — domains plus constraint slots, with
//!   [`Problem::is_consistent`] and [`Problem::solve`]
//! - **Errors**: [`CspError`] — allocation and validation failures
//!
//! # Applicability
//!
//! A constraint is evaluated as soon as every variable it references is
//! bound, not only once the full assignment is known. This is what lets
//! the search in [`crate::backtrack`] abandon a branch at the shallowest
//! possible depth.
//!
//! # References
//!
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", ch. 6

mod constraint;
mod error;
mod problem;
mod types;

pub use constraint::Constraint;
pub use error::CspError;
pub use problem::Problem;
pub use types::Checker;
