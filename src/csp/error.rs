use thiserror::Error;

/// Recoverable failures reported by the CSP core and its clients.
///
/// Contract violations (inactive library, out-of-range indices, zero arity)
/// are not represented here: they panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CspError {
    #[error("failed to allocate {count} {what}")]
    Allocation { what: &'static str, count: usize },
    #[error("constraint slot {index} is unset")]
    UnsetConstraint { index: usize },
    #[error(
        "constraint {constraint} references variable {variable}, but the problem has {num_domains} variables"
    )]
    VariableOutOfRange {
        constraint: usize,
        variable: usize,
        num_domains: usize,
    },
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(String),
}
