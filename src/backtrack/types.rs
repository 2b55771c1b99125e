//! Search outcome types.

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// Every variable is bound and every constraint holds.
    Solved,
    /// The whole search space was explored without finding a solution.
    Exhausted,
    /// Stopped after [`SolverConfig::node_limit`](super::SolverConfig::node_limit) nodes.
    NodeLimit,
    /// Stopped after [`SolverConfig::time_limit_ms`](super::SolverConfig::time_limit_ms).
    TimeLimit,
    /// Stopped by the cancellation flag.
    Cancelled,
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Tentative assignments made.
    pub nodes: u64,
    /// Checker invocations made by the consistency test.
    pub consistency_checks: u64,
    /// Times a variable ran out of candidate values and the search stepped back.
    pub backtracks: u64,
    /// Deepest frontier reached.
    pub max_depth: usize,
    /// Wall-clock time in milliseconds.
    pub elapsed_ms: u64,
}

/// Result of a backtracking run.
///
/// The assignment itself is written into the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    pub status: SolveStatus,
    pub stats: SearchStats,
}

impl SolveResult {
    /// Whether a satisfying assignment was found.
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }

    /// Whether the search proved there is no solution.
    pub fn is_infeasible(&self) -> bool {
        self.status == SolveStatus::Exhausted
    }
}
