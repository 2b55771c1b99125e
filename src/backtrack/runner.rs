//! Backtracking execution loop.
//!
//! # Algorithm
//!
//! 1. Start at `frontier` with candidate value 0.
//! 2. If `frontier == n`, every variable is bound: solved.
//! 3. Otherwise take the next candidate `v < domain(frontier)`, set
//!    `assignment[frontier] = v` and test `is_consistent(.., frontier + 1)`:
//!    a. consistent: descend to `frontier + 1` with candidate 0
//!    b. inconsistent: try the next candidate
//! 4. When a variable runs out of candidates, step back one variable.
//!    Running out at the starting frontier means the problem is infeasible.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::config::SolverConfig;
use super::types::{SearchStats, SolveResult, SolveStatus};
use crate::csp::Problem;
use crate::lifecycle;

/// Executes the backtracking search.
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Searches from the first variable.
    pub fn run<C: ?Sized>(
        problem: &Problem<'_, C>,
        assignment: &mut [usize],
        context: &C,
        config: &SolverConfig,
    ) -> SolveResult {
        Self::run_from_with_cancel(problem, assignment, context, 0, config, None)
    }

    /// Searches from the first variable with an optional cancellation token.
    pub fn run_with_cancel<C: ?Sized>(
        problem: &Problem<'_, C>,
        assignment: &mut [usize],
        context: &C,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult {
        Self::run_from_with_cancel(problem, assignment, context, 0, config, cancel)
    }

    /// Searches from `frontier`, treating `assignment[..frontier]` as bound.
    pub fn run_from<C: ?Sized>(
        problem: &Problem<'_, C>,
        assignment: &mut [usize],
        context: &C,
        frontier: usize,
        config: &SolverConfig,
    ) -> SolveResult {
        Self::run_from_with_cancel(problem, assignment, context, frontier, config, None)
    }

    /// Full entry point: start frontier, limits and cancellation.
    ///
    /// # Panics
    ///
    /// Panics if the configuration or problem is invalid, if
    /// `assignment.len() != num_domains`, or if `frontier > num_domains`.
    pub fn run_from_with_cancel<C: ?Sized>(
        problem: &Problem<'_, C>,
        assignment: &mut [usize],
        context: &C,
        frontier: usize,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult {
        lifecycle::debug_assert_active();
        config.validate().expect("invalid SolverConfig");
        if let Err(err) = problem.validate() {
            panic!("invalid problem: {err}");
        }

        let domains = problem.domains();
        let n = domains.len();
        assert_eq!(
            assignment.len(),
            n,
            "assignment length must equal the number of variables"
        );
        assert!(frontier <= n, "start frontier {frontier} exceeds {n} variables");

        log::debug!(
            "backtracking over {n} variables and {} constraints from frontier {frontier}",
            problem.num_constraints()
        );

        let start_time = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);
        let start = frontier;
        let mut frontier = frontier;
        let mut stats = SearchStats {
            max_depth: frontier,
            ..SearchStats::default()
        };

        // candidates[d] is the next value to try for variable `start + d`
        let mut candidates: Vec<usize> = Vec::with_capacity(n - start + 1);
        candidates.push(0);

        let status = loop {
            if frontier == n {
                break SolveStatus::Solved;
            }

            let depth = frontier - start;
            let value = candidates[depth];

            if value >= domains[frontier] {
                candidates.pop();
                if frontier == start {
                    break SolveStatus::Exhausted;
                }
                frontier -= 1;
                stats.backtracks += 1;
                log::trace!("backtrack to variable {frontier}");
                continue;
            }

            if config.node_limit.is_some_and(|limit| stats.nodes >= limit) {
                break SolveStatus::NodeLimit;
            }
            if stats.nodes % config.check_interval == 0 {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        break SolveStatus::Cancelled;
                    }
                }
                if time_limit.is_some_and(|limit| start_time.elapsed() >= limit) {
                    break SolveStatus::TimeLimit;
                }
            }

            candidates[depth] = value + 1;
            assignment[frontier] = value;
            stats.nodes += 1;

            if problem.is_consistent_counted(
                assignment,
                context,
                frontier + 1,
                &mut stats.consistency_checks,
            ) {
                frontier += 1;
                stats.max_depth = stats.max_depth.max(frontier);
                candidates.push(0);
            }
        };

        stats.elapsed_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);
        log::debug!(
            "search finished: {status:?} after {} nodes, {} backtracks, {} ms",
            stats.nodes,
            stats.backtracks,
            stats.elapsed_ms
        );

        SolveResult { status, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::Constraint;
    use crate::lifecycle::Activation;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn queens_ok(c: &Constraint<()>, values: &[usize], _: &()) -> bool {
        let (x0, x1) = (c.variable(0), c.variable(1));
        let (y0, y1) = (values[x0], values[x1]);
        y0 != y1 && x0 + y1 != x1 + y0 && x0 + y0 != x1 + y1
    }

    fn always(_: &Constraint<()>, _: &[usize], _: &()) -> bool {
        true
    }

    fn never(_: &Constraint<()>, _: &[usize], _: &()) -> bool {
        false
    }

    fn queens_constraints(n: usize) -> Vec<Constraint<()>> {
        let mut constraints = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                constraints.push(Constraint::new(2, queens_ok).unwrap().with_variables(&[i, j]));
            }
        }
        constraints
    }

    fn problem_from<'c, C: ?Sized>(
        domains: &[usize],
        constraints: &'c [Constraint<C>],
    ) -> Problem<'c, C> {
        let mut problem = Problem::new(domains.len(), constraints.len()).unwrap();
        for (i, &d) in domains.iter().enumerate() {
            problem.set_domain(i, d);
        }
        for (i, c) in constraints.iter().enumerate() {
            problem.set_constraint(i, c);
        }
        problem
    }

    #[test]
    fn test_four_queens() {
        let _csp = Activation::new();
        let constraints = queens_constraints(4);
        let problem = problem_from(&[4; 4], &constraints);

        let mut values = [0; 4];
        let result = BacktrackRunner::run(&problem, &mut values, &(), &SolverConfig::default());

        assert_eq!(result.status, SolveStatus::Solved);
        assert_eq!(values, [1, 3, 0, 2]);
        assert!(problem.is_consistent(&values, &(), 4));
        assert!(result.stats.backtracks > 0);
        assert_eq!(result.stats.max_depth, 4);
    }

    #[test]
    fn test_two_queens_infeasible() {
        let _csp = Activation::new();
        let constraints = queens_constraints(2);
        let problem = problem_from(&[2; 2], &constraints);

        let mut values = [0; 2];
        let result = BacktrackRunner::run(&problem, &mut values, &(), &SolverConfig::default());

        assert!(result.is_infeasible());
        // 2 values for variable 0, each rejecting both values of variable 1
        assert_eq!(result.stats.nodes, 6);
        // binding variable 0 alone leaves the pair inapplicable
        assert_eq!(result.stats.consistency_checks, 4);
    }

    #[test]
    fn test_eight_queens_first_solution() {
        let _csp = Activation::new();
        let constraints = queens_constraints(8);
        let problem = problem_from(&[8; 8], &constraints);

        let mut values = [0; 8];
        assert!(problem.solve(&mut values, &()));
        assert_eq!(values, [0, 4, 7, 5, 2, 6, 1, 3]);
    }

    #[test]
    fn test_deterministic() {
        let _csp = Activation::new();
        let constraints = queens_constraints(6);
        let problem = problem_from(&[6; 6], &constraints);

        let mut first = [0; 6];
        let mut second = [0; 6];
        let a = BacktrackRunner::run(&problem, &mut first, &(), &SolverConfig::default());
        let b = BacktrackRunner::run(&problem, &mut second, &(), &SolverConfig::default());

        assert!(a.is_solved());
        assert_eq!(first, second);
        assert_eq!(a.stats.nodes, b.stats.nodes);
    }

    #[test]
    fn test_unary_constraint_checked_when_bound() {
        let _csp = Activation::new();
        let constraints = vec![Constraint::new(1, never).unwrap().with_variables(&[1])];
        let problem = problem_from(&[3, 3], &constraints);

        let mut values = [0; 2];
        let result = BacktrackRunner::run(&problem, &mut values, &(), &SolverConfig::default());

        assert!(result.is_infeasible());
        // every value of variable 0 passes, every value of variable 1 fails
        assert_eq!(result.stats.nodes, 3 + 3 * 3);
        assert_eq!(result.stats.consistency_checks, 3 * 3);
        assert_eq!(result.stats.max_depth, 1);
    }

    #[test]
    fn test_fixed_cell_resolves_to_given() {
        let _csp = Activation::new();
        fn fixed(c: &Constraint<[usize]>, values: &[usize], givens: &[usize]) -> bool {
            values[c.variable(0)] == givens[c.variable(0)]
        }
        fn different(c: &Constraint<[usize]>, values: &[usize], _: &[usize]) -> bool {
            values[c.variable(0)] != values[c.variable(1)]
        }

        let constraints = vec![
            Constraint::new(2, different).unwrap().with_variables(&[0, 1]),
            Constraint::new(2, different).unwrap().with_variables(&[1, 2]),
            Constraint::new(2, different).unwrap().with_variables(&[0, 2]),
            Constraint::new(1, fixed).unwrap().with_variables(&[2]),
        ];
        let problem = problem_from(&[3, 3, 3], &constraints);

        for k in 0..3 {
            let givens = [0, 0, k];
            let mut values = [0; 3];
            assert!(problem.solve(&mut values, &givens[..]));
            assert_eq!(values[2], k);
        }
    }

    #[test]
    fn test_empty_domain_is_infeasible() {
        let _csp = Activation::new();
        let constraints: Vec<Constraint<()>> = vec![Constraint::new(1, always).unwrap()];
        let problem = problem_from(&[2, 0], &constraints);

        let mut values = [0; 2];
        let result = BacktrackRunner::run(&problem, &mut values, &(), &SolverConfig::default());
        assert!(result.is_infeasible());
        assert_eq!(result.stats.nodes, 2);
    }

    #[test]
    fn test_start_at_end_is_solved() {
        let _csp = Activation::new();
        let constraints: Vec<Constraint<()>> = vec![Constraint::new(1, never).unwrap()];
        let problem = problem_from(&[1], &constraints);

        let mut values = [0];
        let result =
            BacktrackRunner::run_from(&problem, &mut values, &(), 1, &SolverConfig::default());
        assert!(result.is_solved());
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_node_limit() {
        let _csp = Activation::new();
        let constraints = queens_constraints(10);
        let problem = problem_from(&[10; 10], &constraints);

        let mut values = [0; 10];
        let config = SolverConfig::default().with_node_limit(5);
        let result = BacktrackRunner::run(&problem, &mut values, &(), &config);

        assert_eq!(result.status, SolveStatus::NodeLimit);
        assert_eq!(result.stats.nodes, 5);
    }

    #[test]
    fn test_time_limit() {
        let _csp = Activation::new();
        let constraints = queens_constraints(29);
        let problem = problem_from(&[29; 29], &constraints);

        let mut values = [0; 29];
        let config = SolverConfig::default()
            .with_time_limit_ms(20)
            .with_check_interval(1);
        let result = BacktrackRunner::run(&problem, &mut values, &(), &config);

        assert_eq!(result.status, SolveStatus::TimeLimit);
        assert!(result.stats.elapsed_ms >= 20);
        assert!(result.stats.nodes > 0);
    }

    #[test]
    fn test_cancellation() {
        let _csp = Activation::new();
        let constraints = queens_constraints(6);
        let problem = problem_from(&[6; 6], &constraints);

        // Set the flag before running so cancellation is deterministic.
        let cancel = Arc::new(AtomicBool::new(true));
        let mut values = [0; 6];
        let result = BacktrackRunner::run_with_cancel(
            &problem,
            &mut values,
            &(),
            &SolverConfig::default(),
            Some(cancel),
        );

        assert_eq!(result.status, SolveStatus::Cancelled);
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    #[should_panic(expected = "assignment length")]
    fn test_wrong_buffer_length_panics() {
        let _csp = Activation::new();
        let constraints = queens_constraints(4);
        let problem = problem_from(&[4; 4], &constraints);
        let mut values = [0; 3];
        let _ = BacktrackRunner::run(&problem, &mut values, &(), &SolverConfig::default());
    }

    #[test]
    #[should_panic(expected = "invalid problem")]
    fn test_unset_slot_panics() {
        let _csp = Activation::new();
        let problem: Problem<'_, ()> = Problem::new(1, 1).unwrap();
        let mut values = [0];
        let _ = problem.solve(&mut values, &());
    }

    // ---- Brute-force equivalence on random binary table constraints ----

    type Table = (usize, usize, HashSet<(usize, usize)>);

    fn arb_instance() -> impl Strategy<Value = (Vec<usize>, Vec<Table>)> {
        proptest::collection::vec(1usize..4, 1..5).prop_flat_map(|domains| {
            let n = domains.len();
            let table = (
                0..n,
                0..n,
                proptest::collection::hash_set((0usize..4, 0usize..4), 0..8),
            );
            (Just(domains), proptest::collection::vec(table, 1..6))
        })
    }

    fn forbidding(tables: &[Table]) -> Vec<Constraint<()>> {
        tables
            .iter()
            .map(|(a, b, forbidden)| {
                let forbidden = forbidden.clone();
                Constraint::new(
                    2,
                    move |c: &Constraint<()>, values: &[usize], _: &()| {
                        !forbidden.contains(&(values[c.variable(0)], values[c.variable(1)]))
                    },
                )
                .unwrap()
                .with_variables(&[*a, *b])
            })
            .collect()
    }

    /// First full assignment in lexicographic order that satisfies everything.
    fn brute_force(problem: &Problem<'_, ()>) -> Option<Vec<usize>> {
        let domains = problem.domains();
        if domains.contains(&0) {
            return None;
        }
        let mut values = vec![0; domains.len()];
        loop {
            if problem.is_consistent(&values, &(), domains.len()) {
                return Some(values);
            }
            let mut i = domains.len();
            loop {
                if i == 0 {
                    return None;
                }
                i -= 1;
                values[i] += 1;
                if values[i] < domains[i] {
                    break;
                }
                values[i] = 0;
            }
        }
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force((domains, tables) in arb_instance()) {
            let _csp = Activation::new();
            let constraints = forbidding(&tables);
            let problem = problem_from(&domains, &constraints);

            let mut values = vec![0; domains.len()];
            let solved = problem.solve(&mut values, &());

            match brute_force(&problem) {
                Some(expected) => {
                    prop_assert!(solved);
                    prop_assert_eq!(values.clone(), expected);
                    prop_assert!(problem.is_consistent(&values, &(), domains.len()));
                }
                None => prop_assert!(!solved),
            }
        }
    }
}
