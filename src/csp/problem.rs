//! CSP problem definition.

use std::fmt;

use super::constraint::Constraint;
use super::error::CspError;
use crate::backtrack::{BacktrackRunner, SolverConfig};
use crate::lifecycle;

/// A constraint satisfaction problem over `num_domains` integer variables.
///
/// Variable `i` ranges over `0..domain(i)`. The problem borrows its
/// constraints from a caller-owned arena (typically a `Vec<Constraint<C>>`)
/// that must outlive it; dropping the problem never drops a constraint.
///
/// # Examples
///
/// ```
/// use u_csp::csp::{Constraint, Problem};
/// use u_csp::lifecycle::Activation;
///
/// fn different(c: &Constraint<()>, values: &[usize], _: &()) -> bool {
///     values[c.variable(0)] != values[c.variable(1)]
/// }
///
/// let _csp = Activation::new();
/// let constraints = vec![Constraint::new(2, different).unwrap().with_variables(&[0, 1])];
///
/// let mut problem = Problem::new(2, 1).unwrap();
/// problem.set_domain(0, 2);
/// problem.set_domain(1, 2);
/// problem.set_constraint(0, &constraints[0]);
///
/// let mut values = [0; 2];
/// assert!(problem.solve(&mut values, &()));
/// assert_eq!(values, [0, 1]);
/// ```
pub struct Problem<'c, C: ?Sized> {
    domains: Vec<usize>,
    constraints: Vec<Option<&'c Constraint<C>>>,
}

impl<'c, C: ?Sized> Problem<'c, C> {
    /// Creates a problem with all domains empty and all constraint slots unset.
    ///
    /// # Panics
    ///
    /// Panics if either count is zero.
    pub fn new(num_domains: usize, num_constraints: usize) -> Result<Self, CspError> {
        lifecycle::debug_assert_active();
        assert!(num_domains > 0, "a problem needs at least one variable");
        assert!(num_constraints > 0, "a problem needs at least one constraint");

        let mut domains = Vec::new();
        domains
            .try_reserve_exact(num_domains)
            .map_err(|_| CspError::Allocation {
                what: "domains",
                count: num_domains,
            })?;
        domains.resize(num_domains, 0);

        let mut constraints = Vec::new();
        constraints
            .try_reserve_exact(num_constraints)
            .map_err(|_| CspError::Allocation {
                what: "constraint slots",
                count: num_constraints,
            })?;
        constraints.resize(num_constraints, None);

        log::debug!(
            "created problem with {num_domains} domains and {num_constraints} constraints"
        );
        Ok(Self {
            domains,
            constraints,
        })
    }

    /// Number of variables.
    pub fn num_domains(&self) -> usize {
        lifecycle::debug_assert_active();
        self.domains.len()
    }

    /// Number of constraint slots.
    pub fn num_constraints(&self) -> usize {
        lifecycle::debug_assert_active();
        self.constraints.len()
    }

    /// Sets the domain size of variable `index`.
    pub fn set_domain(&mut self, index: usize, size: usize) {
        lifecycle::debug_assert_active();
        assert!(
            index < self.domains.len(),
            "domain index {index} out of range for {} variables",
            self.domains.len()
        );
        self.domains[index] = size;
    }

    /// Domain size of variable `index`.
    pub fn domain(&self, index: usize) -> usize {
        lifecycle::debug_assert_active();
        assert!(
            index < self.domains.len(),
            "domain index {index} out of range for {} variables",
            self.domains.len()
        );
        self.domains[index]
    }

    /// All domain sizes, indexed by variable.
    pub fn domains(&self) -> &[usize] {
        lifecycle::debug_assert_active();
        &self.domains
    }

    /// Attaches `constraint` to slot `index`.
    ///
    /// Debug builds check that every variable the constraint references
    /// belongs to this problem.
    pub fn set_constraint(&mut self, index: usize, constraint: &'c Constraint<C>) {
        lifecycle::debug_assert_active();
        assert!(
            index < self.constraints.len(),
            "constraint index {index} out of range for {} slots",
            self.constraints.len()
        );
        debug_assert!(
            constraint.max_variable() < self.domains.len(),
            "constraint references variable {} but the problem has {} variables",
            constraint.max_variable(),
            self.domains.len()
        );
        self.constraints[index] = Some(constraint);
    }

    /// Constraint attached to slot `index`, if any.
    pub fn constraint(&self, index: usize) -> Option<&'c Constraint<C>> {
        lifecycle::debug_assert_active();
        assert!(
            index < self.constraints.len(),
            "constraint index {index} out of range for {} slots",
            self.constraints.len()
        );
        self.constraints[index]
    }

    /// Checks that every slot is filled and references only known variables.
    pub fn validate(&self) -> Result<(), CspError> {
        lifecycle::debug_assert_active();
        for (index, slot) in self.constraints.iter().copied().enumerate() {
            let constraint = slot.ok_or(CspError::UnsetConstraint { index })?;
            if let Some(&variable) = constraint
                .variables()
                .iter()
                .find(|&&variable| variable >= self.domains.len())
            {
                return Err(CspError::VariableOutOfRange {
                    constraint: index,
                    variable,
                    num_domains: self.domains.len(),
                });
            }
        }
        Ok(())
    }

    /// Whether every constraint applicable at `frontier` is satisfied.
    ///
    /// Constraints are visited in slot order and the scan stops at the
    /// first violation, so later checkers are not invoked.
    ///
    /// # Panics
    ///
    /// Panics if a constraint slot is unset.
    pub fn is_consistent(&self, assignment: &[usize], context: &C, frontier: usize) -> bool {
        let mut checker_calls = 0;
        self.is_consistent_counted(assignment, context, frontier, &mut checker_calls)
    }

    /// [`is_consistent`](Self::is_consistent), adding the number of checker
    /// invocations to `checker_calls`.
    pub(crate) fn is_consistent_counted(
        &self,
        assignment: &[usize],
        context: &C,
        frontier: usize,
        checker_calls: &mut u64,
    ) -> bool {
        lifecycle::debug_assert_active();
        self.constraints
            .iter()
            .enumerate()
            .all(|(index, slot)| match slot {
                Some(constraint) => {
                    if !constraint.is_applicable(frontier) {
                        return true;
                    }
                    *checker_calls += 1;
                    constraint.checker().check(constraint, assignment, context)
                }
                None => panic!("constraint slot {index} is unset"),
            })
    }

    /// Searches for a satisfying assignment, writing it into `assignment`.
    ///
    /// Returns `false` when the problem is infeasible; the buffer then
    /// holds whatever the last explored branch left behind.
    ///
    /// # Panics
    ///
    /// Panics if `assignment.len() != num_domains` or the problem fails
    /// [`validate`](Self::validate).
    pub fn solve(&self, assignment: &mut [usize], context: &C) -> bool {
        self.backtrack(assignment, context, 0)
    }

    /// Resumes the search at `frontier`, keeping `assignment[..frontier]` as bound.
    pub fn backtrack(&self, assignment: &mut [usize], context: &C, frontier: usize) -> bool {
        BacktrackRunner::run_from(self, assignment, context, frontier, &SolverConfig::default())
            .is_solved()
    }
}

impl<C: ?Sized> fmt::Debug for Problem<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("domains", &self.domains)
            .field("constraints", &self.constraints)
            .finish()
    }
}

impl<C: ?Sized> Drop for Problem<'_, C> {
    fn drop(&mut self) {
        log::debug!(
            "dropped problem with {} domains and {} constraints",
            self.domains.len(),
            self.constraints.len()
        );
    }
}
