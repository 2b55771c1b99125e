//! Constraint definition.

use std::fmt;
use std::rc::Rc;

use super::error::CspError;
use super::types::Checker;
use crate::lifecycle;

/// A predicate over an ordered tuple of variables.
///
/// A constraint is built detached from any problem: create it, set its
/// variable indices, then lend it to a [`Problem`](super::Problem) slot.
/// The problem only borrows it, so the constraint stays immutable while
/// attached and is dropped by whoever created it.
///
/// # Examples
///
/// ```
/// use u_csp::csp::Constraint;
/// use u_csp::lifecycle::Activation;
///
/// fn always(_: &Constraint<()>, _: &[usize], _: &()) -> bool { true }
///
/// let _csp = Activation::new();
/// let mut c: Constraint<()> = Constraint::new(3, always).unwrap();
/// assert_eq!(c.variables(), &[0, 0, 0]);
/// c.set_variable(2, 4);
/// assert!(!c.is_applicable(4));
/// assert!(c.is_applicable(5));
/// ```
pub struct Constraint<C: ?Sized> {
    variables: Vec<usize>,
    checker: Rc<dyn Checker<C>>,
}

impl<C: ?Sized> Constraint<C> {
    /// Creates a constraint of the given arity with every variable slot set to 0.
    ///
    /// # Panics
    ///
    /// Panics if `arity == 0`.
    pub fn new<K>(arity: usize, checker: K) -> Result<Self, CspError>
    where
        K: Checker<C> + 'static,
    {
        Self::with_shared_checker(arity, Rc::new(checker))
    }

    /// Like [`new`](Self::new), but reuses a checker shared with other constraints.
    pub fn with_shared_checker(
        arity: usize,
        checker: Rc<dyn Checker<C>>,
    ) -> Result<Self, CspError> {
        lifecycle::debug_assert_active();
        assert!(arity > 0, "constraint arity must be positive");

        let mut variables = Vec::new();
        variables
            .try_reserve_exact(arity)
            .map_err(|_| CspError::Allocation {
                what: "constraint variable slots",
                count: arity,
            })?;
        variables.resize(arity, 0);

        log::trace!("created constraint with arity {arity}");
        Ok(Self { variables, checker })
    }

    /// Sets every variable slot at once.
    ///
    /// # Panics
    ///
    /// Panics if `variables.len() != arity`.
    pub fn with_variables(mut self, variables: &[usize]) -> Self {
        assert_eq!(
            variables.len(),
            self.arity(),
            "variable count does not match constraint arity"
        );
        self.variables.copy_from_slice(variables);
        self
    }

    /// Number of variables this constraint references.
    pub fn arity(&self) -> usize {
        lifecycle::debug_assert_active();
        self.variables.len()
    }

    /// The checker invoked by the consistency test.
    pub fn checker(&self) -> &Rc<dyn Checker<C>> {
        lifecycle::debug_assert_active();
        &self.checker
    }

    /// Overwrites variable slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= arity`.
    pub fn set_variable(&mut self, index: usize, variable: usize) {
        lifecycle::debug_assert_active();
        assert!(
            index < self.variables.len(),
            "variable slot {index} out of range for arity {}",
            self.variables.len()
        );
        self.variables[index] = variable;
    }

    /// Variable referenced by slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= arity`.
    pub fn variable(&self, index: usize) -> usize {
        lifecycle::debug_assert_active();
        assert!(
            index < self.variables.len(),
            "variable slot {index} out of range for arity {}",
            self.variables.len()
        );
        self.variables[index]
    }

    /// All referenced variables, in slot order.
    pub fn variables(&self) -> &[usize] {
        lifecycle::debug_assert_active();
        &self.variables
    }

    /// Largest referenced variable index.
    pub fn max_variable(&self) -> usize {
        lifecycle::debug_assert_active();
        // arity > 0 is guaranteed at construction
        self.variables.iter().copied().max().unwrap_or(0)
    }

    /// Whether every referenced variable lies strictly below `frontier`.
    ///
    /// Variables at or above the frontier are not yet bound, so the
    /// constraint must not be evaluated.
    pub fn is_applicable(&self, frontier: usize) -> bool {
        lifecycle::debug_assert_active();
        self.variables.iter().all(|&variable| variable < frontier)
    }
}

impl<C: ?Sized> fmt::Debug for Constraint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

impl<C: ?Sized> Drop for Constraint<C> {
    fn drop(&mut self) {
        log::trace!("dropped constraint with arity {}", self.variables.len());
    }
}
