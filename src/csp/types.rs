//! Core trait for constraint checkers.

use super::constraint::Constraint;

/// Decides whether a constraint holds under the current assignment.
///
/// The engine never interprets checker semantics. It only invokes a
/// checker once every variable the constraint references is bound (see
/// [`Constraint::is_applicable`]), so a checker may read
/// `assignment[constraint.variable(i)]` for any `i < arity` without
/// seeing a stale slot.
///
/// # Type Parameters
///
/// * `C` - Auxiliary context passed through `solve`/`is_consistent`
///   untouched. Use `()` when no context is needed.
///
/// Any `Fn(&Constraint<C>, &[usize], &C) -> bool` is a checker:
///
/// ```
/// use u_csp::csp::Constraint;
///
/// fn different(constraint: &Constraint<()>, values: &[usize], _: &()) -> bool {
///     values[constraint.variable(0)] != values[constraint.variable(1)]
/// }
/// # let _csp = u_csp::lifecycle::Activation::new();
/// let c: Constraint<()> = Constraint::new(2, different).unwrap().with_variables(&[0, 1]);
/// assert!(c.checker().check(&c, &[0, 1], &()));
/// assert!(!c.checker().check(&c, &[1, 1], &()));
/// ```
pub trait Checker<C: ?Sized> {
    /// Returns `true` if the constraint is satisfied.
    fn check(&self, constraint: &Constraint<C>, assignment: &[usize], context: &C) -> bool;
}

impl<C: ?Sized, F> Checker<C> for F
where
    F: Fn(&Constraint<C>, &[usize], &C) -> bool,
{
    fn check(&self, constraint: &Constraint<C>, assignment: &[usize], context: &C) -> bool {
        self(constraint, assignment, context)
    }
}
