//! N-queens.
//!
//! Variable `i` is the column of the queen on row `i`, so two queens never
//! share a row by construction. One binary constraint per pair of rows
//! forbids a shared column or diagonal.

use std::rc::Rc;

use super::render::render_box_grid;
use crate::csp::{Checker, Constraint, CspError, Problem};

/// Whether the two queens named by `constraint` leave each other alone.
pub fn queens_compatible(constraint: &Constraint<()>, values: &[usize], _: &()) -> bool {
    let (x0, x1) = (constraint.variable(0), constraint.variable(1));
    let (y0, y1) = (values[x0], values[x1]);
    y0 != y1 && x0 + y1 != x1 + y0 && x0 + y0 != x1 + y1
}

fn on_board(_: &Constraint<()>, _: &[usize], _: &()) -> bool {
    true
}

/// The constraints of an `n × n` queens board.
///
/// # Examples
///
/// ```
/// use u_csp::lifecycle::Activation;
/// use u_csp::puzzles::QueensModel;
///
/// let _csp = Activation::new();
/// let model = QueensModel::new(4).unwrap();
/// assert_eq!(model.solve().unwrap(), Some(vec![1, 3, 0, 2]));
/// ```
#[derive(Debug)]
pub struct QueensModel {
    size: usize,
    constraints: Vec<Constraint<()>>,
}

impl QueensModel {
    /// Builds the `n(n-1)/2` pairwise constraints.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn new(size: usize) -> Result<Self, CspError> {
        assert!(size > 0, "board size must be positive");

        let mut constraints = Vec::with_capacity(size * (size - 1) / 2);
        if size == 1 {
            // a lone queen has no pair; a problem still needs one constraint
            constraints.push(Constraint::new(1, on_board)?);
        }

        let checker: Rc<dyn Checker<()>> = Rc::new(queens_compatible);
        for i in 0..size {
            for j in i + 1..size {
                let mut constraint = Constraint::with_shared_checker(2, Rc::clone(&checker))?;
                constraint.set_variable(0, i);
                constraint.set_variable(1, j);
                constraints.push(constraint);
            }
        }

        Ok(Self { size, constraints })
    }

    /// Board size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The pairwise constraints, in row-major pair order.
    pub fn constraints(&self) -> &[Constraint<()>] {
        &self.constraints
    }

    /// A problem borrowing this model's constraints.
    pub fn problem(&self) -> Result<Problem<'_, ()>, CspError> {
        let mut problem = Problem::new(self.size, self.constraints.len())?;
        for row in 0..self.size {
            problem.set_domain(row, self.size);
        }
        for (index, constraint) in self.constraints.iter().enumerate() {
            problem.set_constraint(index, constraint);
        }
        Ok(problem)
    }

    /// Column of each row's queen, or `None` if the board has no solution.
    pub fn solve(&self) -> Result<Option<Vec<usize>>, CspError> {
        let problem = self.problem()?;
        let mut queens = vec![0; self.size];
        Ok(problem.solve(&mut queens, &()).then_some(queens))
    }
}

/// Draws a board with `♛` at `(row, queens[row])`.
pub fn render_board(queens: &[usize]) -> String {
    render_box_grid(queens.len(), |row, col| {
        if queens[row] == col {
            '♛'
        } else {
            ' '
        }
    })
}
