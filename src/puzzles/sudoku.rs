//! 9×9 sudoku.
//!
//! Each of the 81 cells is a variable with domain `0..9` (digit minus one).
//! Givens are enforced by unary constraints that compare a cell against
//! the auxiliary context, which holds the 0-based givens for every cell.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::render::render_box_grid;
use crate::csp::{Checker, Constraint, CspError, Problem};

/// Cells per row, column and box.
pub const GRID_SIZE: usize = 9;
/// Cells in the grid.
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;

const PAIRS_PER_GROUP: usize = GRID_SIZE * (GRID_SIZE - 1) / 2;
const NUM_GROUPS: usize = 3 * GRID_SIZE;

/// A puzzle: `Some(digit)` for each given (1-9), `None` for each blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Option<u8>>,
}

impl Grid {
    /// Given digit at `cell`, if any.
    pub fn given(&self, cell: usize) -> Option<u8> {
        self.cells[cell]
    }

    /// Number of givens.
    pub fn num_givens(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// 0-based givens, with 0 for blank cells.
    pub fn givens(&self) -> Vec<usize> {
        self.cells
            .iter()
            .map(|cell| cell.map_or(0, |digit| usize::from(digit) - 1))
            .collect()
    }
}

impl FromStr for Grid {
    type Err = CspError;

    /// Parses 81 cells in row-major order; `1`-`9` are givens, `0` and `.`
    /// are blanks, whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| match ch {
                '.' | '0' => Ok(None),
                '1'..='9' => Ok(Some(ch as u8 - b'0')),
                other => Err(CspError::InvalidPuzzle(format!(
                    "unexpected character {other:?}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != NUM_CELLS {
            return Err(CspError::InvalidPuzzle(format!(
                "expected {NUM_CELLS} cells, found {}",
                cells.len()
            )));
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

/// Whether the two cells named by `constraint` hold different digits.
pub fn all_different_pair(
    constraint: &Constraint<[usize]>,
    values: &[usize],
    _: &[usize],
) -> bool {
    values[constraint.variable(0)] != values[constraint.variable(1)]
}

/// Whether the cell named by `constraint` holds its given digit.
pub fn matches_given(
    constraint: &Constraint<[usize]>,
    values: &[usize],
    givens: &[usize],
) -> bool {
    let cell = constraint.variable(0);
    values[cell] == givens[cell]
}

/// Cells of row, column or box `group` (rows 0-8, columns 9-17, boxes 18-26).
fn group_cells(group: usize) -> [usize; GRID_SIZE] {
    let index = group % GRID_SIZE;
    std::array::from_fn(|k| match group / GRID_SIZE {
        0 => index * GRID_SIZE + k,
        1 => k * GRID_SIZE + index,
        _ => {
            let row = (index / 3) * 3 + k / 3;
            let col = (index % 3) * 3 + k % 3;
            row * GRID_SIZE + col
        }
    })
}

/// The constraints and givens of one puzzle.
///
/// Holds one `matches_given` constraint per given, followed by an
/// `all_different_pair` constraint for every pair of cells sharing a row,
/// a column or a box.
#[derive(Debug)]
pub struct SudokuModel {
    givens: Vec<usize>,
    constraints: Vec<Constraint<[usize]>>,
}

impl SudokuModel {
    pub fn new(grid: &Grid) -> Result<Self, CspError> {
        let num_fixed = grid.num_givens();
        let mut constraints = Vec::with_capacity(num_fixed + NUM_GROUPS * PAIRS_PER_GROUP);

        let fixed: Rc<dyn Checker<[usize]>> = Rc::new(matches_given);
        for cell in (0..NUM_CELLS).filter(|&cell| grid.given(cell).is_some()) {
            let mut constraint = Constraint::with_shared_checker(1, Rc::clone(&fixed))?;
            constraint.set_variable(0, cell);
            constraints.push(constraint);
        }

        let different: Rc<dyn Checker<[usize]>> = Rc::new(all_different_pair);
        for group in 0..NUM_GROUPS {
            let cells = group_cells(group);
            for i in 0..GRID_SIZE {
                for j in i + 1..GRID_SIZE {
                    let mut constraint =
                        Constraint::with_shared_checker(2, Rc::clone(&different))?;
                    constraint.set_variable(0, cells[i]);
                    constraint.set_variable(1, cells[j]);
                    constraints.push(constraint);
                }
            }
        }

        log::debug!(
            "sudoku model with {num_fixed} givens and {} constraints",
            constraints.len()
        );
        Ok(Self {
            givens: grid.givens(),
            constraints,
        })
    }

    pub fn constraints(&self) -> &[Constraint<[usize]>] {
        &self.constraints
    }

    /// The auxiliary context passed to the checkers.
    pub fn givens(&self) -> &[usize] {
        &self.givens
    }

    /// A problem borrowing this model's constraints.
    pub fn problem(&self) -> Result<Problem<'_, [usize]>, CspError> {
        let mut problem = Problem::new(NUM_CELLS, self.constraints.len())?;
        for cell in 0..NUM_CELLS {
            problem.set_domain(cell, GRID_SIZE);
        }
        for (index, constraint) in self.constraints.iter().enumerate() {
            problem.set_constraint(index, constraint);
        }
        Ok(problem)
    }

    /// 0-based digits of the solved grid, or `None` if the puzzle has no solution.
    pub fn solve(&self) -> Result<Option<Vec<usize>>, CspError> {
        let problem = self.problem()?;
        let mut grid = vec![0; NUM_CELLS];
        Ok(problem.solve(&mut grid, &self.givens).then_some(grid))
    }
}

/// Draws the grid with 1-based digits.
pub fn render_grid(values: &[usize]) -> String {
    assert_eq!(values.len(), NUM_CELLS, "a sudoku grid has {NUM_CELLS} cells");
    render_box_grid(GRID_SIZE, |row, col| {
        char::from_digit((values[row * GRID_SIZE + col] + 1) as u32, 10).unwrap_or('?')
    })
}
