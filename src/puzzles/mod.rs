//! Example clients of the CSP core.
//!
//! Each puzzle translates itself into domains and constraints, hands them
//! to [`Problem::solve`](crate::csp::Problem::solve), and renders the
//! resulting assignment. Nothing here reaches past the public core API.
//!
//! - **N-queens**: [`QueensModel`] — one variable per row, pairwise
//!   column/diagonal constraints
//! - **Sudoku**: [`SudokuModel`] — 81 cells, pairwise all-different per
//!   row, column and box, unary constraints for the givens

mod queens;
mod render;
mod sudoku;

pub use queens::{queens_compatible, render_board, QueensModel};
pub use render::render_box_grid;
pub use sudoku::{
    all_different_pair, matches_given, render_grid, Grid, SudokuModel, GRID_SIZE, NUM_CELLS,
};
