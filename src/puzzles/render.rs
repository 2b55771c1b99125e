//! Box-drawing grid rendering.

/// Draws a `size × size` grid, one character per cell.
///
/// ```
/// let grid = u_csp::puzzles::render_box_grid(2, |row, col| if row == col { 'x' } else { ' ' });
/// assert_eq!(grid, "┌───┬───┐\n│ x │   │\n├───┼───┤\n│   │ x │\n└───┴───┘\n");
/// ```
pub fn render_box_grid<F>(size: usize, cell: F) -> String
where
    F: Fn(usize, usize) -> char,
{
    let border = |left: char, middle: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for col in 0..size {
            line.push_str("───");
            line.push(if col + 1 == size { right } else { middle });
        }
        line.push('\n');
        line
    };

    let mut out = border('┌', '┬', '┐');
    for row in 0..size {
        out.push('│');
        for col in 0..size {
            out.push(' ');
            out.push(cell(row, col));
            out.push_str(" │");
        }
        out.push('\n');
        if row + 1 < size {
            out.push_str(&border('├', '┼', '┤'));
        }
    }
    out.push_str(&border('└', '┴', '┘'));
    out
}
