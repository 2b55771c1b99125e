//! Solves a 9×9 sudoku given as 81 characters (`1`-`9`, `0` or `.` for blanks).

use clap::Parser;
use log::LevelFilter;
use u_csp::csp::CspError;
use u_csp::lifecycle::Activation;
use u_csp::puzzles::{render_grid, Grid, SudokuModel};

const DEFAULT_PUZZLE: &str =
    "000600470098000062004010500900300600420008903600197050006073800309851706070020045";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Puzzle in row-major order
    #[arg(default_value = DEFAULT_PUZZLE)]
    puzzle: String,

    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

pub fn main() {
    if let Err(e) = run() {
        eprintln!("Execution failed, error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CspError> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let _csp = Activation::new();

    let grid: Grid = args.puzzle.parse()?;
    let model = SudokuModel::new(&grid)?;

    match model.solve()? {
        Some(solution) => {
            println!("Solution found");
            print!("{}", render_grid(&solution));
        }
        None => println!("No solution found"),
    }
    Ok(())
}
