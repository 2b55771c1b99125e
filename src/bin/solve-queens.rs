//! Places `n` non-attacking queens on an `n × n` board.

use clap::Parser;
use log::LevelFilter;
use u_csp::backtrack::{BacktrackRunner, SolverConfig};
use u_csp::csp::CspError;
use u_csp::lifecycle::Activation;
use u_csp::puzzles::{render_board, QueensModel};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    number: u32,

    /// Stop after this many tentative placements
    #[arg(short = 'n', long = "node-limit")]
    node_limit: Option<u64>,

    /// Stop after this many milliseconds
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

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

    let mut config = SolverConfig::default();
    if let Some(nodes) = args.node_limit {
        config = config.with_node_limit(nodes);
    }
    if let Some(ms) = args.time_limit {
        config = config.with_time_limit_ms(ms);
    }

    let size = args.number as usize;
    let model = QueensModel::new(size)?;
    let problem = model.problem()?;
    let mut queens = vec![0; size];
    let result = BacktrackRunner::run(&problem, &mut queens, &(), &config);
    log::info!("{:?} with {:?}", result.status, result.stats);

    if result.is_solved() {
        print!("{}", render_board(&queens));
    } else if result.is_infeasible() {
        println!("No solution found");
    } else {
        println!("Search stopped early: {:?}", result.status);
    }
    Ok(())
}
