use anyhow::{Context, Result};
use clap::Parser;
use mazepath::{report, CLIArgs};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    mazepath::logger::init_logger(args.verbose).context("Failed to install logger.")?;
    let mazes = mazepath::read_mazes(&args.input_path).with_context(|| {
        format!(
            "Failed to read mazes from given file({}).",
            args.input_path.display()
        )
    })?;

    let outcomes = report::solve_all(&mazes);
    for (ind, outcome) in outcomes.iter().enumerate() {
        println!("{}", report::solution_line(ind, outcome));
    }

    if args.summary {
        println!("{}", report::summary_line(&outcomes));
    }

    Ok(())
}
