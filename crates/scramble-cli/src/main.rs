mod input;
mod render;

use clap::Parser;
use scramble_core::{Generator, GeneratorConfig, Puzzle, Solver};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "scramble",
    version,
    about = "Solver for 3x3 edge-matching tile puzzles"
)]
struct Cli {
    /// Puzzle file: nine lines of four edge values (top right bottom left)
    #[arg(required_unless_present = "generate", conflicts_with = "generate")]
    file: Option<PathBuf>,

    /// Print a JSON report instead of tables
    #[arg(long)]
    json: bool,

    /// Print a random solvable piece set instead of solving
    #[arg(long)]
    generate: bool,

    /// Seed for --generate, random when omitted
    #[arg(long, requires = "generate")]
    seed: Option<u64>,

    /// Largest edge magnitude for --generate
    #[arg(long, requires = "generate", default_value_t = 4)]
    max_value: i16,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.generate {
        run_generate(&cli);
        return ExitCode::SUCCESS;
    }

    let Some(file) = cli.file.as_deref() else {
        render::error("no puzzle file given");
        return ExitCode::FAILURE;
    };

    match run_solve(file, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            render::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run_solve(file: &Path, json: bool) -> Result<(), input::InputError> {
    let pieces = input::load_pieces(file)?;
    let mut solver = Solver::new(Puzzle::new(pieces));

    let started = Instant::now();
    solver.solve();
    let elapsed = started.elapsed();

    if json {
        render::print_json_report(&solver, elapsed);
    } else {
        render::print_report(&solver, elapsed);
    }
    Ok(())
}

fn run_generate(cli: &Cli) {
    let mut generator = Generator::with_config(GeneratorConfig {
        max_value: cli.max_value,
        seed: cli.seed,
    });
    let pieces = generator.generate();

    if cli.json {
        render::print_pieces_json(&pieces);
    } else {
        for piece in &pieces {
            println!("{}", piece);
        }
    }
}
