//! Terminal and JSON reporting for solver runs.

use crossterm::{
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use scramble_core::{Piece, Solution, Solver, PIECE_COUNT};
use serde::Serialize;
use std::io;
use std::time::Duration;

/// Grid rows of slot indexes in display order; the filling order spirals
/// clockwise out of the center, which puts slot 6 in the top-left corner
const DISPLAY_ROWS: [[usize; 3]; 3] = [[6, 7, 8], [5, 0, 1], [4, 3, 2]];

/// Print a red, bold, one-line diagnostic to stderr
pub fn error(message: &str) {
    let mut stderr = io::stderr();
    let styled = execute!(
        stderr,
        SetForegroundColor(Color::Red),
        SetAttribute(Attribute::Bold),
        Print("ERROR: "),
        Print(message),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n"),
    );
    if styled.is_err() {
        eprintln!("ERROR: {}", message);
    }
}

/// Print the human-readable report: a table per solution, then the call
/// counters and timing
pub fn print_report(solver: &Solver, elapsed: Duration) {
    if solver.solutions().is_empty() {
        println!("No solution found :-/");
        println!();
    } else {
        for (number, solution) in solver.solutions().iter().enumerate() {
            print_solution(number + 1, solution);
        }
    }

    let levels: Vec<String> = solver
        .tries_at_level()
        .iter()
        .map(|calls| calls.to_string())
        .collect();
    println!("Total tries: {}", solver.total_tries());
    println!("At level:    {}", levels.join(" "));
    println!();
    println!("Total calculation time: {} µs", elapsed.as_micros());
}

fn print_solution(number: usize, solution: &Solution) {
    println!("Solution #{}", number);
    println!("-------------------");
    println!(" indexes |  turns");
    println!("---------+---------");
    for row in DISPLAY_ROWS {
        let indexes: Vec<String> = row
            .iter()
            .map(|&slot| solution[slot].piece.to_string())
            .collect();
        let turns: Vec<String> = row
            .iter()
            .map(|&slot| turn_cell(solution[slot].rotation))
            .collect();
        println!("  {}  | {}", indexes.join(" "), turns.join(" "));
    }
    println!();
}

/// Quarter-turn cell, `r/4` or a padded `0` for unrotated pieces
fn turn_cell(rotation: u8) -> String {
    if rotation == 0 {
        " 0 ".to_string()
    } else {
        format!("{}/4", rotation)
    }
}

/// Shape of the `--json` report
#[derive(Serialize)]
struct Report<'a> {
    solutions: &'a [Solution],
    total_tries: u64,
    tries_at_level: [u64; PIECE_COUNT + 1],
    duration_us: u128,
}

/// Print the machine-readable report
pub fn print_json_report(solver: &Solver, elapsed: Duration) {
    let report = Report {
        solutions: solver.solutions(),
        total_tries: solver.total_tries(),
        tries_at_level: solver.tries_at_level(),
        duration_us: elapsed.as_micros(),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(err) => error(&format!("cannot serialize report: {}", err)),
    }
}

/// Print a generated piece set as JSON, one row of edge values per piece
pub fn print_pieces_json(pieces: &[Piece; PIECE_COUNT]) {
    match serde_json::to_string_pretty(&pieces) {
        Ok(json) => println!("{}", json),
        Err(err) => error(&format!("cannot serialize pieces: {}", err)),
    }
}
