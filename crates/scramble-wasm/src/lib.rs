//! WebAssembly bindings for the edge-matching puzzle solver.
//!
//! The browser page hands pieces across as a 9x4 array of edge values and
//! renders the returned placements itself; nothing here touches the DOM.

use scramble_core::{
    Generator, GeneratorConfig, Piece, Puzzle, Solution, Solver, EDGE_COUNT, PIECE_COUNT,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;


// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Report returned by [`solve_pieces`]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveReport {
    solutions: Vec<Solution>,
    total_tries: u64,
    tries_at_level: Vec<u64>,
    duration_ms: f64,
}

fn pieces_from_rows(rows: Vec<Vec<i16>>) -> Result<[Piece; PIECE_COUNT], String> {
    if rows.len() != PIECE_COUNT {
        return Err(format!(
            "expected {} pieces, got {}",
            PIECE_COUNT,
            rows.len()
        ));
    }
    let mut pieces = [Piece::new([0; EDGE_COUNT]); PIECE_COUNT];
    for (index, row) in rows.iter().enumerate() {
        let edges: [i16; EDGE_COUNT] = row.as_slice().try_into().map_err(|_| {
            format!(
                "piece {}: expected {} edges, got {}",
                index,
                EDGE_COUNT,
                row.len()
            )
        })?;
        pieces[index] = Piece::new(edges);
    }
    Ok(pieces)
}

/// Solve a puzzle passed as a 9x4 array of edge values.
///
/// Returns `{solutions, totalTries, triesAtLevel, durationMs}`; each
/// solution is an array of nine `{piece, rotation}` placements in slot
/// order (center first, then clockwise from east of the center).
#[wasm_bindgen]
pub fn solve_pieces(pieces: JsValue) -> Result<JsValue, JsValue> {
    let rows: Vec<Vec<i16>> = serde_wasm_bindgen::from_value(pieces)
        .map_err(|err| JsValue::from_str(&format!("invalid piece array: {}", err)))?;
    let pieces = pieces_from_rows(rows).map_err(|err| JsValue::from_str(&err))?;

    let mut solver = Solver::new(Puzzle::new(pieces));
    let started = js_sys::Date::now();
    solver.solve();
    let duration_ms = js_sys::Date::now() - started;

    let report = SolveReport {
        solutions: solver.solutions().to_vec(),
        total_tries: solver.total_tries(),
        tries_at_level: solver.tries_at_level().to_vec(),
        duration_ms,
    };
    serde_wasm_bindgen::to_value(&report).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Generate a random solvable piece set as a 9x4 array of edge values
#[wasm_bindgen]
pub fn generate_pieces(seed: Option<u64>, max_value: Option<i16>) -> Result<JsValue, JsValue> {
    let mut config = GeneratorConfig {
        seed,
        ..GeneratorConfig::default()
    };
    if let Some(max_value) = max_value {
        config.max_value = max_value;
    }

    let pieces = Generator::with_config(config).generate();
    let rows: Vec<[i16; EDGE_COUNT]> = pieces.iter().map(|piece| piece.edges()).collect();
    serde_wasm_bindgen::to_value(&rows).map_err(|err| JsValue::from_str(&err.to_string()))
}
