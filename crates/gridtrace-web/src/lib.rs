//! WASM bindings for the **gridtrace** search engine.
//!
//! The exported functions take the same arguments as the browser front-end
//! has always passed: start and end cell indices, grid width and height, the
//! wall indices as a `Uint32Array`, and the heuristic / diagonal switches.
//!
//! ```js
//! import init, { find_path, search_trace } from './pkg/gridtrace_web.js';
//! await init();
//! const wallIdx = Uint32Array.from(walls);
//! const flat = find_path(0, 24, 5, 5, wallIdx, true, false);
//! const { trace, pathStart, reached } = search_trace(0, 24, 5, 5, wallIdx, true, false);
//! ```
//!
//! Invalid arguments (zero dimensions, endpoints outside the grid) throw a JS
//! `Error` instead of producing an undefined result.

use gridtrace_core::{GridDims, GridError};
use gridtrace_paths::{Adjacency, Heuristic, SearchQuery, SearchTrace};

use js_sys::{Object, Reflect, Uint32Array};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a validated query from the raw exported arguments.
fn build_query(
    start_idx: usize,
    end_idx: usize,
    dim_x: usize,
    dim_y: usize,
    walls: &[usize],
    heuristic: bool,
    diagonals: bool,
) -> Result<SearchQuery, GridError> {
    let dims = GridDims::new(dim_x, dim_y)?;
    let query = SearchQuery::new(dims, start_idx, end_idx)
        .with_walls(walls.to_vec())
        .with_heuristic(Heuristic::from_flag(heuristic))
        .with_adjacency(Adjacency::from_flag(diagonals));
    query.validate()?;
    Ok(query)
}

fn to_js_error(e: GridError) -> JsError {
    JsError::new(&e.to_string())
}

/// Cell indices as `u32` for a `Uint32Array`. Grids handled in the browser
/// are far below `u32::MAX` cells.
fn indices_u32(indices: &[usize]) -> Vec<u32> {
    indices.iter().map(|&i| i as u32).collect()
}

fn set(obj: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(obj, &JsValue::from_str(key), value).map(|_| ())
}

/// `{ trace, discovered, pathStart, reached, expanded }`.
fn trace_object(trace: &SearchTrace) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    let flat = Uint32Array::from(indices_u32(trace.as_slice()).as_slice());
    set(&obj, "trace", &flat)?;
    set(&obj, "discovered", &JsValue::from(trace.discovery().len() as u32))?;
    let path_start = match trace.path_start() {
        Some(at) => JsValue::from(at as u32),
        None => JsValue::NULL,
    };
    set(&obj, "pathStart", &path_start)?;
    set(&obj, "reached", &JsValue::from_bool(trace.reached()))?;
    set(&obj, "expanded", &JsValue::from(trace.expanded() as u32))?;
    Ok(obj.into())
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

/// Search and return the flat trace: discovered cells, then the path from
/// end back to start when the end was reached.
#[wasm_bindgen]
pub fn find_path(
    start_idx: usize,
    end_idx: usize,
    dim_x: usize,
    dim_y: usize,
    walls: &[usize],
    heuristic: bool,
    diagonals: bool,
) -> Result<Vec<usize>, JsError> {
    let query = build_query(start_idx, end_idx, dim_x, dim_y, walls, heuristic, diagonals)
        .map_err(to_js_error)?;
    query.run().map(SearchTrace::into_indices).map_err(to_js_error)
}

/// Search and return the trace together with its phase boundaries.
#[wasm_bindgen]
pub fn search_trace(
    start_idx: usize,
    end_idx: usize,
    dim_x: usize,
    dim_y: usize,
    walls: &[usize],
    heuristic: bool,
    diagonals: bool,
) -> Result<JsValue, JsValue> {
    let query = build_query(start_idx, end_idx, dim_x, dim_y, walls, heuristic, diagonals)
        .map_err(|e| JsValue::from(to_js_error(e)))?;
    let trace = query.run().map_err(|e| JsValue::from(to_js_error(e)))?;
    log::debug!(
        "search_trace: {} entries, reached {}",
        trace.len(),
        trace.reached()
    );
    trace_object(&trace)
}
