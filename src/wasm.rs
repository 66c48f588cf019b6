//! `wasm-bindgen` exports for a browser front end.
//!
//! Grids and word lists cross the boundary as plain arrays of strings; paths cross as arrays of `[row, col]` pairs.
//! A grid cell that is not a string is a hole, a word that is not a string is skipped, and a path step that is not a pair of whole, non-negative numbers makes the path invalid.
//! Malformed input yields empty results rather than an exception.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::dictionary::Dictionary;
use crate::grid::Grid;
use crate::location::Location;
use crate::path::Path;
use crate::search::Searcher;

fn strings(array: &Array) -> Vec<String> {
    array.iter().filter_map(|value| value.as_string()).collect()
}

fn grid_from(rows: &Array) -> Grid {
    Grid::from_cells(rows.iter().map(|row| {
        Array::from(&row).iter().map(|cell| cell.as_string()).collect::<Vec<_>>()
    }))
}

/// A JS number as a coordinate, if it is a whole number in `0..=u32::MAX`.
pub(crate) fn coord_from_f64(value: f64) -> Option<usize> {
    (value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX))
        .then_some(value as usize)
}

fn location_from(value: &JsValue) -> Option<Location> {
    let pair = Array::from(value);
    if pair.length() != 2 {
        return None;
    }
    let coord = |i: u32| pair.get(i).as_f64().and_then(coord_from_f64);
    Some(Location(coord(0)?, coord(1)?))
}

fn path_to_js(path: &Path) -> Array {
    path.iter()
        .map(|Location(row, col)| Array::of2(&JsValue::from(*row as u32), &JsValue::from(*col as u32)))
        .collect()
}

fn paths_to_js(paths: Vec<Path>) -> Array {
    paths.iter().map(path_to_js).collect()
}

/// See [`find_length_n_paths`](crate::search::find_length_n_paths).
#[wasm_bindgen(js_name = findLengthNPaths)]
pub fn find_length_n_paths(n: usize, rows: Array, words: Array) -> Array {
    let grid = grid_from(&rows);
    let dictionary = Dictionary::new(strings(&words));
    paths_to_js(Searcher::new(&grid, &dictionary).length_n_paths(n).into_paths())
}

/// See [`find_length_n_words`](crate::search::find_length_n_words).
#[wasm_bindgen(js_name = findLengthNWords)]
pub fn find_length_n_words(n: usize, rows: Array, words: Array) -> Array {
    let grid = grid_from(&rows);
    let dictionary = Dictionary::new(strings(&words));
    paths_to_js(Searcher::new(&grid, &dictionary).length_n_words(n).into_paths())
}

/// See [`max_score_paths`](crate::search::max_score_paths).
#[wasm_bindgen(js_name = maxScorePaths)]
pub fn max_score_paths(rows: Array, words: Array) -> Array {
    let grid = grid_from(&rows);
    let dictionary = Dictionary::new(strings(&words));
    paths_to_js(Searcher::new(&grid, &dictionary).max_score().into_paths())
}

/// See [`is_valid_path`](crate::path::is_valid_path). A path containing anything but `[row, col]` pairs of whole, non-negative numbers is invalid.
#[wasm_bindgen(js_name = isValidPath)]
pub fn is_valid_path(rows: Array, path: Array, words: Array) -> Option<String> {
    let grid = grid_from(&rows);
    let path = path.iter()
        .map(|step| location_from(&step))
        .collect::<Option<Vec<_>>>()?;
    crate::path::is_valid_path(&grid, &path, strings(&words))
}
