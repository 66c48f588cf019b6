use std::collections::HashSet;

use itertools::Itertools;

use crate::adjacency::{adjacency, coordinates, AdjacencyMap};
use crate::grid::Grid;
use crate::location::Location;

/// An ordered sequence of distinct, consecutively adjacent [`Location`]s.
pub type Path = Vec<Location>;

/// Concatenate the tiles along `path`, in order.
///
/// Locations that are off the grid contribute nothing; [`is_valid_path`] rejects such paths before spelling them.
pub fn word_of(grid: &Grid, path: &[Location]) -> String {
    path.iter()
        .filter_map(|location| grid.get(*location))
        .map(|tile| tile.as_str())
        .collect()
}

/// Validate a single candidate path, returning the word it spells if and only if:
/// 1. no location repeats,
/// 2. every location is on `grid`,
/// 3. every consecutive pair is a king move apart,
/// 4. the spelled word is one of `words`.
///
/// `words` is compared case-insensitively, like every other word list in this crate.
/// Returns [`None`] on any violation; this never fails otherwise.
pub fn is_valid_path<I, S>(grid: &Grid, path: &[Location], words: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !is_well_formed(&adjacency(&coordinates(grid)), path) {
        return None;
    }

    let word = word_of(grid, path);
    if word.is_empty() {
        return None;
    }
    words.into_iter()
        .any(|candidate| candidate.as_ref().chars().flat_map(char::to_uppercase).eq(word.chars()))
        .then_some(word)
}

/// Checks 1 to 3 of [`is_valid_path`] against an already built [`AdjacencyMap`].
pub(crate) fn is_well_formed(neighbors: &AdjacencyMap, path: &[Location]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().all(|location| neighbors.contains(*location) && seen.insert(*location))
        && path.iter().tuple_windows().all(|(a, b)| neighbors.are_adjacent(*a, *b))
}
