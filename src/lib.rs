#![warn(missing_docs)]

//! # `boggler`
//!
//! Finds words on a [Boggle](https://en.wikipedia.org/wiki/Boggle) grid by tracing king-move paths whose tiles spell dictionary entries.
//! Build a [`Grid`] from rows of tiles and a [`Dictionary`] from a word list, then either call one of the free functions
//! ([`find_length_n_paths`], [`find_length_n_words`], [`max_score_paths`]) or build a [`Searcher`] to reuse the grid's indices across searches.
//! A single candidate path, such as one being entered by a player, is checked with [`is_valid_path`].
//!
//! Tiles and words are uppercase-normalized on the way in, so the game is case-insensitive throughout.
//!
//! # Internals
//! The grid's cells and their king-move neighbors are expressed as an undirected graph (see [`AdjacencyMap`]).
//! Every cell is tried as a root of a depth-first traversal which extends the current path one unvisited neighbor at a time.
//! Before going any deeper, the word spelled so far is looked up in the set of all prefixes of all dictionary words;
//! if no word starts that way, the branch is abandoned.
//! This is what keeps the search viable against dictionaries with tens of thousands of entries despite a branching factor of up to 8.
//!
//! The three search modes share that traversal and differ only in when a node is accepted as a result:
//! 1. [`find_length_n_paths`]: the path has exactly `n` cells and spells a word.
//! 2. [`find_length_n_words`]: the spelled word has exactly `n` chars. This differs from (1) when a tile holds several letters, e.g. `"QU"`.
//! 3. [`max_score_paths`]: each word is reported once. Path lengths are swept from the number of cells down to 1,
//!    so each word comes back through the longest path that spells it.

pub use adjacency::{adjacency, coordinates, AdjacencyMap};
pub use dictionary::{Dictionary, DictionaryError};
pub use grid::{Grid, Tile};
pub use location::Location;
pub use path::{is_valid_path, word_of, Path};
pub use search::{find_length_n_paths, find_length_n_words, max_score_paths, Found, Search, SearchConfig, Searcher};

pub mod adjacency;
pub mod dictionary;
pub(crate) mod grid;
pub(crate) mod location;
pub mod path;
pub mod search;
pub mod shape;
#[cfg(feature = "wasm")]
pub mod wasm;
