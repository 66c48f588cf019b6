use std::collections::HashSet;
use std::time::{Duration, Instant};

use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::adjacency::{adjacency, coordinates, AdjacencyMap};
use crate::dictionary::Dictionary;
use crate::grid::Grid;
use crate::location::Location;
use crate::path::{is_well_formed, word_of, Path};

/// Tuning knobs for a [`Searcher`]. The default is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Longest path length tried by [`Searcher::max_score`]. Capped at the number of cells on the grid.
    pub max_path_len: Option<usize>,
    /// Wall-clock allowance for one search, checked before each root.
    pub budget: Option<Duration>,
}

impl SearchConfig {
    /// Set [`Self::max_path_len`].
    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = Some(max_path_len);
        self
    }

    /// Set [`Self::budget`].
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }
}

/// An accepted path and the word it spells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Found {
    /// The cells visited, in order.
    pub path: Path,
    /// The uppercase word `path` spells.
    pub word: String,
}

/// Outcome of one search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Search {
    /// Accepted entries, in discovery order.
    pub found: Vec<Found>,
    /// `false` if the [budget](SearchConfig::budget) ran out before every root was tried.
    pub complete: bool,
}

impl Search {
    /// Drop the words, keeping only the paths.
    pub fn into_paths(self) -> Vec<Path> {
        self.found.into_iter().map(|found| found.path).collect()
    }
}

/// When a node of the traversal is recorded as a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
enum Acceptance {
    /// The path has `n` cells and spells a word.
    #[strum(to_string = "length-n paths")]
    PathLength(usize),
    /// The spelled word has `n` chars and is a word. Differs from [`Self::PathLength`] on multi-char tiles.
    #[strum(to_string = "length-n words")]
    WordLength(usize),
    /// The path has `n` cells and spells a word nobody found earlier in this search.
    #[strum(to_string = "max score")]
    UniqueAtPathLength(usize),
}

impl Acceptance {
    fn accepts(&self, path: &[Location], word: &str, dictionary: &Dictionary, words_found: &HashSet<String>) -> bool {
        match *self {
            Self::PathLength(n) => path.len() == n && dictionary.contains(word),
            Self::WordLength(n) => word.chars().count() == n && dictionary.contains(word),
            Self::UniqueAtPathLength(n) => path.len() == n && dictionary.contains(word) && !words_found.contains(word),
        }
    }

    /// Whether no extension of this node can be accepted any more.
    fn saturated(&self, path: &[Location], word: &str) -> bool {
        match *self {
            Self::PathLength(n) | Self::UniqueAtPathLength(n) => path.len() >= n,
            // tiles never shorten the word
            Self::WordLength(n) => word.chars().count() >= n,
        }
    }
}

/// Mutable state of one search. Everything here is restored on backtrack except the results.
struct Traversal<'a> {
    grid: &'a Grid,
    neighbors: &'a AdjacencyMap,
    dictionary: &'a Dictionary,
    acceptance: Acceptance,
    available: HashSet<Location>,
    path: Path,
    word: String,
    found: Vec<Found>,
    // only consulted by UniqueAtPathLength, persists across sweep lengths
    words_found: HashSet<String>,
}

impl<'a> Traversal<'a> {
    fn new(searcher: &'a Searcher<'a>, acceptance: Acceptance) -> Self {
        Self {
            grid: searcher.grid,
            neighbors: &searcher.neighbors,
            dictionary: searcher.dictionary,
            acceptance,
            available: searcher.neighbors.locations().collect(),
            path: Vec::with_capacity(searcher.neighbors.len()),
            word: String::new(),
            found: Vec::new(),
            words_found: HashSet::new(),
        }
    }

    /// Root the traversal at every coordinate in turn. Returns `false` if `deadline` passed first.
    fn run(&mut self, deadline: Option<Instant>) -> bool {
        let neighbors = self.neighbors;
        for root in neighbors.locations() {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return false;
            }

            trace!(?root, "exploring root");
            self.available.remove(&root);
            self.path.push(root);
            self.word.push_str(&self.grid[root]);

            self.explore(root);

            self.word.clear();
            self.path.clear();
            self.available.insert(root);
        }

        true
    }

    fn explore(&mut self, at: Location) {
        if !self.dictionary.has_prefix(&self.word) {
            return;
        }

        if self.acceptance.accepts(&self.path, &self.word, self.dictionary, &self.words_found) {
            if let Acceptance::UniqueAtPathLength(_) = self.acceptance {
                self.words_found.insert(self.word.clone());
            }
            self.found.push(Found { path: self.path.clone(), word: self.word.clone() });
            return;
        }

        if self.acceptance.saturated(&self.path, &self.word) {
            return;
        }

        let neighbors = self.neighbors;
        for next in neighbors.neighbors(at) {
            if !self.available.remove(&next) {
                continue;
            }
            let word_len = self.word.len();
            self.path.push(next);
            self.word.push_str(&self.grid[next]);

            self.explore(next);

            self.word.truncate(word_len);
            self.path.pop();
            self.available.insert(next);
        }
    }
}

/// Prefix-pruned depth-first search over one grid and one dictionary.
///
/// Building a [`Searcher`] indexes the grid's adjacency once; every search method then starts from fresh traversal state,
/// so searches may be issued back to back without affecting each other.
pub struct Searcher<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    neighbors: AdjacencyMap,
    config: SearchConfig,
}

impl<'a> Searcher<'a> {
    /// Index `grid` for searching against `dictionary`.
    pub fn new(grid: &'a Grid, dictionary: &'a Dictionary) -> Self {
        Self {
            grid,
            dictionary,
            neighbors: adjacency(&coordinates(grid)),
            config: SearchConfig::default(),
        }
    }

    /// Replace the [`SearchConfig`].
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    fn deadline(&self) -> Option<Instant> {
        self.config.budget.map(|budget| Instant::now() + budget)
    }

    fn search(&self, acceptance: Acceptance) -> Search {
        let mut traversal = Traversal::new(self, acceptance);
        let complete = traversal.run(self.deadline());
        let search = Search { found: traversal.found, complete };
        self.report(acceptance, &search);
        search
    }

    fn report(&self, acceptance: Acceptance, search: &Search) {
        if !search.complete {
            warn!(mode = %acceptance, found = search.found.len(), "search budget ran out");
        }
        debug!(mode = %acceptance, found = search.found.len(), complete = search.complete, "search finished");
    }

    /// Every path of exactly `n` cells that spells a word.
    pub fn length_n_paths(&self, n: usize) -> Search {
        self.search(Acceptance::PathLength(n))
    }

    /// Every path whose spelled word is exactly `n` chars long.
    pub fn length_n_words(&self, n: usize) -> Search {
        self.search(Acceptance::WordLength(n))
    }

    /// One path per reachable word.
    ///
    /// Path lengths are swept from longest to shortest, and a word is kept only the first time it is found,
    /// so each word is reported through its longest path.
    pub fn max_score(&self) -> Search {
        let longest = self.config.max_path_len
            .map_or(self.neighbors.len(), |max| max.min(self.neighbors.len()));
        let deadline = self.deadline();

        let mut traversal = Traversal::new(self, Acceptance::UniqueAtPathLength(longest));
        let mut complete = true;
        for n in (1..=longest).rev() {
            traversal.acceptance = Acceptance::UniqueAtPathLength(n);
            if !traversal.run(deadline) {
                complete = false;
                break;
            }
        }

        let search = Search { found: traversal.found, complete };
        self.report(traversal.acceptance, &search);
        search
    }

    /// [`is_valid_path`](crate::path::is_valid_path) against this searcher's grid and dictionary, reusing its indices.
    pub fn check(&self, path: &[Location]) -> Option<String> {
        if !is_well_formed(&self.neighbors, path) {
            return None;
        }

        Some(word_of(self.grid, path)).filter(|word| self.dictionary.contains(word))
    }

    /// The grid's coordinates in the order roots are tried.
    pub fn roots(&self) -> Vec<Location> {
        self.neighbors.locations().collect_vec()
    }
}

/// Every path of exactly `n` cells on `grid` that spells one of `words`.
pub fn find_length_n_paths<I, S>(n: usize, grid: &Grid, words: I) -> Vec<Path>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dictionary = Dictionary::new(words);
    Searcher::new(grid, &dictionary).length_n_paths(n).into_paths()
}

/// Every path on `grid` spelling one of `words` whose length is exactly `n` chars.
pub fn find_length_n_words<I, S>(n: usize, grid: &Grid, words: I) -> Vec<Path>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dictionary = Dictionary::new(words);
    Searcher::new(grid, &dictionary).length_n_words(n).into_paths()
}

/// One path per word of `words` reachable on `grid`, each through the longest path found for it.
pub fn max_score_paths<I, S>(grid: &Grid, words: I) -> Vec<Path>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dictionary = Dictionary::new(words);
    Searcher::new(grid, &dictionary).max_score().into_paths()
}
