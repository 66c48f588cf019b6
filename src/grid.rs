use std::fmt::{Display, Formatter};
use std::ops::Index;

use itertools::Itertools;
use ndarray::Array2;

use crate::location::Location;

/// The content of one grid cell: usually a single letter, sometimes more (e.g. `"QU"`).
///
/// Tiles are uppercase-normalized on construction, matching how [`Dictionary`](crate::dictionary::Dictionary) normalizes words.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Tile(String);

impl Tile {
    /// Build a tile from its text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().to_uppercase())
    }

    /// The tile text as it contributes to a spelled word.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tile {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Tile {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// An immutable grid of [`Tile`]s.
///
/// Rows are expected to be equal length.
/// A shorter row is accepted, and the cells past its end are holes: they have no tile, are not coordinates of the grid, and no path can visit them.
/// An empty tile is a hole too.
#[derive(Clone, Debug)]
pub struct Grid {
    pub(crate) tiles: Array2<Option<Tile>>,
}

impl Grid {
    /// Build a grid from rows of tile text.
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Into<Tile>,
    {
        Self::from_cells(rows.into_iter().map(|row| row.into_iter().map(Some)))
    }

    /// Like [`Self::from_rows`], but a `None` cell is a hole that keeps the columns after it in place.
    pub(crate) fn from_cells<R, T>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = Option<T>>,
        T: Into<Tile>,
    {
        let rows = rows.into_iter()
            .map(|row| row.into_iter()
                .map(|cell| cell.map(Into::<Tile>::into).filter(|tile| !tile.as_str().is_empty()))
                .collect_vec())
            .collect_vec();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut tiles = Array2::from_elem((rows.len(), width), None);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, tile) in row.into_iter().enumerate() {
                tiles[(r, c)] = tile;
            }
        }

        Self { tiles }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns in the widest row.
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// The tile at `location`, or [`None`] if `location` is off the grid or a hole.
    pub fn get(&self, location: Location) -> Option<&Tile> {
        self.tiles.get(location.as_index()).and_then(Option::as_ref)
    }

    /// Iterate every present tile with its location, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Location, &Tile)> {
        self.tiles.indexed_iter()
            .filter_map(|(index, tile)| tile.as_ref().map(|tile| (Location::from(index), tile)))
    }
}

impl Index<Location> for Grid {
    type Output = str;

    /// Panics if `index` is not a coordinate of this grid.
    fn index(&self, index: Location) -> &Self::Output {
        match self.get(index) {
            Some(tile) => tile.as_str(),
            None => panic!("{:?} is not on the grid", index),
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.rows() {
            writeln!(f, "{}", row.iter()
                .map(|tile| tile.as_ref().map_or(".", Tile::as_str))
                .join(" "))?;
        }

        Ok(())
    }
}
