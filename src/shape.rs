use std::hash::Hash;

use strum::VariantArray;

use crate::location::Location;

/// A single move between neighboring cells of a grid.
///
/// [`KingStep`] is the built-in implementation used by Boggle boards.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the grid; callers intersect it with the grid's coordinates.
    fn attempt_from(&self, location: Location) -> Location;
    /// The static array of all "forward" directions.
    ///
    /// Forward directions are those which, upon stepping from one location to another, cause the destination to sort after the origin in row-major order.
    /// Walking only these from every cell visits each undirected neighbor pair exactly once.
    /// The order of this array decides the order in which neighbors are later yielded, so it is part of the contract.
    const FORWARD_VARIANTS: &'static [Self];
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
}

/// The eight king-move directions of a rectangular grid: orthogonal and diagonal.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KingStep {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Step for KingStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::UpLeft => location.offset_by((-1, -1)),
            Self::Up => location.offset_by((-1, 0)),
            Self::UpRight => location.offset_by((-1, 1)),
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
            Self::DownLeft => location.offset_by((1, -1)),
            Self::Down => location.offset_by((1, 0)),
            Self::DownRight => location.offset_by((1, 1)),
        }
    }

    // row-major order of the destinations, so neighbor lists come out sorted
    const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::DownLeft, Self::Down, Self::DownRight];

    fn invert(&self) -> Self {
        match self {
            Self::UpLeft => Self::DownRight,
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::DownLeft => Self::UpRight,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
        }
    }
}
