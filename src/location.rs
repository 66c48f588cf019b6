use ndarray::Ix;

pub(crate) type Coord = usize;

/// A location `(row, col)` on a grid. The top left corner is `Location(0, 0)`.
///
/// The derived ordering is row-major, which is the order roots are tried in during a search.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    // stepping off the top or left edge wraps to usize::MAX, which is never on a grid
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}
