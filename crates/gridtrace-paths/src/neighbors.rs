use gridtrace_core::GridDims;

/// Which cells count as adjacent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Adjacency {
    /// Left, right, up, down.
    #[default]
    Cardinal,
    /// Cardinal plus the four diagonals. Diagonal steps cost the same as
    /// cardinal ones and may pass between two blocked cardinal cells.
    Diagonal,
}

impl Adjacency {
    /// `Diagonal` when `diagonals` is set, `Cardinal` otherwise.
    #[inline]
    pub const fn from_flag(diagonals: bool) -> Self {
        if diagonals { Self::Diagonal } else { Self::Cardinal }
    }
}

impl From<bool> for Adjacency {
    fn from(diagonals: bool) -> Self {
        Self::from_flag(diagonals)
    }
}

/// Cached neighbor computation helper.
///
/// Enumerates the in-grid neighbours of a cell index in a fixed order:
///
/// 1. left, then (diagonal mode) left-up and left-down;
/// 2. right, then (diagonal mode) right-up and right-down;
/// 3. up;
/// 4. down.
///
/// The order decides discovery order in the search trace and therefore the
/// outcome of priority ties, so it must not change.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the neighbours of `idx` under `adjacency`. Walls are not
    /// filtered here.
    pub fn of(&mut self, dims: GridDims, idx: usize, adjacency: Adjacency) -> &[usize] {
        self.buf.clear();
        let w = dims.width();
        let (x, y) = dims.coords(idx);
        let has_up = y > 0;
        let has_down = y + 1 < dims.height();
        let diagonals = adjacency == Adjacency::Diagonal;

        if x > 0 {
            self.buf.push(idx - 1);
            if diagonals {
                if has_up {
                    self.buf.push(idx - 1 - w);
                }
                if has_down {
                    self.buf.push(idx - 1 + w);
                }
            }
        }
        if x + 1 < w {
            self.buf.push(idx + 1);
            if diagonals {
                if has_up {
                    self.buf.push(idx + 1 - w);
                }
                if has_down {
                    self.buf.push(idx + 1 + w);
                }
            }
        }
        if has_up {
            self.buf.push(idx - w);
        }
        if has_down {
            self.buf.push(idx + w);
        }
        &self.buf
    }
}
