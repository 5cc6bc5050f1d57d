//! Grid dimensions and the row-major cell index mapping.
//!
//! A cell index `i` in `[0, width * height)` maps to `(i % width, i / width)`
//! and back via `y * width + x`. Every component of the workspace goes through
//! [`GridDims`] for this conversion so the two directions cannot drift apart.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Validated width and height of a rectangular grid.
///
/// Both dimensions are positive, their product fits in `usize`, and each
/// fits in `i32` so that every cell has a lossless [`Point`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDims", into = "RawDims")
)]
pub struct GridDims {
    width: usize,
    height: usize,
}

impl GridDims {
    /// Validate and create grid dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::invalid("width", "must be positive"));
        }
        if height == 0 {
            return Err(GridError::invalid("height", "must be positive"));
        }
        if width > i32::MAX as usize {
            return Err(GridError::invalid("width", format!("{width} exceeds i32::MAX")));
        }
        if height > i32::MAX as usize {
            return Err(GridError::invalid("height", format!("{height} exceeds i32::MAX")));
        }
        if width.checked_mul(height).is_none() {
            return Err(GridError::invalid(
                "height",
                format!("{width}x{height} grid overflows the index space"),
            ));
        }
        Ok(Self { width, height })
    }

    /// Cells per row.
    #[inline]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.width * self.height
    }

    /// Always `false`: validated dimensions are positive.
    #[inline]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Whether `idx` names a cell of this grid.
    #[inline]
    pub const fn contains(self, idx: usize) -> bool {
        idx < self.len()
    }

    /// Column and row of `idx`.
    #[inline]
    pub const fn coords(self, idx: usize) -> (usize, usize) {
        (idx % self.width, idx / self.width)
    }

    /// Index of the cell at column `x`, row `y`, if inside the grid.
    #[inline]
    pub const fn index_of(self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Screen point of `idx`.
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let (x, y) = self.coords(idx);
        Point::new(x as i32, y as i32)
    }

    /// Index of the cell at `p`. Returns `None` if out of range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.index_of(p.x as usize, p.y as usize)
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Return `idx` unchanged if it is a cell of this grid, or an
    /// [`GridError::InvalidArgument`] naming `name` otherwise.
    pub fn check_index(self, name: &'static str, idx: usize) -> Result<usize, GridError> {
        if self.contains(idx) {
            Ok(idx)
        } else {
            Err(GridError::invalid(
                name,
                format!(
                    "index {idx} outside {}x{} grid of {} cells",
                    self.width,
                    self.height,
                    self.len()
                ),
            ))
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDims {
    width: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDims> for GridDims {
    type Error = GridError;

    fn try_from(raw: RawDims) -> Result<Self, GridError> {
        GridDims::new(raw.width, raw.height)
    }
}

#[cfg(feature = "serde")]
impl From<GridDims> for RawDims {
    fn from(d: GridDims) -> Self {
        RawDims {
            width: d.width,
            height: d.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            GridDims::new(0, 4),
            Err(GridError::InvalidArgument { name: "width", .. })
        ));
        assert!(matches!(
            GridDims::new(4, 0),
            Err(GridError::InvalidArgument { name: "height", .. })
        ));
    }

    #[test]
    fn rejects_dimensions_beyond_point_space() {
        assert!(GridDims::new(i32::MAX as usize + 1, 1).is_err());
        assert!(GridDims::new(1, i32::MAX as usize + 1).is_err());
        assert!(GridDims::new(i32::MAX as usize, 1).is_ok());
    }

    #[test]
    fn index_mapping_is_a_bijection() {
        let d = GridDims::new(7, 4).unwrap();
        assert_eq!(d.len(), 28);
        for idx in 0..d.len() {
            let (x, y) = d.coords(idx);
            assert_eq!(d.index_of(x, y), Some(idx));
            assert_eq!(d.index(d.point(idx)), Some(idx));
        }
        for p in d.bounds().iter() {
            let idx = d.index(p).unwrap();
            assert_eq!(d.point(idx), p);
        }
    }

    #[test]
    fn coords_follow_row_major_layout() {
        let d = GridDims::new(5, 3).unwrap();
        assert_eq!(d.coords(0), (0, 0));
        assert_eq!(d.coords(4), (4, 0));
        assert_eq!(d.coords(5), (0, 1));
        assert_eq!(d.coords(14), (4, 2));
    }

    #[test]
    fn out_of_range_lookups() {
        let d = GridDims::new(3, 3).unwrap();
        assert_eq!(d.index_of(3, 0), None);
        assert_eq!(d.index_of(0, 3), None);
        assert_eq!(d.index(Point::new(-1, 0)), None);
        assert!(!d.contains(9));
        assert!(d.contains(8));
    }

    #[test]
    fn check_index_names_the_argument() {
        let d = GridDims::new(5, 5).unwrap();
        assert_eq!(d.check_index("start", 24), Ok(24));
        let err = d.check_index("end", 25).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument `end`: index 25 outside 5x5 grid of 25 cells"
        );
    }
}
