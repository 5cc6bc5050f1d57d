//! The [`Screen`] buffer and [`Frame`] diffs.
//!
//! Models draw into a `Screen`; the application keeps the previously flushed
//! screen around and only sends the cells that changed ([`compute_frame`]) to
//! the back-end.

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// A 2D buffer of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Screen {
    /// Create a new screen of the given dimensions, filled with default cells.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
        }
    }

    /// The bounding range of this screen.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the screen as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    fn offset(&self, p: Point) -> Option<usize> {
        if self.bounds.contains(p) {
            Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Read the cell at `p`. Returns `Cell::default()` if `p` is outside
    /// bounds.
    pub fn at(&self, p: Point) -> Cell {
        self.offset(p).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Set the cell at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.offset(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `text` starting at `p`, one cell per char, styled like `style`.
    /// Characters falling outside the screen are dropped. Returns the number
    /// of cells written.
    pub fn text(&mut self, p: Point, text: &str, style: Cell) -> usize {
        let mut written = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(i as i32, 0);
            if !self.bounds.contains(q) {
                break;
            }
            self.set(q, style.with_char(ch));
            written += 1;
        }
        written
    }

    /// Resize, discarding the contents.
    pub fn resize(&mut self, width: i32, height: i32) {
        *self = Self::new(width, height);
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Point,
}

/// A set of cell changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two screens.
///
/// Cells of `curr` outside `prev` always count as changed, so a resized
/// screen is redrawn in full.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let bounds = curr.bounds();
    let same_size = prev.bounds() == bounds;
    let cells = bounds
        .iter()
        .filter_map(|p| {
            let cc = curr.at(p);
            if same_size && prev.at(p) == cc {
                None
            } else {
                Some(FrameCell { cell: cc, pos: p })
            }
        })
        .collect();
    Frame {
        cells,
        width: bounds.width(),
        height: bounds.height(),
    }
}
