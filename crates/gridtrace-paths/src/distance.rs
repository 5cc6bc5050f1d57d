use gridtrace_core::{GridDims, Point};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Manhattan distance between two cell indices of the same grid.
#[inline]
pub fn manhattan_idx(dims: GridDims, a: usize, b: usize) -> usize {
    let (x1, y1) = dims.coords(a);
    let (x2, y2) = dims.coords(b);
    x1.abs_diff(x2) + y1.abs_diff(y2)
}
