use gridtrace_core::GridDims;

/// Flat bitmap of impassable cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallMap {
    blocked: Vec<bool>,
    count: usize,
}

impl WallMap {
    /// Build the map from a list of wall indices.
    ///
    /// Duplicates collapse. Indices outside the grid cannot block anything
    /// and are skipped.
    pub fn new(dims: GridDims, walls: &[usize]) -> Self {
        let mut map = Self {
            blocked: vec![false; dims.len()],
            count: 0,
        };
        let mut skipped = 0usize;
        for &w in walls {
            if dims.contains(w) {
                map.block(w);
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            log::debug!("ignored {skipped} wall(s) outside the {}x{} grid", dims.width(), dims.height());
        }
        map
    }

    /// Build the map for a search from `start` to `end`. Those two cells are
    /// never walls, whatever `walls` contains.
    pub fn for_search(dims: GridDims, walls: &[usize], start: usize, end: usize) -> Self {
        let mut map = Self::new(dims, walls);
        map.clear(start);
        map.clear(end);
        map
    }

    fn block(&mut self, idx: usize) {
        if !self.blocked[idx] {
            self.blocked[idx] = true;
            self.count += 1;
        }
    }

    fn clear(&mut self, idx: usize) {
        if let Some(b) = self.blocked.get_mut(idx) {
            if *b {
                *b = false;
                self.count -= 1;
            }
        }
    }

    /// Whether `idx` is a wall. Out-of-grid indices are not walls.
    #[inline]
    pub fn is_wall(&self, idx: usize) -> bool {
        self.blocked.get(idx).copied().unwrap_or(false)
    }

    /// Number of distinct in-grid walls.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}
