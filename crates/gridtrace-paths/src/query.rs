use gridtrace_core::{GridDims, GridError};

use crate::distance::manhattan_idx;
use crate::neighbors::Adjacency;
use crate::search;
use crate::trace::SearchTrace;

/// How the open set is prioritized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// Uniform-cost expansion (Dijkstra).
    #[default]
    None,
    /// Accumulated cost plus Manhattan distance to the end (A*-style).
    ///
    /// Not admissible with [`Adjacency::Diagonal`], where a diagonal step
    /// costs 1 but closes a Manhattan distance of 2.
    Manhattan,
}

impl Heuristic {
    /// `Manhattan` when `enabled`, `None` otherwise.
    #[inline]
    pub const fn from_flag(enabled: bool) -> Self {
        if enabled { Self::Manhattan } else { Self::None }
    }

    /// Estimated remaining cost from `idx` to `end`.
    #[inline]
    pub fn estimate(self, dims: GridDims, idx: usize, end: usize) -> usize {
        match self {
            Self::None => 0,
            Self::Manhattan => manhattan_idx(dims, idx, end),
        }
    }
}

impl From<bool> for Heuristic {
    fn from(enabled: bool) -> Self {
        Self::from_flag(enabled)
    }
}

/// A complete search request.
///
/// ```
/// use gridtrace_core::GridDims;
/// use gridtrace_paths::{Adjacency, Heuristic, SearchQuery};
///
/// let dims = GridDims::new(3, 3).unwrap();
/// let trace = SearchQuery::new(dims, 0, 8)
///     .with_walls(vec![1, 3])
///     .with_adjacency(Adjacency::Diagonal)
///     .with_heuristic(Heuristic::Manhattan)
///     .run()
///     .unwrap();
/// assert_eq!(trace.walk(), Some(vec![0, 4, 8]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchQuery {
    pub dims: GridDims,
    pub start: usize,
    pub end: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub heuristic: Heuristic,
    #[cfg_attr(feature = "serde", serde(default))]
    pub adjacency: Adjacency,
}

impl SearchQuery {
    /// A query from `start` to `end` with no walls, no heuristic and
    /// cardinal adjacency.
    pub fn new(dims: GridDims, start: usize, end: usize) -> Self {
        Self {
            dims,
            start,
            end,
            walls: Vec::new(),
            heuristic: Heuristic::None,
            adjacency: Adjacency::Cardinal,
        }
    }

    /// Set the wall indices (builder).
    pub fn with_walls(mut self, walls: Vec<usize>) -> Self {
        self.walls = walls;
        self
    }

    /// Set the heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the adjacency mode (builder).
    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Check that `start` and `end` are cells of the grid.
    pub fn validate(&self) -> Result<(), GridError> {
        self.dims.check_index("start", self.start)?;
        self.dims.check_index("end", self.end)?;
        Ok(())
    }

    /// Run the search.
    pub fn run(&self) -> Result<SearchTrace, GridError> {
        self.validate()?;
        Ok(search::run(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let dims = GridDims::new(4, 4).unwrap();
        let q = SearchQuery::new(dims, 0, 15)
            .with_walls(vec![5, 6])
            .with_heuristic(Heuristic::from(true))
            .with_adjacency(Adjacency::from(true));
        assert_eq!(q.walls, vec![5, 6]);
        assert_eq!(q.heuristic, Heuristic::Manhattan);
        assert_eq!(q.adjacency, Adjacency::Diagonal);
    }

    #[test]
    fn validate_rejects_out_of_range_endpoints() {
        let dims = GridDims::new(4, 4).unwrap();
        assert!(SearchQuery::new(dims, 0, 15).validate().is_ok());
        assert!(matches!(
            SearchQuery::new(dims, 16, 0).validate(),
            Err(GridError::InvalidArgument { name: "start", .. })
        ));
        assert!(matches!(
            SearchQuery::new(dims, 0, 16).run(),
            Err(GridError::InvalidArgument { name: "end", .. })
        ));
    }

    #[test]
    fn estimate() {
        let dims = GridDims::new(5, 5).unwrap();
        assert_eq!(Heuristic::None.estimate(dims, 0, 24), 0);
        assert_eq!(Heuristic::Manhattan.estimate(dims, 0, 24), 8);
        assert_eq!(Heuristic::Manhattan.estimate(dims, 24, 24), 0);
    }
}
