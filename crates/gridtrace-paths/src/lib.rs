//! Traced shortest-path search on rectangular grids addressed by flat cell
//! index.
//!
//! The engine runs a best-first search over unit-cost edges: uniform-cost
//! (Dijkstra) expansion, or A*-style expansion biased by the Manhattan
//! distance to the end. Besides the path it records every cell in the order
//! it was discovered, so that a front-end can animate the search.
//!
//! - [`find_path`]: the flat entry point, returning the discovery trace and then the path from
//!   end back to start.
//! - [`SearchQuery::run`]: the same search returning a structured
//!   [`SearchTrace`].
//! - [`bfs_distances`] / [`reachable`]: plain BFS under the same adjacency
//!   and wall rules.
//!
//! # Determinism
//!
//! Neighbours are enumerated in a fixed order (see [`Neighbors`]) and ties in
//! the open set go to the most recently inserted node, so a given query always
//! yields the same trace.

mod bfs;
mod distance;
mod neighbors;
mod query;
mod search;
mod trace;
mod walls;

pub use bfs::{bfs_distances, reachable};
pub use distance::{manhattan, manhattan_idx};
pub use neighbors::{Adjacency, Neighbors};
pub use query::{Heuristic, SearchQuery};
pub use trace::{Phase, SearchTrace, TraceStep};
pub use walls::WallMap;

use gridtrace_core::{GridDims, GridError};

/// Search from `start` to `end` on a `width` x `height` grid.
///
/// Returns the cells in discovery order, followed, if `end` was reached, by
/// the path from `end` back to `start`. When `start == end` the result is
/// exactly `[start]`. An unreachable `end` is not an error: the result then
/// holds the discovery trace only (use [`SearchQuery::run`] to tell the two
/// cases apart).
///
/// ```
/// let trace = gridtrace_paths::find_path(0, 4, 5, 1, &[], false, false).unwrap();
/// assert_eq!(trace, [0, 1, 2, 3, 4, 4, 3, 2, 1, 0]);
/// ```
pub fn find_path(
    start: usize,
    end: usize,
    width: usize,
    height: usize,
    walls: &[usize],
    heuristic: bool,
    diagonals: bool,
) -> Result<Vec<usize>, GridError> {
    let dims = GridDims::new(width, height)?;
    SearchQuery::new(dims, start, end)
        .with_walls(walls.to_vec())
        .with_heuristic(Heuristic::from_flag(heuristic))
        .with_adjacency(Adjacency::from_flag(diagonals))
        .run()
        .map(SearchTrace::into_indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_api_matches_query_api() {
        let walls = [6, 7, 8, 11];
        let flat = find_path(0, 24, 5, 5, &walls, true, true).unwrap();
        let dims = GridDims::new(5, 5).unwrap();
        let trace = SearchQuery::new(dims, 0, 24)
            .with_walls(walls.to_vec())
            .with_heuristic(Heuristic::Manhattan)
            .with_adjacency(Adjacency::Diagonal)
            .run()
            .unwrap();
        assert_eq!(flat, trace.as_slice());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            find_path(0, 0, 0, 5, &[], false, false),
            Err(GridError::InvalidArgument { name: "width", .. })
        ));
        assert!(matches!(
            find_path(0, 0, 5, 0, &[], false, false),
            Err(GridError::InvalidArgument { name: "height", .. })
        ));
        assert!(matches!(
            find_path(25, 0, 5, 5, &[], false, false),
            Err(GridError::InvalidArgument { name: "start", .. })
        ));
        assert!(matches!(
            find_path(0, 25, 5, 5, &[], false, false),
            Err(GridError::InvalidArgument { name: "end", .. })
        ));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let walls = [2, 7, 12, 17, 13];
        let a = find_path(10, 14, 5, 5, &walls, false, true).unwrap();
        let b = find_path(10, 14, 5, 5, &walls, false, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cardinal_path_is_shortest() {
        // Serpentine corridor on a 5x5 grid.
        let walls = [1, 6, 11, 16, 8, 13, 18, 23];
        let dims = GridDims::new(5, 5).unwrap();
        let q = SearchQuery::new(dims, 0, 4).with_walls(walls.to_vec());
        let trace = q.run().unwrap();
        let blocked = WallMap::for_search(dims, &walls, 0, 4);
        let dist = bfs_distances(dims, &blocked, 0, Adjacency::Cardinal);
        assert_eq!(trace.cost(), dist[4]);
        assert_eq!(trace.cost(), Some(12));
        let path = trace.path().unwrap();
        assert!(path.iter().all(|c| !walls.contains(c)));
    }
}
