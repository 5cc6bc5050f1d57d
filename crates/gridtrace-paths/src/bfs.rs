use std::collections::VecDeque;

use gridtrace_core::{GridDims, GridError};

use crate::neighbors::{Adjacency, Neighbors};
use crate::query::SearchQuery;
use crate::walls::WallMap;

/// Compute breadth-first step distances from `start`.
///
/// Each step has cost 1, matching the search engine's unit edges. Cells that
/// are walls or cannot be reached map to `None`. `start` is expected to be a
/// cell of the grid.
pub fn bfs_distances(
    dims: GridDims,
    walls: &WallMap,
    start: usize,
    adjacency: Adjacency,
) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; dims.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nbuf = Neighbors::new();

    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(ci) = queue.pop_front() {
        let Some(current) = dist[ci] else {
            continue;
        };
        for &ni in nbuf.of(dims, ci, adjacency) {
            if walls.is_wall(ni) || dist[ni].is_some() {
                continue;
            }
            dist[ni] = Some(current + 1);
            queue.push_back(ni);
        }
    }

    dist
}

/// Whether the query's end cell can be reached, without building a trace.
pub fn reachable(query: &SearchQuery) -> Result<bool, GridError> {
    query.validate()?;
    let walls = WallMap::for_search(query.dims, &query.walls, query.start, query.end);
    Ok(bfs_distances(query.dims, &walls, query.start, query.adjacency)[query.end].is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_distances() {
        let d = GridDims::new(4, 3).unwrap();
        let walls = WallMap::new(d, &[]);
        let cardinal = bfs_distances(d, &walls, 0, Adjacency::Cardinal);
        assert_eq!(cardinal[11], Some(5));
        let diagonal = bfs_distances(d, &walls, 0, Adjacency::Diagonal);
        assert_eq!(diagonal[11], Some(3));
        assert_eq!(diagonal[0], Some(0));
    }

    #[test]
    fn walls_block_and_lengthen() {
        // 3x3 with the middle column walled except the bottom cell.
        let d = GridDims::new(3, 3).unwrap();
        let walls = WallMap::new(d, &[1, 4]);
        let dist = bfs_distances(d, &walls, 0, Adjacency::Cardinal);
        assert_eq!(dist[1], None);
        assert_eq!(dist[4], None);
        assert_eq!(dist[2], Some(6));
    }

    #[test]
    fn reachable_queries() {
        let d = GridDims::new(3, 3).unwrap();
        let q = SearchQuery::new(d, 0, 8).with_walls(vec![1, 3]);
        assert_eq!(reachable(&q), Ok(false));
        assert_eq!(reachable(&q.with_adjacency(Adjacency::Diagonal)), Ok(true));
        assert!(reachable(&SearchQuery::new(d, 9, 0)).is_err());
    }
}
