//! Traced best-first search over unit-cost grid edges.
//!
//! Nodes are closed on discovery: a cell enters the open set at most once and
//! its predecessor is fixed the first time it is seen. Priority ties are
//! broken in favour of the most recently inserted node.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::neighbors::Neighbors;
use crate::query::SearchQuery;
use crate::trace::SearchTrace;
use crate::walls::WallMap;

/// Per-cell search state. `priority` is `cost` plus the heuristic estimate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) idx: usize,
    pub(crate) cost: usize,
    pub(crate) priority: usize,
}

/// Open-set entry, ordered for `BinaryHeap` (a max-heap) so that the lowest
/// priority pops first and, among equal priorities, the highest `seq`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct OpenEntry {
    node: Node,
    seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .priority
            .cmp(&self.node.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run `query`, whose endpoints have already been validated.
pub(crate) fn run(query: &SearchQuery) -> SearchTrace {
    let dims = query.dims;
    let (start, end) = (query.start, query.end);

    if start == end {
        log::debug!("search {start} -> {end}: trivial");
        return SearchTrace::trivial(start);
    }

    let walls = WallMap::for_search(dims, &query.walls, start, end);
    let mut visited = vec![false; dims.len()];
    let mut prev: Vec<Option<usize>> = vec![None; dims.len()];
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut trace = SearchTrace::with_capacity(dims.len() - walls.count());
    let mut nbuf = Neighbors::new();
    let mut seq: u64 = 0;

    visited[start] = true;
    trace.discover(start);
    open.push(OpenEntry {
        node: Node {
            idx: start,
            cost: 0,
            priority: query.heuristic.estimate(dims, start, end),
        },
        seq,
    });

    while let Some(OpenEntry { node: current, .. }) = open.pop() {
        trace.expand(current.idx);
        log::trace!(
            "search {start} -> {end}: expand {} (cost {}, priority {})",
            current.idx,
            current.cost,
            current.priority
        );

        if current.idx == end {
            trace.finish_path(std::iter::successors(Some(end), |&i| prev[i]));
            log::debug!(
                "search {start} -> {end}: cost {}, expanded {}, trace length {}",
                current.cost,
                trace.expanded(),
                trace.len()
            );
            return trace;
        }

        for &n in nbuf.of(dims, current.idx, query.adjacency) {
            if walls.is_wall(n) || visited[n] {
                continue;
            }
            visited[n] = true;
            prev[n] = Some(current.idx);
            let cost = current.cost + 1;
            seq += 1;
            open.push(OpenEntry {
                node: Node {
                    idx: n,
                    cost,
                    priority: cost + query.heuristic.estimate(dims, n, end),
                },
                seq,
            });
            trace.discover(n);
        }
    }

    log::debug!(
        "search {start} -> {end}: unreachable after {} expansions",
        trace.expanded()
    );
    trace
}
