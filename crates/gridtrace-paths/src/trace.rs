//! The [`SearchTrace`] returned by a search.
//!
//! The flat form ([`SearchTrace::as_slice`]) is the discovery trace followed,
//! when the end cell was reached, by the path suffix in end-to-start order.
//! The structured accessors split it back into its phases so that callers do
//! not have to guess where discovery stops and the path begins.

/// Which stage of the search produced a [`TraceStep`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// The cell was enqueued for the first time.
    Discovered,
    /// The cell was popped from the open set.
    Expanded,
    /// The cell belongs to the reconstructed path.
    Path,
}

/// One event of a search, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStep {
    pub index: usize,
    pub phase: Phase,
}

impl TraceStep {
    #[inline]
    pub const fn new(index: usize, phase: Phase) -> Self {
        Self { index, phase }
    }
}

/// Result of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTrace {
    indices: Vec<usize>,
    steps: Vec<TraceStep>,
    discovered: usize,
    path_start: Option<usize>,
    expanded: usize,
}

impl SearchTrace {
    /// Trace of a search whose start already is its end.
    pub(crate) fn trivial(idx: usize) -> Self {
        Self {
            indices: vec![idx],
            steps: vec![
                TraceStep::new(idx, Phase::Discovered),
                TraceStep::new(idx, Phase::Path),
            ],
            discovered: 1,
            path_start: Some(0),
            expanded: 0,
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            indices: Vec::with_capacity(cap),
            steps: Vec::with_capacity(cap * 2),
            discovered: 0,
            path_start: None,
            expanded: 0,
        }
    }

    pub(crate) fn discover(&mut self, idx: usize) {
        debug_assert!(self.path_start.is_none());
        self.indices.push(idx);
        self.steps.push(TraceStep::new(idx, Phase::Discovered));
        self.discovered += 1;
    }

    pub(crate) fn expand(&mut self, idx: usize) {
        self.steps.push(TraceStep::new(idx, Phase::Expanded));
        self.expanded += 1;
    }

    /// Append the reconstructed path, given in end-to-start order.
    pub(crate) fn finish_path(&mut self, path: impl IntoIterator<Item = usize>) {
        self.path_start = Some(self.indices.len());
        for idx in path {
            self.indices.push(idx);
            self.steps.push(TraceStep::new(idx, Phase::Path));
        }
    }

    /// The flat sequence: discovery order, then the path from end to start.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Consume the trace, returning the flat sequence.
    #[inline]
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// Cells in the order they were first discovered, start first.
    #[inline]
    pub fn discovery(&self) -> &[usize] {
        &self.indices[..self.discovered]
    }

    /// The path suffix (end first, start last), or `None` if the end cell
    /// was unreachable.
    #[inline]
    pub fn path(&self) -> Option<&[usize]> {
        self.path_start.map(|at| &self.indices[at..])
    }

    /// The path from start to end, or `None` if the end cell was
    /// unreachable.
    pub fn walk(&self) -> Option<Vec<usize>> {
        self.path().map(|p| p.iter().rev().copied().collect())
    }

    /// Whether the end cell was reached.
    #[inline]
    pub fn reached(&self) -> bool {
        self.path_start.is_some()
    }

    /// Number of edges on the path.
    #[inline]
    pub fn cost(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }

    /// Offset of the path suffix within [`as_slice`](Self::as_slice).
    #[inline]
    pub fn path_start(&self) -> Option<usize> {
        self.path_start
    }

    /// Number of nodes popped from the open set.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Every event of the search, including expansions, which the flat
    /// sequence leaves out.
    #[inline]
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Length of the flat sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`: a trace holds at least the start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl From<SearchTrace> for Vec<usize> {
    fn from(t: SearchTrace) -> Self {
        t.into_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_trace() {
        let t = SearchTrace::trivial(7);
        assert_eq!(t.as_slice(), &[7]);
        assert_eq!(t.discovery(), &[7]);
        assert_eq!(t.path(), Some(&[7][..]));
        assert_eq!(t.walk(), Some(vec![7]));
        assert_eq!(t.cost(), Some(0));
        assert!(t.reached());
        assert_eq!(t.expanded(), 0);
    }

    #[test]
    fn phases_split_the_flat_sequence() {
        let mut t = SearchTrace::with_capacity(4);
        t.discover(0);
        t.expand(0);
        t.discover(1);
        t.expand(1);
        t.finish_path([1, 0]);
        assert_eq!(t.as_slice(), &[0, 1, 1, 0]);
        assert_eq!(t.discovery(), &[0, 1]);
        assert_eq!(t.path(), Some(&[1, 0][..]));
        assert_eq!(t.path_start(), Some(2));
        assert_eq!(t.walk(), Some(vec![0, 1]));
        assert_eq!(t.cost(), Some(1));
        assert_eq!(t.expanded(), 2);
        let phases: Vec<Phase> = t.steps().iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            [
                Phase::Discovered,
                Phase::Expanded,
                Phase::Discovered,
                Phase::Expanded,
                Phase::Path,
                Phase::Path
            ]
        );
    }

    #[test]
    fn unreachable_trace_has_no_path() {
        let mut t = SearchTrace::with_capacity(1);
        t.discover(3);
        t.expand(3);
        assert!(!t.reached());
        assert_eq!(t.path(), None);
        assert_eq!(t.walk(), None);
        assert_eq!(t.cost(), None);
        assert_eq!(Vec::from(t), vec![3]);
    }
}
