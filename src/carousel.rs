use crate::{TipError, TipResult};

/// Opaque handle to one slot in a [`Carousel`]. Ids are only meaningful for
/// the carousel that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of this node in construction order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A fixed-size circular doubly linked list over an arena.
///
/// Links are indices into two parallel arrays rather than owned pointers, so
/// the cycle involves no shared ownership. The list is built once and is
/// read-only afterwards: no insertion or removal is exposed, and `len` never
/// changes.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    next: Vec<usize>,
    prev: Vec<usize>,
}

impl<T> Carousel<T> {
    /// Build a carousel from at least two items: the links are wired
    /// linearly and the tail points back to the head to close the cycle.
    ///
    /// # Errors
    /// Returns [`TipError::TooFewTips`] for fewer than two items; a
    /// single-item or empty cycle is rejected rather than left undefined.
    pub fn new(items: Vec<T>) -> TipResult<Self> {
        let len = items.len();
        if len < 2 {
            return Err(TipError::TooFewTips(len));
        }
        let next = (0..len).map(|i| (i + 1) % len).collect();
        let prev = (0..len).map(|i| (i + len - 1) % len).collect();
        Ok(Self { items, next, prev })
    }

    /// Fixed node count, O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A carousel always holds at least two items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn head(&self) -> NodeId {
        NodeId(0)
    }

    /// Node reached by following `next` links `index` times from the head.
    /// The index is taken modulo `len`, so every index is in range.
    #[must_use]
    pub fn node_at(&self, index: usize) -> NodeId {
        NodeId(index % self.items.len())
    }

    /// O(1) link follow; total, since the list has no terminal node.
    #[must_use]
    pub fn next(&self, node: NodeId) -> NodeId {
        NodeId(self.next[node.0])
    }

    /// O(1) link follow; total, since the list has no terminal node.
    #[must_use]
    pub fn previous(&self, node: NodeId) -> NodeId {
        NodeId(self.prev[node.0])
    }

    #[must_use]
    pub fn get(&self, node: NodeId) -> &T {
        &self.items[node.0]
    }

    /// One full cycle starting at `start`: exactly `len` ids, visiting every
    /// node once. Each call gets fresh iteration state.
    pub fn iter_from(&self, start: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut node = start;
        (0..self.len()).map(move |_| {
            let current = node;
            node = self.next(current);
            current
        })
    }

    /// One full cycle starting at the head.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter_from(self.head())
    }
}
