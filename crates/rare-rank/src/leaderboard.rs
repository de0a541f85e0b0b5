//! Fixed-capacity top-K selection over a stream of scored items.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use crate::RankError;

/// Upper bound on the up-front allocation; larger boards grow on demand.
const PREALLOC_LIMIT: usize = 1024;

/// One scored item offered to a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry<T> {
    pub score: u8,
    pub item: T,
}

impl<T> ScoreEntry<T> {
    pub fn new(score: u8, item: T) -> Self {
        Self { score, item }
    }
}

/// Eviction order: `Less` means `a` goes before `b`.
///
/// Lowest score is evicted first; among equal scores the greatest item is
/// evicted first.
fn eviction_order<T: Ord>(a: &ScoreEntry<T>, b: &ScoreEntry<T>) -> Ordering {
    a.score.cmp(&b.score).then_with(|| b.item.cmp(&a.item))
}

/// Keeps the `capacity` highest-scoring entries seen so far.
///
/// Backed by an array min-heap whose root is the weakest retained entry.
/// Once full, an offer below the floor is rejected by a single comparison,
/// and an offer at or above it replaces the root in place and sifts down.
///
/// Ties: an offer whose score equals `current_minimum()` always enters and
/// evicts the root, the greatest item among the minimum scores. The newcomer
/// keeps its seat whatever its item, so which items survive a tie depends on
/// offer order. Only the retained score multiset is order independent.
#[derive(Debug, Clone)]
pub struct BoundedLeaderboard<T> {
    heap: Vec<ScoreEntry<T>>,
    capacity: usize,
}

impl<T: Ord> BoundedLeaderboard<T> {
    /// Create an empty leaderboard. A capacity of zero is rejected.
    pub fn new(capacity: usize) -> Result<Self, RankError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(RankError::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    /// Create an empty leaderboard from an already validated capacity.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            heap: Vec::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Lowest retained score, or 0 when empty.
    pub fn current_minimum(&self) -> u8 {
        self.heap.first().map(|e| e.score).unwrap_or(0)
    }

    /// The entry that the next accepted offer would evict.
    pub fn weakest(&self) -> Option<&ScoreEntry<T>> {
        self.heap.first()
    }

    /// Offer an entry. Returns whether it was retained.
    pub fn offer(&mut self, entry: ScoreEntry<T>) -> bool {
        if !self.is_full() {
            self.push(entry);
            return true;
        }
        if entry.score < self.current_minimum() {
            return false;
        }
        self.heap[0] = entry;
        self.sift_down_root();
        true
    }

    /// Merge another leaderboard into this one by offering each of its entries.
    pub fn absorb(&mut self, other: BoundedLeaderboard<T>) {
        for entry in other.heap {
            self.offer(entry);
        }
    }

    /// Retained entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry<T>> {
        self.heap.iter()
    }

    /// Consume the leaderboard, returning entries by descending score.
    ///
    /// Equal scores come out by ascending item.
    pub fn into_sorted(mut self) -> Vec<ScoreEntry<T>> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Some(entry) = self.pop() {
            out.push(entry);
        }
        out.reverse();
        out
    }

    fn push(&mut self, entry: ScoreEntry<T>) {
        self.heap.push(entry);

        // Bubble up
        let mut ix = self.heap.len() - 1;
        while ix > 0 {
            let parent = (ix - 1) / 2;
            if eviction_order(&self.heap[parent], &self.heap[ix]) != Ordering::Greater {
                break;
            }
            self.heap.swap(parent, ix);
            ix = parent;
        }
    }

    /// Remove and return the weakest entry.
    fn pop(&mut self) -> Option<ScoreEntry<T>> {
        let len = self.heap.len();
        if len <= 1 {
            return self.heap.pop();
        }
        self.heap.swap(0, len - 1);
        let weakest = self.heap.pop();
        self.sift_down_root();
        weakest
    }

    fn sift_down_root(&mut self) {
        let mut ix = 0;
        loop {
            let left = ix * 2 + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let child = if right < self.heap.len()
                && eviction_order(&self.heap[left], &self.heap[right]) == Ordering::Greater
            {
                right
            } else {
                left
            };

            if eviction_order(&self.heap[ix], &self.heap[child]) != Ordering::Greater {
                break;
            }

            self.heap.swap(child, ix);
            ix = child;
        }
    }
}
