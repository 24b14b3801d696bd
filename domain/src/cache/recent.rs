//! Bounded, insertion-ordered set of recently displayed quote identifiers

use std::collections::{HashSet, VecDeque};

/// Default number of identifiers remembered
pub const DEFAULT_CACHE_CAPACITY: usize = 20;

/// Recently displayed quote identifiers (FIFO eviction)
///
/// Membership is a best-effort hint used to bias against showing the same
/// quote twice in a row; it never guarantees uniqueness. Eviction follows
/// insertion order, not access recency: a lookup does not refresh an entry.
#[derive(Debug, Clone)]
pub struct RecentQuoteCache {
    capacity: usize,
    order: VecDeque<String>,
    members: HashSet<String>,
}

impl RecentQuoteCache {
    /// Create a cache holding at most `capacity` identifiers (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Insert an identifier, returning the evicted one if the cache was full
    ///
    /// Re-inserting a member is a no-op: it keeps its original position.
    pub fn insert(&mut self, id: impl Into<String>) -> Option<String> {
        let id = id.into();
        if self.members.contains(&id) {
            return None;
        }

        let evicted = if self.order.len() >= self.capacity {
            self.order.pop_front().inspect(|oldest| {
                self.members.remove(oldest);
            })
        } else {
            None
        };

        self.members.insert(id.clone());
        self.order.push_back(id);
        evicted
    }

    /// Identifiers from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

impl Default for RecentQuoteCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
