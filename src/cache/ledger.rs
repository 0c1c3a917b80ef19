//! Key Ledger Module
//!
//! Tracks key recency for LRU eviction with a bounded, access-ordered list.

use std::collections::HashMap;
use std::hash::Hash;

use generational_arena::{Arena, Index};

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<Index>,
    next: Option<Index>,
}

// == Key Ledger ==
/// Access-ordered set of keys bounded at `capacity`.
///
/// Keys live in a doubly-linked list stored in an arena:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// A hash map from key to arena index gives O(1) touch, insert and evict.
#[derive(Debug)]
pub(crate) struct KeyLedger<K: Eq + Hash + Clone> {
    nodes: Arena<Node<K>>,
    lookup: HashMap<K, Index>,
    head: Option<Index>,
    tail: Option<Index>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone> KeyLedger<K> {
    // == Constructor ==
    /// Creates an empty ledger holding at most `capacity` keys.
    ///
    /// Storage grows with the tracked keys; `capacity` only bounds it.
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Arena::new(),
            lookup: HashMap::new(),
            head: None,
            tail: None,
            capacity,
        }
    }

    // == Insert ==
    /// Marks `key` as most recently used, adding it if new.
    ///
    /// Returns the least recently used key when the insertion pushed the
    /// ledger over capacity. That key is already gone from the ledger.
    pub fn insert(&mut self, key: K) -> Option<K> {
        if let Some(&index) = self.lookup.get(&key) {
            self.move_to_front(index);
            return None;
        }

        let index = self.nodes.insert(Node {
            key: key.clone(),
            prev: None,
            next: None,
        });
        self.lookup.insert(key, index);
        self.push_front(index);

        if self.lookup.len() > self.capacity {
            self.pop_back()
        } else {
            None
        }
    }

    // == Touch ==
    /// Refreshes the recency of `key`. Unknown keys are left untracked.
    pub fn touch(&mut self, key: &K) -> bool {
        match self.lookup.get(key) {
            Some(&index) => {
                self.move_to_front(index);
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Stops tracking `key`. Returns whether it was tracked.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.lookup.remove(key) {
            Some(index) => {
                self.unlink(index);
                self.nodes.remove(index);
                true
            }
            None => false,
        }
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.lookup.clear();
        self.head = None;
        self.tail = None;
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&K> {
        self.tail.map(|index| &self.nodes[index].key)
    }

    /// Tracked keys from least to most recently used.
    pub fn keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.lookup.len());
        let mut current = self.tail;
        while let Some(index) = current {
            keys.push(self.nodes[index].key.clone());
            current = self.nodes[index].prev;
        }
        keys
    }

    #[allow(dead_code)]
    pub fn contains(&self, key: &K) -> bool {
        self.lookup.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn pop_back(&mut self) -> Option<K> {
        let index = self.tail?;
        self.unlink(index);
        let node = self.nodes.remove(index)?;
        self.lookup.remove(&node.key);
        Some(node.key)
    }

    fn move_to_front(&mut self, index: Index) {
        if self.head != Some(index) {
            self.unlink(index);
            self.push_front(index);
        }
    }

    // Detaches the node from its neighbours; arena and lookup are untouched.
    fn unlink(&mut self, index: Index) {
        let (prev, next) = {
            let node = &self.nodes[index];
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
    }

    fn push_front(&mut self, index: Index) {
        let old_head = self.head;
        {
            let node = &mut self.nodes[index];
            node.prev = None;
            node.next = old_head;
        }
        if let Some(old_head) = old_head {
            self.nodes[old_head].prev = Some(index);
        }
        self.head = Some(index);
        if self.tail.is_none() {
            self.tail = Some(index);
        }
    }
}
