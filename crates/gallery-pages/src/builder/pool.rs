//! Remaining-item pool
//!
//! A doubly-linked index list over the borrowed input slice. Removing a
//! placed item is O(1) and never disturbs the relative order of the rest.

use crate::types::Item;

const NIL: usize = usize::MAX;

/// Ordered set of not-yet-placed items, addressed by input index.
#[derive(Debug, Clone)]
pub struct Pool<'a> {
    items: &'a [Item],
    next: Vec<usize>,
    prev: Vec<usize>,
    live: Vec<bool>,
    head: usize,
    len: usize,
}

impl<'a> Pool<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        let n = items.len();
        let next = (0..n).map(|i| if i + 1 < n { i + 1 } else { NIL }).collect();
        let prev = (0..n).map(|i| if i > 0 { i - 1 } else { NIL }).collect();

        Self {
            items,
            next,
            prev,
            live: vec![true; n],
            head: if n > 0 { 0 } else { NIL },
            len: n,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Item at input index `index`, whether or not it is still pooled
    pub fn item(&self, index: usize) -> &'a Item {
        let items: &'a [Item] = self.items;
        &items[index]
    }

    pub fn contains(&self, index: usize) -> bool {
        self.live.get(index).copied().unwrap_or(false)
    }

    /// Pooled items in input order, paired with their input index.
    pub fn iter(&self) -> PoolIter<'a, '_> {
        PoolIter {
            pool: self,
            cursor: self.head,
        }
    }

    /// Unlink the item at input index `index`. Returns false if it was
    /// already removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }

        let (prev, next) = (self.prev[index], self.next[index]);
        if prev == NIL {
            self.head = next;
        } else {
            self.next[prev] = next;
        }
        if next != NIL {
            self.prev[next] = prev;
        }

        self.live[index] = false;
        self.len -= 1;
        true
    }

    /// Items still pooled, in input order
    pub fn remaining(&self) -> Vec<&'a Item> {
        self.iter().map(|(_, item)| item).collect()
    }
}

pub struct PoolIter<'a, 'p> {
    pool: &'p Pool<'a>,
    cursor: usize,
}

impl<'a> Iterator for PoolIter<'a, '_> {
    type Item = (usize, &'a Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let index = self.cursor;
        self.cursor = self.pool.next[index];
        Some((index, self.pool.item(index)))
    }
}
