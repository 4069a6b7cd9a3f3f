//! Computed cache for memoizing BDD operations.
//!
//! Entries are keyed by the exact operand handles. Since nodes are immutable
//! and handles never change meaning, an entry stays valid for the whole life
//! of the manager; the cache only grows unless the caller explicitly clears it.

use std::collections::HashMap;
use std::hash::Hash;

use crate::reference::Ref;

/// Key of a memoized operation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpKey {
    /// `ite(i, t, e)`, positional: `(i, t, e)` and `(t, i, e)` are distinct.
    Ite(Ref, Ref, Ref),
    /// Negation of a node.
    Not(Ref),
    /// Restriction of a node by `variable := value`.
    Restrict(Ref, Ref, bool),
}

/// Hit/miss counters of a cache.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A cache backed by [HashMap]: no collisions, grows on demand.
#[derive(Debug, Clone)]
pub struct HashMapCache<K, V> {
    map: HashMap<K, V>,
    hits: usize,
    misses: usize,
}

impl<K, V> Default for HashMapCache<K, V> {
    fn default() -> Self {
        Self::with_capacity(1 << 14)
    }
}

impl<K, V> HashMapCache<K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.map.len(),
        }
    }

    /// Drop all entries. Counters are kept.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K, V> HashMapCache<K, V>
where
    K: Hash + Eq,
    V: Copy,
{
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.map.get(key) {
            Some(&v) => {
                self.hits += 1;
                Some(v)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    #[inline]
    pub fn insert(&mut self, key: K, value: V) {
        self.map.insert(key, value);
    }
}

pub type Cache = HashMapCache<OpKey, Ref>;
