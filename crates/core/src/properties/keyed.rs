//! Maps keyed by arbitrary values, and the components building them.
//!
//! Unlike [`PropertyMap`](super::map::PropertyMap), an overwritten key keeps
//! its original position and the put fold only inverts maps that hold its
//! key.

use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::contract::{Fold, Initializer, Mapping};
use crate::error::Error;

/// Persistent map in insertion order, keyed by any comparable `K`.
///
/// Lookups scan the entries. Updates copy them into fresh storage, so older
/// maps are never affected.
pub struct KeyedMap<K, V> {
    entries: Arc<Vec<(K, V)>>,
}

impl<K, V> KeyedMap<K, V> {
    /// The empty map.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Vec::new()),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: PartialEq, V> KeyedMap<K, V> {
    /// Whether `key` is bound.
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Value bound to `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<K: PartialEq + Clone, V: Clone> KeyedMap<K, V> {
    /// A map with `key` bound to `value`.
    ///
    /// Replacing an existing binding keeps the key where it was.
    pub fn insert(&self, key: K, value: V) -> Self {
        let mut entries = Vec::clone(&self.entries);
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
        Self {
            entries: Arc::new(entries),
        }
    }

    /// The map without `key`, or `None` if `key` is not bound.
    pub fn remove(&self, key: &K) -> Option<Self> {
        let i = self.position(key)?;
        let mut entries = Vec::clone(&self.entries);
        entries.remove(i);
        Some(Self {
            entries: Arc::new(entries),
        })
    }
}

impl<K, V> Clone for KeyedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for KeyedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for KeyedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for KeyedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq + Clone, V: Clone> FromIterator<(K, V)> for KeyedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries: Vec<(K, V)> = Vec::new();
        for (key, value) in iter {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Self {
            entries: Arc::new(entries),
        }
    }
}

/// Binds each parsed value under a fixed key of a [`KeyedMap`].
///
/// Both inverses refuse a map that does not hold the key.
#[derive(Debug, Clone)]
pub struct KeyedPutFold<K> {
    key: K,
}

impl<K> KeyedPutFold<K> {
    /// Create a fold writing to `key`.
    pub fn new(key: K) -> Self {
        Self { key }
    }

    /// The key this fold writes.
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: PartialEq + Clone + fmt::Debug, V: Clone> Fold<KeyedMap<K, V>, V> for KeyedPutFold<K> {
    fn forward(&self, _ctx: &dyn Context, left: KeyedMap<K, V>, elem: V) -> KeyedMap<K, V> {
        left.insert(self.key.clone(), elem)
    }

    fn left_inverse(&self, result: &KeyedMap<K, V>) -> Option<KeyedMap<K, V>> {
        let rest = result.remove(&self.key);
        if rest.is_none() {
            tracing::trace!(key = ?self.key, "key absent, put not invertible");
        }
        rest
    }

    fn right_inverse(&self, result: &KeyedMap<K, V>) -> Option<V> {
        let value = result.get(&self.key).cloned();
        if value.is_none() {
            tracing::trace!(key = ?self.key, "key absent, put not invertible");
        }
        value
    }
}

impl<K: fmt::Display> fmt::Display for KeyedPutFold<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{put {}}}", self.key)
    }
}

/// Supplies an empty [`KeyedMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyKeyedMap;

impl<K, V> Initializer<KeyedMap<K, V>> for EmptyKeyedMap {
    fn supply(&self, _ctx: &dyn Context) -> KeyedMap<K, V> {
        KeyedMap::new()
    }

    fn recognizes_as_empty(&self, value: &KeyedMap<K, V>) -> bool {
        value.is_empty()
    }
}

impl fmt::Display for EmptyKeyedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{emptymap}")
    }
}

/// Starts a [`KeyedMap`] from one parsed value bound under a fixed key.
#[derive(Debug, Clone)]
pub struct SingletonKeyedMap<K> {
    key: K,
}

impl<K> SingletonKeyedMap<K> {
    /// Create the mapping for `key`.
    pub fn new(key: K) -> Self {
        Self { key }
    }
}

impl<K: PartialEq + Clone + fmt::Debug, V: Clone> Mapping<V, KeyedMap<K, V>>
    for SingletonKeyedMap<K>
{
    fn forward(&self, _ctx: &dyn Context, left: V) -> Result<KeyedMap<K, V>, Error> {
        Ok(KeyedMap::new().insert(self.key.clone(), left))
    }

    fn backward(&self, result: &KeyedMap<K, V>) -> Option<V> {
        if result.len() != 1 {
            tracing::trace!(key = ?self.key, len = result.len(), "not a singleton map");
            return None;
        }
        result.get(&self.key).cloned()
    }
}

impl<K: fmt::Display> fmt::Display for SingletonKeyedMap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{singlemap {}}}", self.key)
    }
}
