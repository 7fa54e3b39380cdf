//! Persistent ordered property map.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Ordered map from property names to values with value semantics.
///
/// [`concat`](Self::concat) and [`diff`](Self::diff) return new maps; the
/// receiver and every other holder of it are unaffected. Entries are kept in
/// order of their most recent write. Clones share storage until one of them
/// is updated.
pub struct PropertyMap<V = Value> {
    entries: Arc<Vec<(String, V)>>,
}

impl<V> PropertyMap<V> {
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

    /// Whether `key` is bound.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Value bound to `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Keys in order of their most recent write.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in order of their most recent write.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<V: Clone> PropertyMap<V> {
    /// A map equal to `self` except that `key` is bound to `value`.
    ///
    /// A previous binding of `key` is replaced: last write wins, and the key
    /// moves to the end of the order.
    pub fn concat(&self, key: impl Into<String>, value: V) -> Self {
        let key = key.into();
        let mut entries: Vec<(String, V)> = self
            .entries
            .iter()
            .filter(|(k, _)| *k != key)
            .cloned()
            .collect();
        entries.push((key, value));
        Self {
            entries: Arc::new(entries),
        }
    }

    /// A map equal to `self` without `key`. Shares storage if `key` is absent.
    pub fn diff(&self, key: &str) -> Self {
        match self.position(key) {
            None => self.clone(),
            Some(i) => {
                let mut entries = Vec::clone(&self.entries);
                entries.remove(i);
                Self {
                    entries: Arc::new(entries),
                }
            }
        }
    }
}

impl PropertyMap<Value> {
    /// Value bound to `key`, if it is a `T`.
    pub fn get_as<T: std::any::Any>(&self, key: &str) -> Option<&T> {
        self.get(key).and_then(Value::downcast_ref::<T>)
    }
}

impl<V> Clone for PropertyMap<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<V> Default for PropertyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equal when both hold the same keys in the same order with equal values.
impl<V: PartialEq> PartialEq for PropertyMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: fmt::Debug> fmt::Debug for PropertyMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Clone> FromIterator<(K, V)> for PropertyMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |map, (k, v)| map.concat(k, v))
    }
}
