//! Binding parsed values under a fixed property name.

use std::fmt;

use super::map::PropertyMap;
use crate::context::Context;
use crate::contract::Fold;

/// Binds each parsed value under the key given at construction.
///
/// A later write to the same key replaces the earlier one. Grammars that
/// alternate between writers of one key rely on this to keep the most recent
/// match, and the replaced value cannot be printed again.
#[derive(Debug, Clone)]
pub struct PropertyPutFold {
    key: String,
}

impl PropertyPutFold {
    /// Create a fold writing to `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The key this fold writes.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<V: Clone> Fold<PropertyMap<V>, V> for PropertyPutFold {
    fn forward(&self, _ctx: &dyn Context, left: PropertyMap<V>, elem: V) -> PropertyMap<V> {
        left.concat(self.key.as_str(), elem)
    }

    /// Always succeeds; a map without the key is returned unchanged.
    fn left_inverse(&self, result: &PropertyMap<V>) -> Option<PropertyMap<V>> {
        Some(result.diff(&self.key))
    }

    /// Refuses when the key is absent: this put did not produce the map.
    fn right_inverse(&self, result: &PropertyMap<V>) -> Option<V> {
        let value = result.get(&self.key).cloned();
        if value.is_none() {
            tracing::trace!(key = %self.key, "property absent, put not invertible");
        }
        value
    }
}

impl fmt::Display for PropertyPutFold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{put {}}}", self.key)
    }
}
