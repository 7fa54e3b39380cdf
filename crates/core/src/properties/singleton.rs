//! A property map holding exactly one entry.

use super::map::PropertyMap;
use crate::context::Context;
use crate::contract::Mapping;
use crate::error::Error;

/// Starts a property map from a single parsed value bound under a fixed key.
///
/// Backward only accepts maps whose single entry is that key.
#[derive(Debug, Clone)]
pub struct SingletonProperties {
    key: String,
}

impl SingletonProperties {
    /// Create the mapping for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl<V: Clone> Mapping<V, PropertyMap<V>> for SingletonProperties {
    fn forward(&self, _ctx: &dyn Context, left: V) -> Result<PropertyMap<V>, Error> {
        Ok(PropertyMap::new().concat(self.key.as_str(), left))
    }

    fn backward(&self, result: &PropertyMap<V>) -> Option<V> {
        if result.len() != 1 {
            tracing::trace!(key = %self.key, len = result.len(), "not a singleton map");
            return None;
        }
        result.get(&self.key).cloned()
    }
}
