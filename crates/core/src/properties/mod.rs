/// Maps with keys of any type, with a strict put fold.
pub mod keyed;
/// The persistent property map.
pub mod map;
/// The fold writing one property.
pub mod put;
/// The mapping creating a one-entry map.
pub mod singleton;

use std::fmt;

use crate::context::Context;
use crate::contract::Initializer;
use map::PropertyMap;

/// Supplies a fresh empty property map at the start of a record rule.
///
/// When printing, a map is representable as "nothing parsed here" exactly
/// when it has no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyMapInitializer;

impl<V> Initializer<PropertyMap<V>> for PropertyMapInitializer {
    fn supply(&self, _ctx: &dyn Context) -> PropertyMap<V> {
        PropertyMap::new()
    }

    fn recognizes_as_empty(&self, value: &PropertyMap<V>) -> bool {
        value.is_empty()
    }
}

impl fmt::Display for PropertyMapInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{empty properties}")
    }
}
