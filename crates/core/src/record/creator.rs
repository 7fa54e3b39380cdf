//! Records that can be both built from and decomposed into property maps.

use std::sync::Arc;

use super::builder::RecordBuilder;
use super::config::BuilderConfig;
use super::shape::{GetFn, RecordShape};
use crate::context::Context;
use crate::contract::Mapping;
use crate::error::{ConfigError, Error};
use crate::properties::map::PropertyMap;

/// A record builder for a fixed list of properties that can also take a
/// record apart again.
///
/// Forward, only the listed properties are set; any other key is handled by
/// the configured [`UnknownPropertyPolicy`](super::UnknownPropertyPolicy).
/// Backward reads every listed property through its getter and returns a map
/// holding the ones that are set, in list order.
pub struct RecordCreator<R> {
    builder: RecordBuilder<R>,
    getters: Vec<(String, Arc<GetFn<R>>)>,
}

impl<R: 'static> RecordCreator<R> {
    /// Bind `properties` to their accessors on `shape`.
    ///
    /// Fails if a listed property has no accessor pair or the requested
    /// constructor is missing.
    pub fn new(
        shape: &RecordShape<R>,
        properties: &[&str],
        config: &BuilderConfig,
    ) -> Result<Self, ConfigError> {
        let getters = properties
            .iter()
            .map(|&name| {
                shape
                    .accessor(name)
                    .map(|accessor| (name.to_string(), Arc::clone(&accessor.get)))
                    .ok_or_else(|| ConfigError::MissingAccessor {
                        record: shape.name(),
                        property: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let builder =
            RecordBuilder::with_setters(shape, config, |name| properties.contains(&name))?;
        Ok(Self { builder, getters })
    }

    /// The listed property names.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.getters.iter().map(|(name, _)| name.as_str())
    }
}

impl<R: 'static> Mapping<PropertyMap, R> for RecordCreator<R> {
    fn forward(&self, ctx: &dyn Context, left: PropertyMap) -> Result<R, Error> {
        self.builder.forward(ctx, left)
    }

    fn backward(&self, result: &R) -> Option<PropertyMap> {
        Some(
            self.getters
                .iter()
                .filter_map(|(name, get)| get(result).map(|value| (name.as_str(), value)))
                .collect(),
        )
    }
}
