//! Building records from property maps through their setters.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::config::{BuilderConfig, UnknownPropertyPolicy};
use super::shape::{Constructor, RecordShape, SetFn};
use crate::context::Context;
use crate::contract::Mapping;
use crate::error::{BuildError, ConfigError, Error};
use crate::properties::map::PropertyMap;
use invertible_syntax_diagnostics::{Diagnostic, codes};

/// Creates a record and calls one setter per key present in the map.
///
/// Keys absent from the map leave their field as the constructor made it.
/// The construction path and setter table are resolved once in
/// [`new`](Self::new) and only read afterwards, so a builder can be shared
/// between concurrent parses.
///
/// There is no inverse: once a field was written through several keys, the
/// order of writes cannot be recovered from the record. Grammars that print
/// such records use [`RecordCreator`](super::RecordCreator) or an explicit
/// decomposition.
pub struct RecordBuilder<R> {
    record: &'static str,
    constructor: Constructor<R>,
    setters: BTreeMap<String, Arc<SetFn<R>>>,
    unknown_properties: UnknownPropertyPolicy,
}

impl<R: 'static> RecordBuilder<R> {
    /// Resolve the construction path selected by `config`.
    ///
    /// Fails if `shape` has no constructor for that path.
    pub fn new(shape: &RecordShape<R>, config: &BuilderConfig) -> Result<Self, ConfigError> {
        Self::with_setters(shape, config, |_| true)
    }

    /// Like [`new`](Self::new), keeping only the setters whose name passes
    /// `keep`.
    pub(crate) fn with_setters(
        shape: &RecordShape<R>,
        config: &BuilderConfig,
        keep: impl Fn(&str) -> bool,
    ) -> Result<Self, ConfigError> {
        let constructor = shape.resolve_constructor(config.with_context)?;
        let setters: BTreeMap<_, _> = shape
            .accessors()
            .filter(|(name, _)| keep(*name))
            .map(|(name, accessor)| (name.to_string(), Arc::clone(&accessor.set)))
            .collect();
        tracing::debug!(
            record = shape.name(),
            with_context = config.with_context,
            setters = setters.len(),
            "resolved record builder"
        );
        Ok(Self {
            record: shape.name(),
            constructor,
            setters,
            unknown_properties: config.unknown_properties,
        })
    }

    /// Construct a record and apply every property in map order.
    pub fn build(&self, ctx: &dyn Context, properties: &PropertyMap) -> Result<R, BuildError> {
        self.build_with_diagnostics(ctx, properties).map(|(record, _)| record)
    }

    /// Like [`build`](Self::build), also returning a warning for every key
    /// skipped under [`UnknownPropertyPolicy::Skip`].
    ///
    /// The warnings carry code `ISX2001` and the span of `ctx`.
    pub fn build_with_diagnostics(
        &self,
        ctx: &dyn Context,
        properties: &PropertyMap,
    ) -> Result<(R, Vec<Diagnostic>), BuildError> {
        let mut record = self
            .constructor
            .construct(ctx)
            .map_err(|message| BuildError::Constructor {
                record: self.record,
                message,
            })?;
        let mut diagnostics = Vec::new();

        for (key, value) in properties.iter() {
            let Some(set) = self.setters.get(key) else {
                match self.unknown_properties {
                    UnknownPropertyPolicy::Skip => {
                        tracing::debug!(
                            record = self.record,
                            property = key,
                            "skipping unknown property"
                        );
                        diagnostics.push(self.skipped(ctx, key));
                        continue;
                    }
                    UnknownPropertyPolicy::Reject => {
                        return Err(BuildError::UnknownProperty {
                            record: self.record,
                            property: key.to_string(),
                        });
                    }
                }
            };
            set(&mut record, value).map_err(|e| e.into_build_error(self.record, key))?;
        }

        Ok((record, diagnostics))
    }

    fn skipped(&self, ctx: &dyn Context, key: &str) -> Diagnostic {
        Diagnostic::warn(
            codes::UNKNOWN_PROPERTY,
            format!("skipped unknown property `{key}` of {}", self.record),
            Some(ctx.span()),
        )
        .with_context(BTreeMap::from([
            ("record".to_string(), self.record.to_string()),
            ("property".to_string(), key.to_string()),
        ]))
    }
}

impl<R: 'static> Mapping<PropertyMap, R> for RecordBuilder<R> {
    fn forward(&self, ctx: &dyn Context, left: PropertyMap) -> Result<R, Error> {
        self.build(ctx, &left).map_err(|e| {
            tracing::debug!(record = self.record, error = %e, "record build failed");
            e.into()
        })
    }

    fn backward(&self, _result: &R) -> Option<PropertyMap> {
        tracing::trace!(record = self.record, "record builder has no inverse");
        None
    }
}
