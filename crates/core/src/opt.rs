//! Optional values.

use std::fmt;

use crate::context::Context;
use crate::contract::{Initializer, Mapping};
use crate::error::Error;

/// Supplies `None`, the value of an optional part that was not present.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneInitializer;

impl<T> Initializer<Option<T>> for NoneInitializer {
    fn supply(&self, _ctx: &dyn Context) -> Option<T> {
        None
    }

    fn recognizes_as_empty(&self, value: &Option<T>) -> bool {
        value.is_none()
    }
}

impl fmt::Display for NoneInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{none}")
    }
}

/// Wraps a present value in `Some`; the inverse refuses `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SomeMapping;

impl<T: Clone> Mapping<T, Option<T>> for SomeMapping {
    fn forward(&self, _ctx: &dyn Context, left: T) -> Result<Option<T>, Error> {
        Ok(Some(left))
    }

    fn backward(&self, result: &Option<T>) -> Option<T> {
        result.clone()
    }
}
