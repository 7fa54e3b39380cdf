//! Opaque, type-erased property values.

use std::any::{Any, type_name};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::Context;
use crate::contract::Mapping;
use crate::error::Error;

/// A cheaply clonable value of any `Send + Sync` type.
///
/// Clones share the same allocation, so a [`PropertyMap`](crate::PropertyMap)
/// holding `Value`s can be copied per step without copying the payloads.
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wrap `value`.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Borrow the payload if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Clone the payload out if it is a `T`.
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Whether the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Name of the payload type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether both values share one allocation.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.downcast_ref::<String>() {
            write!(f, "{s:?}")
        } else if let Some(n) = self.downcast_ref::<i64>() {
            write!(f, "{n}")
        } else {
            write!(f, "<{}>", self.type_name)
        }
    }
}

/// Erases `T` into a [`Value`]; backward recovers it if the types match.
///
/// Lets one grammar rule yield differently typed results, e.g. a plain
/// string or a record, and still print each of them.
pub struct ToValue<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> ToValue<T> {
    /// Create the mapping.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ToValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Any + Clone + Send + Sync> Mapping<T, Value> for ToValue<T> {
    fn forward(&self, _ctx: &dyn Context, left: T) -> Result<Value, Error> {
        Ok(Value::new(left))
    }

    fn backward(&self, result: &Value) -> Option<T> {
        let value = result.downcast::<T>();
        if value.is_none() {
            tracing::trace!(
                expected = type_name::<T>(),
                found = result.type_name(),
                "value has a different type, not inverting"
            );
        }
        value
    }
}
