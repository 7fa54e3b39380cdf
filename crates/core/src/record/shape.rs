//! Typed description of how to construct and access a record.

use std::any::{Any, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{BuildError, ConfigError};
use crate::value::Value;

pub(crate) type SetFn<R> = dyn Fn(&mut R, &Value) -> Result<(), AccessError> + Send + Sync;
pub(crate) type GetFn<R> = dyn Fn(&R) -> Option<Value> + Send + Sync;
type PlainFn<R> = dyn Fn() -> Result<R, String> + Send + Sync;
type ContextFn<R> = dyn Fn(&dyn Context) -> Result<R, String> + Send + Sync;

/// Why an erased setter did not apply.
pub(crate) enum AccessError {
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    Failed(String),
}

impl AccessError {
    pub(crate) fn into_build_error(self, record: &'static str, property: &str) -> BuildError {
        match self {
            AccessError::TypeMismatch { expected, found } => BuildError::TypeMismatch {
                record,
                property: property.to_string(),
                expected,
                found,
            },
            AccessError::Failed(message) => BuildError::Setter {
                record,
                property: property.to_string(),
                message,
            },
        }
    }
}

/// Setter/getter pair for one property.
pub(crate) struct Accessor<R> {
    pub(crate) set: Arc<SetFn<R>>,
    pub(crate) get: Arc<GetFn<R>>,
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        Self {
            set: Arc::clone(&self.set),
            get: Arc::clone(&self.get),
        }
    }
}

/// A resolved construction path.
pub(crate) enum Constructor<R> {
    Plain(Arc<PlainFn<R>>),
    WithContext(Arc<ContextFn<R>>),
}

impl<R> Constructor<R> {
    pub(crate) fn construct(&self, ctx: &dyn Context) -> Result<R, String> {
        match self {
            Constructor::Plain(f) => f(),
            Constructor::WithContext(f) => f(ctx),
        }
    }
}

/// How to create a record of type `R` and set or read its properties.
///
/// A shape replaces runtime method lookup: each property name is bound to a
/// typed setter and getter when the shape is written, and values stored in a
/// [`PropertyMap`](crate::PropertyMap) are checked against the setter's
/// parameter type when a record is built.
///
/// ```
/// use invertible_syntax_core::RecordShape;
///
/// #[derive(Default)]
/// struct Point {
///     x: Option<i64>,
/// }
///
/// let shape = RecordShape::<Point>::with_default()
///     .property("x", |p: &mut Point, x: i64| p.x = Some(x), |p: &Point| p.x);
/// assert!(shape.has_property("x"));
/// ```
pub struct RecordShape<R> {
    name: &'static str,
    plain: Option<Arc<PlainFn<R>>>,
    with_context: Option<Arc<ContextFn<R>>>,
    accessors: BTreeMap<String, Accessor<R>>,
}

impl<R: 'static> RecordShape<R> {
    /// A shape with no constructor and no properties.
    pub fn new() -> Self {
        Self {
            name: type_name::<R>(),
            plain: None,
            with_context: None,
            accessors: BTreeMap::new(),
        }
    }

    /// Register the zero-argument constructor.
    pub fn constructor<F>(self, f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        self.try_constructor(move || Ok(f()))
    }

    /// Register a zero-argument constructor that may fail.
    pub fn try_constructor<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<R, String> + Send + Sync + 'static,
    {
        self.plain = Some(Arc::new(f));
        self
    }

    /// Register the constructor receiving the parse context.
    pub fn constructor_with_context<F>(self, f: F) -> Self
    where
        F: Fn(&dyn Context) -> R + Send + Sync + 'static,
    {
        self.try_constructor_with_context(move |ctx: &dyn Context| Ok(f(ctx)))
    }

    /// Register a constructor receiving the parse context that may fail.
    pub fn try_constructor_with_context<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Context) -> Result<R, String> + Send + Sync + 'static,
    {
        self.with_context = Some(Arc::new(f));
        self
    }

    /// Register the accessor pair for property `name`.
    ///
    /// `get` returns `None` while the property is unset.
    pub fn property<T, S, G>(self, name: impl Into<String>, set: S, get: G) -> Self
    where
        T: Any + Clone + Send + Sync,
        S: Fn(&mut R, T) + Send + Sync + 'static,
        G: Fn(&R) -> Option<T> + Send + Sync + 'static,
    {
        self.try_property(
            name,
            move |record: &mut R, value: T| {
                set(record, value);
                Ok(())
            },
            get,
        )
    }

    /// Register an accessor pair whose setter may reject values.
    pub fn try_property<T, S, G>(mut self, name: impl Into<String>, set: S, get: G) -> Self
    where
        T: Any + Clone + Send + Sync,
        S: Fn(&mut R, T) -> Result<(), String> + Send + Sync + 'static,
        G: Fn(&R) -> Option<T> + Send + Sync + 'static,
    {
        let set = move |record: &mut R, value: &Value| {
            let typed = value
                .downcast::<T>()
                .ok_or_else(|| AccessError::TypeMismatch {
                    expected: type_name::<T>(),
                    found: value.type_name(),
                })?;
            set(record, typed).map_err(AccessError::Failed)
        };
        let get = move |record: &R| get(record).map(Value::new);
        self.accessors.insert(
            name.into(),
            Accessor {
                set: Arc::new(set),
                get: Arc::new(get),
            },
        );
        self
    }

    /// Name of the record type, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `name` has an accessor pair.
    pub fn has_property(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// Property names, sorted.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.accessors.keys().map(String::as_str)
    }

    pub(crate) fn accessor(&self, name: &str) -> Option<&Accessor<R>> {
        self.accessors.get(name)
    }

    pub(crate) fn accessors(&self) -> impl Iterator<Item = (&str, &Accessor<R>)> {
        self.accessors.iter().map(|(k, a)| (k.as_str(), a))
    }

    pub(crate) fn resolve_constructor(
        &self,
        with_context: bool,
    ) -> Result<Constructor<R>, ConfigError> {
        let resolved = if with_context {
            self.with_context.clone().map(Constructor::WithContext)
        } else {
            self.plain.clone().map(Constructor::Plain)
        };
        resolved.ok_or(ConfigError::MissingConstructor {
            record: self.name,
            with_context,
        })
    }
}

impl<R: Default + 'static> RecordShape<R> {
    /// A shape constructed through `R::default()`.
    pub fn with_default() -> Self {
        Self::new().constructor(R::default)
    }
}

impl<R: 'static> Default for RecordShape<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a [`RecordShape`] for a `Default` struct whose properties are
/// `Option<T>` fields named like the properties.
///
/// ```
/// use invertible_syntax_core::record_shape;
///
/// #[derive(Default)]
/// struct Item {
///     a: Option<String>,
///     b: Option<String>,
/// }
///
/// let shape = record_shape!(Item { a: String, b: String });
/// assert_eq!(shape.properties().collect::<Vec<_>>(), ["a", "b"]);
/// ```
#[macro_export]
macro_rules! record_shape {
    ($record:ty { $($field:ident : $ty:ty),* $(,)? }) => {
        $crate::RecordShape::<$record>::with_default()
            $(.property(
                stringify!($field),
                |record: &mut $record, value: $ty| record.$field = ::std::option::Option::Some(value),
                |record: &$record| ::std::clone::Clone::clone(&record.$field),
            ))*
    };
}
