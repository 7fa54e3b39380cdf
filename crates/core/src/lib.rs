//! Invertible syntax core library.
//!
//! Building blocks for grammars that both parse and print. A driving engine
//! runs an [`Initializer`], [`Fold`]s and [`Mapping`]s forward while parsing
//! and their inverses while printing. This crate provides those components
//! for persistent sequences ([`OrderedSequence`]), property maps
//! ([`PropertyMap`], [`KeyedMap`]) and records assembled from property maps
//! ([`RecordBuilder`], [`RecordCreator`]), plus scalar codecs and source
//! position wrappers.
//!
//! The engine itself is not part of this crate; it only needs the three
//! contracts in [`contract`] and a [`Context`] handle.

#![warn(missing_docs)]

/// The handle passed to forward steps.
pub mod context;
/// Mapping, fold and initializer contracts.
pub mod contract;
/// Error types and their diagnostics.
pub mod error;
/// Sequences and the folds and mappings over them.
pub mod list;
/// Optional values.
pub mod opt;
/// Tuple folds.
pub mod pair;
/// Property maps and the folds writing them.
pub mod properties;
/// Records built from property maps.
pub mod record;
/// Scalar codecs and fixed-value initializers.
pub mod scalar;
/// Source positions attached to built values.
pub mod syntax_info;
/// Type-erased property values.
pub mod value;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for every component. The full module paths remain available.

// Contracts
pub use context::Context;
pub use contract::{Fold, Initializer, Mapping};

// Errors
pub use error::{BuildError, ConfigError, Error, FormatError};

// Sequences
pub use list::EmptySequence;
pub use list::fold::{AppendFold, BinaryFold};
pub use list::mapping::{PermuteSequence, SingletonSequence};
pub use list::sequence::OrderedSequence;

// Properties
pub use properties::PropertyMapInitializer;
pub use properties::keyed::{EmptyKeyedMap, KeyedMap, KeyedPutFold, SingletonKeyedMap};
pub use properties::map::PropertyMap;
pub use properties::put::PropertyPutFold;
pub use properties::singleton::SingletonProperties;
pub use value::{ToValue, Value};

// Records
pub use record::{BuilderConfig, RecordBuilder, RecordCreator, RecordShape, UnknownPropertyPolicy};

// Scalars, tuples and options
pub use opt::{NoneInitializer, SomeMapping};
pub use pair::{PairFold, SwapPairFold};
pub use scalar::{Increment, ToInt, ValueInitializer};

// Positions
pub use syntax_info::{HasSyntaxInfo, Locate, Spanned, SyntaxInfo};

// Diagnostics (re-exported from the diagnostics crate)
pub use invertible_syntax_diagnostics::{Diagnostic, LineIndex, Severity, Span, codes};
