//! Typed error types for forward mappings and component configuration.
//!
//! Refused inversions are not errors: backward steps return `None`.

use std::collections::BTreeMap;
use std::num::ParseIntError;

use invertible_syntax_diagnostics::{Diagnostic, Span, codes};

/// Shorthand for building a `BTreeMap<String, String>` context from key-value pairs.
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

/// Failure of a forward [`Mapping`](crate::Mapping) step.
///
/// The driving engine treats every variant as a failed grammar alternative.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A scalar token has the wrong shape.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A record could not be built from its property map.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The mapped value would leave the range of the target type.
    #[error("{value} has no successor")]
    Overflow {
        /// The value that could not be incremented.
        value: i64,
    },

    /// A sequence had the wrong number of elements.
    #[error("expected {expected} elements, found {found}")]
    Arity {
        /// Number of elements the mapping works on.
        expected: usize,
        /// Number of elements received.
        found: usize,
    },
}

impl Error {
    /// Convert into a [`Diagnostic`] located at `span`.
    pub fn to_diagnostic(&self, span: Option<Span>) -> Diagnostic {
        match self {
            Error::Format(e) => e.to_diagnostic(span),
            Error::Build(e) => e.to_diagnostic(span),
            Error::Overflow { value } => {
                Diagnostic::error(codes::OVERFLOW, self.to_string(), span)
                    .with_context(ctx!("value" => value.to_string()))
            }
            Error::Arity { expected, found } => {
                Diagnostic::error(codes::ARITY, self.to_string(), span).with_context(ctx!(
                    "expected" => expected.to_string(),
                    "found" => found.to_string(),
                ))
            }
        }
    }
}

/// A token is not a valid literal for the target scalar type.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The text is not a decimal integer in range.
    #[error("invalid integer literal {text:?}")]
    Integer {
        /// The offending text.
        text: String,
        /// Why the standard parser rejected it.
        #[source]
        source: ParseIntError,
    },
}

impl FormatError {
    /// Convert into a [`Diagnostic`] located at `span`.
    pub fn to_diagnostic(&self, span: Option<Span>) -> Diagnostic {
        match self {
            FormatError::Integer { text, .. } => {
                Diagnostic::error(codes::INVALID_LITERAL, self.to_string(), span).with_context(
                    ctx!("expected" => "integer", "text" => text.as_str()),
                )
            }
        }
    }
}

/// Building a record from a property map failed.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A present key has no setter on the record shape.
    #[error("{record} has no setter for property `{property}`")]
    UnknownProperty {
        /// Record type name.
        record: &'static str,
        /// The unmatched key.
        property: String,
    },

    /// The stored value is not of the setter's parameter type.
    #[error("property `{property}` of {record} expects {expected}, found {found}")]
    TypeMismatch {
        /// Record type name.
        record: &'static str,
        /// The property being set.
        property: String,
        /// Parameter type of the setter.
        expected: &'static str,
        /// Type of the stored value.
        found: &'static str,
    },

    /// The setter rejected its value.
    #[error("setting `{property}` on {record} failed: {message}")]
    Setter {
        /// Record type name.
        record: &'static str,
        /// The property being set.
        property: String,
        /// Message reported by the setter.
        message: String,
    },

    /// The constructor failed.
    #[error("constructing {record} failed: {message}")]
    Constructor {
        /// Record type name.
        record: &'static str,
        /// Message reported by the constructor.
        message: String,
    },
}

impl BuildError {
    /// Convert into a [`Diagnostic`] located at `span`.
    pub fn to_diagnostic(&self, span: Option<Span>) -> Diagnostic {
        let message = self.to_string();
        match self {
            BuildError::UnknownProperty { record, property } => {
                Diagnostic::error(codes::UNKNOWN_PROPERTY, message, span)
                    .with_context(ctx!("record" => *record, "property" => property.as_str()))
            }
            BuildError::TypeMismatch {
                record,
                property,
                expected,
                found,
            } => Diagnostic::error(codes::TYPE_MISMATCH, message, span).with_context(ctx!(
                "record" => *record,
                "property" => property.as_str(),
                "expected" => *expected,
                "found" => *found,
            )),
            BuildError::Setter {
                record, property, ..
            } => Diagnostic::error(codes::SETTER_FAILED, message, span)
                .with_context(ctx!("record" => *record, "property" => property.as_str())),
            BuildError::Constructor { record, .. } => {
                Diagnostic::error(codes::CONSTRUCTOR_FAILED, message, span)
                    .with_context(ctx!("record" => *record))
            }
        }
    }
}

/// A component cannot be constructed from the given configuration.
///
/// Raised once, when the component is created, and never retried.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The record shape has no constructor for the requested path.
    #[error("{record} has no {} constructor", constructor_kind(.with_context))]
    MissingConstructor {
        /// Record type name.
        record: &'static str,
        /// Whether the context-taking constructor was requested.
        with_context: bool,
    },

    /// A listed property has no setter/getter pair.
    #[error("{record} has no accessors for property `{property}`")]
    MissingAccessor {
        /// Record type name.
        record: &'static str,
        /// The listed property.
        property: String,
    },

    /// The order is not a permutation of `0..order.len()`.
    #[error("{order:?} is not a permutation")]
    InvalidPermutation {
        /// The rejected order.
        order: Vec<usize>,
    },
}

fn constructor_kind(with_context: &bool) -> &'static str {
    if *with_context { "context-taking" } else { "plain" }
}

impl ConfigError {
    /// Convert into a [`Diagnostic`]. Configuration has no source location.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = self.to_string();
        match self {
            ConfigError::MissingConstructor {
                record,
                with_context,
            } => Diagnostic::error(codes::MISSING_CONSTRUCTOR, message, None).with_context(ctx!(
                "record" => *record,
                "with_context" => with_context.to_string(),
            )),
            ConfigError::MissingAccessor { record, property } => {
                Diagnostic::error(codes::MISSING_ACCESSOR, message, None)
                    .with_context(ctx!("record" => *record, "property" => property.as_str()))
            }
            ConfigError::InvalidPermutation { order } => {
                Diagnostic::error(codes::INVALID_PERMUTATION, message, None)
                    .with_context(ctx!("order" => format!("{order:?}")))
            }
        }
    }
}
