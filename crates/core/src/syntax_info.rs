//! Source provenance for parsed values.

use std::fmt;
use std::marker::PhantomData;

use invertible_syntax_diagnostics::{LineIndex, Span};
use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::contract::Mapping;
use crate::error::Error;

/// Where in the source a value was parsed from.
///
/// Captured once, from the context or from another node, and never changed.
/// Provenance only: grammar logic never compares it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SyntaxInfo {
    span: Span,
}

impl SyntaxInfo {
    /// Capture the span of the construct the engine is currently building.
    pub fn from_context(ctx: &dyn Context) -> Self {
        Self { span: ctx.span() }
    }

    /// Copy the position of another node.
    pub fn of<N: HasSyntaxInfo + ?Sized>(node: &N) -> Self {
        node.syntax_info()
    }

    /// Byte offset of the first character.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The underlying span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// 0-indexed `(line, column)` of the start offset.
    pub fn line_col(&self, index: &LineIndex) -> (usize, usize) {
        index.line_col(self.span.start)
    }
}

impl fmt::Display for SyntaxInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.span.start, self.span.end)
    }
}

/// Values that remember where they were parsed from.
pub trait HasSyntaxInfo {
    /// Position of this value in the source.
    fn syntax_info(&self) -> SyntaxInfo;
}

impl HasSyntaxInfo for SyntaxInfo {
    fn syntax_info(&self) -> SyntaxInfo {
        *self
    }
}

/// A value paired with its source position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spanned<T> {
    /// Where `value` came from.
    pub info: SyntaxInfo,
    /// The parsed value.
    pub value: T,
}

impl<T> HasSyntaxInfo for Spanned<T> {
    fn syntax_info(&self) -> SyntaxInfo {
        self.info
    }
}

/// Attaches the current context span to a value; backward drops it.
pub struct Locate<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Locate<T> {
    /// Create the mapping.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Locate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Mapping<T, Spanned<T>> for Locate<T> {
    fn forward(&self, ctx: &dyn Context, left: T) -> Result<Spanned<T>, Error> {
        Ok(Spanned {
            info: SyntaxInfo::from_context(ctx),
            value: left,
        })
    }

    fn backward(&self, result: &Spanned<T>) -> Option<T> {
        Some(result.value.clone())
    }
}
