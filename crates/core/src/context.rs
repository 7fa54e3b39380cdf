//! The opaque handle the driving engine passes to every forward step.

use invertible_syntax_diagnostics::Span;

/// Source position of the construct currently being built.
///
/// Engines pass their stream (or any handle implementing this trait) through
/// unmodified. Components may read the span and nothing else.
pub trait Context {
    /// Byte span of the input consumed for the current construct.
    fn span(&self) -> Span;
}

/// A bare span is the simplest possible context.
impl Context for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl<C: Context + ?Sized> Context for &C {
    fn span(&self) -> Span {
        (**self).span()
    }
}
