/// Folds that grow a sequence.
pub mod fold;
/// Mappings into and between sequences.
pub mod mapping;
/// The persistent sequence type.
pub mod sequence;

use std::fmt;

use crate::context::Context;
use crate::contract::Initializer;
use sequence::OrderedSequence;

/// Supplies the empty sequence and recognizes it when printing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySequence;

impl<T> Initializer<OrderedSequence<T>> for EmptySequence {
    fn supply(&self, _ctx: &dyn Context) -> OrderedSequence<T> {
        OrderedSequence::new()
    }

    fn recognizes_as_empty(&self, value: &OrderedSequence<T>) -> bool {
        value.is_empty()
    }
}

impl fmt::Display for EmptySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{emptylist}")
    }
}
