//! Folds that grow an [`OrderedSequence`].

use std::fmt;

use super::sequence::OrderedSequence;
use crate::context::Context;
use crate::contract::Fold;

/// Appends one element per application.
///
/// Inverting splits off the last element, but only while the sequence is
/// longer than `min_size`. With `min_size = 0` the empty sequence cannot be
/// decomposed, so the printer falls back to the sequence's initializer; a
/// list whose first element was produced by another rule uses `min_size = 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendFold {
    min_size: usize,
}

impl AppendFold {
    /// Create a fold that refuses to invert sequences of `min_size` or fewer
    /// elements.
    pub fn new(min_size: usize) -> Self {
        Self { min_size }
    }

    /// The inversion floor.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    fn split<'a, T>(&self, result: &'a OrderedSequence<T>) -> Option<(OrderedSequence<T>, &'a T)> {
        if result.len() <= self.min_size {
            tracing::trace!(
                len = result.len(),
                min_size = self.min_size,
                "sequence at inversion floor"
            );
            return None;
        }
        result.split_last()
    }
}

impl<T: Clone> Fold<OrderedSequence<T>, T> for AppendFold {
    fn forward(&self, _ctx: &dyn Context, left: OrderedSequence<T>, elem: T) -> OrderedSequence<T> {
        left.append(elem)
    }

    fn left_inverse(&self, result: &OrderedSequence<T>) -> Option<OrderedSequence<T>> {
        self.split(result).map(|(prefix, _)| prefix)
    }

    fn right_inverse(&self, result: &OrderedSequence<T>) -> Option<T> {
        self.split(result).map(|(_, last)| last.clone())
    }
}

impl fmt::Display for AppendFold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{append}")
    }
}

/// Combines two elements into a two-element sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryFold;

impl<T: Clone> Fold<T, T, OrderedSequence<T>> for BinaryFold {
    fn forward(&self, _ctx: &dyn Context, left: T, elem: T) -> OrderedSequence<T> {
        OrderedSequence::new().append(left).append(elem)
    }

    fn left_inverse(&self, result: &OrderedSequence<T>) -> Option<T> {
        if result.len() == 2 {
            result.get(0).cloned()
        } else {
            None
        }
    }

    fn right_inverse(&self, result: &OrderedSequence<T>) -> Option<T> {
        if result.len() == 2 {
            result.last().cloned()
        } else {
            None
        }
    }
}
