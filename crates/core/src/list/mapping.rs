//! Mappings into and between [`OrderedSequence`]s.

use super::sequence::OrderedSequence;
use crate::context::Context;
use crate::contract::Mapping;
use crate::error::{ConfigError, Error};

/// Wraps one element into a one-element sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingletonSequence;

impl<T: Clone> Mapping<T, OrderedSequence<T>> for SingletonSequence {
    fn forward(&self, _ctx: &dyn Context, left: T) -> Result<OrderedSequence<T>, Error> {
        Ok(OrderedSequence::new().append(left))
    }

    fn backward(&self, result: &OrderedSequence<T>) -> Option<T> {
        if result.len() == 1 {
            result.last().cloned()
        } else {
            tracing::trace!(len = result.len(), "not a singleton sequence");
            None
        }
    }
}

/// Reorders a fixed-length sequence.
///
/// With order `[1, 2, 0]`, `[A, B, C]` becomes `[B, C, A]`.
#[derive(Debug, Clone)]
pub struct PermuteSequence {
    order: Vec<usize>,
}

impl PermuteSequence {
    /// Create the mapping. `order` must contain each of `0..order.len()`
    /// exactly once.
    pub fn new(order: Vec<usize>) -> Result<Self, ConfigError> {
        let mut seen = vec![false; order.len()];
        let valid = order.iter().all(|&i| match seen.get_mut(i) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        });
        if !valid {
            return Err(ConfigError::InvalidPermutation { order });
        }
        Ok(Self { order })
    }
}

impl<T: Clone> Mapping<OrderedSequence<T>, OrderedSequence<T>> for PermuteSequence {
    fn forward(
        &self,
        _ctx: &dyn Context,
        left: OrderedSequence<T>,
    ) -> Result<OrderedSequence<T>, Error> {
        if left.len() != self.order.len() {
            return Err(Error::Arity {
                expected: self.order.len(),
                found: left.len(),
            });
        }
        let items: Vec<&T> = left.iter().collect();
        Ok(self.order.iter().map(|&i| items[i].clone()).collect())
    }

    fn backward(&self, result: &OrderedSequence<T>) -> Option<OrderedSequence<T>> {
        if result.len() != self.order.len() {
            return None;
        }
        let mut restored: Vec<Option<T>> = vec![None; self.order.len()];
        for (elem, &i) in result.iter().zip(&self.order) {
            restored[i] = Some(elem.clone());
        }
        restored.into_iter().collect::<Option<OrderedSequence<T>>>()
    }
}
