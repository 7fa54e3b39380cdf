//! Folds that combine two values into a tuple.

use crate::context::Context;
use crate::contract::Fold;

/// Pairs the accumulator with the element: `(left, elem)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairFold;

impl<T: Clone, U: Clone> Fold<T, U, (T, U)> for PairFold {
    fn forward(&self, _ctx: &dyn Context, left: T, elem: U) -> (T, U) {
        (left, elem)
    }

    fn left_inverse(&self, result: &(T, U)) -> Option<T> {
        Some(result.0.clone())
    }

    fn right_inverse(&self, result: &(T, U)) -> Option<U> {
        Some(result.1.clone())
    }
}

/// Pairs the element with the accumulator: `(elem, left)`.
///
/// Lets a grammar parse two parts in one order and store them in the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapPairFold;

impl<T: Clone, U: Clone> Fold<T, U, (U, T)> for SwapPairFold {
    fn forward(&self, _ctx: &dyn Context, left: T, elem: U) -> (U, T) {
        (elem, left)
    }

    fn left_inverse(&self, result: &(U, T)) -> Option<T> {
        Some(result.1.clone())
    }

    fn right_inverse(&self, result: &(U, T)) -> Option<U> {
        Some(result.0.clone())
    }
}
