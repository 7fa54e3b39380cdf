//! The three plug-in contracts an invertible parser/printer engine drives.
//!
//! While parsing, the engine runs an [`Initializer`], then one [`Fold`] per
//! repeated element, then optional [`Mapping`]s. While printing it runs the
//! mirror image: `Mapping::backward`, the fold inverses, and finally
//! [`Initializer::recognizes_as_empty`].
//!
//! A backward step that does not apply returns `None`. That is an ordinary
//! outcome used for backtracking, not an error.

use crate::context::Context;
use crate::error::Error;

/// A partial bijection between `L` and `R`.
pub trait Mapping<L, R> {
    /// Transform a parsed value. Failure makes the engine try another branch.
    fn forward(&self, ctx: &dyn Context, left: L) -> Result<R, Error>;

    /// Recover the value `forward` was applied to, or `None` if `result`
    /// cannot have been produced by this mapping.
    fn backward(&self, result: &R) -> Option<L>;
}

/// Combines an accumulator `L` with one element `E` into `R`.
///
/// Most folds keep the accumulator type (`R = L`).
pub trait Fold<L, E, R = L> {
    /// Combine. Total: a fold never fails forward.
    fn forward(&self, ctx: &dyn Context, left: L, elem: E) -> R;

    /// The accumulator before the last `forward`.
    fn left_inverse(&self, result: &R) -> Option<L>;

    /// The element consumed by the last `forward`.
    fn right_inverse(&self, result: &R) -> Option<E>;
}

/// Supplies the starting value of a rule that consumed no input.
pub trait Initializer<T> {
    /// The starting value. Total.
    fn supply(&self, ctx: &dyn Context) -> T;

    /// Whether `value` can be printed as "nothing was here".
    fn recognizes_as_empty(&self, value: &T) -> bool;
}
