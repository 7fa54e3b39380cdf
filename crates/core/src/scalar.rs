//! Stateless scalar codecs.

use std::fmt;

use crate::context::Context;
use crate::contract::{Initializer, Mapping};
use crate::error::{Error, FormatError};

/// Decimal text ↔ `i64`.
///
/// Printing yields the canonical form, so `"007"` parses to 7 and prints
/// back as `"7"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToInt;

impl Mapping<String, i64> for ToInt {
    fn forward(&self, _ctx: &dyn Context, left: String) -> Result<i64, Error> {
        left.parse::<i64>()
            .map_err(|source| FormatError::Integer { text: left, source }.into())
    }

    fn backward(&self, result: &i64) -> Option<String> {
        Some(result.to_string())
    }
}

/// Adds one going forward; going backward, subtracts one only while the
/// result stays at or above `min`.
///
/// The floor stops a printer from unwinding a left-recursive counter forever.
#[derive(Debug, Clone, Copy)]
pub struct Increment {
    min: i64,
}

impl Increment {
    /// Create an increment whose inverse never yields less than `min`.
    pub fn new(min: i64) -> Self {
        Self { min }
    }

    /// The floor.
    pub fn min(&self) -> i64 {
        self.min
    }
}

impl Mapping<i64, i64> for Increment {
    fn forward(&self, _ctx: &dyn Context, left: i64) -> Result<i64, Error> {
        left.checked_add(1).ok_or(Error::Overflow { value: left })
    }

    fn backward(&self, result: &i64) -> Option<i64> {
        if *result > self.min {
            Some(result - 1)
        } else {
            tracing::trace!(value = *result, min = self.min, "no predecessor above floor");
            None
        }
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}...+1}}", self.min)
    }
}

/// Supplies a fixed value and recognizes exactly that value as empty.
#[derive(Debug, Clone)]
pub struct ValueInitializer<V> {
    value: V,
}

impl<V> ValueInitializer<V> {
    /// Create an initializer for `value`.
    pub fn new(value: V) -> Self {
        Self { value }
    }
}

impl<V: Clone + PartialEq> Initializer<V> for ValueInitializer<V> {
    fn supply(&self, _ctx: &dyn Context) -> V {
        self.value.clone()
    }

    fn recognizes_as_empty(&self, value: &V) -> bool {
        *value == self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invertible_syntax_diagnostics::Span;

    const CTX: Span = Span { start: 0, end: 0 };

    #[test]
    fn to_int_parses_decimal() {
        assert_eq!(ToInt.forward(&CTX, "42".into()).unwrap(), 42);
        assert_eq!(ToInt.forward(&CTX, "-7".into()).unwrap(), -7);
    }

    #[test]
    fn to_int_rejects_non_numeric() {
        let err = ToInt.forward(&CTX, "4x".into()).unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::Integer { ref text, .. }) if text == "4x"));
        assert!(ToInt.forward(&CTX, String::new()).is_err());
    }

    #[test]
    fn to_int_prints_canonical_form() {
        let n = ToInt.forward(&CTX, "007".into()).unwrap();
        assert_eq!(ToInt.backward(&n).as_deref(), Some("7"));
    }

    #[test]
    fn increment_with_floor_zero() {
        let inc = Increment::new(0);
        assert_eq!(inc.forward(&CTX, 0).unwrap(), 1);
        assert_eq!(inc.forward(&CTX, 1).unwrap(), 2);
        assert_eq!(inc.backward(&1), Some(0));
        assert_eq!(inc.backward(&0), None);
        assert_eq!(inc.backward(&-3), None);
    }

    #[test]
    fn increment_overflow_is_an_error() {
        let err = Increment::new(0).forward(&CTX, i64::MAX).unwrap_err();
        assert!(matches!(err, Error::Overflow { value: i64::MAX }));
    }

    #[test]
    fn increment_display() {
        assert_eq!(Increment::new(2).to_string(), "{2...+1}");
    }

    #[test]
    fn value_initializer_recognizes_its_value() {
        let init = ValueInitializer::new(1i64);
        assert_eq!(init.supply(&CTX), 1);
        assert!(init.recognizes_as_empty(&1));
        assert!(!init.recognizes_as_empty(&2));
    }
}
