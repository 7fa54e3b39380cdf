//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. `ISX1xxx` codes come from forward mappings,
//! `ISX2xxx` from record building, `ISX3xxx` from component configuration.

/// A scalar token is not a valid literal for its target type.
pub const INVALID_LITERAL: &str = "ISX1001";
/// A scalar mapping would leave the range of its target type.
pub const OVERFLOW: &str = "ISX1002";
/// A sequence mapping received the wrong number of elements.
pub const ARITY: &str = "ISX1003";

/// A property map contains a key the record has no setter for.
pub const UNKNOWN_PROPERTY: &str = "ISX2001";
/// A property value does not have the setter's parameter type.
pub const TYPE_MISMATCH: &str = "ISX2002";
/// A record setter rejected its value.
pub const SETTER_FAILED: &str = "ISX2003";
/// A record constructor failed.
pub const CONSTRUCTOR_FAILED: &str = "ISX2004";

/// A record shape lacks the requested construction path.
pub const MISSING_CONSTRUCTOR: &str = "ISX3001";
/// A record shape lacks an accessor pair for a listed property.
pub const MISSING_ACCESSOR: &str = "ISX3002";
/// A permutation order is not a permutation.
pub const INVALID_PERMUTATION: &str = "ISX3003";

/// Every code defined in this module, in numeric order.
pub const ALL: &[&str] = &[
    INVALID_LITERAL,
    OVERFLOW,
    ARITY,
    UNKNOWN_PROPERTY,
    TYPE_MISMATCH,
    SETTER_FAILED,
    CONSTRUCTOR_FAILED,
    MISSING_CONSTRUCTOR,
    MISSING_ACCESSOR,
    INVALID_PERMUTATION,
];
