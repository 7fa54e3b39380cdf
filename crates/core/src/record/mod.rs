//! Records assembled from property maps.
//!
//! A [`RecordShape`] binds property names to typed accessors once.
//! [`RecordBuilder`] and [`RecordCreator`] use a shape to turn a
//! [`PropertyMap`](crate::PropertyMap) into a record when parsing, and
//! [`RecordCreator`] also turns a record back into a map when printing.

pub mod builder;
pub mod config;
pub mod creator;
pub mod shape;

pub use builder::RecordBuilder;
pub use config::{BuilderConfig, UnknownPropertyPolicy};
pub use creator::RecordCreator;
pub use shape::RecordShape;
