pub mod calendar;
pub mod convert;
pub mod fields;
pub mod format;
pub mod iso8601;

pub use convert::{Converted, DurationConverter, DurationValue, Representation, convert};
pub use fields::{Component, FieldMap};
