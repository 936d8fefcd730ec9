//! Compact text rendering of structured data for LLM consumption.
//!
//! Values are rendered as `LABEL: value` lines with upper-snake-case labels.
//! Zero values (empty text, `false`, `0`, empty containers, unset
//! timestamps, zero durations, absent values) are omitted entirely, nested
//! blocks are indented by two spaces per level, and recursion stops at a
//! maximum depth where `...` is emitted instead.
//!
//! Data enters either as a [`Value`] tree built by hand or through serde:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Inner {
//!     value: String,
//! }
//!
//! #[derive(Serialize)]
//! struct Outer {
//!     name: String,
//!     inner: Inner,
//! }
//!
//! let data = Outer {
//!     name: "outer".into(),
//!     inner: Inner { value: "inner-value".into() },
//! };
//! let text = gzh_llmfmt::to_string(&data).unwrap();
//! assert_eq!(text, "NAME: outer\nINNER:\n  VALUE: inner-value\n");
//! ```

mod duration;
mod error;
mod format;
mod label;
mod ser;
mod value;

pub use duration::format_duration;
pub use error::{Error, Result};
pub use format::{format, Formatter, MAX_DEPTH, TRUNCATION_MARKER};
pub use label::field_name_to_label;
pub use ser::{to_value, ValueSerializer};
pub use value::{Field, RecordBuilder, Scalar, Special, Value, Visibility};

/// Renders any `Serialize` type with the default maximum depth.
pub fn to_string<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format(&to_value(value)?, MAX_DEPTH))
}
