//! Loosely-typed data.
//!
//! Raw input and output are [`serde_json`] values: any `serde` format can
//! produce or consume them.

use alloc::string::String;

pub use serde_json::{Number, Value};

/// Key-value object representation.
pub type Map = serde_json::Map<String, Value>;

/// Returns a human readable name of the variant, used in error messages.
///
/// # Examples
///
/// ```
/// use pm_reflect::value::{kind, Value};
///
/// assert_eq!(kind(&Value::from("car")), "string");
/// assert_eq!(kind(&Value::from(4)), "number");
/// assert_eq!(kind(&Value::Null), "null");
/// ```
pub const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
