//! Value formatting for message templates.
//!
//! Messages sometimes embed a caller-supplied value (the rejected argument,
//! the offending setting). [`format_value`] turns such a value into a short
//! display string and never fails:
//!
//! - callables render as [`FUNCTION_PLACEHOLDER`]; their body is never shown
//! - composite values use their own string conversion when they have one,
//!   otherwise JSON, otherwise their `Debug` rendering
//! - scalars render as themselves
//!
//! ```rust
//! use common_errors::{format_value, MessageValue};
//! use std::collections::BTreeMap;
//!
//! let mut limits = BTreeMap::new();
//! limits.insert("max", 10);
//!
//! assert_eq!(format_value(&MessageValue::function()), "<function>");
//! assert_eq!(format_value(&MessageValue::structured(limits)), r#"{"max":10}"#);
//! assert_eq!(format_value(&MessageValue::from(42)), "42");
//! ```

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Placeholder rendered for callable values.
pub const FUNCTION_PLACEHOLDER: &str = "<function>";

/// A composite value that can be embedded in a message.
pub trait ObjectValue: fmt::Debug + Send + Sync {
    /// The type's own string conversion, when it defines one.
    fn own_string(&self) -> Option<String> {
        None
    }

    /// Structural (JSON) rendering.
    fn to_json(&self) -> serde_json::Result<String>;

    /// Default conversion, used when JSON rendering fails.
    fn fallback_string(&self) -> String {
        format!("{self:?}")
    }
}

/// Wraps any `Serialize` value; rendered as JSON.
#[derive(Debug, Clone)]
pub struct Structured<T>(pub T);

impl<T> ObjectValue for Structured<T>
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    fn fallback_string(&self) -> String {
        format!("{:?}", self.0)
    }
}

/// Wraps a value with its own `Display` conversion.
#[derive(Debug, Clone)]
pub struct Described<T>(pub T);

impl<T> ObjectValue for Described<T>
where
    T: fmt::Display + fmt::Debug + Send + Sync,
{
    fn own_string(&self) -> Option<String> {
        Some(self.0.to_string())
    }

    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0.to_string())
    }

    fn fallback_string(&self) -> String {
        format!("{:?}", self.0)
    }
}

/// A runtime value supplied for a message parameter.
#[derive(Debug, Clone)]
pub enum MessageValue {
    /// Absent / null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Integer(i64),
    /// Unsigned integer scalar.
    Unsigned(u64),
    /// Floating point scalar.
    Float(f64),
    /// String scalar.
    Text(Cow<'static, str>),
    /// A callable (closure, handler, callback).
    Function,
    /// A composite value.
    Object(Arc<dyn ObjectValue>),
}

impl MessageValue {
    /// A callable value.
    #[inline]
    pub const fn function() -> Self {
        Self::Function
    }

    /// A composite value rendered as JSON (with `Debug` fallback).
    pub fn structured<T>(value: T) -> Self
    where
        T: Serialize + fmt::Debug + Send + Sync + 'static,
    {
        Self::Object(Arc::new(Structured(value)))
    }

    /// A composite value rendered through its `Display` impl.
    pub fn described<T>(value: T) -> Self
    where
        T: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::Object(Arc::new(Described(value)))
    }
}

impl fmt::Display for MessageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(self))
    }
}

impl From<&'static str> for MessageValue {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for MessageValue {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<bool> for MessageValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for MessageValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for MessageValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for MessageValue {
    fn from(value: u32) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<u64> for MessageValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<usize> for MessageValue {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

impl From<f64> for MessageValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<MessageValue>> From<Option<T>> for MessageValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Render a message value. Total: never panics, never errors.
pub fn format_value(value: &MessageValue) -> Cow<'_, str> {
    match value {
        MessageValue::Function => Cow::Borrowed(FUNCTION_PLACEHOLDER),
        MessageValue::Text(s) => Cow::Borrowed(s.as_ref()),
        MessageValue::Null => Cow::Borrowed("null"),
        MessageValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        MessageValue::Integer(n) => Cow::Owned(n.to_string()),
        MessageValue::Unsigned(n) => Cow::Owned(n.to_string()),
        MessageValue::Float(n) => Cow::Owned(n.to_string()),
        MessageValue::Object(obj) => Cow::Owned(format_object(obj.as_ref())),
    }
}

/// Render a composite: own conversion, else JSON, else the value's `Debug`.
pub fn format_object(obj: &dyn ObjectValue) -> String {
    if let Some(own) = obj.own_string() {
        return own;
    }
    obj.to_json().unwrap_or_else(|_| obj.fallback_string())
}

/// Render any serializable value as JSON, falling back to `Debug`.
pub fn format_serialized<T>(value: &T) -> String
where
    T: Serialize + fmt::Debug + ?Sized,
{
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}
