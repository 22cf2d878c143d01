//! Attribute value types.
//!
//! This module defines the runtime representation of a single attribute value
//! and how each shape is coerced to text or JSON when it gets serialized.

use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::{CharEscape, CompactFormatter, Formatter};
use serde_json::{Map, Value};
use std::io;

/// Runtime representation of an attribute value.
///
/// Covers every shape a caller may hand to the serializer. Whether a value is
/// rendered, how it is coerced and whether it is escaped is decided by the
/// serializer; this type only knows how to turn itself into text or JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Absent value. Entries holding it are dropped before rendering.
    Null,

    /// Boolean. `true` renders as a bare attribute (e.g. `disabled`).
    Bool(bool),

    Int(i64),

    Float(f64),

    /// Plain text. The empty text is dropped before rendering.
    Text(String),

    /// A sequence of values (e.g. CSS classes). Nested sequences flatten.
    List(Vec<AttributeValue>),

    /// Opaque structured value, rendered as JSON where it is rendered at all.
    Object(Map<String, Value>),
}

impl AttributeValue {
    /// True for values that are filtered out before rendering: null and
    /// the empty text. Every other value, including `0`, `false` and an
    /// empty sequence, is kept.
    pub fn is_omitted(&self) -> bool {
        match self {
            AttributeValue::Null => true,
            AttributeValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// True for primitive scalars: text, numbers and booleans.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            AttributeValue::Bool(_)
                | AttributeValue::Int(_)
                | AttributeValue::Float(_)
                | AttributeValue::Text(_)
        )
    }

    /// True for the opaque structured (object-like) shape.
    pub fn is_structured(&self) -> bool {
        matches!(self, AttributeValue::Object(_))
    }

    /// Returns true only for exactly `Bool(true)`.
    pub fn is_true(&self) -> bool {
        matches!(self, AttributeValue::Bool(true))
    }

    /// Coerces the value to text.
    ///
    /// - Text: unchanged
    /// - Int/Float: shortest natural form (`0`, `1.5`, `3` for `3.0`)
    /// - Bool: `"1"` for true, `""` for false
    /// - Null: `""`
    /// - List: elements coerced and joined by a single space (nested lists flatten)
    /// - Object: JSON text
    pub fn to_text(&self) -> String {
        match self {
            AttributeValue::Null => String::new(),
            AttributeValue::Bool(true) => "1".to_string(),
            AttributeValue::Bool(false) => String::new(),
            AttributeValue::Int(n) => n.to_string(),
            AttributeValue::Float(f) => format_float(*f),
            AttributeValue::Text(s) => s.clone(),
            AttributeValue::List(items) => items
                .iter()
                .map(AttributeValue::to_text)
                .collect::<Vec<_>>()
                .join(" "),
            AttributeValue::Object(_) => self.to_json(),
        }
    }

    /// Encodes the value as compact JSON text that is safe inside a quoted
    /// attribute: `<`, `>`, `&`, `'` and `"` within strings become `\u00XX`.
    pub fn to_json(&self) -> String {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, MarkupSafeFormatter);
        // Serializing this type has no failure path: map keys are always strings.
        if self.serialize(&mut ser).is_err() {
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

/// Compact JSON with markup-significant characters hex-escaped.
struct MarkupSafeFormatter;

impl Formatter for MarkupSafeFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            let escaped = match c {
                '<' => "\\u003C",
                '>' => "\\u003E",
                '&' => "\\u0026",
                '\'' => "\\u0027",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn write_char_escape<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        char_escape: CharEscape,
    ) -> io::Result<()> {
        match char_escape {
            CharEscape::Quote => writer.write_all(b"\\u0022"),
            other => CompactFormatter.write_char_escape(writer, other),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttributeValue::Null => serializer.serialize_unit(),
            AttributeValue::Bool(b) => serializer.serialize_bool(*b),
            AttributeValue::Int(n) => serializer.serialize_i64(*n),
            AttributeValue::Float(f) => serializer.serialize_f64(*f),
            AttributeValue::Text(s) => serializer.serialize_str(s),
            AttributeValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            AttributeValue::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(AttributeValue::from)
    }
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AttributeValue::Null,
            Value::Bool(b) => AttributeValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => AttributeValue::Int(i),
                None => AttributeValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => AttributeValue::Text(s),
            Value::Array(items) => {
                AttributeValue::List(items.into_iter().map(AttributeValue::from).collect())
            }
            Value::Object(map) => AttributeValue::Object(map),
        }
    }
}

impl From<Map<String, Value>> for AttributeValue {
    fn from(map: Map<String, Value>) -> Self {
        AttributeValue::Object(map)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Int(n)
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        AttributeValue::Int(n.into())
    }
}

impl From<u32> for AttributeValue {
    fn from(n: u32) -> Self {
        AttributeValue::Int(n.into())
    }
}

impl From<usize> for AttributeValue {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(i) => AttributeValue::Int(i),
            Err(_) => AttributeValue::Float(n as f64),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(f: f64) -> Self {
        AttributeValue::Float(f)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(items: Vec<T>) -> Self {
        AttributeValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}
