use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, Serializer};

use crate::traits::{Coercible, number_to_text};

/// A host value passed to the formatter.
///
/// Each variant exposes the representations a script runtime would give it:
///
/// | Variant | `as_number` | `as_text` |
/// |---------|-------------|-----------|
/// | `Null` | `0` | `"null"` |
/// | `Bool` | `0` / `1` | `"false"` / `"true"` |
/// | `Number` | the number | — |
/// | `String` | — | the string |
/// | `Bytes` | — | lossy UTF-8 decoding |
/// | `Array`, `Object` | — | JSON rendering |
/// | `Custom` | delegated | delegated |
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Bytes(Bytes),
    Array(Vec<Value>),
    Object(Object),
    Custom(Arc<dyn Coercible + Send + Sync>),
}

impl Value {
    /// Wraps a host type that implements [`Coercible`].
    pub fn custom<C>(value: C) -> Self
    where
        C: Coercible + Send + Sync + 'static,
    {
        Value::Custom(Arc::new(value))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Canonical JSON rendering, as produced by the `%r` directive.
    pub fn to_json(&self) -> String {
        // Keys are always strings and non-finite numbers serialize as null,
        // so serde_json has nothing to reject.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("null"))
    }
}

impl Coercible for Value {
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Null => Some(0.0),
            Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Value::Number(number) => Some(*number),
            Value::Custom(custom) => custom.as_number(),
            Value::String(_) | Value::Bytes(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn as_text(&self) -> Option<String> {
        match self {
            Value::Null => Some("null".to_owned()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Number(_) => None,
            Value::String(text) => Some(text.clone()),
            Value::Bytes(bytes) => Some(bytes.decode().into_owned()),
            Value::Array(_) | Value::Object(_) => Some(self.to_json()),
            Value::Custom(custom) => custom.as_text(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(flag) => f.debug_tuple("Bool").field(flag).finish(),
            Value::Number(number) => f.debug_tuple("Number").field(number).finish(),
            Value::String(text) => f.debug_tuple("String").field(text).finish(),
            Value::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(object) => f.debug_tuple("Object").field(object).finish(),
            Value::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn serialize_number<S: Serializer>(number: f64, serializer: S) -> Result<S::Ok, S::Error> {
    // Integral values inside the exactly-representable range print bare.
    const EXACT: f64 = 9_007_199_254_740_992.0;
    if number.is_finite() && number.fract() == 0.0 && number.abs() <= EXACT {
        serializer.serialize_i64(number as i64)
    } else {
        serializer.serialize_f64(number)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Number(number) => serialize_number(*number, serializer),
            Value::String(text) => serializer.serialize_str(text),
            Value::Bytes(bytes) => serializer.serialize_str(&bytes.decode()),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(object) => serializer.collect_map(object.iter()),
            Value::Custom(custom) => match (custom.as_number(), custom.as_text()) {
                (Some(number), _) => serialize_number(number, serializer),
                (None, Some(text)) => serializer.serialize_str(&text),
                (None, None) => serializer.serialize_unit(),
            },
        }
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(number: $ty) -> Self {
                    Value::Number(number as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    #[inline]
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(text: &str) -> Self {
        Value::String(text.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(text: &String) -> Self {
        Value::String(text.clone())
    }
}

impl From<Bytes> for Value {
    #[inline]
    fn from(bytes: Bytes) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => {
                Value::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// An insertion-ordered key→value map.
///
/// Named directives (`%(name)d`) look their values up here, and `%r`
/// renders the entries in the order they were first inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key`, keeping its original position if it already exists.
    ///
    /// Returns the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

/// A raw byte buffer.
///
/// Renders as its decoded text under `%s` and `%r`; invalid UTF-8 sequences
/// decode to U+FFFD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// UTF-8 encodes `text`.
    #[inline]
    pub fn encode(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }

    #[inline]
    pub fn decode(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Copies out `length` bytes starting at `offset`, clamped to the buffer.
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Bytes {
        let start = offset.min(self.0.len());
        let end = match length {
            Some(length) => start.saturating_add(length).min(self.0.len()),
            None => self.0.len(),
        };
        Bytes(self.0[start..end].to_vec())
    }

    pub fn concat(&self, other: &Bytes) -> Bytes {
        let mut joined = Vec::with_capacity(self.0.len() + other.0.len());
        joined.extend_from_slice(&self.0);
        joined.extend_from_slice(&other.0);
        Bytes(joined)
    }
}

impl From<Vec<u8>> for Bytes {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Bytes {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Bytes {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keeps_insertion_order() {
        let mut object = Object::new().with("y", 1).with("x", 2);
        assert_eq!(object.insert("y", 3), Some(Value::Number(1.0)));
        assert_eq!(object.keys().collect::<Vec<_>>(), ["y", "x"]);
        assert_eq!(Value::from(object).to_json(), r#"{"y":3,"x":2}"#);
    }

    #[test]
    fn test_json_numbers() {
        assert_eq!(Value::from(1337).to_json(), "1337");
        assert_eq!(Value::from(-0.0).to_json(), "0");
        assert_eq!(Value::from(1.5).to_json(), "1.5");
        assert_eq!(Value::from(f64::NAN).to_json(), "null");
    }

    #[test]
    fn test_json_strings_and_bytes() {
        assert_eq!(Value::from("a\"b\n").to_json(), r#""a\"b\n""#);
        assert_eq!(
            Value::from(Bytes::encode("bytes")).to_json(),
            r#""bytes""#
        );
        assert_eq!(
            Value::from(Bytes::from(vec![0x66, 0xff])).to_json(),
            "\"f\u{fffd}\""
        );
    }

    #[test]
    fn test_json_nested() {
        let value = Value::from(Object::new().with("list", vec![1, 2]).with("none", Value::Null));
        assert_eq!(value.to_json(), r#"{"list":[1,2],"none":null}"#);
    }

    struct Opaque(Option<f64>);

    impl Coercible for Opaque {
        fn as_number(&self) -> Option<f64> {
            self.0
        }

        fn as_text(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_json_of_custom_and_non_finite_values() {
        let value = Value::from(vec![
            Value::custom(Opaque(Some(f64::INFINITY))),
            Value::custom(Opaque(None)),
            Value::from(Object::new().with("inf", f64::NEG_INFINITY)),
        ]);
        assert_eq!(value.to_json(), r#"[null,null,{"inf":null}]"#);
    }

    #[test]
    fn test_value_representations() {
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::Null.to_text(), "null");
        assert_eq!(Value::from(true).to_number(), 1.0);
        assert_eq!(Value::from(true).to_text(), "true");
        assert_eq!(Value::from("0xffff").to_number(), 65535.0);
        assert_eq!(Value::from(65535).to_text(), "65535");
    }

    #[test]
    fn test_from_json_value() {
        let json: serde_json::Value = serde_json::from_str(r#"{"b":[1,"x"],"a":null}"#).unwrap();
        let value = Value::from(json);
        let object = value.as_object().unwrap();
        assert_eq!(object.get("b"), Some(&Value::from(vec![Value::from(1), "x".into()])));
        assert!(object.get("a").unwrap().is_null());
    }

    #[test]
    fn test_bytes_slice_and_concat() {
        let bytes = Bytes::encode("hello world");
        assert_eq!(bytes.slice(6, None).decode(), "world");
        assert_eq!(bytes.slice(0, Some(5)).decode(), "hello");
        assert_eq!(bytes.slice(20, Some(5)).len(), 0);
        assert_eq!(
            bytes.slice(0, Some(6)).concat(&Bytes::encode("there")).decode(),
            "hello there"
        );
    }
}
