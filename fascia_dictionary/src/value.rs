// Copyright 2025 the Fascia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discriminated dictionary values and typed parameter lookup.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Dictionary, DictionaryError, Name};

/// A dictionary value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value.
    #[default]
    Empty,
    /// Boolean flag.
    Bool(bool),
    /// Any numeric parameter.
    Number(f64),
    /// Text, usually user-visible.
    String(String),
    /// A symbolic name, e.g. a widget kind or a command.
    Name(Name),
    /// Ordered list of values.
    Array(Vec<Value>),
    /// Nested dictionary.
    Dictionary(Dictionary),
}

impl Value {
    /// Short name of the value's kind, for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Name(_) => "name",
            Self::Array(_) => "array",
            Self::Dictionary(_) => "dictionary",
        }
    }

    /// Whether this is [`Value::Empty`].
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    const fn mismatch(&self, expected: &'static str) -> DictionaryError {
        DictionaryError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Name> for Value {
    fn from(v: Name) -> Self {
        Self::Name(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl From<Dictionary> for Value {
    fn from(v: Dictionary) -> Self {
        Self::Dictionary(v)
    }
}

impl TryFrom<&Value> for bool {
    type Error = DictionaryError;

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        match v {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = DictionaryError;

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        match v {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = DictionaryError;

    fn try_from(v: &'a Value) -> Result<Self, Self::Error> {
        match v {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }
}

impl TryFrom<&Value> for Name {
    type Error = DictionaryError;

    /// Accepts both names and strings; strings are converted.
    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        match v {
            Value::Name(n) => Ok(n.clone()),
            Value::String(s) => Ok(Self::new(s)),
            other => Err(other.mismatch("name")),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a [Value] {
    type Error = DictionaryError;

    fn try_from(v: &'a Value) -> Result<Self, Self::Error> {
        match v {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Dictionary {
    type Error = DictionaryError;

    fn try_from(v: &'a Value) -> Result<Self, Self::Error> {
        match v {
            Value::Dictionary(d) => Ok(d),
            other => Err(other.mismatch("dictionary")),
        }
    }
}

/// Look up a required parameter.
pub fn get_value<'a>(dict: &'a Dictionary, key: &str) -> Result<&'a Value, DictionaryError> {
    dict.get(key)
        .ok_or_else(|| DictionaryError::MissingKey(Name::new(key)))
}

/// Look up a required parameter and convert it to `T`.
///
/// ```rust
/// use fascia_dictionary::{Dictionary, DictionaryError, Name, Value, get_value_as};
///
/// let mut params = Dictionary::new();
/// params.insert(Name::from("width"), Value::from(120));
///
/// assert_eq!(get_value_as::<f64>(&params, "width"), Ok(120.0));
/// assert_eq!(
///     get_value_as::<bool>(&params, "width"),
///     Err(DictionaryError::TypeMismatch { expected: "bool", found: "number" })
/// );
/// assert_eq!(
///     get_value_as::<f64>(&params, "height"),
///     Err(DictionaryError::MissingKey(Name::from("height")))
/// );
/// ```
pub fn get_value_as<'a, T>(dict: &'a Dictionary, key: &str) -> Result<T, DictionaryError>
where
    T: TryFrom<&'a Value, Error = DictionaryError>,
{
    T::try_from(get_value(dict, key)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn names_accept_strings() {
        let mut d = Dictionary::new();
        d.insert(Name::from("kind"), Value::from("button"));
        d.insert(Name::from("alt"), Value::from(Name::from("checkbox")));
        assert_eq!(get_value_as::<Name>(&d, "kind"), Ok(Name::from("button")));
        assert_eq!(get_value_as::<Name>(&d, "alt"), Ok(Name::from("checkbox")));
    }

    #[test]
    fn arrays_borrow_their_items() {
        let mut d = Dictionary::new();
        d.insert(
            Name::from("items"),
            Value::from(vec![Value::from(1), Value::from("two")]),
        );
        let items = get_value_as::<&[Value]>(&d, "items").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].kind(), "string");
    }

    #[test]
    fn empty_is_default_and_mismatches_everything() {
        let v = Value::default();
        assert!(v.is_empty());
        assert_eq!(
            bool::try_from(&v),
            Err(DictionaryError::TypeMismatch {
                expected: "bool",
                found: "empty",
            })
        );
    }
}
