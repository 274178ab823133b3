//! Dynamic values passed to and returned from wrapped functions.
//!
//! Curried and memoized functions accept arbitrary combinations of positional
//! and keyword arguments, so they traffic in [`Value`], a small dynamic value
//! model. Every value has a canonical *rendering* (its `Display` output)
//! which the memoizing cache uses as its key material.
//!
//! # Rendering
//!
//! | Value                   | Rendering             |
//! |-------------------------|-----------------------|
//! | `Null`                  | `null`                |
//! | `Bool(true)`            | `true`                |
//! | `Integer(42)`           | `42`                  |
//! | `Float(1.0)`            | `1.0`                 |
//! | `Text("a")`             | `"a"`                 |
//! | `List([1, 2])`          | `[1, 2]`              |
//! | `Record({a: 1})`        | `{a: 1}`              |
//! | `Function(add)`         | `<function add>`      |
//!
//! # Examples
//!
//! ```rust
//! use exos::Value;
//!
//! let value = Value::record([("name", Value::from("exos")), ("stars", Value::from(3))]);
//! assert_eq!(value.to_string(), r#"{name: "exos", stars: 3}"#);
//! ```

#[cfg(feature = "serde")]
mod serialization;

use std::collections::BTreeMap;
use std::fmt;

use crate::function::Function;

/// A dynamically typed value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A 128-bit signed integer.
    Integer(i128),
    /// A double precision float.
    Float(f64),
    /// A UTF-8 string.
    Text(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// Named fields; each entry is an attribute of the record.
    Record(BTreeMap<String, Value>),
    /// A callable.
    Function(Function),
}

impl Value {
    /// Builds a [`Value::Record`] from name/value pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exos::Value;
    ///
    /// let point = Value::record([("x", 1), ("y", 2)]);
    /// assert_eq!(point.get("x"), Some(&Value::Integer(1)));
    /// ```
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Returns a short name for the kind of this value, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Record(_) => "record",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` if this is [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Integer`].
    pub const fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Value::Float`].
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [`Value::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the fields if this is a [`Value::Record`].
    pub const fn as_record(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the function if this is a [`Value::Function`].
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Looks up a field of a [`Value::Record`]. Any other value has no fields.
    pub fn get(&self, name: &str) -> Option<&Self> {
        self.as_record().and_then(|fields| fields.get(name))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Record(left), Self::Record(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
            Self::Text(value) => write!(formatter, "{value:?}"),
            Self::List(values) => {
                formatter.write_str("[")?;
                write_separated(formatter, values)?;
                formatter.write_str("]")
            }
            Self::Record(fields) => {
                formatter.write_str("{")?;
                for (index, (name, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{name}: {value}")?;
                }
                formatter.write_str("}")
            }
            Self::Function(function) => write!(formatter, "{function}"),
        }
    }
}

/// Writes values separated by `", "`.
pub(crate) fn write_separated(formatter: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{value}")?;
    }
    Ok(())
}

macro_rules! impl_from_integer {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Value {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Function> for Value {
    #[inline]
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    #[inline]
    fn from(fields: BTreeMap<String, Self>) -> Self {
        Self::Record(fields)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::List(iterator.into_iter().map(Into::into).collect())
    }
}
