//! Positional and keyword arguments for dynamic function calls.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::function::Function;
use crate::value::{Value, write_separated};

/// The arguments of one call: ordered positional values plus keyword values.
///
/// Keywords are kept sorted by name, so two argument sets that differ only in
/// the order their keywords were supplied are equal.
///
/// # Examples
///
/// ```rust
/// use exos::{Arguments, args};
///
/// let built = Arguments::new().arg(1).arg("two").kwarg("sep", "-");
/// assert_eq!(built, args![1, "two"; sep = "-"]);
/// assert_eq!(built.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    keywords: BTreeMap<String, Value>,
}

impl Arguments {
    /// Creates an empty argument set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            keywords: BTreeMap::new(),
        }
    }

    /// Creates an argument set from positional values only.
    pub fn from_positional<T, I>(values: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keywords: BTreeMap::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a keyword argument, replacing any earlier value under the same name.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    /// The positional arguments, in call order.
    #[inline]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// The keyword arguments, sorted by name.
    #[inline]
    pub const fn keywords(&self) -> &BTreeMap<String, Value> {
        &self.keywords
    }

    /// Number of positional arguments. Keywords are not counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// Returns `true` if there are neither positional nor keyword arguments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    /// The positional argument at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// The keyword argument called `name`.
    #[inline]
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.get(name)
    }

    /// Returns a new argument set with `later` applied after `self`.
    ///
    /// Positional arguments are appended; a keyword present in both takes the
    /// value from `later`. Neither input is modified.
    ///
    /// ```rust
    /// use exos::args;
    ///
    /// let merged = args![1; sep = ","].merge(&args![2; sep = ";"]);
    /// assert_eq!(merged, args![1, 2; sep = ";"]);
    /// ```
    #[must_use]
    pub fn merge(&self, later: &Self) -> Self {
        let mut merged = self.clone();
        merged.positional.extend(later.positional.iter().cloned());
        merged.keywords.extend(
            later
                .keywords
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        merged
    }

    #[cfg(feature = "compose")]
    pub(crate) fn into_parts(self) -> (Vec<Value>, BTreeMap<String, Value>) {
        (self.positional, self.keywords)
    }

    #[cfg(feature = "compose")]
    pub(crate) const fn from_parts(
        positional: Vec<Value>,
        keywords: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            positional,
            keywords,
        }
    }

    fn require(&self, index: usize) -> Result<&Value> {
        self.positional.get(index).ok_or(Error::ArgumentType {
            index,
            expected: "a value",
            found: "nothing",
        })
    }

    /// The positional argument at `index` as an integer.
    ///
    /// # Errors
    ///
    /// [`Error::ArgumentType`] if the argument is absent or not an integer.
    pub fn integer(&self, index: usize) -> Result<i128> {
        let value = self.require(index)?;
        value.as_integer().ok_or(Error::ArgumentType {
            index,
            expected: "integer",
            found: value.kind(),
        })
    }

    /// The positional argument at `index` as a float. Integers are widened.
    ///
    /// # Errors
    ///
    /// [`Error::ArgumentType`] if the argument is absent or not numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn float(&self, index: usize) -> Result<f64> {
        match self.require(index)? {
            Value::Float(value) => Ok(*value),
            Value::Integer(value) => Ok(*value as f64),
            other => Err(Error::ArgumentType {
                index,
                expected: "float",
                found: other.kind(),
            }),
        }
    }

    /// The positional argument at `index` as a string slice.
    ///
    /// # Errors
    ///
    /// [`Error::ArgumentType`] if the argument is absent or not text.
    pub fn text(&self, index: usize) -> Result<&str> {
        let value = self.require(index)?;
        value.as_str().ok_or(Error::ArgumentType {
            index,
            expected: "text",
            found: value.kind(),
        })
    }

    /// The positional argument at `index` as a function.
    ///
    /// # Errors
    ///
    /// [`Error::ArgumentType`] if the argument is absent or not a function.
    pub fn function(&self, index: usize) -> Result<&Function> {
        let value = self.require(index)?;
        value.as_function().ok_or(Error::ArgumentType {
            index,
            expected: "function",
            found: value.kind(),
        })
    }

    /// The keyword argument `name` as a string slice, or `default` when absent.
    ///
    /// # Errors
    ///
    /// [`Error::KeywordType`] if the keyword is present but not text.
    pub fn text_keyword_or<'a>(&'a self, name: &str, default: &'a str) -> Result<&'a str> {
        match self.keywords.get(name) {
            None => Ok(default),
            Some(Value::Text(value)) => Ok(value),
            Some(other) => Err(Error::KeywordType {
                name: name.to_owned(),
                expected: "text",
                found: other.kind(),
            }),
        }
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("(")?;
        write_separated(formatter, &self.positional)?;
        for (index, (name, value)) in self.keywords.iter().enumerate() {
            if index > 0 || !self.positional.is_empty() {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{name}={value}")?;
        }
        formatter.write_str(")")
    }
}

impl<T: Into<Value>> FromIterator<T> for Arguments {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from_positional(iterator)
    }
}

/// Builds an [`Arguments`] value.
///
/// Positional arguments come first, separated by commas; keyword arguments
/// follow a semicolon as `name = value` pairs. Every value goes through
/// `Into<Value>`.
///
/// # Examples
///
/// ```rust
/// use exos::args;
///
/// let positional = args![1, 2.5, "three"];
/// assert_eq!(positional.len(), 3);
///
/// let mixed = args!["foo", "bar"; prefix = ">"];
/// assert_eq!(mixed.keyword("prefix").and_then(|value| value.as_str()), Some(">"));
///
/// let keywords_only = args![; a = 1, b = 2];
/// assert_eq!(keywords_only.len(), 0);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Arguments::new()
    };
    ($($value:expr),* ; $($name:ident = $keyword:expr),+ $(,)?) => {
        $crate::Arguments::new()
            $(.arg($value))*
            $(.kwarg(::core::stringify!($name), $keyword))+
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Arguments::new()$(.arg($value))+
    };
}
