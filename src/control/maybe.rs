//! Maybe type - an optional value with a `bind` that skips over `Nothing`.
//!
//! `Maybe<T>` is interchangeable with `Option<T>` through `From`; it exists so
//! chains of [`bind`](Maybe::bind) read the same way as for
//! [`Either`](super::Either).
//!
//! # Examples
//!
//! ```rust
//! use exos::control::Maybe;
//!
//! assert_eq!(Maybe::Just(6).bind(|x| x * 7), Maybe::Just(42));
//! assert_eq!(Maybe::<i32>::Nothing.bind(|x| x * 7), Maybe::Nothing);
//! assert_eq!(Maybe::Just(42).to_string(), "Just 42");
//! ```

use std::fmt;

/// A value that may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    #[default]
    Nothing,
}

impl<T> Maybe<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Applies `function` to a present value; `Nothing` stays `Nothing`.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies `function` to a present value, which may itself yield `Nothing`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// The present value, or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just {value}"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn converts_from_option() {
        assert_eq!(Maybe::from(Some(1)), Maybe::Just(1));
        assert_eq!(Maybe::<i32>::from(None), Maybe::Nothing);
        assert_eq!(Maybe::Just("x").into_option(), Some("x"));
    }

    #[rstest]
    fn nothing_renders_plainly() {
        assert_eq!(Maybe::<i32>::Nothing.to_string(), "Nothing");
    }
}
