//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` holds a `Left(L)` or a `Right(R)`. By convention `Right`
//! carries the successful value and `Left` the short-circuiting one: [`bind`]
//! transforms a `Right` and passes a `Left` through untouched.
//!
//! [`bind`]: Either::bind
//!
//! # Examples
//!
//! ```rust
//! use exos::control::Either;
//!
//! let right: Either<i32, i32> = Either::Right(6);
//! let left: Either<i32, i32> = Either::Left(6);
//!
//! assert_eq!(right.bind(|x| x * 7), Either::Right(42));
//! assert_eq!(left.bind(|x| x * 7), Either::Left(6));
//! assert_eq!(Either::<i32, &str>::Right("hello").to_string(), "Right hello");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The short-circuiting alternative.
    Left(L),
    /// The alternative that [`bind`](Either::bind) transforms.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies `function` to a `Right` value and keeps the result on the right;
    /// a `Left` is returned as it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exos::control::Either;
    ///
    /// let parsed: Either<String, i32> = Either::Right(20);
    /// assert_eq!(parsed.bind(|n| n + 1).bind(|n| n * 2), Either::Right(42));
    /// ```
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to a `Right` value that may itself short-circuit.
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies `function` to a `Left` value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Collapses both alternatives into one value.
    ///
    /// ```rust
    /// use exos::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(3);
    /// let described = value.fold(|n| format!("number {n}"), |s| format!("text {s}"));
    /// assert_eq!(described, "number 3");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}

impl<T> Either<T, T> {
    /// The held value, whichever side it is on.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left {value}"),
            Self::Right(value) => write!(formatter, "Right {value}"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
