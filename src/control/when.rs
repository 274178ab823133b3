//! Declarative multi-way branching.
//!
//! [`When`] and the [`when!`](crate::when) macro evaluate predicate/value
//! pairs in order and produce the value of the first pair whose predicate
//! holds. An optional fallback covers the case where none does; without one,
//! the dispatch fails with [`Error::NonExhaustivePattern`].
//!
//! Once a predicate holds, the remaining predicates are never evaluated, and
//! only the chosen value is produced. Use the lazy forms
//! ([`When::case_with`], [`When::otherwise_with`]) when building a predicate
//! or value is expensive or has effects.

use crate::error::{Error, Result};

type Thunk<'a, T> = Box<dyn FnOnce() -> T + 'a>;

enum Condition<'a> {
    Eager(bool),
    Lazy(Thunk<'a, bool>),
}

impl Condition<'_> {
    fn holds(self) -> bool {
        match self {
            Self::Eager(value) => value,
            Self::Lazy(predicate) => predicate(),
        }
    }
}

enum Outcome<'a, T> {
    Eager(T),
    Lazy(Thunk<'a, T>),
}

impl<T> Outcome<'_, T> {
    fn produce(self) -> T {
        match self {
            Self::Eager(value) => value,
            Self::Lazy(value) => value(),
        }
    }
}

/// An ordered list of predicate/value pairs with an optional fallback.
///
/// # Examples
///
/// ```rust
/// use exos::control::When;
///
/// let a = 42;
/// let answer = When::new()
///     .case(a < 4, "less than 4")
///     .case(a < 10, "less than 10")
///     .case(a == 42, "the answer!")
///     .evaluate()?;
/// assert_eq!(answer, "the answer!");
/// # Ok::<(), exos::Error>(())
/// ```
///
/// Lazy predicates stop being evaluated at the first match:
///
/// ```rust
/// use std::cell::Cell;
/// use exos::control::When;
///
/// let state = Cell::new(40);
/// let increment = || {
///     state.set(state.get() + 1);
///     state.get()
/// };
///
/// let result = When::new()
///     .case_with(|| increment() == 42, || "first try!")
///     .case_with(|| increment() == 42, || "second try!")
///     .case_with(|| increment() == 42, || "third try!")
///     .otherwise("needed more tries")
///     .evaluate()?;
///
/// assert_eq!(result, "second try!");
/// assert_eq!(state.get(), 42);
/// # Ok::<(), exos::Error>(())
/// ```
pub struct When<'a, T> {
    arms: Vec<(Condition<'a>, Outcome<'a, T>)>,
    fallback: Option<Outcome<'a, T>>,
}

impl<'a, T> When<'a, T> {
    /// An empty dispatch. Evaluating it fails with `NonExhaustivePattern`.
    pub const fn new() -> Self {
        Self {
            arms: Vec::new(),
            fallback: None,
        }
    }

    /// Adds an already evaluated predicate/value pair.
    #[must_use]
    pub fn case(mut self, predicate: bool, value: T) -> Self {
        self.arms
            .push((Condition::Eager(predicate), Outcome::Eager(value)));
        self
    }

    /// Adds a pair whose predicate and value are computed only when reached.
    #[must_use]
    pub fn case_with<P, V>(mut self, predicate: P, value: V) -> Self
    where
        P: FnOnce() -> bool + 'a,
        V: FnOnce() -> T + 'a,
    {
        self.arms.push((
            Condition::Lazy(Box::new(predicate)),
            Outcome::Lazy(Box::new(value)),
        ));
        self
    }

    /// Sets the value used when no predicate holds.
    #[must_use]
    pub fn otherwise(mut self, value: T) -> Self {
        self.fallback = Some(Outcome::Eager(value));
        self
    }

    /// Sets a lazily computed value used when no predicate holds.
    #[must_use]
    pub fn otherwise_with<V>(mut self, value: V) -> Self
    where
        V: FnOnce() -> T + 'a,
    {
        self.fallback = Some(Outcome::Lazy(Box::new(value)));
        self
    }

    /// Runs the dispatch.
    ///
    /// # Errors
    ///
    /// [`Error::NonExhaustivePattern`] if no predicate holds and there is no
    /// fallback.
    pub fn evaluate(self) -> Result<T> {
        for (condition, outcome) in self.arms {
            if condition.holds() {
                return Ok(outcome.produce());
            }
        }
        self.fallback
            .map(Outcome::produce)
            .ok_or(Error::NonExhaustivePattern)
    }
}

impl<T> Default for When<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Expression form of [`When`](crate::control::When).
///
/// Arms are written `predicate => value`; a final `else => value` arm is the
/// fallback. Evaluates to `Result<T, exos::Error>`. Predicates and values are
/// evaluated lazily, in order.
///
/// # Examples
///
/// ```rust
/// use exos::when;
///
/// let a = 42;
/// let c = when! {
///     a < 10 => "less than 10",
///     a == 42 => "the answer!",
///     else => "something else",
/// }?;
/// assert_eq!(c, "the answer!");
///
/// let missing: Result<&str, exos::Error> = when! { a < 0 => "negative" };
/// assert_eq!(missing, Err(exos::Error::NonExhaustivePattern));
/// # Ok::<(), exos::Error>(())
/// ```
#[macro_export]
macro_rules! when {
    (else => $fallback:expr $(,)?) => {
        ::core::result::Result::<_, $crate::Error>::Ok($fallback)
    };
    () => {
        ::core::result::Result::Err($crate::Error::NonExhaustivePattern)
    };
    ($predicate:expr => $value:expr $(, $($rest:tt)*)?) => {
        if $predicate {
            ::core::result::Result::<_, $crate::Error>::Ok($value)
        } else {
            $crate::when!($($($rest)*)?)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_dispatch_is_non_exhaustive() {
        assert_eq!(When::<i32>::new().evaluate(), Err(Error::NonExhaustivePattern));
    }

    #[rstest]
    fn lazy_fallback_only_runs_when_reached() {
        let result = When::new()
            .case(true, 1)
            .otherwise_with(|| panic!("fallback must not run"))
            .evaluate();
        assert_eq!(result, Ok(1));
    }

    #[rstest]
    #[case(3, "small")]
    #[case(30, "medium")]
    #[case(300, "large")]
    fn macro_picks_first_match(#[case] n: i32, #[case] expected: &str) {
        let size = crate::when! {
            n < 10 => "small",
            n < 100 => "medium",
            else => "large",
        };
        assert_eq!(size, Ok(expected));
    }
}
