//! Currying of dynamic functions.
//!
//! A curried function collects positional and keyword arguments across any
//! number of calls and invokes the wrapped function once the positional count
//! reaches its arity (the number of *required* parameters). Parameters with
//! defaults do not count towards the arity but may still be supplied.
//!
//! # Design Decisions
//!
//! Every incomplete call produces a fresh [`Curried`] holding the merged
//! arguments; the receiver is never touched, so a partial application can be
//! reused any number of times.
//!
//! Supplying more positional arguments than remain is passed straight
//! through: the wrapped function receives everything and its own signature
//! check decides the outcome. Nothing is clamped or dropped.

use tracing::trace;

use crate::error::Result;
use crate::function::{Arguments, Function, Signature};
use crate::value::Value;

/// A function together with the arguments supplied to it so far.
///
/// # Examples
///
/// ```rust
/// use exos::compose::{Application, Curried};
/// use exos::{Function, Signature, Value, args};
///
/// let volume = Function::new("volume", Signature::new(3), |arguments| {
///     Ok(Value::Integer(arguments.integer(0)? * arguments.integer(1)? * arguments.integer(2)?))
/// });
///
/// let curried = Curried::new(volume);
/// let Application::Partial(with_width) = curried.call(&args![2])? else {
///     unreachable!()
/// };
/// assert_eq!(with_width.remaining(), 2);
/// assert_eq!(with_width.call(&args![3, 4])?.into_value(), Value::Integer(24));
/// # Ok::<(), exos::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Curried {
    function: Function,
    bound: Arguments,
}

/// The outcome of calling a [`Curried`] function.
#[derive(Clone, Debug)]
pub enum Application {
    /// The arity was reached and the wrapped function returned this value.
    Complete(Value),
    /// More positional arguments are needed.
    Partial(Curried),
}

impl Application {
    /// Converts the outcome into a value; a partial becomes a [`Value::Function`].
    pub fn into_value(self) -> Value {
        match self {
            Self::Complete(value) => value,
            Self::Partial(curried) => Value::Function(curried.into_function()),
        }
    }

    /// Returns `true` if the wrapped function was invoked.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

impl Curried {
    /// Starts currying `function` with no arguments bound.
    pub const fn new(function: Function) -> Self {
        Self {
            function,
            bound: Arguments::new(),
        }
    }

    pub(crate) const fn with_bound(function: Function, bound: Arguments) -> Self {
        Self { function, bound }
    }

    /// The wrapped function.
    pub const fn function(&self) -> &Function {
        &self.function
    }

    /// The arguments accumulated so far.
    pub const fn bound(&self) -> &Arguments {
        &self.bound
    }

    /// Positional arguments still needed before the function is invoked.
    pub fn remaining(&self) -> usize {
        self.function.arity().saturating_sub(self.bound.len())
    }

    /// Supplies more arguments.
    ///
    /// With exactly [`remaining`](Self::remaining) positional arguments the
    /// wrapped function is invoked; with fewer, a new partial application is
    /// returned; with more, the wrapped function is invoked anyway and its
    /// own error (if any) is returned untouched.
    ///
    /// # Errors
    ///
    /// Any error from the wrapped function once it is invoked.
    pub fn call(&self, arguments: &Arguments) -> Result<Application> {
        let remaining = self.remaining();
        let merged = self.bound.merge(arguments);

        if arguments.len() < remaining {
            trace!(
                function = self.function.name(),
                bound = merged.len(),
                remaining = remaining - arguments.len(),
                "curry accumulated arguments"
            );
            return Ok(Application::Partial(Self::with_bound(
                self.function.clone(),
                merged,
            )));
        }

        self.function.call(&merged).map(Application::Complete)
    }

    /// Exposes this partial application as a plain variadic [`Function`].
    ///
    /// Calling it yields either the final value or, while arguments are still
    /// missing, a [`Value::Function`] holding the next partial application.
    pub fn into_function(self) -> Function {
        let name = self.function.name().to_owned();
        Function::new(name, Signature::new(0).variadic(), move |arguments| {
            self.call(arguments).map(Application::into_value)
        })
    }
}

/// Curries `function`.
///
/// `curry(f)(a)(b)`, `curry(f)(a, b)` and `f(a, b)` all produce the same value.
///
/// # Examples
///
/// ```rust
/// use exos::compose::curry;
/// use exos::{Function, Signature, Value, args};
///
/// let add = Function::new("add", Signature::new(2), |arguments| {
///     Ok(Value::Integer(arguments.integer(0)? + arguments.integer(1)?))
/// });
///
/// let add3 = curry(add.clone()).call(&args![3])?;
/// let add3 = add3.as_function().expect("partial application");
/// assert_eq!(add3.call(&args![5])?, Value::Integer(8));
/// assert_eq!(curry(add).call(&args![3, 5])?, Value::Integer(8));
/// # Ok::<(), exos::Error>(())
/// ```
pub fn curry(function: Function) -> Function {
    Curried::new(function).into_function()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::error::Error;
    use rstest::rstest;

    fn product() -> Function {
        Function::new("product", Signature::new(3), |arguments| {
            Ok(Value::Integer(
                arguments.integer(0)? * arguments.integer(1)? * arguments.integer(2)?,
            ))
        })
    }

    #[rstest]
    fn partial_does_not_mutate_receiver() {
        let curried = Curried::new(product());
        let _ = curried.call(&args![2]);
        assert_eq!(curried.remaining(), 3);
        assert!(curried.bound().is_empty());
    }

    #[rstest]
    fn zero_arity_invokes_immediately() {
        let constant = Function::new("answer", Signature::new(0), |_| Ok(Value::Integer(42)));
        let outcome = Curried::new(constant).call(&Arguments::new());
        assert!(matches!(outcome, Ok(Application::Complete(Value::Integer(42)))));
    }

    #[rstest]
    fn surplus_arguments_reach_the_function() {
        let outcome = Curried::new(product()).call(&args![1, 2, 3, 4]);
        assert_eq!(
            outcome.map(Application::into_value),
            Err(Error::TooManyArguments {
                function: "product".into(),
                accepted: 3,
                supplied: 4,
            })
        );
    }
}
