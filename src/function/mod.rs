//! Dynamic callables with an explicitly declared signature.
//!
//! Rust closures cannot be asked how many parameters they take, so a
//! [`Function`] carries a [`Signature`] supplied by whoever builds it. The
//! signature is what currying uses as the arity, and what every call is
//! checked against before the body runs.
//!
//! # Examples
//!
//! ```rust
//! use exos::{Function, Signature, Value, args};
//!
//! let concat = Function::new("concat", Signature::new(2).with_optional(1), |arguments| {
//!     let prefix = arguments.get(2).and_then(Value::as_str).unwrap_or("");
//!     Ok(Value::from(format!("{prefix}{}{}", arguments.text(0)?, arguments.text(1)?)))
//! });
//!
//! assert_eq!(concat.arity(), 2);
//! assert_eq!(concat.call(&args!["foo", "bar"]), Ok(Value::from("foobar")));
//! assert_eq!(concat.call(&args!["foo", "bar", ">"]), Ok(Value::from(">foobar")));
//! assert!(concat.call(&args!["foo"]).is_err());
//! ```

mod arguments;

pub use arguments::Arguments;

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value::Value;

/// The declared positional parameters of a [`Function`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    required: usize,
    optional: usize,
    variadic: bool,
}

impl Signature {
    /// A signature with `required` parameters and nothing else.
    #[inline]
    pub const fn new(required: usize) -> Self {
        Self {
            required,
            optional: 0,
            variadic: false,
        }
    }

    /// Declares `optional` trailing parameters that carry defaults.
    #[inline]
    #[must_use]
    pub const fn with_optional(mut self, optional: usize) -> Self {
        self.optional = optional;
        self
    }

    /// Accepts any number of positional arguments past the declared ones.
    #[inline]
    #[must_use]
    pub const fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Number of parameters without defaults; this is the arity.
    #[inline]
    pub const fn required(&self) -> usize {
        self.required
    }

    /// Number of parameters with defaults.
    #[inline]
    pub const fn optional(&self) -> usize {
        self.optional
    }

    /// Whether extra positional arguments are accepted.
    #[inline]
    pub const fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// The largest accepted positional count, or `None` when variadic.
    #[inline]
    pub const fn accepts_at_most(&self) -> Option<usize> {
        if self.variadic {
            None
        } else {
            Some(self.required + self.optional)
        }
    }

    /// Checks a positional count against this signature.
    ///
    /// # Errors
    ///
    /// [`Error::MissingArguments`] below the required count,
    /// [`Error::TooManyArguments`] above the accepted count.
    pub fn check(&self, function: &str, supplied: usize) -> Result<()> {
        if supplied < self.required {
            return Err(Error::MissingArguments {
                function: function.to_owned(),
                required: self.required,
                supplied,
            });
        }
        match self.accepts_at_most() {
            Some(accepted) if supplied > accepted => Err(Error::TooManyArguments {
                function: function.to_owned(),
                accepted,
                supplied,
            }),
            _ => Ok(()),
        }
    }
}

type Body = dyn Fn(&Arguments) -> Result<Value> + Send + Sync;

struct Inner {
    name: String,
    signature: Signature,
    body: Box<Body>,
}

/// A named callable over [`Value`]s.
///
/// Cloning a `Function` is cheap and yields a handle to the same callable.
#[derive(Clone)]
pub struct Function {
    inner: Arc<Inner>,
}

impl Function {
    /// Wraps `body` as a function called `name` with the given signature.
    pub fn new<F>(name: impl Into<String>, signature: Signature, body: F) -> Self
    where
        F: Fn(&Arguments) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                signature,
                body: Box::new(body),
            }),
        }
    }

    /// The identity function: returns its single positional argument.
    pub fn identity() -> Self {
        Self::new("identity", Signature::new(1), |arguments| {
            Ok(arguments.get(0).cloned().unwrap_or_default())
        })
    }

    /// The function's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The declared signature.
    #[inline]
    pub fn signature(&self) -> Signature {
        self.inner.signature
    }

    /// Number of required positional parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.inner.signature.required()
    }

    /// Calls the function after checking the positional count.
    ///
    /// # Errors
    ///
    /// The arity errors of [`Signature::check`], or whatever the body returns.
    pub fn call(&self, arguments: &Arguments) -> Result<Value> {
        self.inner
            .signature
            .check(&self.inner.name, arguments.len())?;
        (self.inner.body)(arguments)
    }

    /// Returns `true` if both handles refer to the same callable.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<function {}>", self.inner.name)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.inner.name)
            .field("signature", &self.inner.signature)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use rstest::rstest;

    fn add() -> Function {
        Function::new("add", Signature::new(2), |arguments| {
            Ok(Value::Integer(arguments.integer(0)? + arguments.integer(1)?))
        })
    }

    #[rstest]
    fn calls_body_with_arguments() {
        assert_eq!(add().call(&args![2, 3]), Ok(Value::Integer(5)));
    }

    #[rstest]
    #[case(args![1], Error::MissingArguments { function: "add".into(), required: 2, supplied: 1 })]
    #[case(args![1, 2, 3], Error::TooManyArguments { function: "add".into(), accepted: 2, supplied: 3 })]
    fn rejects_wrong_positional_count(#[case] arguments: Arguments, #[case] expected: Error) {
        assert_eq!(add().call(&arguments), Err(expected));
    }

    #[rstest]
    fn variadic_accepts_anything_past_required() {
        let signature = Signature::new(1).variadic();
        assert!(signature.check("f", 10).is_ok());
        assert!(signature.check("f", 0).is_err());
    }

    #[rstest]
    fn clones_share_identity() {
        let function = add();
        assert!(function.ptr_eq(&function.clone()));
        assert!(!function.ptr_eq(&add()));
        assert_eq!(function.to_string(), "<function add>");
    }
}
