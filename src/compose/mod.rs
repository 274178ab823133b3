//! Function decorators: currying, memoization and composition.
//!
//! This module turns plain [`Function`](crate::Function) values into richer
//! callables without changing what they compute.
//!
//! # Overview
//!
//! - [`curry`] / [`Curried`]: accumulate arguments across calls until the
//!   wrapped function's arity is met
//! - [`memoize`] / [`Memoized`]: remember results per argument set
//! - [`flip`]: swap the first two positional arguments
//! - [`compose`] / [`pipe`]: chain functions right-to-left / left-to-right
//!
//! Decorators stack: a memoized function can be curried and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use exos::compose::{curry, memoize};
//! use exos::{Function, Signature, Value, args};
//!
//! let concat = Function::new("concat", Signature::new(2).with_optional(1), |arguments| {
//!     let prefix = arguments.text_keyword_or("prefix", "")?;
//!     Ok(Value::from(format!("{prefix}{}{}", arguments.text(0)?, arguments.text(1)?)))
//! });
//!
//! let cached = curry(memoize(concat).into_function());
//! let foo = cached.call(&args!["foo"; prefix = ">"])?;
//! let foo = foo.as_function().expect("one argument short");
//! assert_eq!(foo.call(&args!["bar"])?, Value::from(">foobar"));
//! # Ok::<(), exos::Error>(())
//! ```
//!
//! # Laws
//!
//! ## Curry Laws
//!
//! - **Equivalence**: `curry(f)(a)(b) == curry(f)(a, b) == f(a, b)`
//!
//! ## Memoize Laws
//!
//! - **Transparency**: `memoize(f)(args) == f(args)` for pure `f`
//! - **At most once**: `f` runs once per distinct key

mod combinators;
mod curry;
mod memoize;

pub use combinators::{compose, flip, pipe};
pub use curry::{Application, Curried, curry};
pub use memoize::{Cache, KeywordKey, Memoized, memoize, positional_key};
