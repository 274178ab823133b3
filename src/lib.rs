//! # exos
//!
//! Expressions over statements: a small toolbox of functional utilities.
//!
//! ## Overview
//!
//! - **Dynamic calls**: [`Value`], [`Arguments`] and [`Function`] model
//!   callables taking arbitrary positional and keyword arguments, with an
//!   explicit [`Signature`]
//! - **Composition**: [`curry`](compose::curry), [`memoize`](compose::memoize),
//!   [`flip`](compose::flip), [`compose`](compose::compose) and
//!   [`pipe`](compose::pipe)
//! - **Attribute paths**: [`resolve`](attribute::resolve) and friends walk
//!   dotted paths like `"user.email"` through nested objects
//! - **Control**: [`when!`], `Either` and `Maybe`
//! - **Collections**: `each`, `flatten`, `extend`, `reduce_right` and a
//!   parallel `pmap`
//!
//! ## Feature Flags
//!
//! - `compose`: currying, memoization and function combinators
//! - `attribute`: the attribute-path resolver and mapping helpers
//! - `derive`: `#[derive(Attributes)]` for user structs
//! - `control`: `when!`, `Either`, `Maybe`
//! - `collection`: collection helpers
//! - `rayon`: parallel `pmap` / `peach`
//! - `serde`: `Serialize` / `Deserialize` for [`Value`]
//! - `fxhash`: faster hashing for memoization caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use exos::prelude::*;
//! use exos::args;
//!
//! let add = Function::new("add", Signature::new(3), |arguments| {
//!     Ok(Value::from(arguments.integer(0)? + arguments.integer(1)? + arguments.integer(2)?))
//! });
//!
//! let curried = Curried::new(add);
//! let Application::Partial(add_one) = curried.call(&args![1])? else {
//!     unreachable!()
//! };
//! assert_eq!(add_one.call(&args![2, 3])?.into_value(), Value::from(6));
//! # Ok::<(), exos::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use exos::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::function::{Arguments, Function, Signature};
    pub use crate::value::Value;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "attribute")]
    pub use crate::attribute::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

pub mod error;
pub mod function;
pub mod value;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "attribute")]
pub mod attribute;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collection")]
pub mod collection;

pub use error::{Error, Result};
pub use function::{Arguments, Function, Signature};
pub use value::Value;
