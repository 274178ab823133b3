//! Control structures for expression-oriented code.
//!
//! - [`When`] / [`when!`](crate::when): first-match dispatch over predicates
//! - [`Either`]: one of two alternatives, with `bind` over the right side
//! - [`Maybe`]: an optional value, with `bind` over the present case
//!
//! # Examples
//!
//! ```rust
//! use exos::control::{Either, Maybe};
//! use exos::when;
//!
//! fn classify(n: i32) -> Either<String, i32> {
//!     let classified = when! {
//!         n < 0 => Either::Left(format!("{n} is negative")),
//!         else => Either::Right(n),
//!     };
//!     classified.unwrap_or_else(|error| Either::Left(error.to_string()))
//! }
//!
//! assert_eq!(classify(21).bind(|n| n * 2), Either::Right(42));
//! assert!(classify(-1).bind(|n| n * 2).is_left());
//! assert_eq!(Maybe::from(Some(6)).bind(|n| n * 7), Maybe::Just(42));
//! ```

mod either;
mod maybe;
mod when;

pub use either::Either;
pub use maybe::Maybe;
pub use when::When;
