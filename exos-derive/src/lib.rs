//! Derive macro for exos attribute-path resolution.
//!
//! # Available Derive Macros
//!
//! - [`Attributes`]: exposes struct fields to `exos::attribute::resolve`
//!
//! # Example
//!
//! ```rust,ignore
//! use exos::attribute::{Attributes, resolve_as};
//!
//! #[derive(Attributes)]
//! struct Address {
//!     city: String,
//! }
//!
//! #[derive(Attributes)]
//! struct Person {
//!     name: String,
//!     address: Address,
//! }
//!
//! let person = Person {
//!     name: "Ada".into(),
//!     address: Address { city: "London".into() },
//! };
//! assert_eq!(resolve_as::<String>(&person, "address.city")?, "London");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attributes;

use proc_macro::TokenStream;

/// Derive macro implementing `exos::attribute::Attributes` for a struct.
///
/// Each field becomes an attribute under its own name; positional fields of a
/// tuple struct are named `"0"`, `"1"`, and so on. A unit struct has no
/// attributes.
///
/// # Field Options
///
/// - `#[attributes(skip)]`: the field is not exposed
/// - `#[attributes(rename = "other")]`: the field is exposed as `other`
///
/// # Requirements
///
/// - The type must be a struct without lifetime parameters
/// - Every exposed field type must implement `Attributes`
///
/// # Example
///
/// ```rust,ignore
/// use exos::attribute::{Attributes, resolve};
///
/// #[derive(Attributes)]
/// struct Session {
///     #[attributes(rename = "user")]
///     owner: String,
///     #[attributes(skip)]
///     token: Vec<u8>,
/// }
///
/// let session = Session { owner: "ada".into(), token: vec![1, 2, 3] };
/// assert!(resolve(&session, "user").is_ok());
/// assert!(resolve(&session, "token").is_err());
/// ```
///
/// # Generics
///
/// Type parameters receive a `'static` bound, and every exposed field type
/// must implement `Attributes`:
///
/// ```rust,ignore
/// #[derive(Attributes)]
/// struct Labelled<T> {
///     label: String,
///     value: T,
/// }
///
/// let labelled = Labelled { label: "answer".into(), value: 42_u8 };
/// assert_eq!(resolve_as::<u8>(&labelled, "value")?, &42);
/// ```
#[proc_macro_derive(Attributes, attributes(attributes))]
pub fn derive_attributes(input: TokenStream) -> TokenStream {
    attributes::derive_attributes_impl(input)
}
