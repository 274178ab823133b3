//! Dotted attribute paths over arbitrary objects.
//!
//! An object takes part in path resolution by implementing [`Attributes`]:
//! given a name it hands back the attribute of that name, itself something
//! with attributes. A path such as `"owner.address.city"` is resolved by
//! looking up each segment on the result of the previous one.
//!
//! # Overview
//!
//! - [`Attributes`]: the lookup trait, implemented for [`Value`] records,
//!   string-keyed maps, smart pointers, `Option` and scalars; derive it for
//!   your own structs with `#[derive(Attributes)]` (feature `derive`)
//! - [`AttributePath`]: a parsed dotted path, also usable as a mapper
//! - [`resolve`], [`resolve_or`], [`resolve_as`]: one-shot resolution
//! - [`map_attr`], [`zip_with_attr`], [`map_method`], [`each_method`]:
//!   resolve paths across a collection
//!
//! # Examples
//!
//! ```rust
//! use exos::attribute::{resolve, resolve_or};
//! use exos::Value;
//!
//! let account = Value::record([
//!     ("user", Value::record([("email", "ada@example.com")])),
//! ]);
//!
//! let email = resolve(&account, "user.email")?;
//! assert_eq!(email.downcast_ref::<Value>(), Some(&Value::from("ada@example.com")));
//!
//! let fallback = Value::from("unknown");
//! let phone = resolve_or(&account, "user.phone", &fallback);
//! assert_eq!(phone.downcast_ref::<Value>(), Some(&fallback));
//! # Ok::<(), exos::Error>(())
//! ```

mod mapping;
mod path;

pub use mapping::{each_method, map_attr, map_method, mattr, zip_with_attr};
pub use path::{AttributePath, resolve, resolve_as, resolve_or};

#[cfg(feature = "derive")]
pub use exos_derive::Attributes;

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::function::Function;
use crate::value::Value;

/// Named attribute lookup.
///
/// Implementations return `None` for names they do not have. Scalars have no
/// attributes at all; containers look the name up among their entries.
///
/// # Deriving
///
/// With the `derive` feature, `#[derive(Attributes)]` exposes every named
/// field of a struct (or every positional field as `"0"`, `"1"`, ... of a
/// tuple struct). Fields marked `#[attributes(skip)]` are hidden.
///
/// ```rust
/// use exos::attribute::{Attributes, resolve_as};
///
/// #[derive(Attributes)]
/// struct Engine {
///     horsepower: u32,
/// }
///
/// #[derive(Attributes)]
/// struct Car {
///     make: String,
///     engine: Engine,
/// }
///
/// let car = Car { make: "Volvo".into(), engine: Engine { horsepower: 250 } };
/// assert_eq!(resolve_as::<u32>(&car, "engine.horsepower")?, &250);
/// # Ok::<(), exos::Error>(())
/// ```
pub trait Attributes: Any + 'static {
    /// The attribute called `name`, if this object has one.
    fn attribute(&self, name: &str) -> Option<&dyn Attributes>;
}

impl dyn Attributes {
    /// Returns the concrete object if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref()
    }

    /// Returns `true` if the concrete object is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }
}

macro_rules! impl_leaf_attributes {
    ($($leaf:ty),* $(,)?) => {
        $(
            impl Attributes for $leaf {
                #[inline]
                fn attribute(&self, _name: &str) -> Option<&dyn Attributes> {
                    None
                }
            }
        )*
    };
}

impl_leaf_attributes!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
    Function,
);

impl<T: 'static> Attributes for Vec<T> {
    #[inline]
    fn attribute(&self, _name: &str) -> Option<&dyn Attributes> {
        None
    }
}

impl Attributes for Value {
    fn attribute(&self, name: &str) -> Option<&dyn Attributes> {
        self.get(name).map(|value| value as &dyn Attributes)
    }
}

impl<T: Attributes> Attributes for Option<T> {
    fn attribute(&self, name: &str) -> Option<&dyn Attributes> {
        self.as_ref()?.attribute(name)
    }
}

impl<T: Attributes + ?Sized> Attributes for Box<T> {
    fn attribute(&self, name: &str) -> Option<&dyn Attributes> {
        (**self).attribute(name)
    }
}

impl<T: Attributes + ?Sized> Attributes for Rc<T> {
    fn attribute(&self, name: &str) -> Option<&dyn Attributes> {
        (**self).attribute(name)
    }
}

impl<T: Attributes + ?Sized> Attributes for Arc<T> {
    fn attribute(&self, name: &str) -> Option<&dyn Attributes> {
        (**self).attribute(name)
    }
}

impl<V: Attributes> Attributes for BTreeMap<String, V> {
    fn attribute(&self, name: &str) -> Option<&dyn Attributes> {
        self.get(name).map(|value| value as &dyn Attributes)
    }
}

impl<V: Attributes, S: BuildHasher + 'static> Attributes for HashMap<String, V, S> {
    fn attribute(&self, name: &str) -> Option<&dyn Attributes> {
        self.get(name).map(|value| value as &dyn Attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn scalars_have_no_attributes() {
        assert!(42_i32.attribute("anything").is_none());
        assert!(String::from("text").attribute("len").is_none());
    }

    #[rstest]
    fn option_is_transparent() {
        let present = Some(Value::record([("a", 1)]));
        let absent: Option<Value> = None;

        let found = present.attribute("a").and_then(<dyn Attributes>::downcast_ref::<Value>);
        assert_eq!(found, Some(&Value::Integer(1)));
        assert!(absent.attribute("a").is_none());
    }

    #[rstest]
    fn maps_expose_entries() {
        let mut map = HashMap::new();
        map.insert("key".to_owned(), 7_u8);
        let found = map.attribute("key").and_then(<dyn Attributes>::downcast_ref::<u8>);
        assert_eq!(found, Some(&7));
    }

    #[rstest]
    fn downcast_checks_the_concrete_type() {
        let value: &dyn Attributes = &5_i64;
        assert!(value.is::<i64>());
        assert!(value.downcast_ref::<i32>().is_none());
    }
}
