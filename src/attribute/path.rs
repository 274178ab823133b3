//! Parsing and resolution of dotted attribute paths.

use std::any::{Any, type_name};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;
use tracing::debug;

use super::Attributes;
use crate::error::{Error, Result};

/// A dotted path such as `"user.address.city"`, split into its segments.
///
/// The empty string is the empty path, which resolves to the root object
/// itself. Any other string is split on every `.`, so `"a..b"` contains an
/// empty segment that no object has.
///
/// An `AttributePath` is also a mapper: [`extract`](Self::extract) applies it
/// to one object, which makes it the natural argument to `Iterator::map`.
///
/// # Examples
///
/// ```rust
/// use exos::attribute::AttributePath;
/// use exos::Value;
///
/// let path: AttributePath = "user.email".parse().unwrap_or_else(|never| match never {});
/// assert_eq!(path.segments().collect::<Vec<_>>(), vec!["user", "email"]);
///
/// let accounts = vec![
///     Value::record([("user", Value::record([("email", "a@x")]))]),
///     Value::record([("user", Value::record([("email", "b@x")]))]),
/// ];
/// let emails: Vec<String> = accounts
///     .iter()
///     .filter_map(|account| path.extract_as::<Value>(account).ok())
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(emails, vec!["\"a@x\"", "\"b@x\""]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributePath {
    source: String,
    segments: SmallVec<[String; 4]>,
}

impl AttributePath {
    /// Splits `path` into segments.
    pub fn new(path: &str) -> Self {
        let segments = if path.is_empty() {
            SmallVec::new()
        } else {
            path.split('.').map(str::to_owned).collect()
        };
        Self {
            source: path.to_owned(),
            segments,
        }
    }

    /// The path as originally written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The segments, left to right.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the empty path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Walks the path from `root`, stopping at the first missing segment.
    fn walk<'a>(&self, root: &'a dyn Attributes) -> Result<&'a dyn Attributes, &str> {
        self.segments.iter().try_fold(root, |current, segment| {
            current.attribute(segment).ok_or(segment.as_str())
        })
    }

    /// Resolves the path against `root`.
    ///
    /// # Errors
    ///
    /// [`Error::AttributeMissing`] naming the first segment that does not
    /// exist. No partial result is returned.
    pub fn extract<'a>(&self, root: &'a dyn Attributes) -> Result<&'a dyn Attributes> {
        self.walk(root).map_err(|segment| Error::AttributeMissing {
            path: self.source.clone(),
            segment: segment.to_owned(),
        })
    }

    /// Resolves the path against `root`, or returns `default` if any segment
    /// is missing.
    ///
    /// The default replaces the result of the whole path, not just the
    /// missing step.
    pub fn extract_or<'a>(
        &self,
        root: &'a dyn Attributes,
        default: &'a dyn Attributes,
    ) -> &'a dyn Attributes {
        self.walk(root).unwrap_or_else(|segment| {
            debug!(path = %self.source, segment, "attribute missing, substituting default");
            default
        })
    }

    /// Resolves the path and downcasts the result to `T`.
    ///
    /// # Errors
    ///
    /// [`Error::AttributeMissing`] as for [`extract`](Self::extract), or
    /// [`Error::AttributeType`] if the attribute is not a `T`.
    pub fn extract_as<'a, T: Any>(&self, root: &'a dyn Attributes) -> Result<&'a T> {
        self.extract(root)?
            .downcast_ref::<T>()
            .ok_or_else(|| Error::AttributeType {
                path: self.source.clone(),
                expected: type_name::<T>(),
            })
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.source)
    }
}

impl FromStr for AttributePath {
    type Err = Infallible;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(path))
    }
}

impl From<&str> for AttributePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Resolves the dotted `path` against `root`.
///
/// # Errors
///
/// [`Error::AttributeMissing`] if any segment does not exist.
///
/// # Examples
///
/// ```rust
/// use exos::attribute::resolve;
/// use exos::{Error, Value};
///
/// let order = Value::record([("customer", Value::record([("name", "Ada")]))]);
/// assert!(resolve(&order, "customer.name").is_ok());
/// assert_eq!(
///     resolve(&order, "customer.phone").err(),
///     Some(Error::AttributeMissing {
///         path: "customer.phone".into(),
///         segment: "phone".into(),
///     })
/// );
/// ```
pub fn resolve<'a>(root: &'a dyn Attributes, path: &str) -> Result<&'a dyn Attributes> {
    AttributePath::new(path).extract(root)
}

/// Resolves the dotted `path` against `root`, returning `default` if any
/// segment is missing.
pub fn resolve_or<'a>(
    root: &'a dyn Attributes,
    path: &str,
    default: &'a dyn Attributes,
) -> &'a dyn Attributes {
    AttributePath::new(path).extract_or(root, default)
}

/// Resolves the dotted `path` against `root` and downcasts the result to `T`.
///
/// # Errors
///
/// [`Error::AttributeMissing`] or [`Error::AttributeType`].
pub fn resolve_as<'a, T: Any>(root: &'a dyn Attributes, path: &str) -> Result<&'a T> {
    AttributePath::new(path).extract_as(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use rstest::rstest;

    fn account() -> Value {
        Value::record([(
            "user",
            Value::record([("email", Value::from("ada@example.com"))]),
        )])
    }

    #[rstest]
    #[case("", 0)]
    #[case("a", 1)]
    #[case("a.b.c", 3)]
    #[case("a..b", 3)]
    fn splits_on_every_dot(#[case] path: &str, #[case] expected: usize) {
        assert_eq!(AttributePath::new(path).len(), expected);
    }

    #[rstest]
    fn empty_path_returns_root() {
        let root = account();
        let resolved = resolve_as::<Value>(&root, "");
        assert_eq!(resolved, Ok(&root));
    }

    #[rstest]
    fn wrong_type_is_reported() {
        let root = account();
        assert_eq!(
            resolve_as::<String>(&root, "user.email"),
            Err(Error::AttributeType {
                path: "user.email".into(),
                expected: type_name::<String>(),
            })
        );
    }

    #[rstest]
    fn default_replaces_whole_path() {
        let root = account();
        let fallback = 0_u8;
        let resolved = resolve_or(&root, "user.missing.deeper", &fallback);
        assert_eq!(resolved.downcast_ref::<u8>(), Some(&0));
    }
}
