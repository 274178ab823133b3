//! Attribute extraction across collections.

use crate::error::{Error, Result};
use crate::function::{Arguments, Function};
use crate::value::Value;

use super::{AttributePath, Attributes};

/// Returns a mapper that extracts `path` from an object.
///
/// `mattr("user.email")` is the dynamic equivalent of
/// `|account| &account.user.email`.
pub fn mattr(path: &str) -> AttributePath {
    AttributePath::new(path)
}

/// Lazily extracts `path` from every item.
///
/// # Examples
///
/// ```rust
/// use exos::attribute::map_attr;
/// use exos::Value;
///
/// let cars = vec![
///     Value::record([("price", 100)]),
///     Value::record([("price", 250)]),
/// ];
/// let prices: Vec<_> = map_attr("price", &cars)
///     .map(|price| price.map(|price| price.downcast_ref::<Value>().cloned()))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(prices, vec![Some(Value::from(100)), Some(Value::from(250))]);
/// # Ok::<(), exos::Error>(())
/// ```
pub fn map_attr<'a, T, I>(path: &str, items: I) -> impl Iterator<Item = Result<&'a dyn Attributes>>
where
    T: Attributes,
    I: IntoIterator<Item = &'a T>,
{
    let path = AttributePath::new(path);
    items.into_iter().map(move |item| path.extract(item))
}

/// Pairs every item with the attributes found at each of `paths`.
///
/// The `n`-th entry of each inner vector is the attribute at `paths[n]`.
///
/// # Errors
///
/// Stops at the first item missing one of the paths and returns
/// [`Error::AttributeMissing`].
///
/// # Examples
///
/// ```rust
/// use exos::attribute::zip_with_attr;
/// use exos::Value;
///
/// let objects = vec![
///     Value::record([("a", Value::from(1)), ("b", Value::from(2))]),
///     Value::record([("a", Value::from("4")), ("b", Value::from(5.0))]),
/// ];
/// let zipped = zip_with_attr(&objects, &["b"])?;
/// assert_eq!(zipped[1].1[0].downcast_ref::<Value>(), Some(&Value::from(5.0)));
/// # Ok::<(), exos::Error>(())
/// ```
pub fn zip_with_attr<'a, T: Attributes>(
    items: &'a [T],
    paths: &[&str],
) -> Result<Vec<(&'a T, Vec<&'a dyn Attributes>)>> {
    let paths: Vec<AttributePath> = paths.iter().copied().map(AttributePath::new).collect();
    items
        .iter()
        .map(|item| {
            let attributes = paths
                .iter()
                .map(|path| path.extract(item))
                .collect::<Result<Vec<_>>>()?;
            Ok((item, attributes))
        })
        .collect()
}

/// Calls the function found at `path` on every item, with the same arguments.
///
/// The attribute may be a [`Function`] or a [`Value::Function`].
///
/// # Examples
///
/// ```rust
/// use exos::attribute::map_method;
/// use exos::{Function, Signature, Value, args};
///
/// let greeter = |greeting: &'static str| {
///     Value::record([(
///         "greet",
///         Value::Function(Function::new("greet", Signature::new(1), move |arguments| {
///             Ok(Value::from(format!("{greeting}, {}", arguments.text(0)?)))
///         })),
///     )])
/// };
/// let greeters = vec![greeter("Hello"), greeter("Hi")];
///
/// let greetings = map_method("greet", args!["Ada"], &greeters).collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(greetings, vec![Value::from("Hello, Ada"), Value::from("Hi, Ada")]);
/// # Ok::<(), exos::Error>(())
/// ```
pub fn map_method<'a, T, I>(
    path: &str,
    arguments: Arguments,
    items: I,
) -> impl Iterator<Item = Result<Value>>
where
    T: Attributes,
    I: IntoIterator<Item = &'a T>,
{
    let path = AttributePath::new(path);
    items
        .into_iter()
        .map(move |item| invoke(&path, item, &arguments))
}

/// Calls the function found at `path` on every item for its effect.
///
/// # Errors
///
/// Stops at the first failing call and returns its error.
pub fn each_method<'a, T, I>(path: &str, arguments: Arguments, items: I) -> Result<()>
where
    T: Attributes,
    I: IntoIterator<Item = &'a T>,
{
    map_method(path, arguments, items).try_for_each(|outcome| outcome.map(drop))
}

fn invoke(path: &AttributePath, item: &dyn Attributes, arguments: &Arguments) -> Result<Value> {
    let attribute = path.extract(item)?;
    let function = attribute
        .downcast_ref::<Function>()
        .or_else(|| attribute.downcast_ref::<Value>().and_then(Value::as_function))
        .ok_or_else(|| Error::NotCallable {
            path: path.to_string(),
        })?;
    function.call(arguments)
}
