//! Memoization for referentially transparent functions.
//!
//! A [`Memoized`] function computes its result at most once per distinct
//! argument set and answers repeated calls from its [`Cache`].
//!
//! # Keys
//!
//! The cache is two levels deep:
//!
//! - the outer key is the rendering of the positional arguments, e.g. `(1, "a")`;
//! - the inner key is a [`KeywordKey`]: the name-sorted `(name, rendering)`
//!   pairs of the keyword arguments, or [`KeywordKey::Empty`] when there are
//!   none.
//!
//! Keys compare by rendering, not by value. Two argument sets that render
//! identically share an entry, for example two distinct functions that happen
//! to have the same name. Only wrap functions for which that is acceptable.
//!
//! # Side Effects
//!
//! Nothing stops a memoized function from having side effects, but they happen
//! at most once per key. Errors are never cached: a failing call leaves no
//! entry behind and the next call with the same key computes again.
//!
//! # Concurrency
//!
//! The cache sits behind a read/write lock that is never held while the
//! wrapped function runs. Two threads missing on the same key may both
//! compute it; the last one to finish overwrites the entry. Any of the racing
//! results is acceptable for a referentially transparent function.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::error::Result;
use crate::function::{Arguments, Function, Signature};
use crate::value::{Value, write_separated};

#[cfg(feature = "fxhash")]
type Map<K, V> = HashMap<K, V, rustc_hash::FxBuildHasher>;

#[cfg(not(feature = "fxhash"))]
type Map<K, V> = HashMap<K, V>;

/// The inner cache key derived from keyword arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordKey {
    /// No keyword arguments were supplied.
    Empty,
    /// Name-sorted `(name, rendering)` pairs.
    Named(Vec<(String, String)>),
}

impl KeywordKey {
    /// Derives the key for the keyword part of `arguments`.
    pub fn of(arguments: &Arguments) -> Self {
        let keywords = arguments.keywords();
        if keywords.is_empty() {
            Self::Empty
        } else {
            Self::Named(
                keywords
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_string()))
                    .collect(),
            )
        }
    }
}

/// Derives the outer cache key for the positional part of `arguments`.
///
/// ```rust
/// use exos::args;
/// use exos::compose::positional_key;
///
/// assert_eq!(positional_key(&args![1, "a"; b = 2]), r#"(1, "a")"#);
/// ```
pub fn positional_key(arguments: &Arguments) -> String {
    struct Rendering<'a>(&'a [Value]);

    impl fmt::Display for Rendering<'_> {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("(")?;
            write_separated(formatter, self.0)?;
            formatter.write_str(")")
        }
    }

    Rendering(arguments.positional()).to_string()
}

/// The results remembered by a [`Memoized`] function.
///
/// [`Memoized::cache`] hands out a snapshot; later calls do not change it.
#[derive(Clone, Default)]
pub struct Cache {
    entries: Map<String, Map<KeywordKey, Value>>,
}

impl Cache {
    /// Total number of remembered results.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Returns `true` if nothing has been remembered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }

    /// The remembered result for `arguments`, if any.
    pub fn get(&self, arguments: &Arguments) -> Option<&Value> {
        self.lookup(&positional_key(arguments), &KeywordKey::of(arguments))
    }

    /// Returns `true` if a result for `arguments` is remembered.
    pub fn contains(&self, arguments: &Arguments) -> bool {
        self.get(arguments).is_some()
    }

    /// Iterates over `(positional key, keyword key, result)` triples in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeywordKey, &Value)> {
        self.entries.iter().flat_map(|(positional, inner)| {
            inner
                .iter()
                .map(move |(keyword, value)| (positional.as_str(), keyword, value))
        })
    }

    fn lookup(&self, positional: &str, keyword: &KeywordKey) -> Option<&Value> {
        self.entries.get(positional)?.get(keyword)
    }

    fn store(&mut self, positional: String, keyword: KeywordKey, value: Value) {
        self.entries
            .entry(positional)
            .or_default()
            .insert(keyword, value);
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cache")
            .field("len", &self.len())
            .finish()
    }
}

type Body = dyn Fn(&Memoized, &Arguments) -> Result<Value> + Send + Sync;

struct Inner {
    name: String,
    signature: Signature,
    body: Box<Body>,
    cache: RwLock<Cache>,
}

/// A function whose results are remembered per argument set.
///
/// Clones share the same cache.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use exos::compose::memoize;
/// use exos::{Function, Signature, Value, args};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let square = memoize(Function::new("square", Signature::new(1), move |arguments| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     let n = arguments.integer(0)?;
///     Ok(Value::Integer(n * n))
/// }));
///
/// for _ in 0..10 {
///     assert_eq!(square.call(&args![12])?, Value::Integer(144));
/// }
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// assert_eq!(square.cache().len(), 1);
/// # Ok::<(), exos::Error>(())
/// ```
#[derive(Clone)]
pub struct Memoized {
    inner: Arc<Inner>,
}

impl Memoized {
    /// Memoizes `function`.
    pub fn new(function: Function) -> Self {
        let name = function.name().to_owned();
        let signature = function.signature();
        Self::from_body(name, signature, move |_, arguments| function.call(arguments))
    }

    /// Builds a memoized function whose body can call itself through the cache.
    ///
    /// The body receives the memoized wrapper as its first parameter; calling
    /// it recursively reuses every result computed so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exos::compose::Memoized;
    /// use exos::{Signature, Value, args};
    ///
    /// let fibo = Memoized::recursive("fibo", Signature::new(1), |fibo, arguments| {
    ///     let n = arguments.integer(0)?;
    ///     if n <= 2 {
    ///         return Ok(Value::Integer(1));
    ///     }
    ///     let previous = fibo.call(&args![n - 1])?;
    ///     let before = fibo.call(&args![n - 2])?;
    ///     Ok(Value::Integer(
    ///         previous.as_integer().unwrap_or(0) + before.as_integer().unwrap_or(0),
    ///     ))
    /// });
    ///
    /// assert_eq!(fibo.call(&args![90])?, Value::Integer(2_880_067_194_370_816_120));
    /// # Ok::<(), exos::Error>(())
    /// ```
    pub fn recursive<F>(name: impl Into<String>, signature: Signature, body: F) -> Self
    where
        F: Fn(&Self, &Arguments) -> Result<Value> + Send + Sync + 'static,
    {
        Self::from_body(name.into(), signature, body)
    }

    fn from_body<F>(name: String, signature: Signature, body: F) -> Self
    where
        F: Fn(&Self, &Arguments) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                name,
                signature,
                body: Box::new(body),
                cache: RwLock::new(Cache::default()),
            }),
        }
    }

    /// The wrapped function's name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The wrapped function's signature.
    pub fn signature(&self) -> Signature {
        self.inner.signature
    }

    /// Returns the remembered result for `arguments`, computing and storing it
    /// on a miss.
    ///
    /// # Errors
    ///
    /// Any error from the wrapped function, including its arity check.
    /// Failed calls are not remembered.
    pub fn call(&self, arguments: &Arguments) -> Result<Value> {
        let positional = positional_key(arguments);
        let keyword = KeywordKey::of(arguments);

        let cached = self.inner.cache.read().lookup(&positional, &keyword).cloned();
        if let Some(value) = cached {
            trace!(function = %self.inner.name, key = %positional, "memoize cache hit");
            return Ok(value);
        }

        trace!(function = %self.inner.name, key = %positional, "memoize cache miss");
        self.inner
            .signature
            .check(&self.inner.name, arguments.len())?;
        let value = (self.inner.body)(self, arguments)?;
        self.inner
            .cache
            .write()
            .store(positional, keyword, value.clone());
        Ok(value)
    }

    /// A snapshot of the cache.
    ///
    /// The lock is released before this returns, so the snapshot can be held
    /// across further calls.
    pub fn cache(&self) -> Cache {
        self.inner.cache.read().clone()
    }

    /// Exposes the memoized function as a plain [`Function`] sharing this cache.
    pub fn into_function(self) -> Function {
        let name = self.inner.name.clone();
        let signature = self.inner.signature;
        Function::new(name, signature, move |arguments| self.call(arguments))
    }
}

impl fmt::Debug for Memoized {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("name", &self.inner.name)
            .field("signature", &self.inner.signature)
            .field("cache", &*self.inner.cache.read())
            .finish()
    }
}

/// Memoizes `function`. See [`Memoized`].
pub fn memoize(function: Function) -> Memoized {
    Memoized::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use rstest::rstest;

    #[rstest]
    fn empty_keywords_use_the_sentinel() {
        assert_eq!(KeywordKey::of(&args![1]), KeywordKey::Empty);
        assert_ne!(KeywordKey::of(&args![1; a = 1]), KeywordKey::Empty);
    }

    #[rstest]
    fn keyword_key_is_sorted_by_name() {
        let key = KeywordKey::of(&args![; b = 2, a = "x"]);
        assert_eq!(
            key,
            KeywordKey::Named(vec![
                ("a".to_owned(), "\"x\"".to_owned()),
                ("b".to_owned(), "2".to_owned()),
            ])
        );
    }

    #[rstest]
    fn cache_iterates_every_entry() {
        let identity = memoize(Function::identity());
        identity.call(&args![1]).ok();
        identity.call(&args![2]).ok();

        let mut keys: Vec<String> = identity
            .cache()
            .iter()
            .map(|(positional, _, _)| positional.to_owned())
            .collect();
        keys.sort();
        assert_eq!(keys, vec!["(1)".to_owned(), "(2)".to_owned()]);
    }
}
