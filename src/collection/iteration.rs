//! Sequential collection helpers.

use std::fmt::Display;
use std::io::{self, Write};

/// Runs `accept` on every item for its effect.
///
/// # Examples
///
/// ```rust
/// use exos::collection::each;
///
/// let mut lists = vec![vec![0], vec![0, 1]];
/// each(lists.iter_mut(), |list| list.push(99));
/// assert_eq!(lists, vec![vec![0, 99], vec![0, 1, 99]]);
/// ```
pub fn each<I, F>(items: I, accept: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    items.into_iter().for_each(accept);
}

/// Like [`each`], but unpacks every pair into two arguments.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use exos::collection::ueach;
///
/// let mut seen = BTreeMap::new();
/// ueach([("a", 42), ("b", 100)], |name, value| {
///     seen.insert(name, value);
/// });
/// assert_eq!(seen["a"], 42);
/// assert_eq!(seen["b"], 100);
/// ```
pub fn ueach<I, A, B, F>(items: I, mut accept: F)
where
    I: IntoIterator<Item = (A, B)>,
    F: FnMut(A, B),
{
    for (first, second) in items {
        accept(first, second);
    }
}

/// Writes one line per item: `prefix` followed by the item.
///
/// Every `{i}` in the prefix is replaced by the item's zero-based index.
///
/// # Errors
///
/// Any I/O error from `writer`.
///
/// # Examples
///
/// ```rust
/// use exos::collection::print_each;
///
/// let mut out = Vec::new();
/// print_each(&mut out, "abc".chars(), "{i}: ")?;
/// assert_eq!(String::from_utf8(out).unwrap(), "0: a\n1: b\n2: c\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn print_each<W, I>(writer: &mut W, items: I, prefix: &str) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    let indexed = prefix.contains("{i}");
    for (index, item) in items.into_iter().enumerate() {
        if indexed {
            let label = prefix.replace("{i}", &index.to_string());
            writeln!(writer, "{label}{item}")?;
        } else {
            writeln!(writer, "{prefix}{item}")?;
        }
    }
    Ok(())
}

/// Concatenates a collection of collections, one level deep.
///
/// ```rust
/// use exos::collection::flatten;
///
/// assert_eq!(flatten(vec![vec![10], vec![], vec![55]]), vec![10, 55]);
/// ```
pub fn flatten<I>(items: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    items.into_iter().flatten().collect()
}

/// Pairs every item with its image under `mapper`.
///
/// ```rust
/// use exos::collection::zip_with_map;
///
/// let squares: Vec<_> = zip_with_map(|x: &i32| x * x, [1, 2, 3]).collect();
/// assert_eq!(squares, vec![(1, 1), (2, 4), (3, 9)]);
/// ```
pub fn zip_with_map<I, U, F>(mut mapper: F, items: I) -> impl Iterator<Item = (I::Item, U)>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> U,
{
    items.into_iter().map(move |item| {
        let mapped = mapper(&item);
        (item, mapped)
    })
}

/// Merges maps left to right into a fresh map; later entries win.
///
/// None of the inputs is modified.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use exos::collection::extend;
///
/// let defaults = BTreeMap::from([("a", 1), ("b", 2)]);
/// let overrides = BTreeMap::from([("b", 100)]);
/// let merged: BTreeMap<_, _> = extend([&defaults, &overrides]);
///
/// assert_eq!(merged, BTreeMap::from([("a", 1), ("b", 100)]));
/// assert_eq!(defaults["b"], 2);
/// ```
pub fn extend<'a, I, M, K, V, Out>(maps: I) -> Out
where
    I: IntoIterator<Item = &'a M>,
    M: 'a + ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    Out: Default + Extend<(K, V)>,
{
    maps.into_iter().fold(Out::default(), |mut merged, map| {
        merged.extend(
            map.into_iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        merged
    })
}

/// Right-associative fold: `fold(x0, fold(x1, ... fold(xn, initial)))`.
///
/// The folding function receives the current item first and the
/// accumulator second.
///
/// # Examples
///
/// ```rust
/// use exos::collection::reduce_right;
///
/// assert_eq!(reduce_right(1..=100, 0, |item, acc| acc + item), 5050);
///
/// let spelled = reduce_right(["a", "b", "c"], String::new(), |item, acc| acc + item);
/// assert_eq!(spelled, "cba");
/// ```
pub fn reduce_right<I, A, F>(items: I, initial: A, mut fold: F) -> A
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(I::Item, A) -> A,
{
    items
        .into_iter()
        .rev()
        .fold(initial, |accumulator, item| fold(item, accumulator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    fn print_each_without_prefix() {
        let mut out = Vec::new();
        print_each(&mut out, 0..3, "").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n2\n");
    }

    #[rstest]
    fn print_each_with_static_prefix() {
        let mut out = Vec::new();
        print_each(&mut out, ["x"], "> ").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> x\n");
    }

    #[rstest]
    fn extend_into_hash_map() {
        let first = HashMap::from([("a", "A"), ("b", "B")]);
        let second = HashMap::from([("c", "C")]);
        let merged: HashMap<_, _> = extend([&first, &second]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged["c"], "C");
    }

    #[rstest]
    fn extend_of_nothing_is_empty() {
        let merged: HashMap<&str, i32> = extend(std::iter::empty::<&HashMap<&str, i32>>());
        assert!(merged.is_empty());
    }

    #[rstest]
    fn reduce_right_of_empty_is_initial() {
        assert_eq!(reduce_right(Vec::<i32>::new(), 7, |item, acc| acc + item), 7);
    }
}
