//! Helpers over ordinary collections.
//!
//! Effectful traversal ([`each`], [`ueach`], [`print_each`]), reshaping
//! ([`flatten`], [`zip_with_map`], [`extend`]) and a right fold
//! ([`reduce_right`]). With the `rayon` feature, [`pmap`] and [`peach`] fan
//! work out over a worker pool sized to the input.
//!
//! # Examples
//!
//! ```rust
//! use exos::collection::{flatten, reduce_right, zip_with_map};
//!
//! let nested = vec![vec![1, 2], vec![], vec![3]];
//! let flat = flatten(nested);
//! let total = reduce_right(flat.iter(), 0, |item, acc| acc + item);
//! assert_eq!(total, 6);
//!
//! let doubled: Vec<_> = zip_with_map(|x: &i32| x * 2, flat).collect();
//! assert_eq!(doubled, vec![(1, 2), (2, 4), (3, 6)]);
//! ```

mod iteration;
#[cfg(feature = "rayon")]
mod parallel;

pub use iteration::{each, extend, flatten, print_each, reduce_right, ueach, zip_with_map};
#[cfg(feature = "rayon")]
pub use parallel::{peach, pmap};
