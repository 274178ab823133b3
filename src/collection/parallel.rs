//! Parallel fan-out over a dedicated worker pool.
//!
//! Each call builds its own pool with one worker per item, hands every
//! worker exactly one item and joins all of them before returning. This
//! suits I/O-bound mapping over a handful of items; CPU-bound work over
//! large inputs is better served by rayon's global pool directly.

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};

fn pool_for(items: usize) -> Result<rayon::ThreadPool> {
    let workers = items.max(1);
    debug!(workers, "building fan-out pool");
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("exos-worker-{index}"))
        .build()
        .map_err(|error| Error::WorkerPool(error.to_string()))
}

/// Maps `function` over `items` in parallel, preserving input order.
///
/// # Errors
///
/// [`Error::WorkerPool`] if the worker pool cannot be started.
///
/// # Examples
///
/// ```rust
/// use exos::collection::pmap;
///
/// let lengths = pmap(&["a", "bb", "ccc"], |word| word.len())?;
/// assert_eq!(lengths, vec![1, 2, 3]);
/// # Ok::<(), exos::Error>(())
/// ```
pub fn pmap<T, U, F>(items: &[T], function: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let pool = pool_for(items.len())?;
    Ok(pool.install(|| items.par_iter().with_max_len(1).map(function).collect()))
}

/// Runs `accept` on every item in parallel and waits for all of them.
///
/// # Errors
///
/// [`Error::WorkerPool`] if the worker pool cannot be started.
pub fn peach<T, F>(items: &[T], accept: F) -> Result<()>
where
    T: Sync,
    F: Fn(&T) + Send + Sync,
{
    if items.is_empty() {
        return Ok(());
    }
    let pool = pool_for(items.len())?;
    pool.install(|| items.par_iter().with_max_len(1).for_each(accept));
    Ok(())
}
