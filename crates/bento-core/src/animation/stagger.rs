#![forbid(unsafe_code)]

//! Stagger offsets for cascading starts.

use std::time::Duration;

/// Start offsets for `count` items, item `i` starting at `i * delay`.
///
/// Returns an empty vector for `count == 0`. The first offset is always
/// zero and offsets never decrease.
#[must_use]
pub fn stagger_offsets(count: usize, delay: Duration) -> Vec<Duration> {
    (0..count)
        .map(|i| delay.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX)))
        .collect()
}
