//! Presentation-only ordering of lists and todos.
//!
//! # Design
//! Display order is a stable partition on completion status, never a
//! comparator sort: incomplete items keep their original relative order,
//! then complete items keep theirs. Each item is paired with its original
//! index because positional identity survives the reordering — the
//! presentation layer still addresses items by their stored position, not
//! their display position. Nothing here mutates the underlying sequence.

/// Stable-partition `items` into incomplete-then-complete display order,
/// pairing each with its original index.
pub fn sort_for_display<T, F>(items: &[T], is_complete: F) -> Vec<(usize, &T)>
where
    F: Fn(&T) -> bool,
{
    let (mut pending, done): (Vec<_>, Vec<_>) = items
        .iter()
        .enumerate()
        .partition(|&(_, item)| !is_complete(item));
    pending.extend(done);
    pending
}
