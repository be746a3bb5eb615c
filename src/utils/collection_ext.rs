//! Collection helpers shared by the derived-state pipeline

use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicate while keeping the first occurrence of each item
///
/// # Example
/// ```ignore
/// let props = vec!["host", "region", "host"];
/// let unique = unique_ordered(props); // ["host", "region"]
/// ```
#[inline]
pub fn unique_ordered<T: Eq + Hash + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Order-preserving set difference: every element of `all` that is not in
/// `chosen`, in the order `all` lists them
///
/// `chosen` entries that never appeared in `all` are simply ignored.
pub fn difference_ordered<'a, T: Eq + Hash>(all: &'a [T], chosen: &[T]) -> Vec<&'a T> {
    let chosen_set: HashSet<&T> = chosen.iter().collect();
    all.iter().filter(|item| !chosen_set.contains(item)).collect()
}
