//! Small problems solved with a hash table.

use crate::chained::ChainedTable;
use crate::table::HashTable;
use log::debug;

/// Finds two positions whose values add up to `target`.
///
/// Scans left to right, remembering the position of every value seen so far, and returns
/// `(earlier, current)` for the first value whose complement was already seen.
pub fn two_sum(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: ChainedTable<i64, usize> = ChainedTable::new();
    for (index, value) in values.iter().enumerate() {
        if let Some(complement) = target.checked_sub(*value) {
            if let Some(earlier) = seen.search(&complement) {
                debug!("two_sum: {} + {} = {}", complement, value, target);
                return Some((*earlier, index));
            }
        }
        seen.insert(*value, index);
    }
    None
}

/// Are `first` and `second` made of the same letters and digits, ignoring case and everything
/// else?
pub fn is_anagram(first: &str, second: &str) -> bool {
    let first: Vec<char> = normalize(first);
    let second: Vec<char> = normalize(second);
    if first.len() != second.len() {
        return false;
    }

    let mut counts: ChainedTable<char, i64> = ChainedTable::new();
    for c in first {
        let count: i64 = counts.search(&c).copied().unwrap_or(0);
        counts.insert(c, count + 1);
    }
    for c in second {
        match counts.search(&c).copied() {
            Some(count) => {
                counts.insert(c, count - 1);
            }
            None => return false,
        }
    }
    counts.values().into_iter().all(|count| *count == 0)
}

fn normalize(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
