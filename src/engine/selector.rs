//! Winning group selection
//!
//! Picks the group that keeps the most candidates alive. Ties go to the pattern with
//! more hidden slots, then to the lexicographically smaller pattern string. The
//! ordering is total over distinct patterns, so the result never depends on the
//! map's iteration order.

use crate::core::RevealedPattern;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Compare two `(pattern, group size)` pairs by engine preference
///
/// `Ordering::Greater` means `a` is preferred over `b`.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use adversarial_hangman::core::RevealedPattern;
/// use adversarial_hangman::engine::preference;
///
/// let hidden = RevealedPattern::unknown(4);
/// let shown: RevealedPattern = "_a__".parse().unwrap();
///
/// assert_eq!(preference((&shown, 3), (&hidden, 2)), Ordering::Greater);
/// assert_eq!(preference((&hidden, 2), (&shown, 2)), Ordering::Greater);
/// ```
#[must_use]
pub fn preference(a: (&RevealedPattern, usize), b: (&RevealedPattern, usize)) -> Ordering {
    let (a_pattern, a_size) = a;
    let (b_pattern, b_size) = b;

    a_size
        .cmp(&b_size)
        .then_with(|| a_pattern.unknown_count().cmp(&b_pattern.unknown_count()))
        .then_with(|| b_pattern.cmp(a_pattern))
}

/// Select the winning group from a pattern-keyed partition
///
/// Returns `None` if `groups` is empty.
#[must_use]
pub fn select_winner<'p, 'w>(
    groups: &'p FxHashMap<RevealedPattern, Vec<&'w str>>,
) -> Option<(&'p RevealedPattern, &'p [&'w str])> {
    groups
        .iter()
        .max_by(|a, b| preference((a.0, a.1.len()), (b.0, b.1.len())))
        .map(|(pattern, words)| (pattern, words.as_slice()))
}
