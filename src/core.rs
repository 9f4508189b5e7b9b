//! Core traits and helpers for keysort.
//!
//! This module defines:
//! - [`Sequence`]: Read-only indexed access over the collections that can be sorted.
//! - [`compare_keys`]: The relational comparator used for every derived key.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A trait for reading elements out of a finite, indexable collection.
///
/// Every sort in this crate works on positions rather than on the elements themselves, so the
/// only thing it needs from the input is its length and a way to borrow the element at a
/// position. The input is never mutated through this trait.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use keysort::core::Sequence;
///
/// struct Roster {
///     names: Vec<String>,
/// }
///
/// impl Sequence for Roster {
///     type Item = String;
///
///     fn item(&self, index: usize) -> &String {
///         &self.names[index]
///     }
///
///     fn len(&self) -> usize {
///         self.names.len()
///     }
/// }
///
/// let roster = Roster { names: vec!["b".into(), "a".into()] };
/// assert_eq!(keysort::keysort_indices(|n: &String| n.clone(), &roster), vec![1, 0]);
/// ```
pub trait Sequence {
    /// The element type held by the collection.
    ///
    /// May be unsized (e.g. `str` for a column of strings packed into one buffer); the
    /// cloning sorts additionally require `Item: Clone`.
    type Item: ?Sized;

    /// Returns the element at the given position.
    ///
    /// Callers only pass positions in `0..self.len()`.
    fn item(&self, index: usize) -> &Self::Item;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl so callers can pass `&vec` without `.as_slice()`.
impl<T> Sequence for Vec<T> {
    type Item = T;

    fn item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        N
    }
}

// VecDeque indexing is O(1) even when the ring buffer wraps.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Compares two keys with the relational operators only.
///
/// Returns [`Ordering::Less`] if `a < b`, [`Ordering::Greater`] if `a > b` and
/// [`Ordering::Equal`] otherwise. Pairs that `PartialOrd` cannot order (e.g. `NaN` against
/// anything) therefore compare as equal instead of failing.
///
/// ```
/// use keysort::compare_keys;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_keys(&1, &2), Ordering::Less);
/// assert_eq!(compare_keys(&f64::NAN, &0.0), Ordering::Equal);
/// ```
#[inline(always)]
pub fn compare_keys<K: PartialOrd + ?Sized>(a: &K, b: &K) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
