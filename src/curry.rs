//! Partially applied keyed sorts.
//!
//! [`keysort`] takes the key function and the list together. [`keysort_by`] takes only the key
//! function and returns a [`KeySort`] that waits for the list, which makes it easy to name a
//! sort once and reuse it, or to hand it to other combinators via [`KeySort::into_fn`].
//! Both forms produce identical results.

use crate::algo::{
    keysort, keysort_cached, keysort_indices, keysort_mut, keysort_refs, try_keysort,
    try_keysort_indices,
};
use crate::core::Sequence;

/// A key function waiting for the list to sort.
///
/// A `KeySort` borrows its key function for every call, so one value can sort any number of
/// lists. Since nothing constrains the closure when it is wrapped, annotate its parameter type
/// (`|p: &Person| ...`) so the compiler can infer the key type.
///
/// # Examples
///
/// ```
/// use keysort::keysort_by;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Person {
///     name: String,
/// }
///
/// let by_name_case_insensitive = keysort_by(|p: &Person| p.name.to_lowercase());
///
/// let people = vec![
///     Person { name: "clara".into() },
///     Person { name: "Bob".into() },
///     Person { name: "ALICE".into() },
/// ];
/// let names: Vec<String> = by_name_case_insensitive
///     .sort(&people)
///     .into_iter()
///     .map(|p| p.name)
///     .collect();
///
/// assert_eq!(names, vec!["ALICE", "Bob", "clara"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct KeySort<F> {
    key_fn: F,
}

/// Partially applies [`keysort`] to a key function.
///
/// `keysort_by(f).sort(&list)` is equivalent to `keysort(f, &list)`.
pub fn keysort_by<F>(key_fn: F) -> KeySort<F> {
    KeySort::new(key_fn)
}

impl<F> KeySort<F> {
    pub fn new(key_fn: F) -> Self {
        Self { key_fn }
    }

    /// Returns the wrapped key function.
    pub fn key_fn(&self) -> &F {
        &self.key_fn
    }

    pub fn into_inner(self) -> F {
        self.key_fn
    }

    /// Completes the application. See [`keysort`].
    pub fn sort<S, K>(&self, list: &S) -> Vec<S::Item>
    where
        S: Sequence + ?Sized,
        S::Item: Clone,
        F: Fn(&S::Item) -> K,
        K: PartialOrd,
    {
        keysort(&self.key_fn, list)
    }

    /// See [`keysort_refs`].
    pub fn sort_refs<'a, S, K>(&self, list: &'a S) -> Vec<&'a S::Item>
    where
        S: Sequence + ?Sized,
        F: Fn(&S::Item) -> K,
        K: PartialOrd,
    {
        keysort_refs(&self.key_fn, list)
    }

    /// See [`keysort_indices`].
    pub fn indices<S, K>(&self, list: &S) -> Vec<usize>
    where
        S: Sequence + ?Sized,
        F: Fn(&S::Item) -> K,
        K: PartialOrd,
    {
        keysort_indices(&self.key_fn, list)
    }

    /// See [`keysort_mut`].
    pub fn sort_mut<T, K>(&self, data: &mut [T])
    where
        F: Fn(&T) -> K,
        K: PartialOrd,
    {
        keysort_mut(&self.key_fn, data)
    }

    /// See [`keysort_cached`].
    pub fn sort_cached<S, K>(&self, list: &S) -> Vec<S::Item>
    where
        S: Sequence + ?Sized,
        S::Item: Clone,
        F: Fn(&S::Item) -> K,
        K: PartialOrd,
    {
        keysort_cached(&self.key_fn, list)
    }

    /// See [`try_keysort`].
    pub fn try_sort<S, K, E>(&self, list: &S) -> Result<Vec<S::Item>, E>
    where
        S: Sequence + ?Sized,
        S::Item: Clone,
        F: Fn(&S::Item) -> Result<K, E>,
        K: PartialOrd,
    {
        try_keysort(&self.key_fn, list)
    }

    /// See [`try_keysort_indices`].
    pub fn try_indices<S, K, E>(&self, list: &S) -> Result<Vec<usize>, E>
    where
        S: Sequence + ?Sized,
        F: Fn(&S::Item) -> Result<K, E>,
        K: PartialOrd,
    {
        try_keysort_indices(&self.key_fn, list)
    }

    /// Turns the partial application into a plain closure over slices.
    ///
    /// ```
    /// use keysort::keysort_by;
    ///
    /// let sort_by_first = keysort_by(|p: &(i32, i32)| p.0).into_fn();
    /// let batches = vec![vec![(2, 0), (1, 0)], vec![(9, 9), (-9, 9)]];
    ///
    /// let sorted: Vec<Vec<(i32, i32)>> = batches
    ///     .iter()
    ///     .map(|b| sort_by_first(b.as_slice()))
    ///     .collect();
    /// assert_eq!(sorted, vec![vec![(1, 0), (2, 0)], vec![(-9, 9), (9, 9)]]);
    /// ```
    pub fn into_fn<T, K>(self) -> impl Fn(&[T]) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T) -> K,
        K: PartialOrd,
    {
        move |list: &[T]| keysort(&self.key_fn, list)
    }
}
