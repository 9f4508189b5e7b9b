//! Keyed sorting entry points.
//!
//! Every function here sorts by a key derived from each element through a caller-supplied
//! function, ordering keys with [`compare_keys`] (`<` then `>`, otherwise equal). The sort
//! itself always runs on a permutation of positions (see [`crate::merge`]); the variants only
//! differ in how they materialize the result:
//! - [`keysort`]: a new `Vec` of cloned elements (shallow for `Rc`, `Arc` or references).
//! - [`keysort_refs`]: a new `Vec` of references into the input.
//! - [`keysort_indices`]: the sorting permutation itself.
//! - [`keysort_mut`]: the permutation applied to a mutable slice in place.
//! - [`keysort_cached`]: like [`keysort`], but evaluates the key function once per element.
//!
//! The `try_` variants accept a fallible key function and return its first error unchanged.

use crate::core::{Sequence, compare_keys};
use crate::merge::{merge_sort, try_merge_sort};

/// Returns a new `Vec` with the elements of `list` ordered ascending by `key_fn`.
///
/// The input is not modified. The sort is stable: elements whose keys compare equal,
/// including keys that cannot be compared at all, keep their relative input order.
///
/// The key function is called twice per comparison and not at all for lists shorter than two
/// elements. Use [`keysort_cached`] when keys are expensive to compute.
///
/// # Arguments
///
/// * `key_fn` - Derives the sort key from an element.
/// * `list` - The collection to be sorted.
///
/// # Examples
///
/// ```
/// use keysort::keysort;
///
/// let pairs = vec![[-1, 1], [-2, 2], [-3, 3]];
/// let sorted = keysort(|p: &[i32; 2]| p[0], &pairs);
///
/// assert_eq!(sorted, vec![[-3, 3], [-2, 2], [-1, 1]]);
/// assert_eq!(pairs, vec![[-1, 1], [-2, 2], [-3, 3]]);
/// ```
pub fn keysort<S, K, F>(key_fn: F, list: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    let indices = keysort_indices(key_fn, list);
    gather(list, indices)
}

/// Like [`keysort`], but returns references to the elements instead of clones.
///
/// ```
/// use keysort::keysort_refs;
///
/// let words = vec!["ccc".to_string(), "a".to_string(), "bb".to_string()];
/// let by_len = keysort_refs(|w: &String| w.len(), &words);
///
/// assert_eq!(by_len, vec![&words[1], &words[2], &words[0]]);
/// ```
pub fn keysort_refs<'a, S, K, F>(key_fn: F, list: &'a S) -> Vec<&'a S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    keysort_indices(key_fn, list)
        .into_iter()
        .map(|index| list.item(index))
        .collect()
}

/// Returns the positions of `list` in the order that sorts it by `key_fn`.
///
/// `list.item(indices[i])` is the `i`-th element of the sorted sequence.
///
/// # Examples
///
/// ```
/// use keysort::keysort_indices;
///
/// let data = vec!["banana", "Apple", "cherry"];
/// let indices = keysort_indices(|s: &&str| s.to_lowercase(), &data);
///
/// assert_eq!(indices, vec![1, 0, 2]); // Apple, banana, cherry
/// ```
pub fn keysort_indices<S, K, F>(mut key_fn: F, list: &S) -> Vec<usize>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    let len = list.len();
    log::trace!("Sorting {} items by derived key", len);

    let mut indices = identity_permutation(len);
    merge_sort(&mut indices, |a, b| {
        let aa = key_fn(list.item(a));
        let bb = key_fn(list.item(b));
        compare_keys(&aa, &bb)
    });

    indices
}

/// Sorts a mutable slice in-place by `key_fn`.
///
/// This computes the sorting permutation with [`keysort_indices`] and then applies it to
/// the slice by swapping, so the elements do not need to be `Clone`.
///
/// # Examples
///
/// ```
/// use keysort::keysort_mut;
///
/// let mut data = vec![(3, 'c'), (1, 'a'), (2, 'b'), (1, 'z')];
/// keysort_mut(|&(n, _): &(i32, char)| n, &mut data);
///
/// assert_eq!(data, vec![(1, 'a'), (1, 'z'), (2, 'b'), (3, 'c')]);
/// ```
pub fn keysort_mut<T, K, F>(key_fn: F, data: &mut [T])
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    let indices = keysort_indices(key_fn, &*data);
    apply_permutation(data, indices);
}

/// Like [`keysort`], but calls `key_fn` exactly once per element.
///
/// Keys are computed up front and held for the duration of the sort, trading `O(n)` extra
/// memory for fewer key evaluations.
pub fn keysort_cached<S, K, F>(key_fn: F, list: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    let keys = collect_keys(key_fn, list);
    log::trace!("Sorting {} items by cached key", keys.len());

    let mut indices = identity_permutation(keys.len());
    merge_sort(&mut indices, |a, b| compare_keys(&keys[a], &keys[b]));

    gather(list, indices)
}

/// Sorts by a fallible key function.
///
/// The first `Err` returned by `key_fn` aborts the sort and is handed back unchanged; no
/// partially sorted output is produced and `list` is untouched.
///
/// # Examples
///
/// ```
/// use keysort::try_keysort;
///
/// let parse = |s: &&str| s.parse::<i64>();
///
/// assert_eq!(try_keysort(parse, &["10", "9", "-1"]), Ok(vec!["-1", "9", "10"]));
/// assert!(try_keysort(parse, &["10", "nine"]).is_err());
/// ```
pub fn try_keysort<S, K, E, F>(key_fn: F, list: &S) -> Result<Vec<S::Item>, E>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> Result<K, E>,
    K: PartialOrd,
{
    let indices = try_keysort_indices(key_fn, list)?;
    Ok(gather(list, indices))
}

/// Fallible counterpart of [`keysort_indices`].
pub fn try_keysort_indices<S, K, E, F>(mut key_fn: F, list: &S) -> Result<Vec<usize>, E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Result<K, E>,
    K: PartialOrd,
{
    let len = list.len();
    log::trace!("Sorting {} items by fallible derived key", len);

    let mut indices = identity_permutation(len);
    try_merge_sort::<_, E>(&mut indices, |a, b| {
        let aa = key_fn(list.item(a))?;
        let bb = key_fn(list.item(b))?;
        Ok(compare_keys(&aa, &bb))
    })
    .inspect_err(|_| log::debug!("Key function failed, abandoning sort of {} items", len))?;

    Ok(indices)
}

/// Fallible counterpart of [`keysort_cached`].
///
/// Keys are computed in input order, so the error returned is the one for the first failing
/// element.
pub fn try_keysort_cached<S, K, E, F>(mut key_fn: F, list: &S) -> Result<Vec<S::Item>, E>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> Result<K, E>,
    K: PartialOrd,
{
    let len = list.len();
    let keys = (0..len)
        .map(|index| key_fn(list.item(index)))
        .collect::<Result<Vec<K>, E>>()
        .inspect_err(|_| log::debug!("Key function failed caching {} keys", len))?;

    let mut indices = identity_permutation(len);
    merge_sort(&mut indices, |a, b| compare_keys(&keys[a], &keys[b]));

    Ok(gather(list, indices))
}

fn identity_permutation(len: usize) -> Vec<usize> {
    (0..len).collect()
}

fn collect_keys<S, K, F>(mut key_fn: F, list: &S) -> Vec<K>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> K,
{
    (0..list.len()).map(|index| key_fn(list.item(index))).collect()
}

/// Materializes the sorted sequence from a permutation of positions.
fn gather<S>(list: &S, indices: Vec<usize>) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    indices
        .into_iter()
        .map(|index| list.item(index).clone())
        .collect()
}

/// Rearranges `data` so that position `i` holds the element previously at `indices[i]`.
///
/// Walks each cycle of the permutation once, swapping elements into place.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as placed
            current = next;
        }
        indices[current] = current;
    }
}
