//! Stable merge sort over index permutations.
//!
//! Every public sort in this crate reduces to sorting a `Vec<usize>` of positions with a
//! comparator that looks the positions up in the caller's collection. Sorting plain indices
//! keeps the element type out of the algorithm entirely: no `unsafe` moves, no `Clone`
//! bounds, and the caller's collection is only ever read.
//!
//! The sort is a bottom-up merge sort:
//! 1. Runs of [`RUN_LEN`] positions are sorted with insertion sort.
//! 2. Adjacent runs are merged pairwise, doubling the run width each pass and ping-ponging
//!    between the input slice and one auxiliary buffer.
//!
//! Unlike `slice::sort_by`, the merge never inspects the comparator for consistency, so an
//! inconsistent comparator (e.g. keys containing `NaN`) produces some permutation instead of a
//! panic. A comparator error aborts the sort immediately; the slice then holds an unspecified
//! permutation of its original contents, which callers discard.

use std::cmp::Ordering;
use std::convert::Infallible;

/// Length of the runs that are insertion sorted before merging starts.
pub const RUN_LEN: usize = 16;

/// Stably sorts `v` with an infallible comparator.
pub(crate) fn merge_sort<C>(v: &mut [usize], mut compare: C)
where
    C: FnMut(usize, usize) -> Ordering,
{
    let result: Result<(), Infallible> = try_merge_sort(v, |a, b| Ok(compare(a, b)));
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Stably sorts `v`, stopping at the first comparator error.
pub(crate) fn try_merge_sort<C, E>(v: &mut [usize], mut compare: C) -> Result<(), E>
where
    C: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    for run in v.chunks_mut(RUN_LEN) {
        insertion_sort(run, &mut compare)?;
    }

    if len <= RUN_LEN {
        return Ok(());
    }

    let mut buffer = v.to_vec();
    let mut in_buffer = false;
    let mut width = RUN_LEN;

    while width < len {
        if in_buffer {
            merge_pass(&buffer, v, width, &mut compare)?;
        } else {
            merge_pass(v, &mut buffer, width, &mut compare)?;
        }
        in_buffer = !in_buffer;
        width = width.saturating_mul(2);
    }

    if in_buffer {
        v.copy_from_slice(&buffer);
    }

    Ok(())
}

/// Insertion sort that only moves an element past a strictly greater one.
fn insertion_sort<C, E>(v: &mut [usize], compare: &mut C) -> Result<(), E>
where
    C: FnMut(usize, usize) -> Result<Ordering, E>,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(v[j], v[j - 1])? == Ordering::Less {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
    Ok(())
}

/// Merges every pair of adjacent `width`-long runs of `src` into `dst`.
fn merge_pass<C, E>(
    src: &[usize],
    dst: &mut [usize],
    width: usize,
    compare: &mut C,
) -> Result<(), E>
where
    C: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let len = src.len();
    let mut start = 0;

    while start < len {
        let mid = start.saturating_add(width).min(len);
        let end = start.saturating_add(width.saturating_mul(2)).min(len);
        merge(&src[start..mid], &src[mid..end], &mut dst[start..end], compare)?;
        start = end;
    }

    Ok(())
}

/// Merges two sorted runs. Ties are taken from `left` so the merge is stable.
fn merge<C, E>(
    left: &[usize],
    right: &[usize],
    out: &mut [usize],
    compare: &mut C,
) -> Result<(), E>
where
    C: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let (mut i, mut j) = (0, 0);

    for slot in out.iter_mut() {
        let take_right = if i == left.len() {
            true
        } else if j == right.len() {
            false
        } else {
            compare(right[j], left[i])? == Ordering::Less
        };

        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sort_keys(keys: &[i32]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..keys.len()).collect();
        merge_sort(&mut indices, |a, b| keys[a].cmp(&keys[b]));
        indices
    }

    fn reference(keys: &[i32]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..keys.len()).collect();
        indices.sort_by_key(|&i| keys[i]);
        indices
    }

    #[test]
    fn short_inputs_are_left_alone() {
        assert_eq!(sort_keys(&[]), Vec::<usize>::new());
        assert_eq!(sort_keys(&[7]), vec![0]);
    }

    #[test]
    fn single_run_is_insertion_sorted() {
        let keys = [5, 3, 9, 1, 3, 0];
        assert_eq!(sort_keys(&keys), reference(&keys));
    }

    #[test]
    fn lengths_around_run_boundaries_match_std() {
        // Exercise partial trailing runs and an odd number of merge passes.
        for len in [RUN_LEN - 1, RUN_LEN, RUN_LEN + 1, 2 * RUN_LEN + 3, 4 * RUN_LEN, 100, 257] {
            let keys: Vec<i32> = (0..len as i32).map(|i| (i * 7919) % 13).collect();
            assert_eq!(sort_keys(&keys), reference(&keys), "len {}", len);
        }
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let keys = vec![0; 3 * RUN_LEN + 5];
        let expected: Vec<usize> = (0..keys.len()).collect();
        assert_eq!(sort_keys(&keys), expected);
    }

    #[test]
    fn inconsistent_comparator_still_yields_a_permutation() {
        let len = 5 * RUN_LEN;
        let mut indices: Vec<usize> = (0..len).collect();
        let mut calls = 0u32;
        merge_sort(&mut indices, |_, _| {
            calls += 1;
            match calls % 3 {
                0 => Ordering::Less,
                1 => Ordering::Greater,
                _ => Ordering::Equal,
            }
        });

        let mut seen = indices.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn comparator_error_stops_the_sort() {
        let mut indices: Vec<usize> = (0..50).collect();
        let mut calls = 0;
        let result = try_merge_sort(&mut indices, |a, b| {
            calls += 1;
            if a == 42 || b == 42 {
                Err("bad key")
            } else {
                Ok(a.cmp(&b))
            }
        });

        assert_eq!(result, Err("bad key"));
        assert!(calls > 0);
    }
}
