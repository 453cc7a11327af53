//! Single-pass operations over optional sequences.

/// Returns `true` if the predicate holds for every element.
///
/// Short-circuits on the first element that fails. Returns `true` on an
/// absent or empty sequence (vacuous truth).
pub fn all<T>(seq: Option<&[T]>, pred: impl FnMut(&T) -> bool) -> bool {
    seq.map_or(true, |slice| slice.iter().all(pred))
}

/// Returns `true` if the predicate holds for at least one element.
///
/// Short-circuits on the first element that matches. Returns `false` on an
/// absent or empty sequence.
pub fn any<T>(seq: Option<&[T]>, pred: impl FnMut(&T) -> bool) -> bool {
    seq.map_or(false, |slice| slice.iter().any(pred))
}

/// Counts the elements for which the predicate holds.
///
/// Always scans the full sequence. Returns `0` on an absent sequence.
pub fn count<T>(seq: Option<&[T]>, mut pred: impl FnMut(&T) -> bool) -> usize {
    seq.map_or(0, |slice| slice.iter().filter(|val| pred(val)).count())
}

/// Returns `true` if the sequence contains the given element.
///
/// Linear scan by equality, no hashing. Returns `false` on an absent sequence.
pub fn contains<T: PartialEq>(seq: Option<&[T]>, item: &T) -> bool {
    seq.map_or(false, |slice| slice.contains(item))
}

/// Maps each element with the mapping function.
///
/// The result preserves order and length. Absence propagates.
///
/// ```
/// use sliceworks_sequence::map;
///
/// let lengths = map(Some(&["bar", "", "hello"][..]), |s| s.len());
/// assert_eq!(lengths, Some(vec![3, 0, 5]));
/// ```
pub fn map<T, U>(seq: Option<&[T]>, map_fn: impl FnMut(&T) -> U) -> Option<Vec<U>> {
    Some(seq?.iter().map(map_fn).collect())
}

/// Retains the elements for which the predicate holds.
///
/// The result preserves relative order. Absence propagates.
pub fn filter<T: Clone>(seq: Option<&[T]>, mut pred: impl FnMut(&T) -> bool) -> Option<Vec<T>> {
    Some(seq?.iter().filter(|val| pred(val)).cloned().collect())
}

/// Filters and maps in a single pass.
///
/// Elements for which the function returns `None` are dropped; the rest are
/// replaced by the mapped value. More efficient than [`filter`] followed by
/// [`map`]. Absence propagates.
pub fn filter_map<T, U>(
    seq: Option<&[T]>,
    filter_map_fn: impl FnMut(&T) -> Option<U>,
) -> Option<Vec<U>> {
    Some(seq?.iter().filter_map(filter_map_fn).collect())
}

/// Retains, in place, the elements for which the predicate holds.
///
/// Preserves relative order. Does nothing on an absent sequence.
pub fn filter_in_place<T>(seq: Option<&mut Vec<T>>, mut pred: impl FnMut(&T) -> bool) {
    if let Some(vec) = seq {
        vec.retain(|val| pred(val));
    }
}

/// Reduces the sequence to a single value, left to right.
///
/// `init` seeds the accumulator; the fold function combines the accumulator
/// with each element in turn. Returns `init` unchanged on an absent or empty
/// sequence.
pub fn fold<T, U>(seq: Option<&[T]>, init: U, fold_fn: impl FnMut(U, &T) -> U) -> U {
    let Some(slice) = seq else { return init };
    slice.iter().fold(init, fold_fn)
}

/// Returns the index of the first element matching the predicate.
///
/// Stable: among multiple matches, the earliest index wins. Returns `None`
/// when nothing matches or the sequence is absent.
pub fn find_by<T>(seq: Option<&[T]>, pred: impl FnMut(&T) -> bool) -> Option<usize> {
    seq?.iter().position(pred)
}

/// Returns the minimum element under the given "less than" comparison.
///
/// Stable: among tied minima, the first-encountered element wins. Returns
/// `None` on an absent or empty sequence.
pub fn min_by<T: Clone>(seq: Option<&[T]>, mut less: impl FnMut(&T, &T) -> bool) -> Option<T> {
    let mut iter = seq?.iter();
    let mut best = iter.next()?;
    for val in iter {
        if less(val, best) {
            best = val;
        }
    }
    Some(best.clone())
}

/// Returns the maximum element under the given "less than" comparison.
///
/// Stable: among tied maxima, the first-encountered element wins. Returns
/// `None` on an absent or empty sequence.
pub fn max_by<T: Clone>(seq: Option<&[T]>, mut less: impl FnMut(&T, &T) -> bool) -> Option<T> {
    let mut iter = seq?.iter();
    let mut best = iter.next()?;
    for val in iter {
        if less(best, val) {
            best = val;
        }
    }
    Some(best.clone())
}

/// Splits the sequence into the elements that match the predicate and those
/// that do not.
///
/// Relative order is preserved within each branch. Both branches are absent
/// on an absent input.
pub fn partition<T: Clone>(
    seq: Option<&[T]>,
    mut pred: impl FnMut(&T) -> bool,
) -> (Option<Vec<T>>, Option<Vec<T>>) {
    let Some(slice) = seq else { return (None, None) };
    let mut matched = Vec::new();
    let mut rest = Vec::new();
    for val in slice {
        if pred(val) {
            matched.push(val.clone());
        } else {
            rest.push(val.clone());
        }
    }
    (Some(matched), Some(rest))
}

/// Partitions the sequence in place and returns the boundary index.
///
/// Two-pointer scheme: a forward cursor advances while the predicate holds, a
/// backward cursor retreats while it fails, and the out-of-place pair is
/// swapped until the cursors meet. Elements at indices below the returned
/// boundary match the predicate; elements at or above it do not. Unlike
/// [`partition`], relative order within each side is **not** preserved.
///
/// No allocation. Returns `0` on an absent sequence.
///
/// ```
/// use sliceworks_sequence::partition_in_place;
///
/// let mut values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// let boundary = partition_in_place(Some(&mut values[..]), |v| v % 2 == 0);
/// assert_eq!(boundary, 5);
/// assert!(values[..boundary].iter().all(|v| v % 2 == 0));
/// assert!(values[boundary..].iter().all(|v| v % 2 == 1));
/// ```
pub fn partition_in_place<T>(seq: Option<&mut [T]>, mut pred: impl FnMut(&T) -> bool) -> usize {
    let Some(slice) = seq else { return 0 };
    let mut head = 0;
    let mut tail = slice.len();
    loop {
        while head < tail && pred(&slice[head]) {
            head += 1;
        }
        while head < tail && !pred(&slice[tail - 1]) {
            tail -= 1;
        }
        if head == tail {
            return head;
        }
        slice.swap(head, tail - 1);
        head += 1;
        tail -= 1;
    }
}

/// Returns a new sequence with the elements in reverse order.
///
/// Absence propagates.
pub fn reverse<T: Clone>(seq: Option<&[T]>) -> Option<Vec<T>> {
    Some(seq?.iter().rev().cloned().collect())
}

/// Reverses the sequence in place by swapping symmetric index pairs.
///
/// No allocation. Does nothing on an absent sequence.
pub fn reverse_in_place<T>(seq: Option<&mut [T]>) {
    if let Some(slice) = seq {
        slice.reverse();
    }
}

/// Flattens a sequence of sequences into one sequence.
///
/// The result preserves order: elements of the first inner sequence come
/// first. Absence propagates.
pub fn flatten<T: Clone>(seq: Option<&[Vec<T>]>) -> Option<Vec<T>> {
    Some(seq?.iter().flatten().cloned().collect())
}

/// Concatenates the given sequences in argument order.
///
/// Joining zero sequences returns `None`; joining one or more sequences
/// (each possibly absent, contributing nothing) returns a present result,
/// even when every operand is absent.
pub fn join<T: Clone>(seqs: &[Option<&[T]>]) -> Option<Vec<T>> {
    if seqs.is_empty() {
        return None;
    }
    let mut out = Vec::new();
    for seq in seqs.iter().flatten() {
        out.extend_from_slice(seq);
    }
    Some(out)
}

/// Returns `true` if the sequence is sorted under the given "less than"
/// comparison.
///
/// Checks adjacent pairs only: a single pair where the right element is less
/// than the left fails the check. For ascending order, pass a comparison that
/// returns `true` when left is less than right. Returns `true` on an absent
/// or empty sequence.
pub fn is_sorted_by<T>(seq: Option<&[T]>, mut less: impl FnMut(&T, &T) -> bool) -> bool {
    let Some(slice) = seq else { return true };
    slice.windows(2).all(|pair| !less(&pair[1], &pair[0]))
}
