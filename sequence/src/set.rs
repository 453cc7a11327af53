//! Set-backed operations over optional sequences.
//!
//! Each operation here decides element membership through a *derived set*: a
//! deduplicated `HashSet` built from one operand's distinct elements. Output
//! sequences preserve the left operand's relative order; the derived set is
//! only a membership oracle, never the output itself.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Builds the derived membership set of a sequence. Duplicates are discarded;
/// an absent sequence derives the empty set.
fn derived_set<T: Eq + Hash>(seq: Option<&[T]>) -> HashSet<&T> {
    seq.into_iter().flatten().collect()
}

/// Returns the frequency of each distinct element.
///
/// Absence propagates; an empty sequence yields an empty mapping.
pub fn frequencies<T: Eq + Hash + Clone>(seq: Option<&[T]>) -> Option<HashMap<T, usize>> {
    let slice = seq?;
    let mut counts = HashMap::new();
    for val in slice {
        *counts.entry(val.clone()).or_insert(0) += 1;
    }
    Some(counts)
}

/// Returns `true` if no element repeats.
///
/// Fails fast on the first repeated element. Returns `true` on an absent or
/// empty sequence.
pub fn is_set<T: Eq + Hash>(seq: Option<&[T]>) -> bool {
    let Some(slice) = seq else { return true };
    let mut seen = HashSet::with_capacity(slice.len());
    slice.iter().all(|val| seen.insert(val))
}

/// Removes duplicate elements, keeping the first occurrence of each.
///
/// Relative order of the survivors is preserved. Absence propagates.
pub fn deduplicate<T: Eq + Hash + Clone>(seq: Option<&[T]>) -> Option<Vec<T>> {
    let slice = seq?;
    let mut seen = HashSet::with_capacity(slice.len());
    Some(slice.iter().filter(|val| seen.insert(*val)).cloned().collect())
}

/// Removes duplicate elements in place, keeping the first occurrence of each.
///
/// Does nothing on an absent sequence.
pub fn deduplicate_in_place<T: Eq + Hash + Clone>(seq: Option<&mut Vec<T>>) {
    if let Some(vec) = seq {
        let mut seen = HashSet::with_capacity(vec.len());
        vec.retain(|val| seen.insert(val.clone()));
    }
}

/// Returns the union of two sequences treated as sets.
///
/// The left operand's elements come first, in their original order, followed
/// by the right operand's elements not already present. Absent only when
/// **both** operands are absent.
pub fn union<T: Eq + Hash + Clone>(a: Option<&[T]>, b: Option<&[T]>) -> Option<Vec<T>> {
    if a.is_none() && b.is_none() {
        return None;
    }
    let left = a.unwrap_or_default();
    let mut seen: HashSet<&T> = left.iter().collect();
    let mut out = left.to_vec();
    for val in b.unwrap_or_default() {
        if seen.insert(val) {
            out.push(val.clone());
        }
    }
    Some(out)
}

/// Returns the elements of the left operand also present in the right.
///
/// Left-operand relative order is preserved. Absent only when **both**
/// operands are absent.
pub fn intersection<T: Eq + Hash + Clone>(a: Option<&[T]>, b: Option<&[T]>) -> Option<Vec<T>> {
    if a.is_none() && b.is_none() {
        return None;
    }
    let right = derived_set(b);
    Some(
        a.unwrap_or_default()
            .iter()
            .filter(|val| right.contains(val))
            .cloned()
            .collect(),
    )
}

/// Returns the elements of the left operand not present in the right.
///
/// Left-operand relative order is preserved. Absent only when **both**
/// operands are absent.
pub fn difference<T: Eq + Hash + Clone>(a: Option<&[T]>, b: Option<&[T]>) -> Option<Vec<T>> {
    if a.is_none() && b.is_none() {
        return None;
    }
    let right = derived_set(b);
    Some(
        a.unwrap_or_default()
            .iter()
            .filter(|val| !right.contains(val))
            .cloned()
            .collect(),
    )
}

/// Returns the elements present in exactly one operand.
///
/// The left operand's unshared elements come first, then the right's, each in
/// their original order. Absent only when **both** operands are absent.
pub fn symmetric_difference<T: Eq + Hash + Clone>(
    a: Option<&[T]>,
    b: Option<&[T]>,
) -> Option<Vec<T>> {
    if a.is_none() && b.is_none() {
        return None;
    }
    let left_set = derived_set(a);
    let right_set = derived_set(b);
    let mut out: Vec<T> = a
        .unwrap_or_default()
        .iter()
        .filter(|val| !right_set.contains(val))
        .cloned()
        .collect();
    out.extend(
        b.unwrap_or_default()
            .iter()
            .filter(|val| !left_set.contains(val))
            .cloned(),
    );
    Some(out)
}

/// Returns `true` if every element of `sub` appears in `superset`.
///
/// An absent or empty `sub` is a subset of anything.
pub fn is_subset<T: Eq + Hash>(sub: Option<&[T]>, superset: Option<&[T]>) -> bool {
    let outer = derived_set(superset);
    sub.unwrap_or_default().iter().all(|val| outer.contains(&val))
}

/// Returns `true` if every element of `sub` appears in `superset`.
///
/// Mirror of [`is_subset`] with the operands swapped.
pub fn is_superset<T: Eq + Hash>(superset: Option<&[T]>, sub: Option<&[T]>) -> bool {
    is_subset(sub, superset)
}

/// Returns `true` if the operands share no element.
///
/// Absent or empty operands are disjoint from anything.
pub fn are_disjoint<T: Eq + Hash>(a: Option<&[T]>, b: Option<&[T]>) -> bool {
    let right = derived_set(b);
    a.unwrap_or_default().iter().all(|val| !right.contains(&val))
}
