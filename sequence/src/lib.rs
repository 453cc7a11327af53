//! Eager, order-preserving operations over optional sequences.
//!
//! Every operation in this crate treats its input as an *optional sequence*:
//! `None` is a distinguished "absent" state, distinct from a present-but-empty
//! sequence. Callers rely on that distinction to avoid allocating downstream,
//! so each operation propagates absence according to a fixed rule (documented
//! per function) instead of collapsing `None` into `Some(vec![])`.
//!
//! # Overview
//!
//! Two families of operations are provided:
//!
//! - Linear scans ([`map`], [`filter`], [`fold`], [`partition`], ...) that make
//!   a single pass over the sequence and preserve relative element order.
//! - Set-backed operations ([`union`], [`intersection`], [`deduplicate`], ...)
//!   that build a deduplicated membership set from one operand and decide
//!   element membership through it. These require `T: Eq + Hash`.
//!
//! All operations are eager: they materialize full result containers rather
//! than returning lazy adapters. In-place variants ([`filter_in_place`],
//! [`reverse_in_place`], [`partition_in_place`], ...) mutate the caller-owned
//! sequence and allocate nothing (beyond bookkeeping for deduplication).
//!
//! # Example
//!
//! ```
//! use sliceworks_sequence::{filter, map};
//!
//! let values = [1, 2, 3, 4, 5];
//! let doubled = map(Some(&values[..]), |v| v * 2);
//! assert_eq!(doubled, Some(vec![2, 4, 6, 8, 10]));
//!
//! // Absence propagates; it is not an empty result.
//! let absent: Option<&[i32]> = None;
//! assert_eq!(map(absent, |v| v * 2), None);
//! assert_eq!(filter(Some(&[][..]), |v: &i32| *v > 0), Some(vec![]));
//! ```

mod ops;
pub use ops::{
    all, any, contains, count, filter, filter_in_place, filter_map, find_by, flatten, fold,
    is_sorted_by, join, map, max_by, min_by, partition, partition_in_place, reverse,
    reverse_in_place,
};
mod set;
pub use set::{
    are_disjoint, deduplicate, deduplicate_in_place, difference, frequencies, intersection,
    is_set, is_subset, is_superset, symmetric_difference, union,
};
