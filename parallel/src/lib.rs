//! Balanced work division and an order-preserving parallel map built on it.
//!
//! This crate provides [`Divisions`], a deterministic assignment of `[0, length)`
//! across a fixed number of contiguous, non-overlapping chunks, and a parallel
//! map that consumes it: [`par_map`] applies a mapping function to every element
//! of a sequence across multiple workers and returns results in original
//! positional order — externally indistinguishable from the sequential map,
//! differing only in execution strategy.
//!
//! # Overview
//!
//! Each worker owns one division's input sub-range and the matching region of a
//! single pre-allocated output buffer. Because the divisions are pairwise
//! disjoint and cover the input exactly, no two workers ever address the same
//! output slot: the buffer needs no lock, and the only synchronization is the
//! completion barrier at the end of the worker scope. Output order is therefore
//! independent of worker scheduling order.
//!
//! Three entry points cover the common deployment shapes:
//!
//! - [`par_map`]: one worker per unit of available parallelism
//! - [`par_map_with`]: explicit worker count, for deterministic tests
//! - [`par_map_in`]: workers scheduled on a caller-supplied [`rayon::ThreadPool`]
//!
//! # Features
//!
//! - `std` (default): enables the rayon-backed parallel map
//!
//! When the `std` feature is disabled, only [`Divisions`] is available, making
//! this crate suitable for `no_std` environments.
//!
//! # Example
//!
//! ```
//! use sliceworks_parallel::par_map_with;
//!
//! let values = [1, 2, 3, 4, 5, 6, 7, 8];
//! let doubled = par_map_with(Some(&values[..]), 4, |v| v * 2);
//! assert_eq!(doubled, Some(vec![2, 4, 6, 8, 10, 12, 14, 16]));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

use cfg_if::cfg_if;

mod divide;
pub use divide::Divisions;

cfg_if! {
    if #[cfg(feature = "std")] {
        use core::mem::take;
        use rayon::ThreadPool;
        use std::thread::available_parallelism;

        /// Maps each element of the sequence concurrently, with one worker per
        /// unit of the host's available parallelism.
        ///
        /// Equivalent to [`par_map_with`] with the worker count taken from
        /// [`std::thread::available_parallelism`] (falling back to one worker
        /// when parallelism cannot be determined).
        pub fn par_map<T, U, F>(seq: Option<&[T]>, map_fn: F) -> Option<Vec<U>>
        where
            T: Sync,
            U: Send,
            F: Fn(&T) -> U + Send + Sync,
        {
            let workers = available_parallelism().map_or(1, |count| count.get());
            par_map_with(seq, workers, map_fn)
        }

        /// Maps each element of the sequence concurrently across `workers`
        /// workers.
        ///
        /// The input is split into `workers` balanced divisions (see
        /// [`Divisions`]); each division is processed by one scoped task that
        /// maps its input sub-range into its exclusive region of the shared
        /// output buffer. The call returns only after every worker has
        /// completed, with results in original positional order — identical to
        /// the sequential map over the same inputs.
        ///
        /// The mapping function is invoked concurrently with itself on disjoint
        /// elements, which is why it must be `Fn + Send + Sync`; keeping it
        /// free of shared mutable state is the caller's obligation.
        ///
        /// An absent sequence short-circuits before any division or worker is
        /// created.
        ///
        /// # Panics
        ///
        /// Panics if `workers` is zero (caller bug). If the mapping function
        /// panics inside a worker, the panic is re-raised on the caller after
        /// all workers have been joined; mapped values already written to the
        /// output buffer are leaked, not dropped.
        pub fn par_map_with<T, U, F>(
            seq: Option<&[T]>,
            workers: usize,
            map_fn: F,
        ) -> Option<Vec<U>>
        where
            T: Sync,
            U: Send,
            F: Fn(&T) -> U + Send + Sync,
        {
            assert!(workers > 0, "worker count must be non-zero");
            let input = seq?;
            if workers == 1 || input.len() <= 1 {
                return sliceworks_sequence::map(Some(input), map_fn);
            }
            Some(chunked_map(input, workers, &map_fn))
        }

        /// Maps each element of the sequence concurrently on a caller-supplied
        /// thread pool, with one worker per pool thread.
        ///
        /// Same contract as [`par_map_with`]; the pool only determines where
        /// the workers are scheduled, never the output order.
        pub fn par_map_in<T, U, F>(
            pool: &ThreadPool,
            seq: Option<&[T]>,
            map_fn: F,
        ) -> Option<Vec<U>>
        where
            T: Sync,
            U: Send,
            F: Fn(&T) -> U + Send + Sync,
        {
            let input = seq?;
            let workers = pool.current_num_threads();
            if workers == 1 || input.len() <= 1 {
                return sliceworks_sequence::map(Some(input), map_fn);
            }
            Some(pool.install(|| chunked_map(input, workers, &map_fn)))
        }

        /// Maps `input` into a freshly allocated buffer, one scoped worker per
        /// division.
        fn chunked_map<T, U, F>(input: &[T], workers: usize, map_fn: &F) -> Vec<U>
        where
            T: Sync,
            U: Send,
            F: Fn(&T) -> U + Send + Sync,
        {
            let divisions = Divisions::new(input.len(), workers);
            let mut output: Vec<U> = Vec::with_capacity(input.len());
            let mut regions = &mut output.spare_capacity_mut()[..input.len()];
            rayon::scope(|scope| {
                for range in divisions.iter() {
                    let (region, rest) = take(&mut regions).split_at_mut(range.len());
                    regions = rest;
                    if range.is_empty() {
                        continue;
                    }
                    let chunk = &input[range];
                    scope.spawn(move |_| {
                        for (slot, val) in region.iter_mut().zip(chunk) {
                            slot.write(map_fn(val));
                        }
                    });
                }
            });

            // SAFETY: the divisions partition `[0, input.len())` exactly, so
            // every slot below `input.len()` was initialized by exactly one
            // worker before the scope joined.
            unsafe { output.set_len(input.len()) };
            output
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{par_map, par_map_in, par_map_with};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rayon::ThreadPoolBuilder;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::thread::available_parallelism;

    #[test]
    fn test_doubling_matches_sequential() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8];
        let expected = sliceworks_sequence::map(Some(&values[..]), |v| v * 2);
        let doubled = par_map_with(Some(&values[..]), 4, |v| v * 2);
        assert_eq!(doubled, Some(vec![2, 4, 6, 8, 10, 12, 14, 16]));
        assert_eq!(doubled, expected);
    }

    #[test]
    fn test_absent_short_circuits() {
        let absent: Option<&[i32]> = None;
        assert_eq!(par_map(absent, |v| v * 2), None);
        assert_eq!(par_map_with(absent, 4, |v| v * 2), None);
    }

    #[test]
    fn test_empty_is_present() {
        let empty: Option<&[i32]> = Some(&[]);
        assert_eq!(par_map_with(empty, 4, |v| v * 2), Some(vec![]));
    }

    #[test]
    fn test_every_worker_count_up_to_parallelism() {
        let values: Vec<u64> = (0..1024).collect();
        let expected = sliceworks_sequence::map(Some(values.as_slice()), |v| v * 3);
        let max_workers = available_parallelism().map_or(4, |count| count.get());
        for workers in 1..=max_workers {
            let mapped = par_map_with(Some(values.as_slice()), workers, |v| v * 3);
            assert_eq!(mapped, expected);
        }
    }

    #[test]
    fn test_more_workers_than_elements() {
        let values = [1, 2, 3];
        let mapped = par_map_with(Some(&values[..]), 16, |v| v + 1);
        assert_eq!(mapped, Some(vec![2, 3, 4]));
    }

    #[test]
    #[should_panic(expected = "worker count must be non-zero")]
    fn test_zero_workers_panics() {
        par_map_with(Some(&[1, 2, 3][..]), 0, |v| v * 2);
    }

    #[test]
    fn test_worker_panic_reraised_after_join() {
        let values: Vec<u32> = (0..64).collect();
        let result = catch_unwind(AssertUnwindSafe(|| {
            par_map_with(Some(values.as_slice()), 4, |v| {
                if *v == 42 {
                    panic!("mapping failed");
                }
                v + 1
            })
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_pool_backed_map() {
        let pool = ThreadPoolBuilder::new().num_threads(2).build().unwrap();
        let values: Vec<i64> = (0..1000).collect();
        let expected = sliceworks_sequence::map(Some(values.as_slice()), |v| v * v);
        let mapped = par_map_in(&pool, Some(values.as_slice()), |v| v * v);
        assert_eq!(mapped, expected);
    }

    proptest! {
        #[test]
        fn par_map_matches_sequential_map(
            values in prop::collection::vec(any::<i32>(), 0..2000),
            workers in 1usize..16,
        ) {
            let expected =
                sliceworks_sequence::map(Some(values.as_slice()), |v| i64::from(*v) * 7);
            let mapped = par_map_with(Some(values.as_slice()), workers, |v| i64::from(*v) * 7);
            prop_assert_eq!(mapped, expected);
        }

        #[test]
        fn output_order_is_input_order(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let len = rng.gen_range(0..500);
            let values: Vec<u32> = (0..len).map(|_| rng.gen()).collect();
            let mapped =
                par_map_with(Some(values.as_slice()), 8, |v| u64::from(*v) + 1).unwrap();
            prop_assert_eq!(mapped.len(), values.len());
            for (mapped_val, val) in mapped.iter().zip(values.iter()) {
                prop_assert_eq!(*mapped_val, u64::from(*val) + 1);
            }
        }
    }
}
