//! Property-based tests for generator pipelines.
//!
//! This module verifies that:
//!
//! - **Order preservation**: driving a finite source yields it unchanged
//! - **Early termination**: breaking after item k means exactly k + 1 yields
//! - **Filter correctness**: a filter yields exactly the matching subsequence
//! - **Identity map**: forwarding every item changes nothing
//! - **Sieve equivalence**: all prime pipelines yield the same sequence

#![cfg(feature = "sources")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use proptest::prelude::*;
use weir::generator::{
    GeneratorMap, LoopDirective, create_iterative_map, drive, filter, take, take_while,
};
use weir::sources::{ArrayGenerator, primes, recursive_primes, sieve_primes};

// =============================================================================
// Helper Functions for Tests
// =============================================================================

fn record_all<G>(generator: &G) -> Vec<i32>
where
    G: weir::generator::Generator<LoopDirective, i32> + ?Sized,
{
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    drive(generator, move |item| {
        sink.borrow_mut().push(item);
        LoopDirective::Continue
    });
    let result = seen.borrow().clone();
    result
}

fn is_trial_prime(candidate: u64) -> bool {
    candidate >= 2 && (2_u64..).take_while(|d| d * d <= candidate).all(|d| candidate % d != 0)
}

// =============================================================================
// Order Preservation
// =============================================================================

proptest! {
    /// drive(source(s), record) == s
    #[test]
    fn prop_drive_preserves_order(data in prop::collection::vec(any::<i32>(), 0..64)) {
        let recorded = record_all(&ArrayGenerator::new(data.clone()));
        prop_assert_eq!(recorded, data);
    }
}

proptest! {
    /// An identity map is invisible: apply(id, s) yields s.
    #[test]
    fn prop_identity_map(data in prop::collection::vec(any::<i32>(), 0..64)) {
        let identity = create_iterative_map(|output, item: i32| -> LoopDirective {
            output.yield_item(item)
        });
        let stream = identity.apply(Rc::new(ArrayGenerator::new(data.clone())));
        prop_assert_eq!(record_all(&*stream), data);
    }
}

// =============================================================================
// Early Termination
// =============================================================================

proptest! {
    /// Breaking after the k-th item makes the source yield exactly k + 1 items.
    #[test]
    fn prop_break_after_k_items(
        data in prop::collection::vec(any::<i32>(), 1..64),
        seed in any::<prop::sample::Index>(),
    ) {
        let k = seed.index(data.len());
        let calls = Rc::new(Cell::new(0_usize));
        let counter = Rc::clone(&calls);

        drive(&ArrayGenerator::new(data), move |_| {
            counter.set(counter.get() + 1);
            LoopDirective::from_continue(counter.get() <= k)
        });

        prop_assert_eq!(calls.get(), k + 1);
    }
}

proptest! {
    /// take(g, n) is the first n items of the source.
    #[test]
    fn prop_take_is_prefix(
        data in prop::collection::vec(any::<i32>(), 0..64),
        count in 0_usize..80,
    ) {
        let taken = take(&ArrayGenerator::new(data.clone()), count);
        let expected: Vec<i32> = data.into_iter().take(count).collect();
        prop_assert_eq!(taken, expected);
    }
}

// =============================================================================
// Filter Correctness
// =============================================================================

proptest! {
    /// filter(p) yields exactly the subsequence satisfying p, in order.
    #[test]
    fn prop_filter_is_subsequence(
        data in prop::collection::vec(any::<i32>(), 0..64),
        modulus in 1_i32..7,
    ) {
        let stream = filter(move |item: &i32| item.rem_euclid(modulus) == 0)
            .apply(Rc::new(ArrayGenerator::new(data.clone())));
        let expected: Vec<i32> = data
            .into_iter()
            .filter(|item| item.rem_euclid(modulus) == 0)
            .collect();
        prop_assert_eq!(record_all(&*stream), expected);
    }
}

proptest! {
    /// take_while(p) yields the longest prefix satisfying p.
    #[test]
    fn prop_take_while_is_prefix(
        data in prop::collection::vec(-50_i32..50, 0..64),
        bound in -50_i32..50,
    ) {
        let stream = take_while(move |item: &i32| *item < bound)
            .apply(Rc::new(ArrayGenerator::new(data.clone())));
        let expected: Vec<i32> = data.into_iter().take_while(|item| *item < bound).collect();
        prop_assert_eq!(record_all(&*stream), expected);
    }
}

// =============================================================================
// Sieve Equivalence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// The iterative and the recursive sieves agree on every prefix.
    #[test]
    fn prop_sieves_agree(count in 0_usize..100) {
        let iterative = take(&*primes(), count);
        prop_assert_eq!(&iterative, &take(&*recursive_primes(), count));
        prop_assert_eq!(&iterative, &take(&*sieve_primes(), count));
        prop_assert!(iterative.iter().all(|prime| is_trial_prime(*prime)));
    }
}

#[test]
fn first_hundred_primes_are_consecutive() {
    let expected: Vec<u64> = (2_u64..).filter(|n| is_trial_prime(*n)).take(100).collect();
    assert_eq!(take(&*primes(), 100), expected);
    assert_eq!(take(&*recursive_primes(), 100), expected);
}
