//! Prime number generators built from natural numbers and generator maps.
//!
//! Three sieves produce the same sequence by different means:
//!
//! - [`primes`]: an iterative map doing trial division by the primes found
//!   so far
//! - [`recursive_primes`]: a recursive map that splices a new filter stage
//!   into the pipeline once a prime's square comes into range
//! - [`sieve_primes`]: the textbook recursive sieve, splicing one filter per
//!   prime as soon as it is found
//!
//! None of them is meant to be fast. They show the two ways of defining
//! generator maps.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::smallvec;

use crate::generator::{
    BoxedGeneratorMap, Generator, GeneratorMap, LoopDirective, MapList, SharedGenerator,
    create_iterative_map, create_recursive_map, filter,
};

use super::naturals::Naturals;

/// Returns a predicate holding for numbers not divisible by `divisor`.
///
/// # Examples
///
/// ```rust
/// use weir::sources::is_non_divisible;
///
/// let odd = is_non_divisible(2);
/// assert!(odd(&7));
/// assert!(!odd(&8));
/// ```
pub fn is_non_divisible(divisor: u64) -> impl Fn(&u64) -> bool + Clone + 'static {
    move |item| item % divisor != 0
}

/// Keeps the primes of an increasing sequence starting at 2, by trial
/// division.
///
/// Only primes up to `limit` are tried, where `limit * limit` is kept at or
/// above the current item. Every `apply` starts with an empty table of
/// found primes, so the map can be applied any number of times.
pub fn trial_division_map() -> impl GeneratorMap<LoopDirective, u64> + Clone {
    TrialDivision
}

#[derive(Clone, Copy, Debug)]
struct TrialDivision;

impl GeneratorMap<LoopDirective, u64> for TrialDivision {
    fn apply(
        &self,
        input: SharedGenerator<LoopDirective, u64>,
    ) -> SharedGenerator<LoopDirective, u64> {
        let found = RefCell::new(Vec::<u64>::new());
        let limit = Cell::new(2_u64);

        create_iterative_map(
            move |output: &dyn Generator<LoopDirective, u64>, item: u64| {
                if item > limit.get() * limit.get() {
                    limit.set(limit.get() + 1);
                }

                let is_prime = found
                    .borrow()
                    .iter()
                    .take_while(|prime| **prime <= limit.get())
                    .all(|prime| item % prime != 0);
                if !is_prime {
                    return LoopDirective::Continue;
                }

                found.borrow_mut().push(item);
                output.yield_item(item)
            },
        )
        .apply(input)
    }
}

/// Keeps the primes of an increasing sequence starting at 2, by splicing
/// filter stages.
///
/// `pending` holds the primes already yielded but not yet used as filters,
/// oldest first, and `last_filtered` is the largest prime already filtered
/// out. A new filter for the oldest pending prime `p` is only spliced in
/// once an item exceeds `last_filtered * last_filtered`, which is early
/// enough for `p * p`. The square saturates, so a `last_filtered` beyond
/// `u32::MAX` simply never splices another filter.
pub fn deferred_sieve_map(
    pending: Vec<u64>,
    last_filtered: u64,
) -> BoxedGeneratorMap<LoopDirective, u64> {
    create_recursive_map(
        move |output: &dyn Generator<LoopDirective, u64>, item: u64| {
            if output.yield_item(item).is_break() {
                return (LoopDirective::Break, MapList::new());
            }

            let mut pending = pending.clone();
            pending.push(item);

            let mut maps = MapList::new();
            let mut last_filtered = last_filtered;
            if last_filtered.saturating_mul(last_filtered) < item {
                last_filtered = pending.remove(0);
                maps.push(filter(is_non_divisible(last_filtered)).boxed());
            }
            maps.push(deferred_sieve_map(pending, last_filtered));

            (LoopDirective::Continue, maps)
        },
    )
    .boxed()
}

/// The textbook recursive sieve.
///
/// Yields the head `p` of its input, then runs itself again on the rest of
/// the input with the multiples of `p` filtered out.
pub fn sieve_map() -> BoxedGeneratorMap<LoopDirective, u64> {
    create_recursive_map(|output: &dyn Generator<LoopDirective, u64>, prime: u64| {
        let maps: MapList<LoopDirective, u64> =
            smallvec![filter(is_non_divisible(prime)).boxed(), sieve_map()];
        (output.yield_item(prime), maps)
    })
    .boxed()
}

/// All prime numbers, via [`trial_division_map`].
///
/// # Examples
///
/// ```rust
/// use weir::generator::take;
/// use weir::sources::primes;
///
/// assert_eq!(take(&*primes(), 5), vec![2, 3, 5, 7, 11]);
/// ```
pub fn primes() -> SharedGenerator<LoopDirective, u64> {
    trial_division_map().apply(Rc::new(Naturals::new(2)))
}

/// All prime numbers, via [`deferred_sieve_map`].
///
/// Produces the same sequence as [`primes`], but grows the pipeline while
/// running, and is slower.
pub fn recursive_primes() -> SharedGenerator<LoopDirective, u64> {
    deferred_sieve_map(Vec::new(), 0).apply(Rc::new(Naturals::new(2)))
}

/// All prime numbers, via [`sieve_map`].
pub fn sieve_primes() -> SharedGenerator<LoopDirective, u64> {
    sieve_map().apply(Rc::new(Naturals::new(2)))
}
