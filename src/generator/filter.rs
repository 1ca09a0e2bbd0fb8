//! Ready-made iterative maps over [`LoopDirective`] generators.
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use weir::generator::{filter, map_items, take, GeneratorMap};
//! use weir::sources::Naturals;
//!
//! let odd = filter(|item: &u64| item % 2 == 1).apply(Rc::new(Naturals::new(0)));
//! let odd_squares = map_items(|item: u64| item * item).apply(odd);
//! assert_eq!(take(&*odd_squares, 3), vec![1, 9, 25]);
//! ```

use super::base::Generator;
use super::directive::LoopDirective;
use super::map::{GeneratorMap, create_iterative_map};

/// A predicate on items.
///
/// Implemented by every `Fn(&T) -> bool`.
pub trait Predicate<T>: Fn(&T) -> bool {}

impl<T, P> Predicate<T> for P where P: Fn(&T) -> bool {}

/// Drops the items that do not satisfy `predicate`.
///
/// Items satisfying the predicate are forwarded and the consumer's answer is
/// passed back upstream; any other item is answered with `Continue` without
/// reaching the consumer.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use weir::generator::{filter, take, GeneratorMap};
/// use weir::sources::ArrayGenerator;
///
/// let words = ArrayGenerator::new(vec!["weir", "is", "a", "low", "dam"]);
/// let long = filter(|word: &&str| word.len() > 2).apply(Rc::new(words));
/// assert_eq!(take(&*long, 10), vec!["weir", "low", "dam"]);
/// ```
pub fn filter<T, P>(predicate: P) -> impl GeneratorMap<LoopDirective, T> + Clone
where
    T: 'static,
    P: Predicate<T> + 'static,
{
    create_iterative_map(move |output: &dyn Generator<LoopDirective, T>, item: T| {
        if predicate(&item) {
            output.yield_item(item)
        } else {
            LoopDirective::Continue
        }
    })
}

/// Replaces every item with `transform(item)`.
pub fn map_items<T, F>(transform: F) -> impl GeneratorMap<LoopDirective, T> + Clone
where
    T: 'static,
    F: Fn(T) -> T + 'static,
{
    create_iterative_map(move |output: &dyn Generator<LoopDirective, T>, item: T| {
        output.yield_item(transform(item))
    })
}

/// Forwards items while `predicate` holds, then stops the producer.
///
/// The first item failing the predicate is not forwarded; it is answered
/// with `Break`, so an infinite source becomes a finite one.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use weir::generator::{drive, take_while, GeneratorMap, LoopDirective};
/// use weir::sources::Naturals;
///
/// let below_four = take_while(|item: &u64| *item < 4).apply(Rc::new(Naturals::new(0)));
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// drive(&*below_four, move |item| {
///     sink.borrow_mut().push(item);
///     LoopDirective::Continue
/// });
/// assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
/// ```
pub fn take_while<T, P>(predicate: P) -> impl GeneratorMap<LoopDirective, T> + Clone
where
    T: 'static,
    P: Predicate<T> + 'static,
{
    create_iterative_map(move |output: &dyn Generator<LoopDirective, T>, item: T| {
        if predicate(&item) {
            output.yield_item(item)
        } else {
            LoopDirective::Break
        }
    })
}

#[cfg(all(test, feature = "sources"))]
mod tests {
    use super::*;
    use crate::generator::{drive, take};
    use crate::sources::{ArrayGenerator, Naturals};
    use rstest::rstest;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5, 6], vec![2, 4, 6])]
    #[case(vec![1, 3, 5], vec![])]
    #[case(vec![], vec![])]
    #[case(vec![8, 8, 7, 8], vec![8, 8, 8])]
    fn test_filter_keeps_matching_items_in_order(
        #[case] data: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let stream = filter(|item: &i32| item % 2 == 0).apply(Rc::new(ArrayGenerator::new(data)));
        assert_eq!(take(&*stream, 100), expected);
    }

    #[rstest]
    fn test_filter_passes_break_upstream() {
        let produced = Rc::new(Cell::new(0_u64));
        let watch = Rc::clone(&produced);
        let stream = filter(move |item: &u64| {
            watch.set(*item);
            item % 3 == 0
        })
        .apply(Rc::new(Naturals::new(1)));

        assert_eq!(take(&*stream, 2), vec![3, 6]);
        assert_eq!(produced.get(), 6);
    }

    #[rstest]
    fn test_rejected_items_never_reach_the_consumer() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let stream =
            filter(|item: &i32| *item > 10).apply(Rc::new(ArrayGenerator::new(vec![1, 2, 3])));
        drive(&*stream, move |_| {
            counter.set(counter.get() + 1);
            LoopDirective::Continue
        });
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_items() {
        let stream = map_items(|item: u64| item + 100).apply(Rc::new(Naturals::new(0)));
        assert_eq!(take(&*stream, 3), vec![100, 101, 102]);
    }

    #[rstest]
    fn test_take_while_stops_an_infinite_source() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let stream = take_while(|item: &u64| item * item < 30).apply(Rc::new(Naturals::new(1)));
        drive(&*stream, move |item| {
            sink.borrow_mut().push(item);
            LoopDirective::Continue
        });
        assert_eq!(*seen.borrow(), vec![1, 2, 3, 4, 5]);
    }
}
