//! Slave code: wiring a consumer into a generator and running it.

use std::cell::RefCell;
use std::rc::Rc;

use super::base::Generator;
use super::directive::LoopDirective;

/// Installs `consumer` into `generator` and runs the generator.
///
/// `consumer` is called once per produced item, in production order, and
/// its answer goes back to the producer. This is the only supported way to
/// start a generator.
///
/// # Panics
///
/// Propagates panics raised by the consumer or by the production
/// algorithm.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use weir::generator::{drive, LoopDirective};
/// use weir::sources::Naturals;
///
/// let total = Rc::new(Cell::new(0));
/// let sum = Rc::clone(&total);
/// drive(&Naturals::new(1), move |item| {
///     sum.set(sum.get() + item);
///     LoopDirective::from_continue(item < 10)
/// });
/// assert_eq!(total.get(), 55);
/// ```
pub fn drive<R, T, G, C>(generator: &G, consumer: C)
where
    G: Generator<R, T> + ?Sized,
    C: FnMut(T) -> R + 'static,
{
    tracing::debug!(target: "weir::generator", "driving generator");
    generator.install(Box::new(consumer));
    generator.run();
    tracing::debug!(target: "weir::generator", "generator finished");
}

/// Drives `generator` and collects its first `count` items.
///
/// The producer is stopped right after the last wanted item, so infinite
/// generators are fine. Fewer items are returned if the generator runs out
/// first. With `count == 0` the generator is not run at all.
///
/// # Examples
///
/// ```rust
/// use weir::generator::take;
/// use weir::sources::{ArrayGenerator, Naturals};
///
/// assert_eq!(take(&Naturals::new(7), 3), vec![7, 8, 9]);
/// assert_eq!(take(&ArrayGenerator::new(vec![1, 2]), 5), vec![1, 2]);
/// ```
pub fn take<T, G>(generator: &G, count: usize) -> Vec<T>
where
    T: 'static,
    G: Generator<LoopDirective, T> + ?Sized,
{
    if count == 0 {
        return Vec::new();
    }

    let collected = Rc::new(RefCell::new(Vec::with_capacity(count)));
    let sink = Rc::clone(&collected);
    drive(generator, move |item| {
        let mut items = sink.borrow_mut();
        items.push(item);
        LoopDirective::from_continue(items.len() < count)
    });

    // The consumer still holds `sink`.
    std::mem::take(&mut *collected.borrow_mut())
}

/// Drives `generator` up to the item at zero-based `index` and returns it.
///
/// Returns `None` if the generator runs out before reaching `index`.
///
/// # Examples
///
/// ```rust
/// use weir::generator::nth;
/// use weir::sources::{primes, ArrayGenerator};
///
/// assert_eq!(nth(&*primes(), 11), Some(37));
/// assert_eq!(nth(&ArrayGenerator::new(vec!['x']), 1), None);
/// ```
pub fn nth<T, G>(generator: &G, index: usize) -> Option<T>
where
    T: 'static,
    G: Generator<LoopDirective, T> + ?Sized,
{
    let found = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&found);
    let mut remaining = index;
    drive(generator, move |item| {
        if remaining == 0 {
            *slot.borrow_mut() = Some(item);
            LoopDirective::Break
        } else {
            remaining -= 1;
            LoopDirective::Continue
        }
    });
    found.borrow_mut().take()
}
