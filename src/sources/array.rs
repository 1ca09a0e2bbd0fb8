//! Generators over in-memory collections.

use std::fmt;

use crate::generator::{Generator, GeneratorBase, LoopDirective};

/// Yields the elements of a vector in order.
///
/// # Examples
///
/// ```rust
/// use weir::generator::take;
/// use weir::sources::ArrayGenerator;
///
/// let letters = ArrayGenerator::new(vec!['a', 'b', 'c']);
/// assert_eq!(take(&letters, 2), vec!['a', 'b']);
/// ```
pub struct ArrayGenerator<T> {
    base: GeneratorBase<LoopDirective, T>,
    data: Vec<T>,
}

impl<T> ArrayGenerator<T> {
    /// Creates a generator over `data`.
    pub const fn new(data: Vec<T>) -> Self {
        Self {
            base: GeneratorBase::new(),
            data,
        }
    }

    /// Returns the elements this generator yields.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> Generator<LoopDirective, T> for ArrayGenerator<T> {
    fn base(&self) -> &GeneratorBase<LoopDirective, T> {
        &self.base
    }

    fn run(&self) {
        for item in &self.data {
            if self.yield_item(item.clone()).is_break() {
                break;
            }
        }
    }
}

impl<T> From<Vec<T>> for ArrayGenerator<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayGenerator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ArrayGenerator")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Yields the items of any re-iterable collection or iterator.
///
/// The iterable is cloned at the start of every run, so ranges, slices
/// iterators and other cheap-to-clone sources work directly.
///
/// # Examples
///
/// ```rust
/// use weir::generator::take;
/// use weir::sources::IterGenerator;
///
/// let squares = IterGenerator::new((1..).map(|n: u32| n * n));
/// assert_eq!(take(&squares, 4), vec![1, 4, 9, 16]);
/// ```
pub struct IterGenerator<I: IntoIterator> {
    base: GeneratorBase<LoopDirective, I::Item>,
    iterable: I,
}

impl<I: IntoIterator> IterGenerator<I> {
    /// Creates a generator over `iterable`.
    pub const fn new(iterable: I) -> Self {
        Self {
            base: GeneratorBase::new(),
            iterable,
        }
    }
}

impl<I> Generator<LoopDirective, I::Item> for IterGenerator<I>
where
    I: IntoIterator + Clone,
{
    fn base(&self) -> &GeneratorBase<LoopDirective, I::Item> {
        &self.base
    }

    fn run(&self) {
        for item in self.iterable.clone() {
            if self.yield_item(item).is_break() {
                break;
            }
        }
    }
}

impl<I: IntoIterator> fmt::Debug for IterGenerator<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IterGenerator")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{drive, take};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![5], vec![5])]
    #[case(vec![1, 2, 3], vec![1, 2, 3])]
    fn test_array_generator_yields_in_order(#[case] data: Vec<i64>, #[case] expected: Vec<i64>) {
        assert_eq!(take(&ArrayGenerator::new(data), 10), expected);
    }

    #[rstest]
    fn test_array_generator_stops_on_break() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        drive(&ArrayGenerator::from(vec![1, 2, 3, 4]), move |item| {
            counter.set(counter.get() + 1);
            LoopDirective::from_continue(item != 2)
        });
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_iter_generator_restarts_per_run() {
        let generator = IterGenerator::new(0..3);
        assert_eq!(take(&generator, 10), vec![0, 1, 2]);
        assert_eq!(take(&generator, 2), vec![0, 1]);
    }

    #[rstest]
    fn test_as_slice() {
        let generator = ArrayGenerator::new(vec!["x", "y"]);
        assert_eq!(generator.as_slice(), ["x", "y"]);
    }
}
