//! The natural numbers.

use crate::generator::{Generator, GeneratorBase, LoopDirective};

/// Yields `start, start + 1, start + 2, ...` until told to stop.
///
/// The sequence never ends on its own; only a `Break` answer stops it.
///
/// # Examples
///
/// ```rust
/// use weir::generator::take;
/// use weir::sources::Naturals;
///
/// assert_eq!(take(&Naturals::new(0), 4), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct Naturals {
    base: GeneratorBase<LoopDirective, u64>,
    start: u64,
}

impl Naturals {
    /// Creates the sequence starting at `start`.
    pub const fn new(start: u64) -> Self {
        Self {
            base: GeneratorBase::new(),
            start,
        }
    }

    /// Returns the first number of the sequence.
    pub const fn start(&self) -> u64 {
        self.start
    }
}

impl Generator<LoopDirective, u64> for Naturals {
    fn base(&self) -> &GeneratorBase<LoopDirective, u64> {
        &self.base
    }

    fn run(&self) {
        let mut counter = self.start;
        while self.yield_item(counter).is_continue() {
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{nth, take};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(1_000_000)]
    fn test_naturals_count_up_from_start(#[case] start: u64) {
        let naturals = Naturals::new(start);
        assert_eq!(naturals.start(), start);
        assert_eq!(take(&naturals, 3), vec![start, start + 1, start + 2]);
    }

    #[rstest]
    fn test_naturals_run_far() {
        assert_eq!(nth(&Naturals::new(0), 10_000), Some(10_000));
    }
}
