//! Output generators produced by generator maps.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::base::{Generator, GeneratorBase};

/// Shared handle to a generator of any concrete type.
pub type SharedGenerator<R, T> = Rc<dyn Generator<R, T>>;

/// A generator that owns no items and runs by running its upstream.
///
/// Every [`GeneratorMap::apply`](super::GeneratorMap::apply) returns one of
/// these. Its upstream yields into an interception continuation, which in
/// turn yields into this generator's slot.
///
/// The outermost output of a recursive map additionally parks the stream
/// built by the latest rebuild in `spliced`, so that the rebuilt stages live
/// exactly as long as the generator they feed.
pub struct PipelineGenerator<R, T> {
    base: GeneratorBase<R, T>,
    upstream: SharedGenerator<R, T>,
    spliced: RefCell<Option<SharedGenerator<R, T>>>,
}

impl<R, T> PipelineGenerator<R, T> {
    /// Creates a pipeline stage running on top of `upstream`.
    pub fn new(upstream: SharedGenerator<R, T>) -> Self {
        Self {
            base: GeneratorBase::new(),
            upstream,
            spliced: RefCell::new(None),
        }
    }

    /// Keeps `tail` alive for as long as this stage.
    ///
    /// Each rebuild extends the stream of the previous one, so the previous
    /// tail is released here.
    pub(crate) fn splice(&self, tail: SharedGenerator<R, T>) {
        let previous = self.spliced.borrow_mut().replace(tail);
        drop(previous);
    }
}

impl<R, T> Generator<R, T> for PipelineGenerator<R, T> {
    fn base(&self) -> &GeneratorBase<R, T> {
        &self.base
    }

    fn run(&self) {
        self.upstream.run();
    }
}

impl<R, T> fmt::Debug for PipelineGenerator<R, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PipelineGenerator")
            .field("base", &self.base)
            .field("spliced", &self.spliced.borrow().is_some())
            .finish_non_exhaustive()
    }
}

/// Upgrades a stage handle held by an interception continuation.
///
/// Stages are owned downstream-to-upstream, so a continuation can only
/// outlive its stages once the whole pipeline has been dropped, and nothing
/// can yield into it at that point.
pub(crate) fn upgrade<G: ?Sized>(handle: &Weak<G>) -> Rc<G> {
    handle
        .upgrade()
        .unwrap_or_else(|| panic!("pipeline stage was dropped while items were still flowing"))
}
