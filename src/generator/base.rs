//! The continuation slot and the `Generator` capability set.
//!
//! Every generator embeds a [`GeneratorBase`], which owns the one
//! continuation the generator hands its items to. Concrete producers only
//! supply [`Generator::run`]; yielding and wiring come from the base.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use weir::generator::{drive, Generator, GeneratorBase, LoopDirective};
//!
//! struct Countdown {
//!     base: GeneratorBase<LoopDirective, u32>,
//!     from: u32,
//! }
//!
//! impl Generator<LoopDirective, u32> for Countdown {
//!     fn base(&self) -> &GeneratorBase<LoopDirective, u32> {
//!         &self.base
//!     }
//!
//!     fn run(&self) {
//!         for value in (0..=self.from).rev() {
//!             if self.yield_item(value).is_break() {
//!                 break;
//!             }
//!         }
//!     }
//! }
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let countdown = Countdown { base: GeneratorBase::new(), from: 3 };
//! drive(&countdown, move |value| {
//!     sink.borrow_mut().push(value);
//!     LoopDirective::Continue
//! });
//! assert_eq!(*seen.borrow(), vec![3, 2, 1, 0]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;

use super::error::GeneratorError;
use super::pipeline::PipelineGenerator;

/// A boxed consumer: receives one item and answers with `R`.
pub type BoxedContinuation<R, T> = Box<dyn FnMut(T) -> R>;

/// Where the slot's continuation currently is.
enum SlotState<R, T> {
    Unwired,
    Ready(BoxedContinuation<R, T>),
    /// Taken out of the slot by an in-flight `yield_item`.
    Running,
}

/// The continuation slot shared by all generators.
///
/// Embed this type into a struct and return it from [`Generator::base`] to
/// get `yield_item`, `install` and `is_wired` for free.
///
/// The slot is single-writer: while its continuation runs, the slot is
/// marked as running, and an `install` issued from inside that continuation
/// takes effect for the next item. The running continuation is dropped once
/// it returns.
pub struct GeneratorBase<R, T> {
    slot: RefCell<SlotState<R, T>>,
    /// Set on tails spliced in by a recursive map: the output they feed.
    splice_root: RefCell<Option<Weak<PipelineGenerator<R, T>>>>,
}

impl<R, T> GeneratorBase<R, T> {
    /// Creates an unwired slot.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slot: RefCell::new(SlotState::Unwired),
            splice_root: RefCell::new(None),
        }
    }

    /// Hands `item` to the installed continuation and returns its answer.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unwired`] if nothing is installed, and
    /// [`GeneratorError::Reentrant`] if the continuation is already running
    /// further up the call stack.
    pub fn try_yield_item(&self, item: T) -> Result<R, GeneratorError> {
        let mut continuation = {
            let mut slot = self.slot.borrow_mut();
            match std::mem::replace(&mut *slot, SlotState::Running) {
                SlotState::Ready(continuation) => continuation,
                SlotState::Unwired => {
                    *slot = SlotState::Unwired;
                    return Err(GeneratorError::Unwired);
                }
                SlotState::Running => return Err(GeneratorError::Reentrant),
            }
        };

        let result = continuation(item);

        let replaced = {
            let mut slot = self.slot.borrow_mut();
            if matches!(*slot, SlotState::Running) {
                *slot = SlotState::Ready(continuation);
                None
            } else {
                Some(continuation)
            }
        };
        drop(replaced);

        Ok(result)
    }

    /// Hands `item` to the installed continuation and returns its answer.
    ///
    /// # Panics
    ///
    /// Panics if no continuation is installed or if the yield is re-entrant.
    /// Both are wiring mistakes; see [`GeneratorError`].
    #[inline]
    pub fn yield_item(&self, item: T) -> R {
        self.try_yield_item(item)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Replaces the installed continuation.
    ///
    /// The previous continuation is discarded. If it is running, it finishes
    /// its current item first.
    pub fn install(&self, continuation: BoxedContinuation<R, T>) {
        let previous = std::mem::replace(
            &mut *self.slot.borrow_mut(),
            SlotState::Ready(continuation),
        );
        tracing::trace!(
            target: "weir::generator",
            rewired = !matches!(previous, SlotState::Unwired),
            "continuation installed"
        );
        drop(previous);
    }

    /// Returns `true` once a continuation has been installed.
    #[inline]
    pub fn is_wired(&self) -> bool {
        !matches!(*self.slot.borrow(), SlotState::Unwired)
    }

    pub(crate) fn splice_root(&self) -> Option<Weak<PipelineGenerator<R, T>>> {
        self.splice_root.borrow().clone()
    }

    pub(crate) fn set_splice_root(&self, root: Weak<PipelineGenerator<R, T>>) {
        *self.splice_root.borrow_mut() = Some(root);
    }
}

impl<R, T> Default for GeneratorBase<R, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, T> fmt::Debug for GeneratorBase<R, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.slot.try_borrow().as_deref() {
            Ok(SlotState::Unwired) => "Unwired",
            Ok(SlotState::Ready(_)) => "Ready",
            Ok(SlotState::Running) | Err(_) => "Running",
        };
        formatter
            .debug_struct("GeneratorBase")
            .field("state", &state)
            .finish()
    }
}

/// Master code producing items of type `T` for a consumer answering `R`.
///
/// Implementors embed a [`GeneratorBase`] and write the production
/// algorithm in [`run`](Generator::run), calling
/// [`yield_item`](Generator::yield_item) once per item. Consumers are wired
/// in with [`drive`](super::drive), never by calling `run` directly.
pub trait Generator<R, T> {
    /// Returns the embedded continuation slot.
    fn base(&self) -> &GeneratorBase<R, T>;

    /// Runs the production algorithm until it is exhausted or told to stop.
    fn run(&self);

    /// Sends `item` to the consumer and returns its answer.
    ///
    /// # Panics
    ///
    /// Panics if the generator has not been wired to a consumer.
    #[inline]
    fn yield_item(&self, item: T) -> R {
        self.base().yield_item(item)
    }

    /// Sends `item` to the consumer, reporting wiring mistakes as errors.
    ///
    /// # Errors
    ///
    /// See [`GeneratorBase::try_yield_item`].
    #[inline]
    fn try_yield_item(&self, item: T) -> Result<R, GeneratorError> {
        self.base().try_yield_item(item)
    }

    /// Replaces the consumer this generator yields to.
    #[inline]
    fn install(&self, continuation: BoxedContinuation<R, T>) {
        self.base().install(continuation);
    }

    /// Returns `true` once a consumer has been installed.
    #[inline]
    fn is_wired(&self) -> bool {
        self.base().is_wired()
    }
}
