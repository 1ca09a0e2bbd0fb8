//! Generator maps: transformations from one generator to another.
//!
//! Applying a map to an input generator returns a new
//! [`PipelineGenerator`] and installs an interception continuation into the
//! input. Every item the input yields passes through that continuation,
//! which decides what (if anything) reaches the output.
//!
//! Maps come in two flavours:
//!
//! - [`create_iterative_map`]: the interception runs once per item and never
//!   changes the shape of the pipeline.
//! - [`create_recursive_map`]: after each item, the interception returns a
//!   list of further maps which are applied to the *rest* of the input,
//!   replacing the interception itself.
//!
//! # Examples
//!
//! ## Iterative
//!
//! ```rust
//! use std::rc::Rc;
//! use weir::generator::{create_iterative_map, take, GeneratorMap, LoopDirective};
//! use weir::sources::Naturals;
//!
//! let doubled = create_iterative_map(|output, item: u64| -> LoopDirective {
//!     output.yield_item(item * 2)
//! });
//! let evens = doubled.apply(Rc::new(Naturals::new(0)));
//! assert_eq!(take(&*evens, 4), vec![0, 2, 4, 6]);
//! ```
//!
//! ## Recursive
//!
//! ```rust
//! use std::rc::Rc;
//! use smallvec::smallvec;
//! use weir::generator::{create_recursive_map, filter, take, GeneratorMap, LoopDirective};
//! use weir::sources::{is_non_divisible, Naturals};
//!
//! fn sieve() -> Box<dyn GeneratorMap<LoopDirective, u64>> {
//!     create_recursive_map(|output, prime: u64| {
//!         (
//!             output.yield_item(prime),
//!             smallvec![filter(is_non_divisible(prime)).boxed(), sieve()],
//!         )
//!     })
//!     .boxed()
//! }
//!
//! let primes = sieve().apply(Rc::new(Naturals::new(2)));
//! assert_eq!(take(&*primes, 5), vec![2, 3, 5, 7, 11]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use super::base::Generator;
use super::pipeline::{PipelineGenerator, SharedGenerator, upgrade};

/// A boxed generator map, as stored in a [`MapList`].
pub type BoxedGeneratorMap<R, T> = Box<dyn GeneratorMap<R, T>>;

/// The maps a recursive map splices into the rest of its input, outermost
/// last.
///
/// Two entries are kept inline: a recursive map typically returns one new
/// stage followed by itself.
pub type MapList<R, T> = SmallVec<[BoxedGeneratorMap<R, T>; 2]>;

/// A transformation eating a generator and producing another one.
pub trait GeneratorMap<R, T> {
    /// Wires this map behind `input` and returns the resulting generator.
    ///
    /// After this call `input` yields into the map, so `input` must not be
    /// driven directly anymore; drive the returned generator instead.
    fn apply(&self, input: SharedGenerator<R, T>) -> SharedGenerator<R, T>;

    /// Boxes this map, e.g. to put it into a [`MapList`].
    fn boxed(self) -> BoxedGeneratorMap<R, T>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<R, T, M> GeneratorMap<R, T> for Box<M>
where
    M: GeneratorMap<R, T> + ?Sized,
{
    fn apply(&self, input: SharedGenerator<R, T>) -> SharedGenerator<R, T> {
        (**self).apply(input)
    }
}

impl<R, T, M> GeneratorMap<R, T> for Rc<M>
where
    M: GeneratorMap<R, T> + ?Sized,
{
    fn apply(&self, input: SharedGenerator<R, T>) -> SharedGenerator<R, T> {
        (**self).apply(input)
    }
}

// =============================================================================
// Iterative Maps
// =============================================================================

/// A generator map whose per-item logic never changes the pipeline.
///
/// Built by [`create_iterative_map`]. Cloning is cheap: clones share the
/// same transformation, including any state it closes over.
pub struct IterativeMap<R, T, F> {
    transform: Rc<F>,
    _marker: PhantomData<fn(T) -> R>,
}

/// Defines a generator map item by item.
///
/// `transform` receives the output generator and one item from the input.
/// It is the consumer of the input and the producer of the output: it may
/// forward the item (or anything else) with `output.yield_item(..)` and
/// answers the input with an `R`, usually the output's own answer.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use weir::generator::{create_iterative_map, take, Generator, GeneratorMap, LoopDirective};
/// use weir::sources::ArrayGenerator;
///
/// // Every item twice.
/// let stutter = create_iterative_map(|output: &dyn Generator<LoopDirective, char>, item| {
///     if output.yield_item(item).is_break() {
///         return LoopDirective::Break;
///     }
///     output.yield_item(item)
/// });
/// let stream = stutter.apply(Rc::new(ArrayGenerator::new(vec!['a', 'b'])));
/// assert_eq!(take(&*stream, 10), vec!['a', 'a', 'b', 'b']);
/// ```
pub fn create_iterative_map<R, T, F>(transform: F) -> IterativeMap<R, T, F>
where
    F: Fn(&dyn Generator<R, T>, T) -> R + 'static,
{
    IterativeMap {
        transform: Rc::new(transform),
        _marker: PhantomData,
    }
}

impl<R: 'static, T: 'static, F> GeneratorMap<R, T> for IterativeMap<R, T, F>
where
    F: Fn(&dyn Generator<R, T>, T) -> R + 'static,
{
    fn apply(&self, input: SharedGenerator<R, T>) -> SharedGenerator<R, T> {
        let output = Rc::new(PipelineGenerator::new(Rc::clone(&input)));
        let downstream = Rc::downgrade(&output);
        let transform = Rc::clone(&self.transform);

        input.install(Box::new(move |item| {
            let output = upgrade(&downstream);
            let stage: &dyn Generator<R, T> = &*output;
            transform(stage, item)
        }));

        output
    }
}

impl<R, T, F> Clone for IterativeMap<R, T, F> {
    fn clone(&self) -> Self {
        Self {
            transform: Rc::clone(&self.transform),
            _marker: PhantomData,
        }
    }
}

impl<R, T, F> fmt::Debug for IterativeMap<R, T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IterativeMap")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Recursive Maps
// =============================================================================

/// A generator map that rebuilds the rest of the pipeline after each item.
///
/// Built by [`create_recursive_map`].
pub struct RecursiveMap<R, T, F> {
    transform: Rc<F>,
    _marker: PhantomData<fn(T) -> R>,
}

/// Defines a generator map recursively: by what it does with the head of
/// its input, and which maps it applies to the tail.
///
/// For each item, `transform` receives the output generator and the item,
/// and returns the answer for the input together with a [`MapList`]. The
/// maps are applied to the remainder of the input in order (the first map
/// sees items first), and the last of them feeds the output. This replaces
/// the interception that is currently running, so to keep processing, a
/// recursive map usually lists itself last.
///
/// Only the part of the input that has not been produced yet is affected,
/// and nothing is buffered.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use smallvec::smallvec;
/// use weir::generator::{
///     create_recursive_map, map_items, take, GeneratorMap, LoopDirective, MapList,
/// };
/// use weir::sources::Naturals;
///
/// // Forwards the first item, then adds it to everything that follows.
/// let offset = create_recursive_map(|output, head: u64| {
///     let maps: MapList<LoopDirective, u64> =
///         smallvec![map_items(move |item: u64| item + head).boxed()];
///     (output.yield_item(head), maps)
/// });
/// let stream = offset.apply(Rc::new(Naturals::new(10)));
/// assert_eq!(take(&*stream, 3), vec![10, 21, 22]);
/// ```
pub fn create_recursive_map<R, T, F>(transform: F) -> RecursiveMap<R, T, F>
where
    F: Fn(&dyn Generator<R, T>, T) -> (R, MapList<R, T>) + 'static,
{
    RecursiveMap {
        transform: Rc::new(transform),
        _marker: PhantomData,
    }
}

impl<R: 'static, T: 'static, F> GeneratorMap<R, T> for RecursiveMap<R, T, F>
where
    F: Fn(&dyn Generator<R, T>, T) -> (R, MapList<R, T>) + 'static,
{
    fn apply(&self, input: SharedGenerator<R, T>) -> SharedGenerator<R, T> {
        let output = Rc::new(PipelineGenerator::new(Rc::clone(&input)));
        let upstream = Rc::downgrade(&input);
        let downstream = Rc::downgrade(&output);
        let transform = Rc::clone(&self.transform);

        input.install(Box::new(move |item| {
            let output = upgrade(&downstream);
            let stage: &dyn Generator<R, T> = &*output;
            let (result, maps) = transform(stage, item);

            tracing::debug!(
                target: "weir::generator",
                spliced = maps.len(),
                "recursive map rebuilding its tail"
            );
            // Each apply re-wires `input`, replacing this very continuation
            // for every later item.
            let tail = maps
                .iter()
                .fold(upgrade(&upstream), |stream, map| map.apply(stream));

            // Every rebuilt tail feeds, and is owned by, the outermost output.
            let root = output
                .base()
                .splice_root()
                .unwrap_or_else(|| Rc::downgrade(&output));
            if !maps.is_empty() {
                tail.base().set_splice_root(Weak::clone(&root));
            }
            let sink = Weak::clone(&root);
            tail.install(Box::new(move |item| upgrade(&sink).yield_item(item)));
            upgrade(&root).splice(tail);

            result
        }));

        output
    }
}

impl<R, T, F> Clone for RecursiveMap<R, T, F> {
    fn clone(&self) -> Self {
        Self {
            transform: Rc::clone(&self.transform),
            _marker: PhantomData,
        }
    }
}

impl<R, T, F> fmt::Debug for RecursiveMap<R, T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RecursiveMap")
            .finish_non_exhaustive()
    }
}
