//! Push-style generators and generator maps.
//!
//! A generator is master code: a production algorithm that hands each item
//! to a consumer (slave code) and receives back an answer, typically a
//! [`LoopDirective`] telling it whether to continue. Consumers are wired in
//! through a single continuation slot, so producers and consumers can be
//! written independently of each other.
//!
//! - [`Generator`] / [`GeneratorBase`]: the capability set and the reusable
//!   continuation slot concrete producers embed
//! - [`drive`]: installs a consumer and runs a generator (also [`take`],
//!   [`nth`])
//! - [`GeneratorMap`]: transformations from generators to generators, built
//!   with [`create_iterative_map`] or [`create_recursive_map`]
//! - [`filter`], [`map_items`], [`take_while`]: ready-made maps
//!
//! Everything runs synchronously on one call stack: yielding an item is a
//! plain function call through every pipeline stage, and `Break` travels
//! back through the same calls.
//!
//! # Examples
//!
//! ## Slave code
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use weir::generator::{drive, LoopDirective};
//! use weir::sources::Naturals;
//!
//! let printed = Rc::new(RefCell::new(Vec::new()));
//! let out = Rc::clone(&printed);
//! drive(&Naturals::new(0), move |item| {
//!     out.borrow_mut().push(item.to_string());
//!     LoopDirective::from_continue(item < 2)
//! });
//! assert_eq!(*printed.borrow(), ["0", "1", "2"]);
//! ```
//!
//! ## Generator maps
//!
//! ```rust
//! use std::rc::Rc;
//! use weir::generator::{filter, take, GeneratorMap};
//! use weir::sources::{is_non_divisible, Naturals};
//!
//! let odd = filter(is_non_divisible(2)).apply(Rc::new(Naturals::new(0)));
//! assert_eq!(take(&*odd, 4), vec![1, 3, 5, 7]);
//! ```

mod base;
mod directive;
mod driver;
mod error;
mod filter;
mod map;
mod pipeline;

pub use base::{BoxedContinuation, Generator, GeneratorBase};
pub use directive::LoopDirective;
pub use driver::{drive, nth, take};
pub use error::GeneratorError;
pub use filter::{Predicate, filter, map_items, take_while};
pub use map::{
    BoxedGeneratorMap, GeneratorMap, IterativeMap, MapList, RecursiveMap, create_iterative_map,
    create_recursive_map,
};
pub use pipeline::{PipelineGenerator, SharedGenerator};

// Pipelines are wired with `Rc` and `RefCell` and stay on one thread.
static_assertions::assert_not_impl_any!(GeneratorBase<LoopDirective, u64>: Send, Sync);
static_assertions::assert_not_impl_any!(PipelineGenerator<LoopDirective, u64>: Send, Sync);
static_assertions::assert_impl_all!(LoopDirective: Copy, Send, Sync);
