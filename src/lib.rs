//! # weir
//!
//! Push-style generators for Rust, with generator maps that can rebuild the
//! rest of their pipeline while items are flowing.
//!
//! ## Overview
//!
//! A generator is a production algorithm (master code) that calls a
//! consumer (slave code) once per item and gets a [`LoopDirective`] back.
//! Producers and consumers are written independently and meet in a single
//! continuation slot. On top of that, the crate provides:
//!
//! - **Driving**: [`drive`] wires a consumer in and runs the producer
//! - **Iterative maps**: per-item transformations such as [`filter`]
//! - **Recursive maps**: transformations that splice further maps into the
//!   unconsumed tail of their input, e.g. an infinite prime sieve
//! - **Sources**: arrays, iterators, natural numbers and prime numbers
//!
//! ## Feature Flags
//!
//! - `generator`: the generator core
//! - `sources`: example producers (implies `generator`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use weir::prelude::*;
//!
//! assert_eq!(take(&*sieve_primes(), 6), vec![2, 3, 5, 7, 11, 13]);
//! ```
//!
//! [`LoopDirective`]: generator::LoopDirective
//! [`drive`]: generator::drive
//! [`filter`]: generator::filter

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use weir::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "generator")]
    pub use crate::generator::*;

    #[cfg(feature = "sources")]
    pub use crate::sources::*;
}

#[cfg(feature = "generator")]
pub mod generator;

#[cfg(feature = "sources")]
pub mod sources;
