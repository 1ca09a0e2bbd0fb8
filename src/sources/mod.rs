//! Example producers built on the generator API.
//!
//! These use nothing but the public interface of
//! [`generator`](crate::generator): each producer embeds a
//! [`GeneratorBase`](crate::generator::GeneratorBase) and supplies its own
//! `run`, and the prime sieves are plain compositions of generator maps.
//!
//! - [`ArrayGenerator`], [`IterGenerator`]: finite, in-memory sources
//! - [`Naturals`]: the unbounded sequence of natural numbers
//! - [`primes`], [`recursive_primes`], [`sieve_primes`]: prime numbers
//!
//! # Examples
//!
//! ```rust
//! use weir::generator::take;
//! use weir::sources::{primes, recursive_primes};
//!
//! assert_eq!(take(&*primes(), 8), take(&*recursive_primes(), 8));
//! ```

mod array;
mod naturals;
mod primes;

pub use array::{ArrayGenerator, IterGenerator};
pub use naturals::Naturals;
pub use primes::{
    deferred_sieve_map, is_non_divisible, primes, recursive_primes, sieve_map, sieve_primes,
    trial_division_map,
};
