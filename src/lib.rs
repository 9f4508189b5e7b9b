//! # Keysort
//!
//! `keysort` sorts sequences by a key derived from each element through a caller-supplied
//! function. It is the `sortBy` of functional utility libraries: the input is never touched,
//! a freshly allocated sequence comes back, and keys are compared with nothing more than the
//! relational operators of [`PartialOrd`].
//!
//! ## Key Features
//!
//! - **Non-Mutating**: [`keysort`] reads the input through the [`Sequence`] trait and returns
//!   a new `Vec`. [`keysort_refs`] and [`keysort_indices`] avoid cloning elements altogether.
//! - **Partial Application**: [`keysort_by`] takes only the key function and returns a
//!   reusable [`KeySort`] that waits for the list.
//! - **Stable and Panic-Free Ordering**: Elements with equal keys keep their input order.
//!   Keys that cannot be compared (e.g. `f64::NAN`) are treated as equal rather than
//!   triggering a panic.
//! - **Fallible Keys**: The `try_` variants stop at the first key error and return it as is.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use keysort::keysort;
//!
//! let pairs = vec![[-1, 1], [-2, 2], [-3, 3]];
//! let sorted = keysort(|p: &[i32; 2]| p[0], &pairs);
//!
//! assert_eq!(sorted, vec![[-3, 3], [-2, 2], [-1, 1]]);
//! ```
//!
//! ### Partial Application
//!
//! ```rust
//! use keysort::keysort_by;
//!
//! struct Person {
//!     name: &'static str,
//!     age: f64,
//! }
//!
//! let by_age = keysort_by(|p: &&Person| p.age);
//! let by_name = keysort_by(|p: &&Person| p.name.to_lowercase());
//!
//! let alice = Person { name: "ALICE", age: 101.0 };
//! let bob = Person { name: "Bob", age: -10.0 };
//! let clara = Person { name: "clara", age: 314.159 };
//!
//! // Sorting references shares the elements with the input instead of copying them.
//! let people = vec![&clara, &bob, &alice];
//!
//! let names: Vec<_> = by_name.sort(&people).iter().map(|p| p.name).collect();
//! assert_eq!(names, vec!["ALICE", "Bob", "clara"]);
//!
//! let ages: Vec<_> = by_age.sort(&people).iter().map(|p| p.age).collect();
//! assert_eq!(ages, vec![-10.0, 101.0, 314.159]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(N log N) comparisons from a bottom-up merge sort; the key function runs twice
//!   per comparison, or exactly once per element with [`keysort_cached`].
//! - **Memory Overhead**: Two index vectors (`2 * 8` bytes per item on 64-bit targets) plus
//!   the output.

pub mod algo;
pub mod core;
pub mod curry;
pub mod merge;
pub use crate::algo::{
    keysort, keysort_cached, keysort_indices, keysort_mut, keysort_refs, try_keysort,
    try_keysort_cached, try_keysort_indices,
};
pub use crate::core::{Sequence, compare_keys};
pub use crate::curry::{KeySort, keysort_by};

pub mod prelude {
    pub use crate::algo::{
        keysort, keysort_cached, keysort_indices, keysort_mut, keysort_refs, try_keysort,
        try_keysort_cached, try_keysort_indices,
    };
    pub use crate::core::{Sequence, compare_keys};
    pub use crate::curry::{KeySort, keysort_by};
}
