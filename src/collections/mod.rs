//! Specialized collections backing unboxed sequence pipelines.
//!
//! This module provides the storage engine underneath the cursor
//! combinators:
//!
//! - [`GrowableArray`]: contiguous growable store with amortized-doubling
//!   growth and fast positional removal
//! - [`ChainedHashSet`]: open-chaining hash set over primitive values
//!   with dynamic expansion and contraction
//! - [`binary_search`]: generic range binary search shared by sorted
//!   collections through [`BinarySearchable`]
//! - [`PrimitiveValue`]: the hashing and bit-consistent equality seam
//!   the hash set is specialized over
//!
//! # Zero Boxing
//!
//! All collections here are generic and monomorphized by the compiler.
//! A `GrowableArray<i64>` stores bare `i64` values in one contiguous
//! buffer; a `ChainedHashSet<f64>` stores bare `f64` values in its node
//! arena. No element is ever boxed.
//!
//! # Examples
//!
//! ## `GrowableArray`
//!
//! ```rust
//! use pullars::collections::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! array.push(1);
//! array.push(2);
//! array.push(3);
//!
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.remove_at(0), 1);
//! assert_eq!(array[0], 2);
//! ```
//!
//! ## `ChainedHashSet`
//!
//! ```rust
//! use pullars::collections::ChainedHashSet;
//!
//! let mut set = ChainedHashSet::new();
//! assert!(set.add(42));
//! assert!(!set.add(42)); // already present
//! assert!(set.contains(42));
//! assert!(set.remove(42));
//! assert!(set.is_empty());
//! ```
//!
//! ## Binary search
//!
//! ```rust
//! use pullars::collections::BinarySearchable;
//!
//! let sorted = [10, 20, 30, 40];
//! assert_eq!(sorted.binary_search_by_index(|i| sorted[i].cmp(&30)), Ok(2));
//! assert_eq!(sorted.binary_search_by_index(|i| sorted[i].cmp(&35)), Err(3));
//! ```

mod binary_search;
mod chained_hash_set;
mod element;
mod growable_array;

pub use binary_search::{BinarySearchable, binary_search};
pub use chained_hash_set::{ChainedHashSet, SetIter};
pub use element::PrimitiveValue;
pub use growable_array::GrowableArray;
