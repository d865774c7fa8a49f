//! # pullars
//!
//! Lazy, single-pass, pull-based sequence pipelines over boxed and
//! primitive element streams, plus the specialized collections that back
//! those pipelines without per-element boxing.
//!
//! ## Overview
//!
//! This library provides the machinery for building transformation
//! pipelines that are driven entirely by consumer pulls. It includes:
//!
//! - **Cursor Combinators**: filtering, generation, skip-while,
//!   take-while, sub-ranging, windowing, and multi-mapping adapters,
//!   composable over any [`Iterator`]
//! - **Growable Array**: a contiguous store with amortized-doubling
//!   growth and fast positional removal
//! - **Chained Hash Set**: an open-chaining set over primitive values
//!   with load-factor driven expansion and contraction
//! - **Binary Search**: a range binary search parameterized over an
//!   index-to-ordering function, shared by sorted collections
//!
//! Every combinator and collection is written once, generically, and
//! monomorphized by the compiler: an `i64` pipeline compiles down to
//! unboxed `i64` operations, while the same source code serves boxed
//! element types unchanged.
//!
//! ## Laziness
//!
//! No combinator ever drains its source eagerly. Each adapter pulls from
//! its upstream only as far as is strictly necessary to answer the
//! consumer's next request, so infinite sources compose freely with
//! bounding adapters:
//!
//! ```rust
//! use pullars::prelude::*;
//!
//! let squares: Vec<i64> = generating(|| 1_i64, |n| n + 1)
//!     .taking_while(|n| n * n < 50)
//!     .map(|n| n * n)
//!     .collect();
//!
//! assert_eq!(squares, vec![1, 4, 9, 16, 25, 36, 49]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use pullars::prelude::*;
/// ```
pub mod prelude {

    pub use crate::collections::*;

    pub use crate::cursor::*;
}

pub mod collections;

pub mod cursor;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn pipeline_compiles_and_pulls_lazily() {
        let windows: Vec<GrowableArray<i32>> = (1..=7).windowed(3, 3, true).collect();
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[2].to_array_snapshot().as_ref(), &[7]);
    }
}
