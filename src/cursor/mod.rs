//! Lazy, single-pass, pull-based cursor combinators.
//!
//! This module provides the iterator adapters behind sequence
//! pipelines:
//!
//! - [`Filtering`]: yields upstream values for which a predicate is
//!   true (or false, in send-when-false mode)
//! - [`Generating`]: an upstream-less infinite source driven by a seed
//!   and a transition function
//! - [`SkipWhile`]: discards a matching prefix, then passes everything
//!   through
//! - [`TakeWhile`]: yields a matching prefix, optionally including the
//!   first disqualifying value
//! - [`SubRange`]: yields the values between two positional indices
//! - [`MultiMapping`]: maps each value to zero or more values, flattened
//! - [`Windowed`]: yields fixed or variable-size (optionally
//!   overlapping, optionally partial) windows
//!
//! All adapters implement [`Iterator`] and are composed through
//! [`CursorExt`], which is blanket-implemented for every sized
//! iterator. Every adapter is lazy: upstream is pulled only as far as
//! strictly necessary to produce the next downstream value, so infinite
//! sources compose freely with bounding adapters.
//!
//! # Examples
//!
//! ```rust
//! use pullars::cursor::{CursorExt, generating};
//!
//! // Sliding windows over a filtered stream.
//! let windows: Vec<Vec<i32>> = (1..=10)
//!     .filtering(|n| n % 2 == 0)
//!     .windowed(2, 1, false)
//!     .map(|window| window.into_iter().collect())
//!     .collect();
//!
//! assert_eq!(windows, vec![vec![2, 4], vec![4, 6], vec![6, 8], vec![8, 10]]);
//!
//! // An infinite generator bounded downstream.
//! let doublings: Vec<u64> = generating(|| 1_u64, |n| n * 2)
//!     .taking_while(|n| *n < 100)
//!     .collect();
//! assert_eq!(doublings, vec![1, 2, 4, 8, 16, 32, 64]);
//! ```
//!
//! # Idempotent lookahead
//!
//! Consumers needing "has next" observation wrap any cursor in
//! [`Peekable`](std::iter::Peekable); peeking never advances upstream
//! further than one buffered value, because no adapter here pulls more
//! than it must to answer a single `next()` call.

mod filtering;
mod generating;
mod multi_mapping;
mod skip_while;
mod sub_range;
mod take_while;
mod windowed;

pub use filtering::Filtering;
pub use generating::{Generating, generating};
pub use multi_mapping::{Emitter, MultiMapping};
pub use skip_while::SkipWhile;
pub use sub_range::SubRange;
pub use take_while::TakeWhile;
pub use windowed::Windowed;

use crate::collections::GrowableArray;

/// Chaining surface for the cursor combinators.
///
/// Blanket-implemented for every sized [`Iterator`], so pipelines read
/// left to right:
///
/// ```rust
/// use pullars::cursor::CursorExt;
///
/// let values: Vec<i32> = (0..20)
///     .skipping_while(|n| *n < 5)
///     .taking_while(|n| *n < 12)
///     .filtering(|n| n % 2 == 1)
///     .collect();
///
/// assert_eq!(values, vec![5, 7, 9, 11]);
/// ```
pub trait CursorExt: Iterator + Sized {
    /// Yields the values for which `predicate` is true.
    fn filtering<P>(self, predicate: P) -> Filtering<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filtering::new(self, predicate, true)
    }

    /// Yields the values for which `predicate` is false.
    fn filtering_out<P>(self, predicate: P) -> Filtering<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filtering::new(self, predicate, false)
    }

    /// Discards values while `predicate` holds, then yields the first
    /// disqualifying value and everything after it.
    fn skipping_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate, false)
    }

    /// Like [`skipping_while`](Self::skipping_while), but also discards
    /// the first disqualifying value when the skipped prefix is
    /// non-empty, resuming with the value after it.
    fn skipping_while_inclusive<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate, true)
    }

    /// Yields values while `predicate` holds, terminating immediately
    /// before the first disqualifying value.
    fn taking_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate, false)
    }

    /// Like [`taking_while`](Self::taking_while), but also yields
    /// exactly one extra value (the first disqualifying one) before
    /// terminating.
    fn taking_while_inclusive<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate, true)
    }

    /// Yields the values at positions `[start_index, end_index)`.
    ///
    /// Positions are tracked with a `u64` counter, so ranges wider than
    /// 32-bit indices are supported.
    ///
    /// # Panics
    ///
    /// Panics if `start_index > end_index`.
    fn sub_range(self, start_index: u64, end_index: u64) -> SubRange<Self> {
        SubRange::new(self, start_index, end_index)
    }

    /// Maps each value to zero or more values through an emitting
    /// callback, yielding them flattened.
    ///
    /// Inputs that emit nothing are skipped entirely; the consumer never
    /// observes an empty group.
    fn multi_mapping<F, R>(self, mapper: F) -> MultiMapping<Self, F, R>
    where
        F: FnMut(Self::Item, &mut Emitter<R>),
    {
        MultiMapping::new(self, mapper)
    }

    /// Yields fixed-size windows of `size` values, advancing by `step`
    /// values between windows.
    ///
    /// With `step >= size` the windows are disjoint (skipping
    /// `step - size` values between them); with `step < size` they
    /// overlap. A final window shorter than `size` is discarded unless
    /// `partial_windows` is set. `size` and `step` are clamped to a
    /// minimum of 1.
    fn windowed(
        self,
        size: usize,
        step: usize,
        partial_windows: bool,
    ) -> Windowed<Self, fn(usize) -> usize, fn(usize) -> usize>
    where
        Self::Item: Clone + Default,
    {
        let keep: fn(usize) -> usize = keep_current;
        Windowed::new(self, size, keep, step, keep, partial_windows)
    }

    /// Yields variable-geometry windows: after each window, the next
    /// window's size and step are computed from the current ones by
    /// `next_size` and `next_step` (non-positive results are clamped
    /// to 1).
    fn windowed_by<S, P>(
        self,
        init_size: usize,
        next_size: S,
        init_step: usize,
        next_step: P,
        partial_windows: bool,
    ) -> Windowed<Self, S, P>
    where
        Self::Item: Clone + Default,
        S: FnMut(usize) -> usize,
        P: FnMut(usize) -> usize,
    {
        Windowed::new(self, init_size, next_size, init_step, next_step, partial_windows)
    }

    /// Drains this cursor into a [`GrowableArray`].
    fn collect_into_array(self) -> GrowableArray<Self::Item>
    where
        Self::Item: Clone + Default,
    {
        self.collect()
    }
}

impl<I: Iterator> CursorExt for I {}

fn keep_current(current: usize) -> usize {
    current
}
