//! Fixed and variable-geometry windowing cursor.

use crate::collections::GrowableArray;

/// Window buffers start no larger than this, however large the window
/// size is declared; oversized requests grow on demand.
const MAX_INITIAL_WINDOW_CAPACITY: usize = 1024;

/// A cursor yielding windows over an upstream cursor.
///
/// Each window is a [`GrowableArray`] snapshot, decoupled from the
/// internal buffer. Before computing a window the cursor compares the
/// current `step` and `size`:
///
/// - **Non-overlapping** (`step >= size`): `step - size` upstream values
///   are skipped, then `size` values are collected into a fresh buffer.
/// - **Overlapping** (`step < size`): the previous window's buffer is
///   reused: its first `step` values are dropped and upstream values
///   are appended until the buffer again holds `size` values or
///   upstream exhausts.
///
/// A window shorter than `size` (upstream exhausted early) is discarded
/// unless `partial_windows` is set. After each window, `size` and `step`
/// are independently advanced by the supplied functions; non-positive
/// results are clamped to 1. The cursor is exhausted once a computed
/// window is empty.
///
/// # Examples
///
/// ```rust
/// use pullars::cursor::CursorExt;
///
/// // Chunking with a trailing partial window.
/// let chunks: Vec<Vec<i32>> = [1, 2, 3, 4, 5, 6, 7]
///     .into_iter()
///     .windowed(3, 3, true)
///     .map(|window| window.into_iter().collect())
///     .collect();
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
///
/// // Sliding windows.
/// let slides: Vec<Vec<i32>> = [1, 2, 3, 4, 5]
///     .into_iter()
///     .windowed(3, 1, false)
///     .map(|window| window.into_iter().collect())
///     .collect();
/// assert_eq!(slides, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
/// ```
pub struct Windowed<I: Iterator, S, P> {
    iterator: I,
    init_size: usize,
    next_size: S,
    init_step: usize,
    next_step: P,
    partial_windows: bool,
    /// Current window size; 0 until the first window is computed.
    size: usize,
    /// Current step; 0 until the first window is computed.
    step: usize,
    window: GrowableArray<I::Item>,
    done: bool,
}

impl<I, S, P> Windowed<I, S, P>
where
    I: Iterator,
    I::Item: Clone + Default,
    S: FnMut(usize) -> usize,
    P: FnMut(usize) -> usize,
{
    pub(crate) fn new(
        iterator: I,
        init_size: usize,
        next_size: S,
        init_step: usize,
        next_step: P,
        partial_windows: bool,
    ) -> Self {
        Self {
            iterator,
            init_size,
            next_size,
            init_step,
            next_step,
            partial_windows,
            size: 0,
            step: 0,
            window: GrowableArray::with_capacity(0),
            done: false,
        }
    }

    fn compute_next_window(&mut self) -> GrowableArray<I::Item> {
        let window_init_capacity = self.size.min(MAX_INITIAL_WINDOW_CAPACITY);
        // The gap between windows is governed by the geometry of the
        // window just produced; size advances before collection, step
        // after, so each applies to its own window.
        let gap = self.step.checked_sub(self.size);
        self.size = self.advance_size();
        match gap {
            Some(gap) => self.fill_without_overlap(window_init_capacity, gap),
            None => self.fill_overlapping(window_init_capacity),
        }
        self.step = self.advance_step();
        self.window.clone()
    }

    fn advance_size(&mut self) -> usize {
        let next = if self.size == 0 {
            self.init_size
        } else {
            (self.next_size)(self.size)
        };
        next.max(1)
    }

    fn advance_step(&mut self) -> usize {
        let next = if self.step == 0 {
            self.init_step
        } else {
            (self.next_step)(self.step)
        };
        next.max(1)
    }

    fn fill_without_overlap(&mut self, init_capacity: usize, gap: usize) {
        let mut skip = gap;
        self.window = GrowableArray::with_capacity(init_capacity);
        while let Some(value) = self.iterator.next() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            self.window.push(value);
            if self.window.len() == self.size {
                return;
            }
        }
        if !self.window.is_empty() && !self.partial_windows {
            self.window.clear();
        }
    }

    fn fill_overlapping(&mut self, init_capacity: usize) {
        if self.window.is_empty() {
            self.window = GrowableArray::with_capacity(init_capacity);
        }
        let mut step_count = 0;
        while step_count < self.step && !self.window.is_empty() {
            self.window.remove_at(0);
            step_count += 1;
        }
        while self.window.len() < self.size {
            match self.iterator.next() {
                Some(value) => self.window.push(value),
                None => break,
            }
        }
        if !self.partial_windows && self.window.len() < self.size {
            self.window.clear();
        }
    }
}

impl<I, S, P> Iterator for Windowed<I, S, P>
where
    I: Iterator,
    I::Item: Clone + Default,
    S: FnMut(usize) -> usize,
    P: FnMut(usize) -> usize,
{
    type Item = GrowableArray<I::Item>;

    fn next(&mut self) -> Option<GrowableArray<I::Item>> {
        if self.done {
            return None;
        }
        let window = self.compute_next_window();
        if window.is_empty() {
            self.done = true;
            None
        } else {
            Some(window)
        }
    }
}
