//! One-to-many mapping cursor with flattening.

use smallvec::SmallVec;

/// Inline capacity of the per-input emit buffer; most mappers emit only
/// a handful of values, which then never touch the heap.
const INLINE_EMIT_CAPACITY: usize = 4;

/// The sink a multi-mapping callback emits into.
///
/// Each upstream value gets a fresh, transient emitter; whatever was
/// emitted is drained downstream before the next upstream value is
/// pulled.
///
/// # Examples
///
/// ```rust
/// use pullars::cursor::CursorExt;
///
/// let flattened: Vec<i32> = [1, 2, 3]
///     .into_iter()
///     .multi_mapping(|n, emitter| {
///         for _ in 0..n {
///             emitter.emit(n);
///         }
///     })
///     .collect();
/// assert_eq!(flattened, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub struct Emitter<R> {
    values: SmallVec<[R; INLINE_EMIT_CAPACITY]>,
}

impl<R> Emitter<R> {
    fn new() -> Self {
        Self {
            values: SmallVec::new(),
        }
    }

    /// Emits one downstream value.
    pub fn emit(&mut self, value: R) {
        self.values.push(value);
    }
}

/// A cursor mapping each upstream value to zero or more downstream
/// values, yielded flattened.
///
/// The mapper is a callback receiving the upstream value and an
/// [`Emitter`]; the cursor drains the emitted group completely before
/// pulling the next upstream value. Inputs that emit nothing are
/// skipped: the consumer never observes an empty group, and upstream is
/// advanced until some input emits or the source exhausts.
///
/// # Examples
///
/// ```rust
/// use pullars::cursor::CursorExt;
///
/// // Divisors greater than 1; the input 1 contributes nothing and is
/// // skipped, not yielded as an empty group.
/// let divisors: Vec<u32> = [1, 2, 3, 4]
///     .into_iter()
///     .multi_mapping(|n: u32, emitter| {
///         for candidate in 2..=n {
///             if n % candidate == 0 {
///                 emitter.emit(candidate);
///             }
///         }
///     })
///     .collect();
/// assert_eq!(divisors, vec![2, 3, 2, 4]);
/// ```
pub struct MultiMapping<I, F, R> {
    iterator: I,
    mapper: F,
    /// Remainder of the group currently being drained.
    pending: smallvec::IntoIter<[R; INLINE_EMIT_CAPACITY]>,
}

impl<I, F, R> MultiMapping<I, F, R>
where
    I: Iterator,
    F: FnMut(I::Item, &mut Emitter<R>),
{
    pub(crate) fn new(iterator: I, mapper: F) -> Self {
        Self {
            iterator,
            mapper,
            pending: SmallVec::new().into_iter(),
        }
    }
}

impl<I, F, R> Iterator for MultiMapping<I, F, R>
where
    I: Iterator,
    F: FnMut(I::Item, &mut Emitter<R>),
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some(value) = self.pending.next() {
                return Some(value);
            }
            let upstream = self.iterator.next()?;
            let mut emitter = Emitter::new();
            (self.mapper)(upstream, &mut emitter);
            self.pending = emitter.values.into_iter();
        }
    }
}
