use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::view::{IntoView, View};

/// A random access cursor over a borrowed slice, yielding `&T`.
///
/// This is the ground-level cursor that brings ordinary contiguous storage
/// into cursor-land; slice, array, and `Vec` references all convert into
/// slice-cursor views through [`IntoView`].
///
/// # Example
///
/// ```
/// use seqview::{view, Cursor, RandomAccessCursor};
///
/// let nums = [4, 8, 15, 16, 23, 42];
/// let v = view(&nums);
/// let (mut cur, end) = v.into_parts();
///
/// cur.advance(4);
/// assert_eq!(cur.get(), &23);
/// assert_eq!(end.distance(&cur), 2);
/// ```
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    at: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor into `slice` at `position`.
    ///
    /// `position` may be anywhere in `0..=slice.len()`; `slice.len()` is
    /// the end position.
    pub fn new(slice: &'a [T], position: usize) -> SliceCursor<'a, T> {
        debug_assert!(position <= slice.len(), "cursor position out of range");
        SliceCursor { slice, at: position }
    }
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    #[inline]
    fn clone(&self) -> SliceCursor<'a, T> {
        SliceCursor { slice: self.slice, at: self.at }
    }
}

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    #[inline]
    fn eq(&self, other: &SliceCursor<'a, T>) -> bool {
        self.at == other.at
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        &self.slice[self.at]
    }

    #[inline]
    fn step(&mut self) {
        debug_assert!(self.at < self.slice.len(), "step past the end");
        self.at += 1;
    }
}

impl<'a, T> BidirectionalCursor for SliceCursor<'a, T> {
    #[inline]
    fn step_back(&mut self) {
        debug_assert!(self.at > 0, "step_back past the beginning");
        self.at -= 1;
    }
}

impl<'a, T> RandomAccessCursor for SliceCursor<'a, T> {
    #[inline]
    fn advance(&mut self, offset: isize) {
        let at = self.at as isize + offset;
        debug_assert!(
            0 <= at && at <= self.slice.len() as isize,
            "advance out of range"
        );
        self.at = at as usize;
    }

    #[inline]
    fn distance(&self, origin: &SliceCursor<'a, T>) -> isize {
        self.at as isize - origin.at as isize
    }
}

impl<'a, T> IntoView for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn into_view(self) -> View<SliceCursor<'a, T>> {
        View::new(SliceCursor::new(self, 0), SliceCursor::new(self, self.len()))
    }
}

impl<'a, T> IntoView for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn into_view(self) -> View<SliceCursor<'a, T>> {
        self.as_slice().into_view()
    }
}

impl<'a, T, const N: usize> IntoView for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn into_view(self) -> View<SliceCursor<'a, T>> {
        self[..].into_view()
    }
}
