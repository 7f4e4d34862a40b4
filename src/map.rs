use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::view::View;

/// A cursor that applies a function to each element of an underlying
/// cursor.
///
/// Produced by [`View::map`]. Every capability of the underlying cursor is
/// preserved: mapping a random access view yields a random access view.
#[derive(Clone)]
pub struct MapCursor<C, F> {
    inner: C,
    f: F,
}

impl<C: PartialEq, F> PartialEq for MapCursor<C, F> {
    #[inline]
    fn eq(&self, other: &MapCursor<C, F>) -> bool {
        self.inner == other.inner
    }
}

impl<C, F, T> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> T + Clone,
{
    type Item = T;

    #[inline]
    fn get(&self) -> T {
        (self.f)(self.inner.get())
    }

    #[inline]
    fn step(&mut self) {
        self.inner.step();
    }
}

impl<C, F, T> BidirectionalCursor for MapCursor<C, F>
where
    C: BidirectionalCursor,
    F: Fn(C::Item) -> T + Clone,
{
    #[inline]
    fn step_back(&mut self) {
        self.inner.step_back();
    }
}

impl<C, F, T> RandomAccessCursor for MapCursor<C, F>
where
    C: RandomAccessCursor,
    F: Fn(C::Item) -> T + Clone,
{
    #[inline]
    fn advance(&mut self, offset: isize) {
        self.inner.advance(offset);
    }

    #[inline]
    fn distance(&self, origin: &MapCursor<C, F>) -> isize {
        self.inner.distance(&origin.inner)
    }
}

impl<C: Cursor> View<C> {
    /// Returns a view that applies `f` to each element of this view.
    ///
    /// The function is called once per dereference, so a position that is
    /// dereferenced twice invokes `f` twice; `f` should be pure.
    ///
    /// # Example
    ///
    /// ```
    /// use seqview::view;
    ///
    /// let nums = [1, 2, 3];
    /// let squares = view(&nums).map(|n| n * n);
    /// assert_eq!(squares.len(), 3);
    /// assert_eq!(squares.to_vec(), vec![1, 4, 9]);
    /// ```
    pub fn map<F, T>(self, f: F) -> View<MapCursor<C, F>>
    where
        F: Fn(C::Item) -> T + Clone,
    {
        let (begin, end) = self.into_parts();
        View::new(
            MapCursor { inner: begin, f: f.clone() },
            MapCursor { inner: end, f },
        )
    }
}
