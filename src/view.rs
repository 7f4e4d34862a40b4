use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};

/// A lazy sequence, represented as a `(begin, end)` pair of cursors.
///
/// A view owns no elements, only the two positions (and whatever closures
/// or borrowed sources those positions carry). Nothing is computed until
/// the view is walked, and walking never mutates the underlying sources.
///
/// Views are cheap to clone and freely composable: every adaptor in this
/// crate both consumes and produces a `View`. Iteration is restartable —
/// each call to [`iter`](View::iter) starts from a fresh copy of the begin
/// position.
///
/// # Example
///
/// ```
/// use seqview::view;
///
/// let letters = ['a', 'b', 'c'];
/// let v = view(&letters);
///
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.to_vec(), vec![&'a', &'b', &'c']);
/// for (i, ch) in v.iter().enumerate() {
///     assert_eq!(v.at(i), ch);
/// }
/// ```
#[derive(Clone)]
pub struct View<C> {
    begin: C,
    end: C,
}

impl<C: Cursor> View<C> {
    /// Creates a view from a raw cursor pair.
    ///
    /// Both cursors must delimit the same underlying sequence, `begin` not
    /// after `end`. The adaptor constructors in this crate uphold this for
    /// you; it only matters when driving the cursor contract directly.
    #[inline]
    pub fn new(begin: C, end: C) -> View<C> {
        View { begin, end }
    }

    /// Returns a copy of the begin position.
    #[inline]
    pub fn begin(&self) -> C {
        self.begin.clone()
    }

    /// Returns a copy of the end position.
    #[inline]
    pub fn end(&self) -> C {
        self.end.clone()
    }

    /// Decomposes the view into its `(begin, end)` cursors.
    #[inline]
    pub fn into_parts(self) -> (C, C) {
        (self.begin, self.end)
    }

    /// Returns a lazy iterator over the view's elements.
    ///
    /// The iterator walks a fresh copy of the begin position, so `iter` can
    /// be called any number of times. Views over shared stateful sources
    /// (see [`random`](crate::random)) yield from the shared stream rather
    /// than restarting it.
    #[inline]
    pub fn iter(&self) -> Iter<C> {
        Iter { cur: self.begin.clone(), end: self.end.clone() }
    }

    /// Returns true if the view contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Walks the view from begin to end, collecting the elements into a
    /// `Vec`.
    pub fn to_vec(&self) -> Vec<C::Item> {
        self.iter().collect()
    }
}

impl<C: RandomAccessCursor> View<C> {
    /// Returns the number of elements in the view.
    ///
    /// Only random access cursors can measure this without walking; for
    /// weaker tiers use `iter().count()`.
    #[inline]
    pub fn len(&self) -> usize {
        let len = self.end.distance(&self.begin);
        debug_assert!(len >= 0, "view end lies before begin");
        len as usize
    }

    /// Returns the element at position `index`.
    ///
    /// `index` must be less than [`len`](View::len); out-of-range access is
    /// a programming error and typically panics.
    pub fn at(&self, index: usize) -> C::Item {
        let mut cur = self.begin.clone();
        cur.advance(index as isize);
        cur.get()
    }
}

impl<C: Cursor> IntoIterator for View<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    #[inline]
    fn into_iter(self) -> Iter<C> {
        Iter { cur: self.begin, end: self.end }
    }
}

impl<'a, C: Cursor> IntoIterator for &'a View<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    #[inline]
    fn into_iter(self) -> Iter<C> {
        self.iter()
    }
}

/// An iterator over the elements of a [`View`].
///
/// Walks from a begin position to an end position via [`Cursor::step`].
/// When the cursor is bidirectional this is also a `DoubleEndedIterator`,
/// walking the back end inward via
/// [`BidirectionalCursor::step_back`].
#[derive(Clone)]
pub struct Iter<C> {
    cur: C,
    end: C,
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.cur == self.end {
            return None;
        }
        let item = self.cur.get();
        self.cur.step();
        Some(item)
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Iter<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        if self.cur == self.end {
            return None;
        }
        self.end.step_back();
        Some(self.end.get())
    }
}

/// A type that can be converted into a [`View`].
///
/// This is the seam through which ordinary containers enter cursor-land:
/// it is implemented for slice and array references (yielding
/// [`SliceCursor`](crate::SliceCursor) views with `Item = &T`) and,
/// trivially, for views themselves, so adaptor constructors accept either.
pub trait IntoView {
    /// The cursor type of the resulting view.
    type Cursor: Cursor;

    /// Converts `self` into a view.
    fn into_view(self) -> View<Self::Cursor>;
}

impl<C: Cursor> IntoView for View<C> {
    type Cursor = C;

    #[inline]
    fn into_view(self) -> View<C> {
        self
    }
}

impl<'a, C: Cursor> IntoView for &'a View<C> {
    type Cursor = C;

    #[inline]
    fn into_view(self) -> View<C> {
        self.clone()
    }
}

/// Creates a [`View`] over any [`IntoView`] source.
///
/// # Example
///
/// ```
/// use seqview::view;
///
/// let nums = vec![10, 20, 30];
/// let doubled: Vec<i32> = view(&nums).map(|n| n * 2).to_vec();
/// assert_eq!(doubled, vec![20, 40, 60]);
/// ```
#[inline]
pub fn view<S: IntoView>(source: S) -> View<S::Cursor> {
    source.into_view()
}
