use crate::cursor::Cursor;
use crate::view::{IntoView, View};

/// A cursor that skips every element occurring in an exclusion sequence.
///
/// Produced by [`View::except`]. Membership is decided by a linear scan of
/// the exclusion sequence per element, so the exclusion sequence may be in
/// any order; the cost is `O(n · m)` over the two lengths. Output is
/// Forward tier. Equality compares the main position only.
#[derive(Clone)]
pub struct ExceptCursor<C, E> {
    cur: C,
    end: C,
    skip_begin: E,
    skip_end: E,
}

impl<C: PartialEq, E> PartialEq for ExceptCursor<C, E> {
    #[inline]
    fn eq(&self, other: &ExceptCursor<C, E>) -> bool {
        self.cur == other.cur
    }
}

impl<C, E> ExceptCursor<C, E>
where
    C: Cursor,
    E: Cursor,
    C::Item: PartialEq<E::Item>,
{
    fn excluded(&self, item: &C::Item) -> bool {
        let mut skip = self.skip_begin.clone();
        while skip != self.skip_end {
            if *item == skip.get() {
                return true;
            }
            skip.step();
        }
        false
    }

    /// Walks forward until the current element is not excluded (or end).
    fn settle(&mut self) {
        while self.cur != self.end {
            let item = self.cur.get();
            if !self.excluded(&item) {
                return;
            }
            self.cur.step();
        }
    }
}

impl<C, E> Cursor for ExceptCursor<C, E>
where
    C: Cursor,
    E: Cursor,
    C::Item: PartialEq<E::Item>,
{
    type Item = C::Item;

    #[inline]
    fn get(&self) -> C::Item {
        self.cur.get()
    }

    fn step(&mut self) {
        self.cur.step();
        self.settle();
    }
}

impl<C: Cursor> View<C> {
    /// Returns a view of the elements of this view that do not occur in
    /// `excluded`.
    ///
    /// The exclusion sequence does not need to be sorted; each element of
    /// this view is checked by a linear scan of `excluded`, so the combined
    /// cost is the product of the two lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use seqview::view;
    ///
    /// let nums = [1, 2, 3, 4, 5, 6];
    /// let unwanted = [4, 2];
    /// let kept = view(&nums).except(&unwanted);
    /// assert_eq!(kept.to_vec(), vec![&1, &3, &5, &6]);
    /// ```
    pub fn except<S>(self, excluded: S) -> View<ExceptCursor<C, S::Cursor>>
    where
        S: IntoView,
        C::Item: PartialEq<<S::Cursor as Cursor>::Item>,
    {
        let (begin, end) = self.into_parts();
        let (skip_begin, skip_end) = excluded.into_view().into_parts();
        let mut first = ExceptCursor {
            cur: begin,
            end: end.clone(),
            skip_begin: skip_begin.clone(),
            skip_end: skip_end.clone(),
        };
        first.settle();
        let last = ExceptCursor { cur: end.clone(), end, skip_begin, skip_end };
        View::new(first, last)
    }
}
