use crate::cursor::Cursor;
use crate::view::View;

/// A cursor that pairs each element of an underlying cursor with a running
/// index.
///
/// Produced by [`View::enumerate`] and [`View::enumerate_from`]. The output
/// is Forward tier regardless of the underlying cursor: handing out correct
/// indices from the back would require knowing the sequence length up
/// front, the same constraint that makes `std::iter::Enumerate` demand
/// `ExactSizeIterator` before it reverses. Equality compares the underlying
/// position only.
#[derive(Clone)]
pub struct EnumerateCursor<C> {
    at: usize,
    inner: C,
}

impl<C: PartialEq> PartialEq for EnumerateCursor<C> {
    #[inline]
    fn eq(&self, other: &EnumerateCursor<C>) -> bool {
        self.inner == other.inner
    }
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
    type Item = (usize, C::Item);

    #[inline]
    fn get(&self) -> (usize, C::Item) {
        (self.at, self.inner.get())
    }

    #[inline]
    fn step(&mut self) {
        self.at += 1;
        self.inner.step();
    }
}

impl<C: Cursor> View<C> {
    /// Returns a view that pairs each element with its index, starting
    /// at 0.
    ///
    /// # Example
    ///
    /// ```
    /// use seqview::view;
    ///
    /// let letters = ['a', 'b', 'c'];
    /// let indexed = view(&letters).enumerate();
    /// assert_eq!(indexed.to_vec(), vec![(0, &'a'), (1, &'b'), (2, &'c')]);
    /// ```
    pub fn enumerate(self) -> View<EnumerateCursor<C>> {
        self.enumerate_from(0)
    }

    /// Like [`enumerate`](View::enumerate), but the index starts at
    /// `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use seqview::view;
    ///
    /// let letters = ['x', 'y'];
    /// let indexed = view(&letters).enumerate_from(10);
    /// assert_eq!(indexed.to_vec(), vec![(10, &'x'), (11, &'y')]);
    /// ```
    pub fn enumerate_from(self, start: usize) -> View<EnumerateCursor<C>> {
        let (begin, end) = self.into_parts();
        View::new(
            EnumerateCursor { at: start, inner: begin },
            EnumerateCursor { at: start, inner: end },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::view;

    #[test]
    fn indexes_from_zero() {
        let nums = [7, 8, 9];
        let pairs = view(&nums).enumerate();
        assert_eq!(pairs.to_vec(), vec![(0, &7), (1, &8), (2, &9)]);
    }

    #[test]
    fn custom_start() {
        let nums = [7, 8];
        let pairs = view(&nums).enumerate_from(100);
        assert_eq!(pairs.to_vec(), vec![(100, &7), (101, &8)]);
    }

    #[test]
    fn empty() {
        let nums: [i32; 0] = [];
        let pairs = view(&nums[..]).enumerate();
        assert!(pairs.is_empty());
        assert_eq!(pairs.iter().count(), 0);
    }

    #[test]
    fn composes_with_map() {
        let nums = [5, 6];
        let labeled = view(&nums)
            .map(|n| n * 2)
            .enumerate()
            .map(|(i, n)| format!("{}:{}", i, n));
        assert_eq!(labeled.to_vec(), vec!["0:10", "1:12"]);
    }
}
