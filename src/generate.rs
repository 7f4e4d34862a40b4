use std::cell::RefCell;

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::view::View;

/// A cursor that produces elements by invoking a stored function.
///
/// Produced by [`generate`] and [`generate_unbounded`]. The cursor itself
/// is only a counter; the function runs at dereference time, so jumping
/// around a generate view does not invoke it. Cloning a position clones the
/// function together with whatever state it has captured.
pub struct GenerateCursor<F> {
    func: RefCell<F>,
    at: usize,
    unbounded: bool,
}

impl<F: Clone> Clone for GenerateCursor<F> {
    fn clone(&self) -> GenerateCursor<F> {
        GenerateCursor {
            func: RefCell::new(self.func.borrow().clone()),
            at: self.at,
            unbounded: self.unbounded,
        }
    }
}

impl<F> PartialEq for GenerateCursor<F> {
    /// Unbounded positions never compare equal, which is what keeps an
    /// unbounded walk from terminating.
    #[inline]
    fn eq(&self, other: &GenerateCursor<F>) -> bool {
        if self.unbounded || other.unbounded {
            return false;
        }
        self.at == other.at
    }
}

impl<F, T> Cursor for GenerateCursor<F>
where
    F: FnMut() -> T + Clone,
{
    type Item = T;

    #[inline]
    fn get(&self) -> T {
        (&mut *self.func.borrow_mut())()
    }

    #[inline]
    fn step(&mut self) {
        self.at += 1;
    }
}

impl<F, T> BidirectionalCursor for GenerateCursor<F>
where
    F: FnMut() -> T + Clone,
{
    #[inline]
    fn step_back(&mut self) {
        debug_assert!(self.at > 0, "step_back past the beginning");
        self.at -= 1;
    }
}

impl<F, T> RandomAccessCursor for GenerateCursor<F>
where
    F: FnMut() -> T + Clone,
{
    #[inline]
    fn advance(&mut self, offset: isize) {
        let at = self.at as isize + offset;
        debug_assert!(at >= 0, "advance out of range");
        self.at = at as usize;
    }

    #[inline]
    fn distance(&self, origin: &GenerateCursor<F>) -> isize {
        self.at as isize - origin.at as isize
    }
}

/// Creates a view of `amount` elements, each produced by calling `func`.
///
/// The function runs once per dereference, in walk order. Each position
/// carries its own copy of `func`, cloned at construction, so re-iterating
/// the view restarts the function from its captured state.
///
/// # Example
///
/// ```
/// use seqview::generate;
///
/// let mut n = 0;
/// let counter = generate(move || { n += 1; n }, 4);
/// assert_eq!(counter.to_vec(), vec![1, 2, 3, 4]);
/// // restartable: iteration walks a fresh copy of the begin position
/// assert_eq!(counter.to_vec(), vec![1, 2, 3, 4]);
/// ```
pub fn generate<F, T>(func: F, amount: usize) -> View<GenerateCursor<F>>
where
    F: FnMut() -> T + Clone,
{
    View::new(
        GenerateCursor { func: RefCell::new(func.clone()), at: 0, unbounded: false },
        GenerateCursor { func: RefCell::new(func), at: amount, unbounded: false },
    )
}

/// Like [`generate`], but the view never reaches its end.
///
/// The caller imposes the stopping condition, e.g. with `Iterator::take`.
///
/// # Example
///
/// ```
/// use seqview::generate_unbounded;
///
/// let mut n = 0;
/// let naturals = generate_unbounded(move || { n += 1; n });
/// let first: Vec<i32> = naturals.iter().take(3).collect();
/// assert_eq!(first, vec![1, 2, 3]);
/// ```
pub fn generate_unbounded<F, T>(func: F) -> View<GenerateCursor<F>>
where
    F: FnMut() -> T + Clone,
{
    View::new(
        GenerateCursor { func: RefCell::new(func.clone()), at: 0, unbounded: true },
        GenerateCursor { func: RefCell::new(func), at: 0, unbounded: true },
    )
}
