use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::view::View;

/// A cursor that yields samples drawn from a `rand` distribution.
///
/// Produced by [`random`], [`random_unbounded`], and [`random_range`]. The
/// cursor itself is only a counter; every dereference draws the next sample
/// from the generator, which is shared by all positions of the view. Sample
/// values therefore depend on draw order, not on the position, and walking
/// the same view twice continues the stream rather than replaying it. For a
/// replayable sequence, rebuild the view from a freshly seeded generator.
///
/// The shared generator handle is an `Rc`, so these views stay on one
/// thread; within that thread, serializing draws against other users of the
/// same generator is the caller's business.
pub struct RandomCursor<D, R, T> {
    dist: D,
    rng: Rc<RefCell<R>>,
    at: usize,
    unbounded: bool,
    _value: PhantomData<fn() -> T>,
}

impl<D: Clone, R, T> Clone for RandomCursor<D, R, T> {
    fn clone(&self) -> RandomCursor<D, R, T> {
        RandomCursor {
            dist: self.dist.clone(),
            rng: Rc::clone(&self.rng),
            at: self.at,
            unbounded: self.unbounded,
            _value: PhantomData,
        }
    }
}

impl<D, R, T> PartialEq for RandomCursor<D, R, T> {
    /// Unbounded positions never compare equal, as for
    /// [`GenerateCursor`](crate::GenerateCursor).
    #[inline]
    fn eq(&self, other: &RandomCursor<D, R, T>) -> bool {
        if self.unbounded || other.unbounded {
            return false;
        }
        self.at == other.at
    }
}

impl<D, R, T> Cursor for RandomCursor<D, R, T>
where
    D: Distribution<T> + Clone,
    R: Rng,
{
    type Item = T;

    #[inline]
    fn get(&self) -> T {
        self.dist.sample(&mut *self.rng.borrow_mut())
    }

    #[inline]
    fn step(&mut self) {
        self.at += 1;
    }
}

impl<D, R, T> BidirectionalCursor for RandomCursor<D, R, T>
where
    D: Distribution<T> + Clone,
    R: Rng,
{
    #[inline]
    fn step_back(&mut self) {
        debug_assert!(self.at > 0, "step_back past the beginning");
        self.at -= 1;
    }
}

impl<D, R, T> RandomAccessCursor for RandomCursor<D, R, T>
where
    D: Distribution<T> + Clone,
    R: Rng,
{
    #[inline]
    fn advance(&mut self, offset: isize) {
        let at = self.at as isize + offset;
        debug_assert!(at >= 0, "advance out of range");
        self.at = at as usize;
    }

    #[inline]
    fn distance(&self, origin: &RandomCursor<D, R, T>) -> isize {
        self.at as isize - origin.at as isize
    }
}

/// Creates a view of `amount` samples drawn from `dist` using `rng`.
///
/// All positions of the view share the one generator; see
/// [`RandomCursor`] for the consequences. Pass a seeded generator for
/// reproducible output.
///
/// # Example
///
/// ```
/// use rand::distributions::Uniform;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use seqview::random;
///
/// let dice = random(Uniform::new_inclusive(1, 6), StdRng::seed_from_u64(7), 10);
/// let rolls = dice.to_vec();
/// assert_eq!(rolls.len(), 10);
/// assert!(rolls.iter().all(|r| (1..=6).contains(r)));
/// ```
pub fn random<D, R, T>(dist: D, rng: R, amount: usize) -> View<RandomCursor<D, R, T>>
where
    D: Distribution<T> + Clone,
    R: Rng,
{
    let rng = Rc::new(RefCell::new(rng));
    View::new(
        RandomCursor {
            dist: dist.clone(),
            rng: Rc::clone(&rng),
            at: 0,
            unbounded: false,
            _value: PhantomData,
        },
        RandomCursor { dist, rng, at: amount, unbounded: false, _value: PhantomData },
    )
}

/// Like [`random`], but the view never reaches its end.
pub fn random_unbounded<D, R, T>(dist: D, rng: R) -> View<RandomCursor<D, R, T>>
where
    D: Distribution<T> + Clone,
    R: Rng,
{
    let rng = Rc::new(RefCell::new(rng));
    View::new(
        RandomCursor {
            dist: dist.clone(),
            rng: Rc::clone(&rng),
            at: 0,
            unbounded: true,
            _value: PhantomData,
        },
        RandomCursor { dist, rng, at: 0, unbounded: true, _value: PhantomData },
    )
}

/// Creates a view of `amount` samples drawn uniformly from
/// `low..=high`, using an entropy-seeded generator.
///
/// # Example
///
/// ```
/// use seqview::random_range;
///
/// let percents = random_range(0, 100, 5);
/// assert_eq!(percents.len(), 5);
/// assert!(percents.iter().all(|p| (0..=100).contains(&p)));
/// ```
pub fn random_range<T>(
    low: T,
    high: T,
    amount: usize,
) -> View<RandomCursor<Uniform<T>, StdRng, T>>
where
    T: SampleUniform,
    Uniform<T>: Clone,
{
    random(Uniform::new_inclusive(low, high), StdRng::from_entropy(), amount)
}
