use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::view::{IntoView, View};

/// The cursor of an N-ary cartesian product, produced by
/// [`cartesian_product`].
///
/// `T` is a tuple of the source cursors. The product walks combinations in
/// odometer order: the first source is the fastest dimension, the last the
/// slowest. Every position carries the begin and end pair of each dimension
/// alongside the current tuple so that fast dimensions can wrap around.
///
/// The exhausted position is canonical: every dimension sits at its end,
/// and any movement that overflows the slowest dimension snaps the whole
/// tuple there. Equality compares current tuples, so the canonical form is
/// what makes end detection reliable.
#[derive(Clone)]
pub struct ProductCursor<T> {
    begin: T,
    current: T,
    end: T,
}

impl<T: PartialEq> PartialEq for ProductCursor<T> {
    #[inline]
    fn eq(&self, other: &ProductCursor<T>) -> bool {
        self.current == other.current
    }
}

/// Source tuples that multiply into a single product view.
///
/// Implemented for tuples of two through six [`IntoView`] sources. The
/// product view is as capable as its least capable source: random access
/// when every dimension is, forward-only as soon as one is.
pub trait ProductSources {
    type Cursor: Cursor;

    fn into_product(self) -> View<Self::Cursor>;
}

/// Creates a view over the cartesian product of the given sources.
///
/// Yields one tuple per combination, in odometer order: the first source
/// cycles fastest and the last slowest. The product is empty as soon as
/// any source is empty.
///
/// # Example
///
/// ```
/// use seqview::cartesian_product;
///
/// let numbers = [1, 2];
/// let letters = ['a', 'b', 'c'];
///
/// let pairs = cartesian_product((&numbers, &letters)).map(|(n, c)| (*n, *c));
/// assert_eq!(pairs.len(), 6);
/// assert_eq!(
///     pairs.to_vec(),
///     vec![(1, 'a'), (2, 'a'), (1, 'b'), (2, 'b'), (1, 'c'), (2, 'c')],
/// );
/// assert_eq!(pairs.at(4), (1, 'c'));
/// ```
pub fn cartesian_product<S: ProductSources>(sources: S) -> View<S::Cursor> {
    sources.into_product()
}

// Odometer increment. Dimensions are listed fastest first; the last listed
// is the slowest and does not wrap, it snaps the tuple to canonical end.
macro_rules! product_step {
    ($self:ident, $d:tt) => {
        $self.current.$d.step();
        if $self.current.$d == $self.end.$d {
            $self.current = $self.end.clone();
        }
    };
    ($self:ident, $d:tt, $($rest:tt),+) => {
        $self.current.$d.step();
        if $self.current.$d == $self.end.$d {
            $self.current.$d = $self.begin.$d.clone();
            product_step!($self, $($rest),+);
        }
    };
}

// Odometer decrement for positions other than canonical end. Fast
// dimensions at their begin wrap to their last element and borrow from the
// next dimension; the slowest underflowing is a contract violation.
macro_rules! product_step_back {
    ($self:ident, $d:tt) => {
        debug_assert!(
            $self.current.$d != $self.begin.$d,
            "stepped a product cursor back past its first combination"
        );
        $self.current.$d.step_back();
    };
    ($self:ident, $d:tt, $($rest:tt),+) => {
        if $self.current.$d == $self.begin.$d {
            $self.current.$d = $self.end.$d.clone();
            $self.current.$d.step_back();
            product_step_back!($self, $($rest),+);
        } else {
            $self.current.$d.step_back();
        }
    };
}

macro_rules! product_impls {
    (
        ($($ty:ident $idx:tt $b:ident $e:ident),+),
        inner: ($($inner:tt),+),
        outer: $outer:tt,
    ) => {
        impl<$($ty: Cursor),+> Cursor for ProductCursor<($($ty,)+)> {
            type Item = ($($ty::Item,)+);

            fn get(&self) -> Self::Item {
                ($(self.current.$idx.get(),)+)
            }

            fn step(&mut self) {
                product_step!(self, $($inner,)+ $outer);
            }
        }

        impl<$($ty: BidirectionalCursor),+> BidirectionalCursor
            for ProductCursor<($($ty,)+)>
        {
            fn step_back(&mut self) {
                if self.current == self.end {
                    // the last combination is every dimension's last element
                    $(self.current.$idx.step_back();)+
                } else {
                    product_step_back!(self, $($inner,)+ $outer);
                }
            }
        }

        impl<$($ty: RandomAccessCursor),+> RandomAccessCursor
            for ProductCursor<($($ty,)+)>
        {
            fn advance(&mut self, offset: isize) {
                if offset == 0 {
                    return;
                }
                if self.current == self.end {
                    // canonical end reads as one past the last row of the
                    // slowest dimension; rebase the fast digits for arithmetic
                    $(self.current.$inner = self.begin.$inner.clone();)+
                }
                // mixed-radix add, fastest digit first, carrying outward
                let mut carry = offset;
                $(
                    let len = self.end.$inner.distance(&self.begin.$inner);
                    debug_assert!(len > 0, "jumped within an empty product");
                    let total = self.current.$inner.distance(&self.begin.$inner) + carry;
                    carry = total.div_euclid(len);
                    let digit = total.rem_euclid(len);
                    self.current.$inner = self.begin.$inner.clone();
                    self.current.$inner.advance(digit);
                )+
                self.current.$outer.advance(carry);
                if self.current.$outer == self.end.$outer {
                    self.current = self.end.clone();
                }
            }

            fn distance(&self, origin: &Self) -> isize {
                // per-dimension differences multiply; over the full view this
                // is the product of the dimension lengths, which is what len
                // relies on
                let mut total = 1;
                $(total *= self.current.$idx.distance(&origin.current.$idx);)+
                total
            }
        }

        impl<$($ty),+> ProductSources for ($($ty,)+)
        where
            $($ty: IntoView),+
        {
            type Cursor = ProductCursor<($($ty::Cursor,)+)>;

            fn into_product(self) -> View<Self::Cursor> {
                $(let ($b, $e) = self.$idx.into_view().into_parts();)+
                let empty = false $(|| $b == $e)+;
                let begin = ($($b,)+);
                let end = ($($e,)+);
                let first = ProductCursor {
                    begin: begin.clone(),
                    current: if empty { end.clone() } else { begin.clone() },
                    end: end.clone(),
                };
                let last = ProductCursor {
                    begin,
                    current: end.clone(),
                    end,
                };
                View::new(first, last)
            }
        }
    };
}

product_impls! {
    (C0 0 b0 e0, C1 1 b1 e1),
    inner: (0),
    outer: 1,
}

product_impls! {
    (C0 0 b0 e0, C1 1 b1 e1, C2 2 b2 e2),
    inner: (0, 1),
    outer: 2,
}

product_impls! {
    (C0 0 b0 e0, C1 1 b1 e1, C2 2 b2 e2, C3 3 b3 e3),
    inner: (0, 1, 2),
    outer: 3,
}

product_impls! {
    (C0 0 b0 e0, C1 1 b1 e1, C2 2 b2 e2, C3 3 b3 e3, C4 4 b4 e4),
    inner: (0, 1, 2, 3),
    outer: 4,
}

product_impls! {
    (C0 0 b0 e0, C1 1 b1 e1, C2 2 b2 e2, C3 3 b3 e3, C4 4 b4 e4, C5 5 b5 e5),
    inner: (0, 1, 2, 3, 4),
    outer: 5,
}

#[cfg(test)]
mod tests {
    use super::cartesian_product;
    use crate::cursor::{Cursor, RandomAccessCursor};
    use crate::view;

    #[test]
    fn pairs_in_odometer_order() {
        let numbers = [1, 2];
        let letters = ['a', 'b', 'c'];
        let pairs = cartesian_product((&numbers, &letters)).map(|(n, c)| (*n, *c));
        assert_eq!(
            pairs.to_vec(),
            vec![(1, 'a'), (2, 'a'), (1, 'b'), (2, 'b'), (1, 'c'), (2, 'c')]
        );
    }

    #[test]
    fn every_combination_exactly_once() {
        let a = [1, 2];
        let b = [10, 20];
        let c = ['x', 'y', 'z'];
        let all = cartesian_product((&a, &b, &c))
            .map(|(x, y, z)| (*x, *y, *z))
            .to_vec();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0], (1, 10, 'x'));
        assert_eq!(all[11], (2, 20, 'z'));
        let mut seen = all;
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn empty_dimension_means_empty_product() {
        let numbers = [1, 2];
        let none: [i32; 0] = [];
        let letters = ['a'];
        assert!(cartesian_product((&none[..], &letters)).is_empty());
        assert!(cartesian_product((&numbers, &none[..])).is_empty());
        let triple = cartesian_product((&numbers, &none[..], &letters));
        assert!(triple.is_empty());
        assert_eq!(triple.len(), 0);
        assert_eq!(triple.iter().count(), 0);
    }

    #[test]
    fn reverse_walk_mirrors_forward_walk() {
        let numbers = [1, 2];
        let letters = ['a', 'b', 'c'];
        let forward: Vec<_> = cartesian_product((&numbers, &letters)).iter().collect();
        let mut backward: Vec<_> = cartesian_product((&numbers, &letters))
            .iter()
            .rev()
            .collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn jumping_matches_stepping() {
        let numbers = [1, 2];
        let letters = ['a', 'b', 'c'];
        let (begin, end) = cartesian_product((&numbers, &letters)).into_parts();
        let mut stepped = begin.clone();
        for offset in 0..=6isize {
            let mut jumped = begin.clone();
            jumped.advance(offset);
            assert!(jumped == stepped, "offset {}", offset);
            if offset < 6 {
                stepped.step();
            }
        }
        assert!(stepped == end);
    }

    #[test]
    fn jumps_round_trip_from_anywhere() {
        let numbers = [1, 2];
        let letters = ['a', 'b', 'c'];
        let (begin, _) = cartesian_product((&numbers, &letters)).into_parts();
        for start in 0..6isize {
            let mut from = begin.clone();
            from.advance(start);
            for delta in -start..=(6 - start) {
                let mut cur = from.clone();
                cur.advance(delta);
                cur.advance(-delta);
                assert!(cur == from, "start {} delta {}", start, delta);
            }
        }
    }

    #[test]
    fn distance_spans_the_whole_product() {
        let numbers = [1, 2];
        let letters = ['a', 'b', 'c'];
        let product = cartesian_product((&numbers, &letters));
        let (begin, end) = product.clone().into_parts();
        assert_eq!(end.distance(&begin), 6);
        assert_eq!(product.len(), 6);
    }

    #[test]
    fn at_indexes_combinations_in_order() {
        let numbers = [1, 2];
        let letters = ['a', 'b', 'c'];
        let product = cartesian_product((&numbers, &letters));
        let walked = product.to_vec();
        for (i, combination) in walked.into_iter().enumerate() {
            assert_eq!(product.at(i), combination);
        }
    }

    #[test]
    fn four_dimensions() {
        let bits = [0u8, 1];
        let nibbles = cartesian_product((&bits, &bits, &bits, &bits));
        assert_eq!(nibbles.len(), 16);
        assert_eq!(nibbles.at(0), (&0, &0, &0, &0));
        assert_eq!(nibbles.at(15), (&1, &1, &1, &1));
        assert_eq!(nibbles.iter().count(), 16);
    }

    #[test]
    fn six_dimensions() {
        let a = [1];
        let b = [2];
        let c = [3];
        let d = [4];
        let e = [5];
        let f = [6];
        let single = cartesian_product((&a, &b, &c, &d, &e, &f));
        assert_eq!(single.to_vec(), vec![(&1, &2, &3, &4, &5, &6)]);
    }

    #[test]
    fn forward_only_sources_still_multiply() {
        let keep = [1, 2, 3];
        let unwanted = [2];
        let letters = ['x', 'y'];
        let combos = cartesian_product((view(&keep).except(&unwanted), &letters));
        let flat: Vec<_> = combos.iter().map(|(n, c)| (*n, *c)).collect();
        assert_eq!(flat, vec![(1, 'x'), (3, 'x'), (1, 'y'), (3, 'y')]);
    }
}
