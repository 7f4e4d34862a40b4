use crate::cursor::{Cursor, RandomAccessCursor};
use crate::view::{IntoView, View};

/// The cursor of a sort-merge equi-join, produced by [`join_where`].
///
/// Forward tier only: the inner search state is directional and cannot be
/// stepped backward or jumped. Equality compares the position in A alone —
/// two positions on the same A element are equal no matter how far their
/// inner searches have progressed — which is all end detection needs.
#[derive(Clone)]
pub struct JoinWhereCursor<A, B, SA, SB, F> {
    iter_a: A,
    end_a: A,
    iter_b: B,
    begin_b: B,
    end_b: B,
    /// The B position of the current match; `None` exactly at end.
    matched: Option<B>,
    key_a: SA,
    key_b: SB,
    merge: F,
}

impl<A: PartialEq, B, SA, SB, F> PartialEq for JoinWhereCursor<A, B, SA, SB, F> {
    #[inline]
    fn eq(&self, other: &JoinWhereCursor<A, B, SA, SB, F>) -> bool {
        self.iter_a == other.iter_a
    }
}

impl<A, B, SA, SB, F, K> JoinWhereCursor<A, B, SA, SB, F>
where
    A: Cursor,
    B: RandomAccessCursor,
    SA: Fn(A::Item) -> K + Clone,
    SB: Fn(B::Item) -> K + Clone,
    K: Ord,
{
    /// Settles on the next matching pair, or at end.
    ///
    /// Searches B for the current A element's key starting from wherever
    /// `iter_b` points. On success the match is recorded and `iter_b` is
    /// bumped one past it so the next search resumes there; on failure the
    /// next A element is tried with `iter_b` rewound to the beginning of B.
    fn find_next(&mut self) {
        while self.iter_a != self.end_a {
            let key = (self.key_a)(self.iter_a.get());
            self.iter_b = lower_bound(&self.iter_b, &self.end_b, &key, &self.key_b);
            if self.iter_b != self.end_b && (self.key_b)(self.iter_b.get()) == key {
                self.matched = Some(self.iter_b.clone());
                self.iter_b.step();
                return;
            }
            self.iter_a.step();
            self.iter_b = self.begin_b.clone();
        }
        self.matched = None;
    }
}

impl<A, B, SA, SB, F, K, T> Cursor for JoinWhereCursor<A, B, SA, SB, F>
where
    A: Cursor,
    B: RandomAccessCursor,
    SA: Fn(A::Item) -> K + Clone,
    SB: Fn(B::Item) -> K + Clone,
    F: Fn(A::Item, B::Item) -> T + Clone,
    K: Ord,
{
    type Item = T;

    fn get(&self) -> T {
        let matched = self.matched.as_ref().unwrap();
        (self.merge)(self.iter_a.get(), matched.get())
    }

    fn step(&mut self) {
        self.iter_a.step();
        self.find_next();
    }
}

/// Returns the first position in `[lo, hi)` whose key is not less than
/// `key`, or `hi` if there is none. B must be sorted ascending by its key
/// for the result to mean anything.
fn lower_bound<B, SB, K>(lo: &B, hi: &B, key: &K, key_of: &SB) -> B
where
    B: RandomAccessCursor,
    SB: Fn(B::Item) -> K,
    K: Ord,
{
    let mut base = lo.clone();
    let mut len = hi.distance(&base);
    while len > 0 {
        let half = len / 2;
        let mut mid = base.clone();
        mid.advance(half);
        if key_of(mid.get()) < *key {
            mid.step();
            base = mid;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    base
}

/// Creates a sort-merge equi-join view over `a` and `b`: for each element
/// of `a` whose key (under `key_a`) also occurs in `b` (under `key_b`),
/// yields `merge(a_element, b_element)` against the *first* B element of
/// the matching run.
///
/// `b` must be sorted ascending by `key_b` and random access (each probe is
/// a binary search). If `b` is not sorted the join does not fail — it
/// silently yields an incomplete or wrong set of pairs.
///
/// `a` may be in any order and any tier. The search over B is forward-only:
/// after a match, the next A element's search resumes past the matched
/// element, and the search position rewinds to the beginning of B only when
/// an A element finds no match. Two consequences worth knowing:
///
/// - Probing costs `O(log |b|)` when A's keys roughly track B's order, but
///   every unmatched A element rewinds the search, so adversarial inputs
///   degrade toward `O(|a| · |b|)` comparisons. This is the intended
///   trade-off for accepting unordered A.
/// - An A element whose key precedes the previous *matched* key is found
///   only if an unmatched element in between has rewound the search.
///   Non-decreasing A keys never miss.
///
/// Only the first element of a run of duplicate keys in B is ever paired
/// with a given A element.
///
/// # Example
///
/// ```
/// use seqview::join_where;
///
/// let people = [(1, "alice"), (2, "bob"), (4, "dave")];
/// let orders = [(1, "book"), (3, "mug"), (4, "pen")];
///
/// let paired = join_where(
///     &people,
///     &orders,
///     |p| p.0,
///     |o| o.0,
///     |p, o| (p.1, o.1),
/// );
/// assert_eq!(paired.to_vec(), vec![("alice", "book"), ("dave", "pen")]);
/// ```
pub fn join_where<A, B, SA, SB, F, K, T>(
    a: A,
    b: B,
    key_a: SA,
    key_b: SB,
    merge: F,
) -> View<JoinWhereCursor<A::Cursor, B::Cursor, SA, SB, F>>
where
    A: IntoView,
    B: IntoView,
    B::Cursor: RandomAccessCursor,
    SA: Fn(<A::Cursor as Cursor>::Item) -> K + Clone,
    SB: Fn(<B::Cursor as Cursor>::Item) -> K + Clone,
    F: Fn(<A::Cursor as Cursor>::Item, <B::Cursor as Cursor>::Item) -> T + Clone,
    K: Ord,
{
    let (begin_a, end_a) = a.into_view().into_parts();
    let (begin_b, end_b) = b.into_view().into_parts();

    let mut begin = JoinWhereCursor {
        iter_a: begin_a,
        end_a: end_a.clone(),
        iter_b: begin_b.clone(),
        begin_b: begin_b.clone(),
        end_b: end_b.clone(),
        matched: None,
        key_a: key_a.clone(),
        key_b: key_b.clone(),
        merge: merge.clone(),
    };
    // an empty input jumps straight to end; in particular an empty B must
    // not be searched (or have its selector called) at all
    if begin.iter_a == begin.end_a || begin_b == end_b {
        begin.iter_a = begin.end_a.clone();
    } else {
        begin.find_next();
    }
    let end = JoinWhereCursor {
        iter_a: end_a.clone(),
        end_a,
        iter_b: end_b.clone(),
        begin_b,
        end_b,
        matched: None,
        key_a,
        key_b,
        merge,
    };
    View::new(begin, end)
}
