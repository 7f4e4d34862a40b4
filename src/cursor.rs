/*!
The cursor contract that every view adaptor in this crate implements.

A cursor is a self-contained position in a lazy sequence. Two cursors over
the same sequence delimit a range, and all adaptors compose by wrapping
cursors in other cursors. Capability is expressed as a three-level trait
hierarchy rather than a runtime tag, so an adaptor's output tier is decided
entirely by which impls exist for its cursor type.
*/

/// A position in a lazy sequence that can be dereferenced and stepped
/// forward.
///
/// A cursor is a value: cloning one yields an independent position, and a
/// `(begin, end)` pair of cursors delimits a sequence (see
/// [`View`](crate::View)). Equality compares *positions*, never elements;
/// comparing cursors that did not originate from the same view is a
/// programming error with an unspecified (but memory safe) result.
///
/// `Cursor` alone is the Forward tier: one-directional traversal, restarted
/// by cloning a begin position. The Bidirectional and RandomAccess tiers
/// are the subtraits [`BidirectionalCursor`] and [`RandomAccessCursor`]. An
/// adaptor exposes the weakest tier among its inputs by implementing
/// exactly the subtraits all of its inputs support; this is checked at
/// compile time, not configured.
pub trait Cursor: Clone + PartialEq {
    /// The element this cursor yields. This may borrow from the underlying
    /// storage, in which case the borrow's lifetime is a parameter of the
    /// cursor type itself.
    type Item;

    /// Returns the element at the current position.
    ///
    /// Must not be called on an end position. Doing so is a programming
    /// error, not a recoverable condition: the result is unspecified and is
    /// typically a panic.
    fn get(&self) -> Self::Item;

    /// Moves one step forward.
    ///
    /// Must not be called on an end position.
    fn step(&mut self);
}

/// A cursor that can also step backward.
pub trait BidirectionalCursor: Cursor {
    /// Moves one step backward.
    ///
    /// Must not be called on a begin position.
    fn step_back(&mut self);
}

/// A cursor that can jump by arbitrary signed offsets and measure signed
/// distances.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves by `offset` elements; negative offsets move backward.
    ///
    /// The target position must lie within the `[begin, end]` range of the
    /// view this cursor came from.
    fn advance(&mut self, offset: isize);

    /// Returns how many elements `self` lies ahead of `origin`; negative if
    /// it lies behind.
    ///
    /// Both cursors must come from the same view.
    fn distance(&self, origin: &Self) -> isize;
}
