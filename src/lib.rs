//! Composable lazy views over sequences.
//!
//! A [`View`] is a `(begin, end)` pair of [`Cursor`]s: lightweight
//! positions that can be dereferenced, stepped and compared. Nothing is
//! computed until a view is walked, a view never owns the elements it
//! yields, and walking is restartable, so views clone cheaply and compose
//! freely.
//!
//! Cursors come in three capability tiers, encoded as traits:
//!
//! * [`Cursor`] steps forward, one position at a time.
//! * [`BidirectionalCursor`] also steps backward.
//! * [`RandomAccessCursor`] also jumps by arbitrary offsets and measures
//!   distances, which gives its views [`len`](View::len) and
//!   [`at`](View::at).
//!
//! Every adaptor preserves as much of its input's tier as its semantics
//! allow and degrades the rest at compile time, so a view is never asked
//! at runtime for a movement it cannot make.
//!
//! # Sources
//!
//! Slices and arrays become views through [`view`]; [`generate`] walks a
//! closure's successive results; [`random`] samples a distribution.
//!
//! # Adaptors
//!
//! [`View::map`], [`View::enumerate`] and [`View::except`] transform a
//! single view. [`join_where`] merges two sorted-key sequences the way a
//! sort-merge equi-join does, and [`cartesian_product`] multiplies up to
//! six views into one view of tuples. All of them yield ordinary views
//! that can be adapted further.
//!
//! # Example
//!
//! ```
//! use seqview::{cartesian_product, view};
//!
//! let suits = ["spades", "hearts"];
//! let ranks = [1, 2, 3];
//!
//! let deck = cartesian_product((&suits, &ranks));
//! assert_eq!(deck.len(), 6);
//! assert_eq!(deck.at(4), (&"spades", &3));
//!
//! let tens = view(&ranks).map(|r| r * 10).to_vec();
//! assert_eq!(tens, vec![10, 20, 30]);
//! ```

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
pub use crate::enumerate::EnumerateCursor;
pub use crate::except::ExceptCursor;
pub use crate::generate::{generate, generate_unbounded, GenerateCursor};
pub use crate::join::{join_where, JoinWhereCursor};
pub use crate::map::MapCursor;
pub use crate::product::{cartesian_product, ProductCursor, ProductSources};
pub use crate::random::{random, random_range, random_unbounded, RandomCursor};
pub use crate::slice::SliceCursor;
pub use crate::view::{view, IntoView, Iter, View};

mod cursor;
mod enumerate;
mod except;
mod generate;
mod join;
mod map;
mod product;
mod random;
mod slice;
mod view;
