// Copyright 2026 the Spacefill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacefill R-tree: a height-balanced spatial index over axis-aligned
//! bounding boxes, split along Hilbert curves.
//!
//! - Insert values carrying an axis-aligned bounding box of any dimension.
//! - Search with a visitor that prunes subtrees and collects matches; the
//!   stock [`OverlapKeeper`] gathers everything overlapping a query region.
//! - Overflowing nodes are partitioned by a pluggable [`Pivot`]; the default
//!   [`HilbertPivot`] orders contents along a Hilbert curve
//!   (via [`spacefill_curve`]) so each half of a split stays spatially
//!   coherent. The default covers 2-, 3-, and 4-dimensional data; other
//!   dimensions need an explicit pivot.
//!
//! Client types participate through small capability traits: [`Point`] for
//! coordinates, [`Bounded`] for anything with a box. A [`Bounding`] is
//! itself `Bounded`, so plain boxes can be indexed directly.
//!
//! # Example
//!
//! ```
//! use spacefill_rtree::{Bounding, OverlapKeeper, Tree};
//!
//! let mut tree: Tree<Bounding> = Tree::new();
//! tree.insert(Bounding::new(&[0.0, 0.0], &[1.0, 1.0])).unwrap();
//! tree.insert(Bounding::new(&[2.0, 2.0], &[3.0, 3.0])).unwrap();
//! tree.insert(Bounding::new(&[8.0, 8.0], &[9.0, 9.0])).unwrap();
//!
//! let mut keeper = OverlapKeeper::new(Bounding::new(&[0.5, 0.5], &[2.5, 2.5]));
//! tree.search(&mut keeper);
//! assert_eq!(keeper.items.len(), 2);
//! ```
//!
//! # Scope
//!
//! The tree is insert-and-search only: no deletion, no bulk loading, no
//! nearest-neighbor queries, and no persistence. A tree is exclusively owned
//! by its user; shared readers of an unchanging tree are fine, concurrent
//! mutation is not supported. An item's bounds must not change while it is
//! indexed.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod keeper;
pub mod pivot;
pub mod tree;
pub mod types;

#[cfg(test)]
mod proptests;

pub use keeper::{Keeper, OverlapKeeper};
pub use pivot::{HilbertPivot, Pivot};
pub use tree::{Branch, DEFAULT_FILL_LEVEL, InsertError, Leaf, Node, Options, Tree};
pub use types::{Bounded, BoundedSet, Bounding, Point, Vector};
