// Copyright 2026 the Spacefill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree itself: leaves, branches, insertion, and search.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::keeper::Keeper;
use crate::pivot::{HilbertPivot, Pivot};
use crate::types::{Bounded, Bounding, tight_bounds};

/// Default [`Options::fill_level`].
pub const DEFAULT_FILL_LEVEL: usize = 2;

/// Tuning knobs for a [`Tree`].
pub struct Options {
    /// Target node occupancy. A node splits when its contents exceed
    /// `2 * fill_level` after an insert. Zero is replaced by
    /// [`DEFAULT_FILL_LEVEL`] on first insert.
    pub fill_level: usize,

    /// Partition function applied to an overflowing node's contents. When
    /// absent, a default [`HilbertPivot`] is installed on the first insert,
    /// provided items are 2-, 3-, or 4-dimensional; other dimensions make
    /// the insert fail with [`InsertError::UnsupportedDimension`].
    pub pivot: Option<Box<dyn Pivot>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fill_level: DEFAULT_FILL_LEVEL,
            pivot: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("fill_level", &self.fill_level)
            .field("pivot", &self.pivot.as_ref().map(|_| "dyn Pivot"))
            .finish()
    }
}

/// Configuration failure surfaced by [`Tree::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    /// No pivot was configured and no default exists for items of this
    /// dimension.
    UnsupportedDimension(usize),
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDimension(n) => {
                write!(
                    f,
                    "no default pivot for {n}-dimensional items; set Options::pivot"
                )
            }
        }
    }
}

impl core::error::Error for InsertError {}

/// A node of the tree: either a leaf of items or a branch of child nodes.
///
/// Every node caches the tight extent of its contents. Splits happen one
/// level at a time, so all children of a branch are the same kind.
#[derive(Clone, Debug)]
pub enum Node<B> {
    /// A terminal node holding items.
    Leaf(Leaf<B>),
    /// An interior node holding child nodes.
    Branch(Branch<B>),
}

impl<B> Node<B> {
    /// The cached bounds covering everything below this node.
    pub fn bounds(&self) -> &Bounding {
        match self {
            Node::Leaf(leaf) => &leaf.bounds,
            Node::Branch(branch) => &branch.bounds,
        }
    }

    /// The number of items stored at or below this node.
    pub fn len(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.len(),
            Node::Branch(branch) => branch.len(),
        }
    }

    /// Whether no items are stored at or below this node.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B: Bounded> Node<B> {
    fn insert(&mut self, fill_level: usize, pivot: &dyn Pivot, item: B) -> Option<Node<B>> {
        match self {
            Node::Leaf(leaf) => leaf.insert(fill_level, pivot, item).map(Node::Leaf),
            Node::Branch(branch) => branch.insert(fill_level, pivot, item).map(Node::Branch),
        }
    }

    fn search<'a, K: Keeper<'a, B>>(&'a self, keeper: &mut K) {
        match self {
            Node::Leaf(leaf) => {
                if keeper.include(&leaf.bounds) {
                    for value in &leaf.values {
                        keeper.keep(value);
                    }
                }
            }
            Node::Branch(branch) => {
                if keeper.include(&branch.bounds) {
                    for child in &branch.children {
                        child.search(keeper);
                    }
                }
            }
        }
    }
}

impl<B: Bounded> Bounded for Node<B> {
    fn bounds(&self) -> Bounding {
        Node::bounds(self).clone()
    }
}

/// A terminal node: an ordered sequence of items and their tight extent.
#[derive(Clone, Debug)]
pub struct Leaf<B> {
    bounds: Bounding,
    values: Vec<B>,
}

impl<B> Leaf<B> {
    /// The cached bounds, equal to the tight extent of the values.
    pub fn bounds(&self) -> &Bounding {
        &self.bounds
    }

    /// The stored items.
    pub fn values(&self) -> &[B] {
        &self.values
    }

    /// The number of stored items.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the leaf stores no items.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<B: Bounded> Leaf<B> {
    fn first(item: B, fill_level: usize) -> Self {
        let bounds = item.bounds();
        let mut values = Vec::with_capacity(2 * fill_level);
        values.push(item);
        Self { bounds, values }
    }

    fn with_values(values: Vec<B>) -> Self {
        let mut leaf = Self {
            bounds: Bounding::default(),
            values,
        };
        leaf.rebound(None);
        leaf
    }

    /// Extend the bounds by `grown`, or recompute them from scratch.
    fn rebound(&mut self, grown: Option<&Bounding>) {
        match grown {
            Some(b) => self.bounds = self.bounds.extent(b),
            None => {
                if let Some(b) = tight_bounds(&self.values) {
                    self.bounds = b;
                }
            }
        }
    }

    fn insert(&mut self, fill_level: usize, pivot: &dyn Pivot, item: B) -> Option<Leaf<B>> {
        let added = item.bounds();
        self.values.push(item);
        if self.values.len() <= 2 * fill_level {
            self.rebound(Some(&added));
            return None;
        }

        let at = pivot.pivot(&mut self.values);
        let split = self.values.drain(at..).collect();
        self.rebound(None);
        Some(Leaf::with_values(split))
    }
}

/// An interior node: an ordered sequence of child nodes and their tight
/// extent.
#[derive(Clone, Debug)]
pub struct Branch<B> {
    bounds: Bounding,
    children: Vec<Node<B>>,
}

impl<B> Branch<B> {
    /// The cached bounds, equal to the tight extent of the child bounds.
    pub fn bounds(&self) -> &Bounding {
        &self.bounds
    }

    /// The child nodes.
    pub fn children(&self) -> &[Node<B>] {
        &self.children
    }

    /// The number of items stored below this branch.
    pub fn len(&self) -> usize {
        self.children.iter().map(Node::len).sum()
    }
}

impl<B: Bounded> Branch<B> {
    fn with_children(children: Vec<Node<B>>) -> Self {
        let mut branch = Self {
            bounds: Bounding::default(),
            children,
        };
        branch.rebound(None);
        branch
    }

    /// Extend the bounds by `grown`, or recompute them from scratch.
    fn rebound(&mut self, grown: Option<&Bounding>) {
        match grown {
            Some(b) => self.bounds = self.bounds.extent(b),
            None => {
                if let Some(b) = tight_bounds(&self.children) {
                    self.bounds = b;
                }
            }
        }
    }

    /// The child whose bounds grow least by absorbing `bounds`.
    ///
    /// First minimum wins; a zero-cost child is taken immediately.
    fn pick_for_insert(&self, bounds: &Bounding) -> usize {
        let mut best = 0;
        let mut best_cost = f64::INFINITY;
        for (i, child) in self.children.iter().enumerate() {
            let cb = child.bounds();
            let cost = cb.extent(bounds).area() - cb.area();
            if cost == 0.0 {
                return i;
            }
            if cost < best_cost {
                best_cost = cost;
                best = i;
            }
        }
        best
    }

    fn insert(&mut self, fill_level: usize, pivot: &dyn Pivot, item: B) -> Option<Branch<B>> {
        let picked = self.pick_for_insert(&item.bounds());
        let split = self.children[picked].insert(fill_level, pivot, item);

        let Some(split) = split else {
            // Inserts only grow the picked child, so extending by its
            // post-insert bounds keeps ours tight.
            let grown = self.children[picked].bounds().clone();
            self.rebound(Some(&grown));
            return None;
        };

        self.children.push(split);
        if self.children.len() <= 2 * fill_level {
            // The picked child shrank when it split; recompute from scratch
            // rather than extending.
            self.rebound(None);
            return None;
        }

        let at = pivot.pivot(&mut self.children);
        let split = self.children.drain(at..).collect();
        self.rebound(None);
        Some(Branch::with_children(split))
    }
}

/// A height-balanced R-tree of bounded items.
///
/// Insertion descends a single path, splitting overflowing nodes bottom-up;
/// a root split grows the tree by one level. Search visits every subtree a
/// [`Keeper`] does not prune.
#[derive(Debug)]
pub struct Tree<B> {
    /// Tuning knobs; adjust before the first insert.
    pub options: Options,
    /// The root node, absent while the tree is empty.
    pub root: Option<Node<B>>,
}

impl<B> Default for Tree<B> {
    fn default() -> Self {
        Self {
            options: Options::default(),
            root: None,
        }
    }
}

impl<B: Bounded> Tree<B> {
    /// An empty tree with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty tree with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            root: None,
        }
    }

    /// The number of items in the tree.
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, Node::len)
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert an item.
    ///
    /// The item's [`bounds`](Bounded::bounds) must not change while it is in
    /// the tree. Fails only on configuration errors; the first insert fills
    /// in unset options (see [`Options`]).
    pub fn insert(&mut self, item: B) -> Result<(), InsertError> {
        if self.options.fill_level == 0 {
            self.options.fill_level = DEFAULT_FILL_LEVEL;
        }
        if self.options.pivot.is_none() {
            let n = item.bounds().dims();
            if !(2..=4).contains(&n) {
                return Err(InsertError::UnsupportedDimension(n));
            }
        }
        let fill_level = self.options.fill_level;
        let pivot_box = self
            .options
            .pivot
            .get_or_insert_with(|| Box::new(HilbertPivot::default()));
        let pivot = pivot_box.as_ref();

        let Some(root) = self.root.as_mut() else {
            self.root = Some(Node::Leaf(Leaf::first(item, fill_level)));
            return Ok(());
        };

        if let Some(split) = root.insert(fill_level, pivot, item)
            && let Some(old) = self.root.take()
        {
            self.root = Some(Node::Branch(Branch::with_children(vec![old, split])));
        }
        Ok(())
    }

    /// Visit every item the keeper does not prune.
    ///
    /// See [`Keeper`] for the pruning and collection contract.
    pub fn search<'a, K: Keeper<'a, B>>(&'a self, keeper: &mut K) {
        if let Some(root) = &self.root {
            root.search(keeper);
        }
    }
}
