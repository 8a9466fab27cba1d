// Copyright 2026 the Spacefill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition functions applied to overflowing nodes.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use spacefill_curve::{Hilbert2D, Hilbert3D, Hilbert4D, SpaceFilling};

use crate::types::{BoundedSet, Bounding, tight_bounds};

/// Chooses the split index for an overflowing node's contents, reordering
/// the set as a side effect.
pub trait Pivot {
    /// Returns `s` partitioning the (possibly reordered) set into the kept
    /// prefix `[0, s)` and the split-off suffix `[s, len)`, with
    /// `0 < s <= len`. Sets shorter than 2 return 0.
    fn pivot(&self, set: &mut dyn BoundedSet) -> usize;
}

/// Splits a set at its median position along a Hilbert curve.
///
/// Item centers are quantized onto the `[0, 2^order)^n` grid spanned by the
/// set's tight bounds, the set is stable-sorted by curve position, and the
/// midpoint is returned. Ordering by curve position keeps spatially close
/// items on the same side of the split.
///
/// Supports 2-, 3-, and 4-dimensional items; panics on any other dimension.
/// (The tree only installs this pivot by default after checking the
/// dimension, so the panic is reachable only through an explicit
/// misconfiguration.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HilbertPivot {
    order: u32,
}

impl HilbertPivot {
    /// A pivot ordering items on the Hilbert curve of the given order.
    pub const fn new(order: u32) -> Self {
        Self { order }
    }
}

impl Default for HilbertPivot {
    /// The tree's default pivot, of order 5: a 32-cell grid per axis.
    fn default() -> Self {
        Self::new(5)
    }
}

impl Pivot for HilbertPivot {
    fn pivot(&self, set: &mut dyn BoundedSet) -> usize {
        if set.len() < 2 {
            return 0;
        }
        let Some(bounds) = tight_bounds(&*set) else {
            return 0;
        };

        let n = bounds.dims();
        let curve: Box<dyn SpaceFilling> = match n {
            2 => Box::new(Hilbert2D::new(self.order)),
            3 => Box::new(Hilbert3D::new(self.order)),
            4 => Box::new(Hilbert4D::new(self.order)),
            _ => panic!("no {n}-dimensional Hilbert curve"),
        };

        let side = 1usize << self.order;
        let mut q = vec![0; n];
        let mut keys = Vec::with_capacity(set.len());
        for i in 0..set.len() {
            let b = set.get(i).bounds();
            quantize_center(&bounds, side, &b, &mut q);
            keys.push(curve.curve(&mut q));
        }

        sort_by_keys(set, &keys);
        set.len() / 2
    }
}

/// Quantize the center of `item` onto the `side`-per-axis grid spanned by
/// `bounds`, writing the cell coordinate into `out`.
///
/// Centers on the far edge land in the last cell. Axes on which `bounds` is
/// degenerate quantize to 0, so ordering falls to the remaining axes.
fn quantize_center(bounds: &Bounding, side: usize, item: &Bounding, out: &mut [usize]) {
    for (i, q) in out.iter_mut().enumerate() {
        let lo = bounds.min.0[i];
        let span = bounds.max.0[i] - lo;
        *q = if span > 0.0 {
            let center = (item.min.0[i] + item.max.0[i]) / 2.0;
            let cell = (side as f64 * (center - lo) / span) as usize;
            if cell == side { cell - 1 } else { cell }
        } else {
            0
        };
    }
}

/// Stable-sort `set` by `keys` using only [`BoundedSet::swap`].
///
/// The order is computed on the keys first; the resulting permutation is
/// then applied to the set by walking its cycles, so an already-sorted set
/// is not touched at all.
fn sort_by_keys(set: &mut dyn BoundedSet, keys: &[usize]) {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| keys[i]);

    // pos[i] is the target position of the element currently at i.
    let mut pos = vec![0; order.len()];
    for (target, &src) in order.iter().enumerate() {
        pos[src] = target;
    }
    for i in 0..pos.len() {
        while pos[i] != i {
            let j = pos[i];
            set.swap(i, j);
            pos.swap(i, j);
        }
    }
}
