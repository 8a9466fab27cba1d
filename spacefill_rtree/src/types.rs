// Copyright 2026 the Spacefill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points, bounding hyperrectangles, and the capability traits the tree is
//! built on.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// A point in n-dimensional real space, read one axis at a time.
///
/// The tree never interprets client geometry beyond these two operations.
pub trait Point {
    /// Number of spatial dimensions.
    fn dims(&self) -> usize;

    /// The coordinate along axis `i`, for `i < dims()`.
    fn dim(&self, i: usize) -> f64;
}

/// The crate's own point type: an owned coordinate vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector(
    /// The coordinates, one per axis.
    pub Vec<f64>,
);

impl Vector {
    /// Copy an arbitrary [`Point`] into an owned vector.
    pub fn from_point<P: Point + ?Sized>(p: &P) -> Self {
        Self((0..p.dims()).map(|i| p.dim(i)).collect())
    }
}

impl Point for Vector {
    fn dims(&self) -> usize {
        self.0.len()
    }

    fn dim(&self, i: usize) -> f64 {
        self.0[i]
    }
}

impl<const N: usize> Point for [f64; N] {
    fn dims(&self) -> usize {
        N
    }

    fn dim(&self, i: usize) -> f64 {
        self[i]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords)
    }
}

/// A closed, axis-aligned hyperrectangle spanning `min` to `max`.
///
/// Invariant: `min` and `max` have the same dimensionality and
/// `min.dim(i) <= max.dim(i)` on every axis. Equality (`PartialEq`) is exact
/// componentwise comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Bounding {
    /// The low corner.
    pub min: Vector,
    /// The high corner.
    pub max: Vector,
}

impl Bounding {
    /// Bounds spanning the two corner points. Coordinates are copied out of
    /// the points; the result owns its corners.
    pub fn new<P: Point + ?Sized>(min: &P, max: &P) -> Self {
        debug_assert_eq!(min.dims(), max.dims());
        Self {
            min: Vector::from_point(min),
            max: Vector::from_point(max),
        }
    }

    /// The degenerate bounds of a single point.
    pub fn point<P: Point + ?Sized>(p: &P) -> Self {
        Self {
            min: Vector::from_point(p),
            max: Vector::from_point(p),
        }
    }

    /// Number of spatial dimensions.
    pub fn dims(&self) -> usize {
        self.min.dims()
    }

    /// Whether the two bounds share at least one point.
    ///
    /// Boxes are closed, so touching faces count as overlap.
    pub fn overlaps(&self, b: &Bounding) -> bool {
        for i in 0..self.dims() {
            if self.min.dim(i) > b.max.dim(i) || self.max.dim(i) < b.min.dim(i) {
                return false;
            }
        }
        true
    }

    /// The smallest bounds containing both `self` and `b`.
    pub fn extent(&self, b: &Bounding) -> Bounding {
        let n = self.dims();
        debug_assert_eq!(n, b.dims());
        let mut min = Vec::with_capacity(n);
        let mut max = Vec::with_capacity(n);
        for i in 0..n {
            min.push(min_f(self.min.dim(i), b.min.dim(i)));
            max.push(max_f(self.max.dim(i), b.max.dim(i)));
        }
        Bounding {
            min: Vector(min),
            max: Vector(max),
        }
    }

    /// The hypervolume of the bounds: the product of the axis widths.
    ///
    /// Zero when any axis is degenerate.
    pub fn area(&self) -> f64 {
        let mut area = 1.0;
        for i in 0..self.dims() {
            area *= self.max.dim(i) - self.min.dim(i);
        }
        area
    }
}

impl Default for Bounding {
    /// The zero bounds with no axes. Placeholder for nodes under
    /// construction; never observed on a live node.
    fn default() -> Self {
        Self {
            min: Vector(Vec::new()),
            max: Vector(Vec::new()),
        }
    }
}

/// A value with a current axis-aligned bounding box.
///
/// An item's bounds must not change while it is held by a tree.
pub trait Bounded {
    /// The current bounds of the value.
    fn bounds(&self) -> Bounding;
}

/// Boxes are trivially bounded by themselves, so a [`Bounding`] can be
/// inserted into a tree directly.
impl Bounded for Bounding {
    fn bounds(&self) -> Bounding {
        self.clone()
    }
}

/// An indexed, swappable collection of bounded values, as a pivot sees it.
///
/// Leaf value slices and branch child slices both implement this through the
/// blanket `[T: Bounded]` impl.
pub trait BoundedSet {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `i`.
    fn get(&self, i: usize) -> &dyn Bounded;

    /// Exchange the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

impl<T: Bounded> BoundedSet for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, i: usize) -> &dyn Bounded {
        &self[i]
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

// `&[T]` is itself unsized, so it cannot be unsize-coerced to `&dyn
// BoundedSet` in a single step; callers holding a `Vec<T>` go through this
// impl instead, which coerces in one step since `Vec<T>` is sized.
impl<T: Bounded> BoundedSet for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, i: usize) -> &dyn Bounded {
        &self.as_slice()[i]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

/// A borrowed slice, wrapped so it can be unsize-coerced to `&dyn
/// BoundedSet` in one step (a bare `&[T]` cannot be, since `[T]` is itself
/// unsized).
pub(crate) struct SliceRef<'a, T>(pub(crate) &'a [T]);

impl<T: Bounded> BoundedSet for SliceRef<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, i: usize) -> &dyn Bounded {
        &self.0[i]
    }

    fn swap(&mut self, _i: usize, _j: usize) {
        unreachable!("SliceRef is read-only")
    }
}

/// A mutably borrowed slice, wrapped for the same reason as [`SliceRef`].
pub(crate) struct SliceMut<'a, T>(pub(crate) &'a mut [T]);

impl<T: Bounded> BoundedSet for SliceMut<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, i: usize) -> &dyn Bounded {
        &self.0[i]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}

/// The tight extent over every element of `set`, or `None` for an empty set.
pub(crate) fn tight_bounds(set: &dyn BoundedSet) -> Option<Bounding> {
    if set.is_empty() {
        return None;
    }
    let mut bounds = set.get(0).bounds();
    for i in 1..set.len() {
        bounds = bounds.extent(&set.get(i).bounds());
    }
    Some(bounds)
}

fn min_f(a: f64, b: f64) -> f64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

fn max_f(a: f64, b: f64) -> f64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}
