// Copyright 2026 the Spacefill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacefill Curve: discrete Hilbert space-filling curves in 2, 3, and 4
//! dimensions.
//!
//! A Hilbert curve of order `k` visits every cell of the `[0, 2^k)^n` grid
//! exactly once, and cells at consecutive positions along the curve are
//! always axis-adjacent. That makes the curve position a locality-preserving
//! linearization: values that are close on the curve are close in space, so
//! sorting spatial data by curve position is a cheap way to cluster it.
//!
//! One type per dimension ([`Hilbert2D`], [`Hilbert3D`], [`Hilbert4D`])
//! implements the [`SpaceFilling`] trait, which maps coordinates to curve
//! positions ([`curve`](SpaceFilling::curve)) and back
//! ([`space`](SpaceFilling::space)).
//!
//! # Example
//!
//! ```
//! use spacefill_curve::{Hilbert2D, SpaceFilling};
//!
//! let h = Hilbert2D::new(3);
//!
//! // `curve` uses its argument as scratch space; pass a copy if the
//! // coordinate is needed afterwards.
//! let mut v = [7, 7];
//! assert_eq!(h.curve(&mut v), 0x2A);
//!
//! // `space` is the exact inverse.
//! assert_eq!(h.space(0x2A), vec![7, 7]);
//! ```
//!
//! # Limits
//!
//! Curve positions are `usize`, so an order-`k` curve in `n` dimensions
//! requires `n * k < usize::BITS`. On a 32-bit target the 2D curve breaks at
//! order 16, the 3D curve at order 11, and the 4D curve at order 8.

#![no_std]

extern crate alloc;

pub mod hilbert;
mod ops;

pub use hilbert::{Hilbert2D, Hilbert3D, Hilbert4D, SpaceFilling};
