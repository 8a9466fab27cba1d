// Copyright 2026 the Spacefill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the curve position of every cell of an order-3 2D Hilbert curve,
//! laid out as the grid. Reading the hex values in order traces the curve's
//! single continuous path through the 8×8 grid.

use spacefill_curve::{Hilbert2D, SpaceFilling};

fn main() {
    let h = Hilbert2D::new(3);
    let side = h.dims()[0];

    for y in 0..side {
        let row: Vec<String> = (0..side)
            .map(|x| format!("{:02X}", h.curve(&mut [x, y])))
            .collect();
        println!("{}", row.join("  "));
    }
}
