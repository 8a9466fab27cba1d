// Copyright 2026 the Spacefill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model-based tests: the tree must answer overlap queries exactly like a
//! brute-force scan over the same items.

use std::collections::BTreeSet;
use std::vec::Vec;

use proptest::prelude::*;

use crate::keeper::OverlapKeeper;
use crate::tree::{Node, Options, Tree};
use crate::types::{Bounded, Bounding, SliceRef, Vector, tight_bounds};

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: usize,
    bounds: Bounding,
}

impl Bounded for Item {
    fn bounds(&self) -> Bounding {
        self.bounds.clone()
    }
}

/// A box from per-axis (origin, width) pairs; widths are non-negative so the
/// min/max invariant holds by construction.
fn to_box(axes: Vec<(f64, f64)>) -> Bounding {
    let (min, max): (Vec<f64>, Vec<f64>) =
        axes.into_iter().map(|(lo, w)| (lo, lo + w)).unzip();
    Bounding {
        min: Vector(min),
        max: Vector(max),
    }
}

fn boxes(dims: usize, max_len: usize) -> impl Strategy<Value = Vec<Bounding>> {
    prop::collection::vec(
        prop::collection::vec((-100.0f64..100.0, 0.0f64..20.0), dims),
        1..max_len,
    )
    .prop_map(|raw| raw.into_iter().map(to_box).collect())
}

fn query(dims: usize) -> impl Strategy<Value = Bounding> {
    prop::collection::vec((-120.0f64..120.0, 0.0f64..80.0), dims).prop_map(to_box)
}

fn build(boxes: Vec<Bounding>, fill_level: usize) -> (Tree<Item>, Vec<Item>) {
    let mut tree = Tree::with_options(Options {
        fill_level,
        pivot: None,
    });
    let items: Vec<Item> = boxes
        .into_iter()
        .enumerate()
        .map(|(id, bounds)| Item { id, bounds })
        .collect();
    for item in &items {
        tree.insert(item.clone()).unwrap();
    }
    (tree, items)
}

/// Tight bounds, fill bound, and uniform leaf depth, recursively.
fn check_node(node: &Node<Item>, fill_level: usize, depth: usize, leaf_depth: &mut Option<usize>) {
    match node {
        Node::Leaf(leaf) => {
            let tight = tight_bounds(&SliceRef(leaf.values()));
            assert_eq!(tight.as_ref(), Some(leaf.bounds()));
            assert!(!leaf.is_empty() && leaf.len() <= 2 * fill_level);
            match *leaf_depth {
                Some(d) => assert_eq!(d, depth),
                None => *leaf_depth = Some(depth),
            }
        }
        Node::Branch(branch) => {
            let tight = tight_bounds(&SliceRef(branch.children()));
            assert_eq!(tight.as_ref(), Some(branch.bounds()));
            let fan = branch.children().len();
            assert!(fan >= 1 && fan <= 2 * fill_level);
            for child in branch.children() {
                check_node(child, fill_level, depth + 1, leaf_depth);
            }
        }
    }
}

proptest! {
    #[test]
    fn search_matches_linear_scan(
        boxes in boxes(3, 48),
        region in query(3),
        fill_level in 1usize..5,
    ) {
        let (tree, items) = build(boxes, fill_level);
        prop_assert_eq!(tree.len(), items.len());

        let mut keeper = OverlapKeeper::new(region.clone());
        tree.search(&mut keeper);

        let got: BTreeSet<usize> = keeper.items.iter().map(|i| i.id).collect();
        let want: BTreeSet<usize> = items
            .iter()
            .filter(|i| region.overlaps(&i.bounds))
            .map(|i| i.id)
            .collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn invariants_hold_after_inserts(
        boxes in boxes(2, 48),
        fill_level in 1usize..5,
    ) {
        let (tree, items) = build(boxes, fill_level);
        prop_assert_eq!(tree.len(), items.len());
        if let Some(root) = &tree.root {
            let mut leaf_depth = None;
            check_node(root, tree.options.fill_level, 0, &mut leaf_depth);
        }
    }

    #[test]
    fn four_dimensional_items_use_the_default_pivot(
        boxes in boxes(4, 24),
    ) {
        let (tree, items) = build(boxes, 2);
        prop_assert_eq!(tree.len(), items.len());

        // Everything is found by a region covering the whole field.
        let mut keeper = OverlapKeeper::new(Bounding::new(
            &[-200.0; 4],
            &[200.0; 4],
        ));
        tree.search(&mut keeper);
        prop_assert_eq!(keeper.items.len(), items.len());
    }
}
