// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadth-first conversion of a [`BinaryTree`] into a [`FlatTree`].

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::flat::{FlatNode, FlatTree};
use crate::tree::BinaryTree;
use crate::types::NodeId;

/// Flatten `tree` into breadth-first records with explicit child positions.
///
/// Positions are handed out when a child is discovered (enqueued), not when it
/// is emitted: the root takes position 0 and each discovered child takes the
/// next unused position. For a FIFO walk the two orders coincide, which is
/// what makes every recorded child position point at the right record.
///
/// The tree is consumed; its arena is freed when this returns.
///
/// ## Example
///
/// ```rust
/// use understory_bin_tree::{Sentinel, deserialize, flatten};
///
/// let out = deserialize(&[1, 2, -1, -1, 3, -1, -1], Sentinel(-1)).unwrap();
/// let flat = flatten(out.tree);
///
/// let labels: Vec<&str> = flat.iter().map(|n| n.label.as_str()).collect();
/// assert_eq!(labels, ["1", "2", "3"]);
/// assert_eq!(flat.get(0).unwrap().left, Some(1));
/// assert_eq!(flat.get(0).unwrap().right, Some(2));
/// ```
pub fn flatten(tree: BinaryTree) -> FlatTree {
    let Some(root) = tree.root() else {
        return FlatTree::default();
    };

    let mut nodes = Vec::with_capacity(tree.len());
    let mut queue: VecDeque<NodeId> = VecDeque::from([root]);
    let mut next = 0_usize;
    let mut discover = |child: Option<NodeId>, queue: &mut VecDeque<NodeId>| {
        child.map(|id| {
            next += 1;
            queue.push_back(id);
            next
        })
    };

    while let Some(id) = queue.pop_front() {
        let Some(node) = tree.node(id) else {
            unreachable!("queued ids come from the same arena");
        };
        let left = discover(node.left, &mut queue);
        let right = discover(node.right, &mut queue);
        nodes.push(FlatNode::leaf(node.value).with_children(left, right));
    }

    log::debug!("flattened {} node(s)", nodes.len());
    FlatTree::from_nodes_unchecked(nodes)
}
