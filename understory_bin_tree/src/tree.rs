// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory binary tree stored as an arena of nodes.

use alloc::vec::Vec;

use crate::types::NodeId;

/// A node of a [`BinaryTree`]: a payload plus up to two exclusively owned children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    /// Integer payload.
    pub value: i64,
    /// Left child, if any.
    pub left: Option<NodeId>,
    /// Right child, if any.
    pub right: Option<NodeId>,
}

impl TreeNode {
    pub(crate) const fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Binary tree whose nodes live in a single arena and link to each other by [`NodeId`].
///
/// Every node except the root is referenced by exactly one parent link, so the
/// structure has no sharing and no cycles. Trees are produced by the
/// [`Deserializer`](crate::Deserializer) and consumed by [`flatten`](crate::flatten).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BinaryTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl BinaryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Access a node.
    ///
    /// Returns `None` if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.idx())
    }

    /// Payload of a node.
    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.node(id).map(|n| n.value)
    }

    /// Left child of a node.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.left)
    }

    /// Right child of a node.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.right)
    }

    /// Allocate a detached node and return its id.
    pub(crate) fn alloc(&mut self, value: i64) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(TreeNode::leaf(value));
        id
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        debug_assert!(self.root.is_none(), "root is assigned once");
        self.root = Some(id);
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.idx()]
    }
}
