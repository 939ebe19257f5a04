// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Array-resident tree records addressed by breadth-first index.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::error::TreeError;
use crate::types::Side;

/// A tree node stored in a [`FlatTree`].
///
/// Child links are positions in the same array; `None` marks an absent child.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlatNode {
    /// Integer payload.
    pub value: i64,
    /// Text rendered inside the node.
    pub label: String,
    /// Position of the left child.
    pub left: Option<usize>,
    /// Position of the right child.
    pub right: Option<usize>,
}

impl FlatNode {
    /// A record with no children, labelled with the decimal form of `value`.
    pub fn leaf(value: i64) -> Self {
        Self {
            value,
            label: value.to_string(),
            left: None,
            right: None,
        }
    }

    /// Set both child links.
    #[must_use]
    pub fn with_children(mut self, left: Option<usize>, right: Option<usize>) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    /// Child link on `side`.
    pub fn child(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// A parent-to-child link in a [`FlatTree`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Edge {
    /// Position of the parent.
    pub parent: usize,
    /// Position of the child.
    pub child: usize,
    /// Which link of the parent.
    pub side: Side,
}

/// Breadth-first array of [`FlatNode`]s.
///
/// Invariants (checked by [`FlatTree::from_nodes`], guaranteed by
/// [`flatten`](crate::flatten)):
/// - the root, if any, is at position 0 and no link points at it;
/// - every child position is greater than its parent's position and in bounds;
/// - every position is linked at most once;
/// - every record is reachable from the root.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FlatTree {
    nodes: Vec<FlatNode>,
}

impl FlatTree {
    /// Wrap records already known to satisfy the invariants.
    pub(crate) fn from_nodes_unchecked(nodes: Vec<FlatNode>) -> Self {
        Self { nodes }
    }

    /// Validate and wrap caller-supplied records.
    pub fn from_nodes(nodes: Vec<FlatNode>) -> Result<Self, TreeError> {
        let len = nodes.len();
        let mut linked = vec![false; len];
        for (parent, node) in nodes.iter().enumerate() {
            for side in [Side::Left, Side::Right] {
                let Some(child) = node.child(side) else {
                    continue;
                };
                if child <= parent || child >= len {
                    return Err(TreeError::InvalidChildIndex {
                        parent,
                        side,
                        child,
                        len,
                    });
                }
                if core::mem::replace(&mut linked[child], true) {
                    return Err(TreeError::SharedChild { child });
                }
            }
        }
        // Links only point forward, so every non-root record must be linked
        // by someone to be reachable from position 0.
        if let Some(index) = linked.iter().skip(1).position(|l| !l) {
            return Err(TreeError::Unreachable { index: index + 1 });
        }
        Ok(Self { nodes })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no records.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&FlatNode> {
        self.nodes.get(index)
    }

    /// Records in breadth-first order.
    pub fn iter(&self) -> core::slice::Iter<'_, FlatNode> {
        self.nodes.iter()
    }

    /// Records as a slice.
    pub fn as_slice(&self) -> &[FlatNode] {
        &self.nodes
    }

    /// All parent-to-child links, parents in breadth-first order, left before right.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().enumerate().flat_map(|(parent, node)| {
            [Side::Left, Side::Right].into_iter().filter_map(move |side| {
                node.child(side).map(|child| Edge {
                    parent,
                    child,
                    side,
                })
            })
        })
    }

    /// Depth of every record, indexed like the tree. The root is at depth 0.
    pub fn depths(&self) -> Vec<usize> {
        let mut depths = vec![0; self.nodes.len()];
        if self.nodes.is_empty() {
            return depths;
        }
        let mut queue = VecDeque::from([0_usize]);
        while let Some(index) = queue.pop_front() {
            let node = &self.nodes[index];
            for child in [node.left, node.right].into_iter().flatten() {
                depths[child] = depths[index] + 1;
                queue.push_back(child);
            }
        }
        depths
    }

    /// Unwrap into the underlying records.
    pub fn into_nodes(self) -> Vec<FlatNode> {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a FlatTree {
    type Item = &'a FlatNode;
    type IntoIter = core::slice::Iter<'a, FlatNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
