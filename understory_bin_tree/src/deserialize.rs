// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preorder, sentinel-delimited deserialization into a [`BinaryTree`].

use alloc::{vec, vec::Vec};

use crate::error::TreeError;
use crate::tree::BinaryTree;
use crate::types::{EndOfInput, NodeId, Sentinel};

/// Result of a successful [`Deserializer::build`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deserialized {
    /// The reconstructed tree (empty if the root slot held a sentinel).
    pub tree: BinaryTree,
    /// Number of input values read, sentinels included.
    pub consumed: usize,
}

/// A subtree position that still has to be read from the input.
#[derive(Copy, Clone, Debug)]
enum Slot {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// Reads a preorder serialization (value, left subtree, right subtree) where a
/// [`Sentinel`] marks an absent child.
///
/// A single cursor walks the input left to right and advances exactly once per
/// subtree slot it examines, whether that slot yields a node or an absent
/// child. Pending slots are kept on an explicit stack rather than the call
/// stack, so degenerate chains of any depth are fine.
///
/// ## Example
///
/// ```rust
/// use understory_bin_tree::{Deserializer, Sentinel};
///
/// let input = [7, 3, -1, -1, -1];
/// let out = Deserializer::new(&input, Sentinel(-1)).build().unwrap();
/// let root = out.tree.root().unwrap();
///
/// assert_eq!(out.consumed, 5);
/// assert_eq!(out.tree.value(root), Some(7));
/// assert_eq!(out.tree.left(root).and_then(|l| out.tree.value(l)), Some(3));
/// assert_eq!(out.tree.right(root), None);
/// ```
#[derive(Clone, Debug)]
pub struct Deserializer<'a> {
    input: &'a [i64],
    sentinel: Sentinel,
    end_of_input: EndOfInput,
    cursor: usize,
}

impl<'a> Deserializer<'a> {
    /// Create a deserializer over `input`.
    ///
    /// Running out of input while a subtree is expected is an error by
    /// default; see [`Deserializer::end_of_input`].
    pub fn new(input: &'a [i64], sentinel: Sentinel) -> Self {
        Self {
            input,
            sentinel,
            end_of_input: EndOfInput::Reject,
            cursor: 0,
        }
    }

    /// Choose how a sequence that ends mid-subtree is handled.
    #[must_use]
    pub fn end_of_input(mut self, policy: EndOfInput) -> Self {
        self.end_of_input = policy;
        self
    }

    /// Reconstruct the tree.
    ///
    /// An empty input yields an empty tree. Values left over after the root
    /// subtree completes are ignored; use [`Deserializer::build_exact`] to
    /// reject them.
    pub fn build(mut self) -> Result<Deserialized, TreeError> {
        let mut tree = BinaryTree::new();
        if self.input.is_empty() {
            return Ok(Deserialized { tree, consumed: 0 });
        }

        let mut pending = vec![Slot::Root];
        while let Some(slot) = pending.pop() {
            let Some(value) = self.read_slot(pending.len() + 1)? else {
                continue;
            };
            let id = tree.alloc(value);
            match slot {
                Slot::Root => tree.set_root(id),
                Slot::Left(parent) => tree.node_mut(parent).left = Some(id),
                Slot::Right(parent) => tree.node_mut(parent).right = Some(id),
            }
            // Right goes underneath so the whole left subtree is read first.
            pending.push(Slot::Right(id));
            pending.push(Slot::Left(id));
        }

        let consumed = self.cursor.min(self.input.len());
        log::debug!(
            "deserialized {} node(s) from {consumed} of {} value(s)",
            tree.len(),
            self.input.len()
        );
        Ok(Deserialized { tree, consumed })
    }

    /// Like [`Deserializer::build`], but fail with [`TreeError::TrailingInput`]
    /// if any values remain after the root subtree.
    pub fn build_exact(self) -> Result<Deserialized, TreeError> {
        let len = self.input.len();
        let out = self.build()?;
        if out.consumed < len {
            return Err(TreeError::TrailingInput {
                consumed: out.consumed,
                len,
            });
        }
        Ok(out)
    }

    /// Examine the slot under the cursor and advance past it.
    ///
    /// `Ok(None)` means the subtree is absent.
    fn read_slot(&mut self, pending: usize) -> Result<Option<i64>, TreeError> {
        let position = self.cursor;
        self.cursor += 1;
        match self.input.get(position) {
            Some(&value) if self.sentinel.matches(value) => Ok(None),
            Some(&value) => Ok(Some(value)),
            None => match self.end_of_input {
                EndOfInput::Reject => Err(TreeError::MalformedInput { position, pending }),
                EndOfInput::TreatAsAbsent => {
                    log::trace!("input ended at {position}; treating subtree as absent");
                    Ok(None)
                }
            },
        }
    }
}

/// Reconstruct a tree from `input` with the default end-of-input policy.
///
/// Shorthand for `Deserializer::new(input, sentinel).build()`.
pub fn deserialize(input: &[i64], sentinel: Sentinel) -> Result<Deserialized, TreeError> {
    Deserializer::new(input, sentinel).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRUNCATED: [i64; 14] = [50, 30, 20, 10, 5, -1, -1, 15, -1, -1, 35, 25, -1, -1];

    fn values_preorder(tree: &BinaryTree) -> Vec<i64> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = tree.root().into_iter().collect();
        while let Some(id) = stack.pop() {
            out.push(tree.value(id).unwrap());
            stack.extend(tree.right(id));
            stack.extend(tree.left(id));
        }
        out
    }

    #[test]
    fn empty_input_is_empty_tree() {
        let out = deserialize(&[], Sentinel::default()).unwrap();
        assert!(out.tree.is_empty());
        assert_eq!(out.consumed, 0);
    }

    #[test]
    fn lone_sentinel_is_empty_tree() {
        let out = deserialize(&[-1], Sentinel::default()).unwrap();
        assert!(out.tree.is_empty());
        assert_eq!(out.consumed, 1);
    }

    #[test]
    fn single_node() {
        let out = deserialize(&[7, -1, -1], Sentinel::default()).unwrap();
        let root = out.tree.root().unwrap();
        assert_eq!(out.tree.len(), 1);
        assert_eq!(out.tree.value(root), Some(7));
        assert_eq!(out.tree.left(root), None);
        assert_eq!(out.tree.right(root), None);
        assert_eq!(out.consumed, 3);
    }

    #[test]
    fn missing_right_child_is_malformed() {
        let err = deserialize(&[7, -1], Sentinel::default()).unwrap_err();
        assert_eq!(
            err,
            TreeError::MalformedInput {
                position: 2,
                pending: 1
            }
        );
    }

    #[test]
    fn truncated_sequence_is_rejected_by_default() {
        let err = deserialize(&TRUNCATED, Sentinel::default()).unwrap_err();
        // 35's right, 30's right and 50's right are all still open.
        assert_eq!(
            err,
            TreeError::MalformedInput {
                position: 14,
                pending: 3
            }
        );
    }

    #[test]
    fn truncated_sequence_is_accepted_when_lenient() {
        let out = Deserializer::new(&TRUNCATED, Sentinel::default())
            .end_of_input(EndOfInput::TreatAsAbsent)
            .build()
            .unwrap();
        assert_eq!(out.tree.len(), 8);
        assert_eq!(out.consumed, TRUNCATED.len());
        assert_eq!(
            values_preorder(&out.tree),
            vec![50, 30, 20, 10, 5, 15, 35, 25]
        );

        let root = out.tree.root().unwrap();
        assert_eq!(out.tree.right(root), None, "50 has no right child");
        let n30 = out.tree.left(root).unwrap();
        assert_eq!(out.tree.right(n30), None, "30 has no right child");
        let n20 = out.tree.left(n30).unwrap();
        let n35 = out.tree.right(n20).unwrap();
        assert_eq!(out.tree.value(n35), Some(35));
    }

    #[test]
    fn padded_sequence_matches_lenient_reading() {
        let mut padded = TRUNCATED.to_vec();
        padded.extend([-1, -1, -1]);
        let strict = deserialize(&padded, Sentinel::default()).unwrap();
        let lenient = Deserializer::new(&TRUNCATED, Sentinel::default())
            .end_of_input(EndOfInput::TreatAsAbsent)
            .build()
            .unwrap();
        assert_eq!(strict.tree, lenient.tree);
        assert_eq!(strict.consumed, padded.len());
    }

    #[test]
    fn trailing_values_are_ignored_or_rejected() {
        let input = [7, -1, -1, 9];
        let out = deserialize(&input, Sentinel::default()).unwrap();
        assert_eq!(out.consumed, 3);
        assert_eq!(out.tree.len(), 1);

        let err = Deserializer::new(&input, Sentinel::default())
            .build_exact()
            .unwrap_err();
        assert_eq!(err, TreeError::TrailingInput { consumed: 3, len: 4 });
    }

    #[test]
    fn custom_sentinel() {
        let out = deserialize(&[-1, 0, 0], Sentinel(0)).unwrap();
        let root = out.tree.root().unwrap();
        assert_eq!(out.tree.value(root), Some(-1));
        assert_eq!(out.tree.len(), 1);
    }

    #[test]
    fn non_sentinel_count_matches_node_count() {
        let input = [1, 2, 4, -1, -1, 5, -1, -1, 3, -1, 6, 7, -1, -1, -1];
        let out = deserialize(&input, Sentinel::default()).unwrap();
        let expected = input.iter().filter(|&&v| v != -1).count();
        assert_eq!(out.tree.len(), expected);
        assert_eq!(out.consumed, input.len());
    }

    #[test]
    fn deep_left_chain_does_not_recurse() {
        let depth = 200_000;
        let mut input: Vec<i64> = (0..depth).collect();
        input.extend(core::iter::repeat_n(-1, depth as usize + 1));
        let out = deserialize(&input, Sentinel::default()).unwrap();
        assert_eq!(out.tree.len(), depth as usize);
        assert_eq!(out.consumed, input.len());
    }
}
