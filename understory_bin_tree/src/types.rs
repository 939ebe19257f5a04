// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by the deserializer, flattener, and layout engine.

/// Reserved value in a serialized sequence that marks "no child here".
///
/// The sentinel should lie outside the domain of valid labels: a node whose
/// value equals the sentinel cannot be expressed in the serialization.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Sentinel(pub i64);

impl Sentinel {
    /// Returns whether `value` is this sentinel.
    #[inline]
    pub const fn matches(self, value: i64) -> bool {
        self.0 == value
    }
}

impl Default for Sentinel {
    fn default() -> Self {
        Self(-1)
    }
}

/// What the deserializer does when the input ends while a subtree is still expected.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EndOfInput {
    /// Abort with [`TreeError::MalformedInput`](crate::TreeError::MalformedInput).
    #[default]
    Reject,
    /// Treat the missing subtree as absent, as if a sentinel had been read.
    ///
    /// This accepts truncated serializations that omit trailing sentinels.
    TreatAsAbsent,
}

/// Which child link of a parent an edge comes from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The left child.
    Left,
    /// The right child.
    Right,
}

/// Identifier for a node in a [`BinaryTree`](crate::BinaryTree) arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}
