// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while reconstructing or validating a tree.

use thiserror::Error;

use crate::types::Side;

/// Error type for tree reconstruction and flat-tree validation.
///
/// An empty tree is not an error: it reconstructs to a tree with no root and
/// lays out to nothing.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TreeError {
    /// The sequence ended while a subtree was still expected.
    #[error("malformed input: sequence ended at position {position} with {pending} subtree(s) still expected")]
    MalformedInput {
        /// Cursor position that ran past the end of the sequence.
        position: usize,
        /// Number of subtree slots left unfilled, including the one at `position`.
        pending: usize,
    },
    /// Values remain after the root subtree was fully read.
    #[error("trailing input: tree ends after {consumed} of {len} values")]
    TrailingInput {
        /// Values consumed by the root subtree.
        consumed: usize,
        /// Length of the whole sequence.
        len: usize,
    },
    /// A child index does not point forward into the node array.
    #[error("node {parent} has {side:?} child index {child}, expected {parent} < index < {len}")]
    InvalidChildIndex {
        /// Position of the parent record.
        parent: usize,
        /// Which link carried the bad index.
        side: Side,
        /// The offending index.
        child: usize,
        /// Number of records.
        len: usize,
    },
    /// Two links point at the same record.
    #[error("node {child} is referenced by more than one parent link")]
    SharedChild {
        /// The record referenced twice.
        child: usize,
    },
    /// A record cannot be reached from the root.
    #[error("node {index} is not reachable from the root")]
    Unreachable {
        /// The first unreachable record.
        index: usize,
    },
}
