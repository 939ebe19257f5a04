// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Bin Tree: rebuild a binary tree from a flat serialization and lay it out.
//!
//! The crate is a one-shot batch transform with three stages:
//!
//! - [`Deserializer`]: reads a preorder sequence of integers in which a [`Sentinel`]
//!   marks an absent child, producing a [`BinaryTree`] stored in an arena.
//! - [`flatten`]: walks the tree breadth-first and produces a [`FlatTree`], an array
//!   of [`FlatNode`] records whose child links are array positions.
//! - [`LayoutEngine`]: assigns every record a 2D center so that each depth is a
//!   horizontal row with nodes evenly spaced across the canvas width.
//!
//! [`TreePipeline`] chains the three and stops at the first error. Drawing is left to
//! the caller; `understory_bin_tree_scene` turns the output into a display list.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_bin_tree::TreePipeline;
//!
//! //        1
//! //       / \
//! //      2   3
//! let input = [1, 2, -1, -1, 3, -1, -1];
//! let out = TreePipeline::default()
//!     .run(&input, Size::new(1040.0, 800.0))
//!     .unwrap();
//!
//! assert_eq!(out.tree.len(), 3);
//! assert_eq!(out.layout.position(0), Some(Point::new(520.0, 100.0)));
//! assert_eq!(out.layout.level_widths(), &[1, 2]);
//! ```
//!
//! ## Malformed input
//!
//! A sequence that ends while a subtree is still expected is rejected with
//! [`TreeError::MalformedInput`] rather than silently truncated. Callers that need to
//! read serializations which omit trailing sentinels can opt into
//! [`EndOfInput::TreatAsAbsent`].
//!
//! ```rust
//! use understory_bin_tree::{Sentinel, TreeError, deserialize};
//!
//! // The root's right subtree is missing.
//! let err = deserialize(&[7, -1], Sentinel(-1)).unwrap_err();
//! assert_eq!(err, TreeError::MalformedInput { position: 2, pending: 1 });
//! ```
//!
//! An input whose root slot is a sentinel (or an empty input) is an empty tree, not an
//! error; it flattens and lays out to nothing.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod deserialize;
mod error;
mod flat;
mod flatten;
mod layout;
mod pipeline;
mod tree;
mod types;

pub use deserialize::{Deserialized, Deserializer, deserialize};
pub use error::TreeError;
pub use flat::{Edge, FlatNode, FlatTree};
pub use flatten::flatten;
pub use layout::{
    DEFAULT_LEVEL_SPACING, Layout, LayoutConfig, LayoutEngine, VerticalSpacing, layout,
};
pub use pipeline::{LaidOutTree, TreePipeline};
pub use tree::{BinaryTree, TreeNode};
pub use types::{EndOfInput, NodeId, Sentinel, Side};
