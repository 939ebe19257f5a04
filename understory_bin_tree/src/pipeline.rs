// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot batch transform from a serialized sequence to a laid-out tree.

use kurbo::Size;

use crate::deserialize::Deserializer;
use crate::error::TreeError;
use crate::flat::FlatTree;
use crate::flatten::flatten;
use crate::layout::{Layout, LayoutConfig, LayoutEngine};
use crate::types::{EndOfInput, Sentinel};

/// Output of [`TreePipeline::run`]: records and their positions, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutTree {
    /// Breadth-first records.
    pub tree: FlatTree,
    /// Positions, indexed like `tree`.
    pub layout: Layout,
    /// Number of input values the deserializer read.
    pub consumed: usize,
}

/// Deserialize, flatten, and lay out in one call.
///
/// Any error aborts the whole pipeline; nothing partial is returned.
#[derive(Clone, Debug, Default)]
pub struct TreePipeline {
    /// Marker for absent children.
    pub sentinel: Sentinel,
    /// Handling of input that ends mid-subtree.
    pub end_of_input: EndOfInput,
    /// Accept values left over after the root subtree.
    pub allow_trailing: bool,
    /// Layout tunables.
    pub layout: LayoutConfig,
}

impl TreePipeline {
    /// Run every stage over `input` for a canvas of size `canvas`.
    pub fn run(&self, input: &[i64], canvas: Size) -> Result<LaidOutTree, TreeError> {
        let deserializer =
            Deserializer::new(input, self.sentinel).end_of_input(self.end_of_input);
        let deserialized = if self.allow_trailing {
            deserializer.build()?
        } else {
            deserializer.build_exact()?
        };
        let tree = flatten(deserialized.tree);
        let layout = LayoutEngine::new(self.layout).layout(&tree, canvas);
        Ok(LaidOutTree {
            tree,
            layout,
            consumed: deserialized.consumed,
        })
    }
}
