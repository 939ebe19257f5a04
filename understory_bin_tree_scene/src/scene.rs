// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display list: one glyph per node and one connector per edge.

use kurbo::{Circle, Point, Rect, Shape};
use understory_bin_tree::{FlatTree, LaidOutTree, Layout};

use crate::arrow::{Arrow, Connector};
use crate::config::SceneConfig;

/// A node circle and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGlyph {
    /// Record position in the [`FlatTree`].
    pub index: usize,
    /// Circle centered on the layout position.
    pub circle: Circle,
    /// Text drawn inside the circle.
    pub label: String,
    /// Center of the label text.
    pub label_anchor: Point,
}

/// Backend-agnostic display list for a laid-out tree.
///
/// Built once from the pipeline output and immutable afterwards; backends
/// such as [`svg`](crate::svg) and [`raster`](crate::raster) only read it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Node glyphs in breadth-first order.
    pub nodes: Vec<NodeGlyph>,
    /// Connectors, parents in breadth-first order, left link before right.
    pub connectors: Vec<Connector>,
    /// Tunables the scene was built with.
    pub config: SceneConfig,
}

impl Scene {
    /// Build the display list for `tree` placed by `layout`.
    ///
    /// Records without a position are skipped, as are connectors whose shaft
    /// would have no length (coincident centers or a non-positive
    /// [`SceneConfig::shorten_factor`]).
    pub fn build(tree: &FlatTree, layout: &Layout, config: &SceneConfig) -> Self {
        if tree.len() != layout.len() {
            log::warn!(
                "layout has {} position(s) for {} node(s)",
                layout.len(),
                tree.len()
            );
        }

        let nodes: Vec<NodeGlyph> = tree
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let center = layout.position(index)?;
                Some(NodeGlyph {
                    index,
                    circle: Circle::new(center, config.node_radius),
                    label: node.label.clone(),
                    label_anchor: center + config.label_offset,
                })
            })
            .collect();

        let connectors: Vec<Connector> = tree
            .edges()
            .filter_map(|edge| {
                let start = layout.position(edge.parent)?;
                let end = layout.position(edge.child)?;
                let arrow =
                    Arrow::between(start, end, config.shorten_factor, config.arrowhead_size)?;
                Some(Connector {
                    parent: edge.parent,
                    child: edge.child,
                    side: edge.side,
                    arrow,
                })
            })
            .collect();

        log::debug!(
            "scene has {} node(s) and {} connector(s)",
            nodes.len(),
            connectors.len()
        );
        Self {
            nodes,
            connectors,
            config: *config,
        }
    }

    /// Build the display list for the output of a [`TreePipeline`](understory_bin_tree::TreePipeline).
    pub fn from_laid_out(laid_out: &LaidOutTree, config: &SceneConfig) -> Self {
        Self::build(&laid_out.tree, &laid_out.layout, config)
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Smallest rectangle containing every circle and connector, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        let circles = self.nodes.iter().map(|n| n.circle.bounding_box());
        let arrows = self.connectors.iter().map(|c| {
            let [a, b, d] = c.arrow.head;
            c.arrow
                .shaft
                .bounding_box()
                .union_pt(a)
                .union_pt(b)
                .union_pt(d)
        });
        circles.chain(arrows).reduce(|acc, r| acc.union(r))
    }
}
