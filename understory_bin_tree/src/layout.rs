// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level-based layout of a [`FlatTree`].

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::flat::FlatTree;

/// Distance between consecutive depths used by [`LayoutConfig::default`].
pub const DEFAULT_LEVEL_SPACING: f64 = 100.0;

/// How depths are spaced down the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VerticalSpacing {
    /// Depth `d` is placed at `y = spacing * (d + 1)`, independent of canvas height.
    Fixed(f64),
    /// Depths are spread evenly down the canvas height with equal top and bottom margins.
    Distribute,
}

/// Tunables for the [`LayoutEngine`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Vertical placement policy.
    pub vertical_spacing: VerticalSpacing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            vertical_spacing: VerticalSpacing::Fixed(DEFAULT_LEVEL_SPACING),
        }
    }
}

/// Computed positions for every record of a [`FlatTree`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    positions: Vec<Point>,
    depths: Vec<usize>,
    level_widths: SmallVec<[usize; 8]>,
}

impl Layout {
    /// Node centers, indexed like the tree.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Center of the node at `index`.
    pub fn position(&self, index: usize) -> Option<Point> {
        self.positions.get(index).copied()
    }

    /// Depth of the node at `index`.
    pub fn depth_of(&self, index: usize) -> Option<usize> {
        self.depths.get(index).copied()
    }

    /// Node count per depth, root level first.
    pub fn level_widths(&self) -> &[usize] {
        &self.level_widths
    }

    /// Number of depths.
    pub fn depth_count(&self) -> usize {
        self.level_widths.len()
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if nothing was positioned.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Smallest rectangle containing every node center, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.positions.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
        )
    }
}

/// Places nodes level by level.
///
/// Two breadth-first passes run over the child positions of the [`FlatTree`]:
/// the first counts the nodes at each depth, the second assigns, to the
/// `i`-th node of depth `d`,
///
/// ```text
/// x = (canvas.width / (level_widths[d] + 1)) * (i + 1)
/// y = spacing * (d + 1)
/// ```
///
/// so siblings on a level share equal gaps with each other and with both
/// canvas edges. Subtree sizes are not considered, which can make edges of
/// lopsided trees cross.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_bin_tree::{LayoutConfig, LayoutEngine, Sentinel, deserialize, flatten};
///
/// let flat = flatten(deserialize(&[1, 2, -1, -1, 3, -1, -1], Sentinel(-1)).unwrap().tree);
/// let layout = LayoutEngine::new(LayoutConfig::default()).layout(&flat, Size::new(900.0, 600.0));
///
/// assert_eq!(layout.position(0), Some(Point::new(450.0, 100.0)));
/// assert_eq!(layout.position(1), Some(Point::new(300.0, 200.0)));
/// assert_eq!(layout.position(2), Some(Point::new(600.0, 200.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine with the given tunables.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The engine's tunables.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Position every node of `tree` on a canvas of size `canvas`.
    pub fn layout(&self, tree: &FlatTree, canvas: Size) -> Layout {
        let mut level_widths: SmallVec<[usize; 8]> = SmallVec::new();
        walk_levels(tree, |depth, _, _| {
            if depth == level_widths.len() {
                level_widths.push(0);
            }
            level_widths[depth] += 1;
        });

        let spacing = match self.config.vertical_spacing {
            VerticalSpacing::Fixed(spacing) => spacing,
            VerticalSpacing::Distribute => canvas.height / (level_widths.len() + 1) as f64,
        };

        let mut positions = vec![Point::ZERO; tree.len()];
        let mut depths = vec![0; tree.len()];
        walk_levels(tree, |depth, slot, index| {
            let gap = canvas.width / (level_widths[depth] + 1) as f64;
            positions[index] = Point::new(gap * (slot + 1) as f64, spacing * (depth + 1) as f64);
            depths[index] = depth;
        });

        log::debug!(
            "laid out {} node(s) over {} level(s) on {}x{}",
            positions.len(),
            level_widths.len(),
            canvas.width,
            canvas.height
        );
        Layout {
            positions,
            depths,
            level_widths,
        }
    }
}

/// Position every node of `tree`; shorthand for [`LayoutEngine::layout`].
pub fn layout(tree: &FlatTree, canvas: Size, config: &LayoutConfig) -> Layout {
    LayoutEngine::new(*config).layout(tree, canvas)
}

/// Level-batched breadth-first walk from position 0.
///
/// Calls `visit(depth, slot, index)` where `slot` is the node's rank within its
/// depth, left to right.
fn walk_levels(tree: &FlatTree, mut visit: impl FnMut(usize, usize, usize)) {
    if tree.is_empty() {
        return;
    }
    let mut queue = VecDeque::from([0_usize]);
    let mut depth = 0;
    while !queue.is_empty() {
        for slot in 0..queue.len() {
            let Some(index) = queue.pop_front() else {
                break;
            };
            visit(depth, slot, index);
            if let Some(node) = tree.get(index) {
                queue.extend(node.left);
                queue.extend(node.right);
            }
        }
        depth += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deserialize::Deserializer;
    use crate::flatten::flatten;
    use crate::types::{EndOfInput, Sentinel};

    const CANVAS: Size = Size::new(1040.0, 800.0);

    fn flat_of(input: &[i64]) -> FlatTree {
        let tree = Deserializer::new(input, Sentinel(-1))
            .end_of_input(EndOfInput::TreatAsAbsent)
            .build()
            .unwrap()
            .tree;
        flatten(tree)
    }

    #[test]
    fn empty_tree_has_empty_layout() {
        let layout = layout(&flat_of(&[-1]), CANVAS, &LayoutConfig::default());
        assert!(layout.is_empty());
        assert_eq!(layout.depth_count(), 0);
        assert_eq!(layout.bounds(), None);
    }

    #[test]
    fn single_node_is_centered_one_level_down() {
        let layout = layout(&flat_of(&[7, -1, -1]), CANVAS, &LayoutConfig::default());
        assert_eq!(layout.positions(), &[Point::new(520.0, 100.0)]);
        assert_eq!(layout.level_widths(), &[1]);
    }

    #[test]
    fn truncated_sample_levels() {
        let flat = flat_of(&[50, 30, 20, 10, 5, -1, -1, 15, -1, -1, 35, 25, -1, -1]);
        let layout = layout(&flat, CANVAS, &LayoutConfig::default());
        assert_eq!(layout.level_widths(), &[1, 1, 1, 2, 3]);
        // 10 and 35 share depth 3; 5, 15, 25 share depth 4.
        assert_eq!(layout.position(3), Some(Point::new(1040.0 / 3.0, 400.0)));
        assert_eq!(layout.position(4), Some(Point::new(2.0 * 1040.0 / 3.0, 400.0)));
        assert_eq!(layout.position(5), Some(Point::new(260.0, 500.0)));
        assert_eq!(layout.position(6), Some(Point::new(520.0, 500.0)));
        assert_eq!(layout.position(7), Some(Point::new(780.0, 500.0)));
    }

    #[test]
    fn same_depth_shares_y_and_x_increases() {
        let flat = flat_of(&[1, 2, -1, 4, 8, -1, -1, -1, 3, 5, -1, -1, 6, 7, -1, -1, -1]);
        let layout = layout(&flat, CANVAS, &LayoutConfig::default());
        let depths: Vec<usize> = (0..flat.len())
            .map(|i| layout.depth_of(i).unwrap())
            .collect();
        assert_eq!(flat.depths(), depths);
        for i in 1..flat.len() {
            let prev = layout.position(i - 1).unwrap();
            let cur = layout.position(i).unwrap();
            if layout.depth_of(i - 1) == layout.depth_of(i) {
                assert_eq!(prev.y, cur.y, "same depth, same y");
                assert!(prev.x < cur.x, "x strictly increases within a level");
            } else {
                assert!(prev.y < cur.y, "deeper levels sit lower");
            }
        }
    }

    #[test]
    fn complete_tree_positions() {
        let flat = flat_of(&[1, 2, 4, -1, -1, 5, -1, -1, 3, 6, -1, -1, 7, -1, -1]);
        let layout = layout(&flat, CANVAS, &LayoutConfig::default());
        let xs: Vec<f64> = layout.positions()[3..].iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![208.0, 416.0, 624.0, 832.0]);
        assert_eq!(
            layout.bounds(),
            Some(Rect::new(208.0, 100.0, 832.0, 300.0))
        );
    }

    #[test]
    fn layout_is_idempotent() {
        let flat = flat_of(&[1, 2, 4, -1, -1, -1, 3, -1, 5, -1, -1]);
        let engine = LayoutEngine::default();
        assert_eq!(engine.layout(&flat, CANVAS), engine.layout(&flat, CANVAS));
    }

    #[test]
    fn distribute_uses_canvas_height() {
        let flat = flat_of(&[1, 2, -1, -1, -1]);
        let config = LayoutConfig {
            vertical_spacing: VerticalSpacing::Distribute,
        };
        let layout = layout(&flat, Size::new(100.0, 300.0), &config);
        assert_eq!(layout.position(0), Some(Point::new(50.0, 100.0)));
        assert_eq!(layout.position(1), Some(Point::new(50.0, 200.0)));
    }

    #[test]
    fn validated_records_lay_out_like_flattened_ones() {
        use crate::flat::FlatNode;
        let nodes = alloc::vec![
            FlatNode::leaf(1).with_children(None, Some(1)),
            FlatNode::leaf(2),
        ];
        let flat = FlatTree::from_nodes(nodes).unwrap();
        let layout = layout(&flat, CANVAS, &LayoutConfig::default());
        assert_eq!(
            layout.positions(),
            &[Point::new(520.0, 100.0), Point::new(520.0, 200.0)]
        );
    }
}
