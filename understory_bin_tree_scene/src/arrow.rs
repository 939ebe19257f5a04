// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directed connector geometry: a shortened shaft plus a triangular head.

use kurbo::{BezPath, Line, Point, Vec2};
use understory_bin_tree::Side;

/// A shaft and arrowhead pointing from one node center toward another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    /// From the start point to the arrow tip.
    pub shaft: Line,
    /// Triangle `[tip, base + perp, base - perp]`.
    pub head: [Point; 3],
}

impl Arrow {
    /// Build an arrow from `start` toward `end`.
    ///
    /// The tip sits at `shorten` of the way along the segment, so the arrow
    /// stops short of whatever is drawn at `end`. The head extends
    /// `head_size` back from the tip and `head_size` to either side of the
    /// shaft. Returns `None` when the shaft would have no length: `start` and
    /// `end` coincide, or `shorten` is not positive.
    pub fn between(start: Point, end: Point, shorten: f64, head_size: f64) -> Option<Self> {
        let delta = end - start;
        let length = delta.length();
        if !(length > f64::EPSILON && length.is_finite() && shorten > 0.0) {
            return None;
        }
        let dir = delta / length;
        let tip = start + dir * (length * shorten);
        if tip == start {
            return None;
        }
        let perp = Vec2::new(-dir.y, dir.x) * head_size;
        let base = tip - dir * head_size;
        Some(Self {
            shaft: Line::new(start, tip),
            head: [tip, base + perp, base - perp],
        })
    }

    /// The arrow tip.
    pub fn tip(&self) -> Point {
        self.shaft.p1
    }

    /// Unit vector from the start toward the tip.
    pub fn direction(&self) -> Vec2 {
        let d = self.shaft.p1 - self.shaft.p0;
        d / d.length()
    }

    /// The head as a closed path.
    pub fn head_path(&self) -> BezPath {
        let [a, b, c] = self.head;
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        path
    }
}

/// A parent→child link in a [`Scene`](crate::Scene).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    /// Parent record position.
    pub parent: usize,
    /// Child record position.
    pub child: usize,
    /// Which child link this is.
    pub side: Side,
    /// Geometry.
    pub arrow: Arrow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_arrow() {
        let arrow = Arrow::between(Point::ZERO, Point::new(100.0, 0.0), 0.8, 10.0).unwrap();
        assert_eq!(arrow.shaft, Line::new(Point::ZERO, Point::new(80.0, 0.0)));
        assert_eq!(
            arrow.head,
            [
                Point::new(80.0, 0.0),
                Point::new(70.0, 10.0),
                Point::new(70.0, -10.0)
            ]
        );
        assert_eq!(arrow.direction(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn downward_arrow_head_spreads_horizontally() {
        let arrow = Arrow::between(Point::new(50.0, 0.0), Point::new(50.0, 200.0), 0.5, 10.0)
            .unwrap();
        assert_eq!(arrow.tip(), Point::new(50.0, 100.0));
        // perp of (0, 1) is (-1, 0).
        assert_eq!(arrow.head[1], Point::new(40.0, 90.0));
        assert_eq!(arrow.head[2], Point::new(60.0, 90.0));
    }

    #[test]
    fn diagonal_tip_length() {
        let arrow = Arrow::between(Point::ZERO, Point::new(30.0, 40.0), 0.8, 10.0).unwrap();
        let shaft = arrow.shaft.p1 - arrow.shaft.p0;
        assert!((shaft.length() - 40.0).abs() < 1e-9, "0.8 of 50 is 40");
    }

    #[test]
    fn coincident_points_have_no_arrow() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(Arrow::between(p, p, 0.8, 10.0), None);
    }

    #[test]
    fn zero_shorten_has_no_arrow() {
        let (a, b) = (Point::ZERO, Point::new(0.0, 100.0));
        assert_eq!(Arrow::between(a, b, 0.0, 10.0), None);
        assert_eq!(Arrow::between(a, b, -0.5, 10.0), None);
        assert_eq!(Arrow::between(a, b, f64::NAN, 10.0), None);
    }

    #[test]
    fn direction_is_finite_for_every_built_arrow() {
        let arrow = Arrow::between(Point::ZERO, Point::new(0.0, 100.0), 0.01, 10.0).unwrap();
        assert_eq!(arrow.direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn head_path_is_closed_triangle() {
        let arrow = Arrow::between(Point::ZERO, Point::new(100.0, 0.0), 0.8, 10.0).unwrap();
        let path = arrow.head_path();
        assert_eq!(path.elements().len(), 4);
    }
}
