// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character-cell backend for terminals.
//!
//! The scene is scaled so that its canvas fills the grid. Circles become rings
//! of `o`, shafts are drawn with `-`, `|`, `/`, `\`, and each arrowhead is a
//! single `v`, `^`, `<`, or `>` at the tip. Labels are written last so they stay
//! legible over everything else.

use core::f64::consts::TAU;
use core::fmt;

use kurbo::{Point, Vec2};

use crate::config::SceneLayers;
use crate::scene::Scene;

const BLANK: char = ' ';

/// A fixed-size grid of characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl CellCanvas {
    /// A blank grid.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BLANK; cols * rows],
        }
    }

    /// Rasterize `scene` into a `cols` × `rows` grid.
    pub fn render(scene: &Scene, cols: usize, rows: usize) -> Self {
        let mut canvas = Self::new(cols, rows);
        let config = &scene.config;
        if scene.is_empty() || config.canvas.is_zero_area() {
            return canvas;
        }
        let scale = Vec2::new(
            cols as f64 / config.canvas.width,
            rows as f64 / config.canvas.height,
        );
        let to_cell = |p: Point| Point::new(p.x * scale.x, p.y * scale.y);

        if config.layers.contains(SceneLayers::NODES) {
            for node in &scene.nodes {
                let center = to_cell(node.circle.center);
                let radius = Vec2::new(node.circle.radius * scale.x, node.circle.radius * scale.y);
                canvas.ring(center, radius);
            }
        }

        for connector in &scene.connectors {
            let arrow = &connector.arrow;
            let dir = arrow.direction();
            if config.layers.contains(SceneLayers::CONNECTORS) {
                let shaft = arrow.shaft.p1 - arrow.shaft.p0;
                let glyph = shaft_glyph(Vec2::new(shaft.x * scale.x, shaft.y * scale.y));
                // Skip the part of the shaft that lies inside the parent's circle.
                let start = arrow.shaft.p0 + dir * config.node_radius.min(shaft.length());
                canvas.segment(to_cell(start), to_cell(arrow.shaft.p1), glyph);
            }
            if config.layers.contains(SceneLayers::ARROWHEADS) {
                canvas.put(to_cell(arrow.tip()), head_glyph(dir));
            }
        }

        if config.layers.contains(SceneLayers::LABELS) {
            // The label offset is below cell resolution; center on the node instead.
            for node in &scene.nodes {
                canvas.text_centered(to_cell(node.circle.center), &node.label);
            }
        }
        canvas
    }

    /// Grid width in cells.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Character at a cell.
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// One row as a string.
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .collect()
    }

    /// Returns `true` if no cell has been drawn on.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == BLANK)
    }

    fn put(&mut self, at: Point, c: char) {
        if !(at.x >= 0.0 && at.y >= 0.0) {
            return;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Non-negative cell coordinates; out-of-range values are bounds-checked below."
        )]
        let (col, row) = (at.x as usize, at.y as usize);
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = c;
        }
    }

    /// Upper bound on samples per ring or segment, so that shapes scaled far
    /// beyond the grid stay cheap.
    fn step_budget(&self) -> usize {
        2 * (self.cols + self.rows)
    }

    /// Returns `true` if the box spanned by `min` and `max` overlaps the grid.
    fn touches(&self, min: Point, max: Point) -> bool {
        max.x >= 0.0 && max.y >= 0.0 && min.x < self.cols as f64 && min.y < self.rows as f64
    }

    fn ring(&mut self, center: Point, radius: Vec2) {
        if !self.touches(center - radius, center + radius) {
            return;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Saturating float-to-int cast, then capped by the step budget."
        )]
        let steps = ((TAU * radius.x.max(radius.y) * 2.0).ceil() as usize)
            .min(self.step_budget())
            .max(8);
        for i in 0..steps {
            let theta = TAU * i as f64 / steps as f64;
            let p = center + Vec2::new(radius.x * theta.cos(), radius.y * theta.sin());
            self.put(p, 'o');
        }
    }

    fn segment(&mut self, from: Point, to: Point, c: char) {
        let min = Point::new(from.x.min(to.x), from.y.min(to.y));
        let max = Point::new(from.x.max(to.x), from.y.max(to.y));
        if !self.touches(min, max) {
            return;
        }
        let delta = to - from;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Saturating float-to-int cast, then capped by the step budget."
        )]
        let steps = (delta.x.abs().max(delta.y.abs()).ceil() as usize).min(self.step_budget());
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
            self.put(from + delta * t, c);
        }
    }

    fn text_centered(&mut self, center: Point, text: &str) {
        let len = text.chars().count() as f64;
        let start = center.x - len / 2.0;
        for (i, c) in text.chars().enumerate() {
            self.put(Point::new(start + i as f64 + 0.5, center.y), c);
        }
    }
}

impl fmt::Display for CellCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&self.row_text(row))?;
        }
        Ok(())
    }
}

fn shaft_glyph(d: Vec2) -> char {
    if d.x.abs() * 2.0 < d.y.abs() {
        '|'
    } else if d.y.abs() * 2.0 < d.x.abs() {
        '-'
    } else if (d.x > 0.0) == (d.y > 0.0) {
        '\\'
    } else {
        '/'
    }
}

fn head_glyph(dir: Vec2) -> char {
    if dir.y.abs() >= dir.x.abs() {
        if dir.y > 0.0 { 'v' } else { '^' }
    } else if dir.x > 0.0 {
        '>'
    } else {
        '<'
    }
}
