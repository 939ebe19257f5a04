// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing tunables.

use kurbo::{Size, Vec2};

/// Default node circle radius.
pub const DEFAULT_NODE_RADIUS: f64 = 50.0;
/// Default fraction of an edge covered by its connector.
pub const DEFAULT_SHORTEN_FACTOR: f64 = 0.8;
/// Default arrowhead length and half-width.
pub const DEFAULT_ARROWHEAD_SIZE: f64 = 10.0;
/// Default canvas size.
pub const DEFAULT_CANVAS: Size = Size::new(1040.0, 800.0);

bitflags::bitflags! {
    /// Which parts of a [`Scene`](crate::Scene) a backend draws.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SceneLayers: u8 {
        /// Node circles.
        const NODES      = 0b0000_0001;
        /// Node labels.
        const LABELS     = 0b0000_0010;
        /// Connector shafts.
        const CONNECTORS = 0b0000_0100;
        /// Arrowheads at the end of connector shafts.
        const ARROWHEADS = 0b0000_1000;
    }
}

impl Default for SceneLayers {
    fn default() -> Self {
        Self::all()
    }
}

/// An opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#000000`.
    pub const BLACK: Self = Self(0, 0, 0);
    /// `#ffffff`.
    pub const WHITE: Self = Self(255, 255, 255);
    /// `#00ffff`.
    pub const CYAN: Self = Self(0, 255, 255);
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colors used by backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Canvas background.
    pub background: Rgb,
    /// Node interior.
    pub node_fill: Rgb,
    /// Node outline.
    pub node_outline: Rgb,
    /// Label text.
    pub label: Rgb,
    /// Connector shafts and arrowheads.
    pub connector: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            node_fill: Rgb::CYAN,
            node_outline: Rgb::WHITE,
            label: Rgb::BLACK,
            connector: Rgb::WHITE,
        }
    }
}

/// Geometry and style knobs for building and drawing a [`Scene`](crate::Scene).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    /// Drawing surface size; also the canvas handed to the layout engine.
    pub canvas: Size,
    /// Radius of every node circle.
    pub node_radius: f64,
    /// Width of the node outline.
    pub outline_width: f64,
    /// Label font size.
    pub label_size: f64,
    /// Offset from a node center to its label's center.
    pub label_offset: Vec2,
    /// Fraction of the parent→child segment covered by the connector, in `(0, 1]`.
    pub shorten_factor: f64,
    /// Arrowhead length along the edge, and half-width across it.
    pub arrowhead_size: f64,
    /// Parts to draw.
    pub layers: SceneLayers,
    /// Colors.
    pub palette: Palette,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: DEFAULT_CANVAS,
            node_radius: DEFAULT_NODE_RADIUS,
            outline_width: 2.0,
            label_size: 20.0,
            label_offset: Vec2::new(0.0, -10.0),
            shorten_factor: DEFAULT_SHORTEN_FACTOR,
            arrowhead_size: DEFAULT_ARROWHEAD_SIZE,
            layers: SceneLayers::default(),
            palette: Palette::default(),
        }
    }
}
