// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Bin Tree Scene: turn a laid-out binary tree into something drawable.
//!
//! This crate sits between `understory_bin_tree`, which computes where nodes go, and
//! whatever actually puts pixels or characters on a surface.
//!
//! - [`Scene`]: a display list with one [`NodeGlyph`] (circle + label) per node and one
//!   [`Connector`] per parent→child link.
//! - [`Arrow`]: connector geometry. The shaft stops at a fraction of the way to the child
//!   ([`SceneConfig::shorten_factor`]) and ends in a triangular head built from the unit
//!   direction and its perpendicular.
//! - [`SceneConfig`]: every drawing tunable (radius, shorten factor, arrowhead size,
//!   canvas, layers, palette) with defaults for a 1040x800 canvas.
//! - [`FontResource`]: loads and checks the label font; failure is a [`ResourceError`].
//! - Backends: [`svg`] writes a standalone document, [`raster`] fills a character grid.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_bin_tree::TreePipeline;
//! use understory_bin_tree_scene::{Scene, SceneConfig};
//!
//! let config = SceneConfig::default();
//! let out = TreePipeline::default()
//!     .run(&[1, 2, -1, -1, 3, -1, -1], config.canvas)
//!     .unwrap();
//! let scene = Scene::from_laid_out(&out, &config);
//!
//! assert_eq!(scene.nodes.len(), 3);
//! assert_eq!(scene.connectors.len(), 2);
//! ```
//!
//! An empty tree produces an empty scene, which every backend draws as a bare background.

mod arrow;
mod config;
mod font;
mod scene;

pub mod raster;
pub mod svg;

pub use arrow::{Arrow, Connector};
pub use config::{
    DEFAULT_ARROWHEAD_SIZE, DEFAULT_CANVAS, DEFAULT_NODE_RADIUS, DEFAULT_SHORTEN_FACTOR, Palette,
    Rgb, SceneConfig, SceneLayers,
};
pub use font::{FontFormat, FontResource, ResourceError};
pub use scene::{NodeGlyph, Scene};
