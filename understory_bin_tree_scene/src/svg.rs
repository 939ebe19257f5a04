// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG backend.

use core::fmt::{self, Write};

use crate::config::SceneLayers;
use crate::font::FontResource;
use crate::scene::Scene;

/// Write `scene` as a standalone SVG document.
///
/// Nodes are drawn first and connectors on top of them, matching the order of
/// the interactive viewer. Labels reference `font` through `@font-face`, so the
/// font file must stay next to the document for it to render as intended.
pub fn write_svg<W: Write>(scene: &Scene, font: &FontResource, out: &mut W) -> fmt::Result {
    let config = &scene.config;
    let palette = &config.palette;
    let (w, h) = (config.canvas.width, config.canvas.height);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    writeln!(
        out,
        r#"<style>@font-face {{ font-family: "{family}"; src: url("{src}"); }}</style>"#,
        family = escape(font.family()),
        src = escape(&font.path().to_string_lossy()),
    )?;
    writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        palette.background
    )?;

    for node in &scene.nodes {
        if config.layers.contains(SceneLayers::NODES) {
            let c = node.circle;
            writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                c.center.x, c.center.y, c.radius, palette.node_fill, palette.node_outline,
                config.outline_width
            )?;
        }
        if config.layers.contains(SceneLayers::LABELS) {
            writeln!(
                out,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                node.label_anchor.x,
                node.label_anchor.y,
                escape(font.family()),
                config.label_size,
                palette.label,
                escape(&node.label)
            )?;
        }
    }

    for connector in &scene.connectors {
        let arrow = &connector.arrow;
        if config.layers.contains(SceneLayers::CONNECTORS) {
            writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                arrow.shaft.p0.x, arrow.shaft.p0.y, arrow.shaft.p1.x, arrow.shaft.p1.y,
                palette.connector
            )?;
        }
        if config.layers.contains(SceneLayers::ARROWHEADS) {
            writeln!(
                out,
                r#"<path d="{}" fill="{}"/>"#,
                arrow.head_path().to_svg(),
                palette.connector
            )?;
        }
    }

    writeln!(out, "</svg>")
}

/// Render `scene` to an SVG string.
pub fn to_svg(scene: &Scene, font: &FontResource) -> String {
    let mut out = String::new();
    write_svg(scene, font, &mut out).expect("writing to a String cannot fail");
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::font::tests::truetype_bytes;
    use understory_bin_tree::TreePipeline;

    fn font() -> FontResource {
        FontResource::from_bytes("Arial.ttf".into(), truetype_bytes(1)).unwrap()
    }

    fn scene_of(input: &[i64], config: SceneConfig) -> Scene {
        let out = TreePipeline::default().run(input, config.canvas).unwrap();
        Scene::from_laid_out(&out, &config)
    }

    #[test]
    fn two_node_document() {
        let svg = to_svg(&scene_of(&[7, 3, -1, -1, -1], SceneConfig::default()), &font());
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"src: url("Arial.ttf")"#));
        assert_eq!(svg.matches("<circle ").count(), 2);
        assert_eq!(svg.matches("<text ").count(), 2);
        assert_eq!(svg.matches("<line ").count(), 1);
        assert_eq!(svg.matches("<path ").count(), 1);
        assert!(svg.contains(r#"<circle cx="520" cy="100" r="50""#));
        assert!(svg.contains(">7</text>"));
        // Connectors come after every node.
        assert!(svg.rfind("<circle ").unwrap() < svg.find("<line ").unwrap());
    }

    #[test]
    fn empty_scene_is_just_background() {
        let svg = to_svg(&scene_of(&[-1], SceneConfig::default()), &font());
        assert_eq!(svg.matches("<circle ").count(), 0);
        assert!(svg.contains("<rect "));
    }

    #[test]
    fn layers_are_respected() {
        let config = SceneConfig {
            layers: SceneLayers::NODES | SceneLayers::CONNECTORS,
            ..SceneConfig::default()
        };
        let svg = to_svg(&scene_of(&[7, 3, -1, -1, -1], config), &font());
        assert_eq!(svg.matches("<text ").count(), 0);
        assert_eq!(svg.matches("<path ").count(), 0);
        assert_eq!(svg.matches("<line ").count(), 1);
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
