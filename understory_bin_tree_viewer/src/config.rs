// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use kurbo::Size;
use understory_bin_tree::{EndOfInput, LayoutConfig, Sentinel, TreePipeline, VerticalSpacing};
use understory_bin_tree_scene::{DEFAULT_CANVAS, DEFAULT_NODE_RADIUS, SceneConfig};

use crate::error::ViewerError;

pub(crate) const USAGE: &str = "\
Usage: bintree-view [OPTIONS]

Draw a binary tree given as a preorder sequence of integers in which a
sentinel value marks an absent child.

Options:
  --input <FILE>      read the sequence from FILE
  --seq <INTS>        use INTS (comma or space separated) as the sequence
  --sentinel <INT>    value marking an absent child [default: -1]
  --width <UNITS>     canvas width, at least 100 [default: 1040]
  --height <UNITS>    canvas height, at least 100 [default: 800]
  --font <FILE>       label font [default: Arial.ttf]
  --svg <FILE>        write an SVG document instead of opening the viewer
  --distribute        spread depths over the canvas height
  --lenient           treat a sequence that ends early as absent subtrees
  --allow-trailing    ignore values after the tree is complete
  --frame-ms <MS>     redraw interval of the viewer [default: 50]
  -h, --help          print this help

In the viewer, press Esc, q, or Ctrl-C to quit.
Set RUST_LOG=debug to trace the pipeline on stderr.";

/// Where the sequence comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum InputSource {
    /// The built-in sample tree.
    Sample,
    /// Given on the command line.
    Inline(String),
    /// Read from a file.
    File(PathBuf),
}

/// Where the drawing goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Output {
    /// Interactive terminal view.
    Terminal,
    /// SVG document at the given path.
    Svg(PathBuf),
}

/// Everything the viewer needs to run.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ViewerConfig {
    pub(crate) input: InputSource,
    pub(crate) sentinel: Sentinel,
    pub(crate) end_of_input: EndOfInput,
    pub(crate) allow_trailing: bool,
    pub(crate) vertical_spacing: VerticalSpacing,
    pub(crate) canvas: Size,
    pub(crate) font: PathBuf,
    pub(crate) output: Output,
    pub(crate) frame: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            input: InputSource::Sample,
            sentinel: Sentinel::default(),
            end_of_input: EndOfInput::Reject,
            allow_trailing: false,
            vertical_spacing: LayoutConfig::default().vertical_spacing,
            canvas: DEFAULT_CANVAS,
            font: PathBuf::from("Arial.ttf"),
            output: Output::Terminal,
            frame: Duration::from_millis(50),
        }
    }
}

impl ViewerConfig {
    pub(crate) fn pipeline(&self) -> TreePipeline {
        TreePipeline {
            sentinel: self.sentinel,
            end_of_input: self.end_of_input,
            allow_trailing: self.allow_trailing,
            layout: LayoutConfig {
                vertical_spacing: self.vertical_spacing,
            },
        }
    }

    pub(crate) fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            canvas: self.canvas,
            ..SceneConfig::default()
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Run(ViewerConfig),
    Help,
}

/// Parse arguments (without the program name).
///
/// Options taking a value accept both `--opt value` and `--opt=value`.
pub(crate) fn parse_args<I>(args: I) -> Result<Command, ViewerError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = ViewerConfig::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (name, inline) = match arg.split_once('=') {
            Some((name, value)) if name.starts_with("--") => {
                (name.to_owned(), Some(value.to_owned()))
            }
            _ => (arg, None),
        };
        let mut value = || -> Result<String, ViewerError> {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| ViewerError::Usage(format!("{name} needs a value")))
        };
        match name.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--input" => config.input = InputSource::File(value()?.into()),
            "--seq" => config.input = InputSource::Inline(value()?),
            "--sentinel" => config.sentinel = Sentinel(number(&name, &value()?)?),
            "--width" => config.canvas.width = extent(&name, &value()?)?,
            "--height" => config.canvas.height = extent(&name, &value()?)?,
            "--font" => config.font = value()?.into(),
            "--svg" => config.output = Output::Svg(value()?.into()),
            "--frame-ms" => config.frame = Duration::from_millis(number(&name, &value()?)?),
            "--distribute" => config.vertical_spacing = VerticalSpacing::Distribute,
            "--lenient" => config.end_of_input = EndOfInput::TreatAsAbsent,
            "--allow-trailing" => config.allow_trailing = true,
            _ => return Err(ViewerError::Usage(format!("unknown argument {name:?}"))),
        }
    }
    let min = 2.0 * DEFAULT_NODE_RADIUS;
    if config.canvas.width < min || config.canvas.height < min {
        return Err(ViewerError::Usage(format!(
            "canvas must be at least {min}x{min} to fit a node, got {}x{}",
            config.canvas.width, config.canvas.height
        )));
    }
    Ok(Command::Run(config))
}

fn number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ViewerError> {
    value
        .parse()
        .map_err(|_| ViewerError::Usage(format!("{name} expects an integer, got {value:?}")))
}

fn extent(name: &str, value: &str) -> Result<f64, ViewerError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ViewerError::Usage(format!(
            "{name} expects a positive number, got {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ViewerError> {
        parse_args(args.iter().map(|s| (*s).to_owned()))
    }

    fn run_config(args: &[&str]) -> ViewerConfig {
        match parse(args).unwrap() {
            Command::Run(config) => config,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn defaults() {
        let config = run_config(&[]);
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.canvas, Size::new(1040.0, 800.0));
        assert_eq!(config.font, PathBuf::from("Arial.ttf"));
        assert_eq!(config.output, Output::Terminal);
        assert_eq!(config.pipeline().sentinel, Sentinel(-1));
    }

    #[test]
    fn all_options() {
        let config = run_config(&[
            "--seq",
            "1 -1 -1",
            "--sentinel=0",
            "--width",
            "640",
            "--height=480",
            "--font",
            "fonts/DejaVuSans.ttf",
            "--svg",
            "out.svg",
            "--distribute",
            "--lenient",
            "--allow-trailing",
            "--frame-ms",
            "16",
        ]);
        assert_eq!(config.input, InputSource::Inline("1 -1 -1".into()));
        assert_eq!(config.sentinel, Sentinel(0));
        assert_eq!(config.canvas, Size::new(640.0, 480.0));
        assert_eq!(config.font, PathBuf::from("fonts/DejaVuSans.ttf"));
        assert_eq!(config.output, Output::Svg("out.svg".into()));
        assert_eq!(config.frame, Duration::from_millis(16));

        let pipeline = config.pipeline();
        assert_eq!(pipeline.end_of_input, EndOfInput::TreatAsAbsent);
        assert!(pipeline.allow_trailing);
        assert_eq!(pipeline.layout.vertical_spacing, VerticalSpacing::Distribute);
        assert_eq!(config.scene_config().canvas, Size::new(640.0, 480.0));
    }

    #[test]
    fn input_file() {
        let config = run_config(&["--input", "tree.txt"]);
        assert_eq!(config.input, InputSource::File("tree.txt".into()));
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["--lenient", "-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn usage_errors() {
        assert!(matches!(parse(&["--bogus"]), Err(ViewerError::Usage(_))));
        assert!(matches!(parse(&["--sentinel"]), Err(ViewerError::Usage(_))));
        assert!(matches!(parse(&["--sentinel", "x"]), Err(ViewerError::Usage(_))));
        assert!(matches!(parse(&["--width", "-3"]), Err(ViewerError::Usage(_))));
        assert!(matches!(parse(&["--height", "nan"]), Err(ViewerError::Usage(_))));
    }

    #[test]
    fn canvas_must_fit_a_node() {
        assert!(matches!(parse(&["--width", "1e-12"]), Err(ViewerError::Usage(_))));
        assert!(matches!(parse(&["--height=99"]), Err(ViewerError::Usage(_))));
        let config = run_config(&["--width", "100", "--height", "100"]);
        assert_eq!(config.canvas, Size::new(100.0, 100.0));
    }
}
