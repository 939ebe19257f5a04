// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `bintree-view`: draw a binary tree from its preorder sequence.
//!
//! The sequence is deserialized, flattened, and laid out before anything is
//! shown, so a malformed sequence or a missing font is reported on stderr and
//! the process exits with a failure status without touching the terminal.
//!
//! ```text
//! bintree-view --seq "1 2 -1 -1 3 -1 -1"
//! bintree-view --input tree.txt --svg tree.svg --font fonts/DejaVuSans.ttf
//! ```

mod config;
mod error;
mod input;
mod terminal;

use std::fs;
use std::process::ExitCode;

use understory_bin_tree_scene::{FontResource, Scene, svg};

use crate::config::{Command, Output, USAGE, ViewerConfig};
use crate::error::ViewerError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match config::parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Run(config)) => match run(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::debug!("{err:?}");
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ViewerConfig) -> Result<(), ViewerError> {
    let values = input::load(&config.input)?;
    log::info!("{} input values", values.len());

    let laid_out = config.pipeline().run(&values, config.canvas)?;
    log::info!(
        "{} nodes over {} levels, {} values consumed",
        laid_out.tree.len(),
        laid_out.layout.depth_count(),
        laid_out.consumed
    );

    let font = FontResource::load(&config.font)?;
    log::debug!("{font:?}");

    let scene = Scene::from_laid_out(&laid_out, &config.scene_config());
    match &config.output {
        Output::Svg(path) => {
            fs::write(path, svg::to_svg(&scene, &font)).map_err(|source| ViewerError::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        Output::Terminal => terminal::run(&scene, config.frame)?,
    }
    Ok(())
}
