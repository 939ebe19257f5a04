// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the viewer before it exits.

use std::path::PathBuf;

use thiserror::Error;
use understory_bin_tree::TreeError;
use understory_bin_tree_scene::ResourceError;

/// Everything that can stop the viewer. Each is reported once and exits with a failure status.
#[derive(Debug, Error)]
pub(crate) enum ViewerError {
    /// Bad command line.
    #[error("{0} (see --help)")]
    Usage(String),
    /// A token in the input is not an integer.
    #[error("invalid integer {token:?} on line {line}")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// 1-based line number.
        line: usize,
    },
    /// Reading the input or writing the output failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The sequence does not describe a tree.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// The label font could not be loaded.
    #[error(transparent)]
    Resource(#[from] ResourceError),
    /// Setting up or drawing to the terminal failed.
    #[error("terminal: {0}")]
    Terminal(#[from] std::io::Error),
}
