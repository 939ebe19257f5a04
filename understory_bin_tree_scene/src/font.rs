// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading the label font.
//!
//! Only the sfnt header and table directory are checked; glyph data is left to
//! whatever eventually rasterizes text.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to load a rendering resource. Always fatal for the caller.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The file could not be read.
    #[error("failed to read font {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file was read but is not a usable font.
    #[error("{} is not a TrueType/OpenType font: {reason}", path.display())]
    InvalidFont {
        /// Path that was read.
        path: PathBuf,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Container flavour of a font file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFormat {
    /// TrueType outlines (`0x00010000` or `true`).
    TrueType,
    /// CFF outlines (`OTTO`).
    OpenType,
    /// A collection of faces (`ttcf`).
    Collection,
}

const TAG_TRUETYPE: u32 = 0x0001_0000;
const TAG_TRUE: u32 = u32::from_be_bytes(*b"true");
const TAG_OTTO: u32 = u32::from_be_bytes(*b"OTTO");
const TAG_TTCF: u32 = u32::from_be_bytes(*b"ttcf");

const SFNT_HEADER_LEN: usize = 12;
const TABLE_RECORD_LEN: usize = 16;

/// A font file that has been read and passed header validation.
#[derive(Clone)]
pub struct FontResource {
    path: PathBuf,
    format: FontFormat,
    faces_or_tables: u32,
    data: Vec<u8>,
}

impl core::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontResource")
            .field("path", &self.path)
            .field("format", &self.format)
            .field("faces_or_tables", &self.faces_or_tables)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl FontResource {
    /// Read and validate the font at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref().to_path_buf();
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(source) => return Err(ResourceError::Io { path, source }),
        };
        Self::from_bytes(path, data)
    }

    /// Validate font bytes that were obtained elsewhere. `path` is used for
    /// error messages and to derive the family name.
    pub fn from_bytes(path: PathBuf, data: Vec<u8>) -> Result<Self, ResourceError> {
        let invalid = |reason| ResourceError::InvalidFont {
            path: path.clone(),
            reason,
        };
        let tag = read_u32(&data, 0).ok_or_else(|| invalid("file is too short"))?;
        let (format, faces_or_tables) = match tag {
            TAG_TRUETYPE | TAG_TRUE | TAG_OTTO => {
                let num_tables = read_u16(&data, 4).ok_or_else(|| invalid("truncated header"))?;
                if num_tables == 0 {
                    return Err(invalid("no tables"));
                }
                let needed = SFNT_HEADER_LEN + TABLE_RECORD_LEN * usize::from(num_tables);
                if data.len() < needed {
                    return Err(invalid("truncated table directory"));
                }
                let format = if tag == TAG_OTTO {
                    FontFormat::OpenType
                } else {
                    FontFormat::TrueType
                };
                (format, u32::from(num_tables))
            }
            TAG_TTCF => {
                let num_fonts = read_u32(&data, 8).ok_or_else(|| invalid("truncated header"))?;
                if num_fonts == 0 {
                    return Err(invalid("empty collection"));
                }
                let needed = usize::try_from(num_fonts)
                    .ok()
                    .and_then(|n| n.checked_mul(4))
                    .and_then(|n| n.checked_add(SFNT_HEADER_LEN));
                if needed.is_none_or(|needed| data.len() < needed) {
                    return Err(invalid("truncated collection header"));
                }
                (FontFormat::Collection, num_fonts)
            }
            _ => return Err(invalid("unknown sfnt version")),
        };
        log::debug!(
            "loaded {format:?} font {} ({} bytes)",
            path.display(),
            data.len()
        );
        Ok(Self {
            path,
            format,
            faces_or_tables,
            data,
        })
    }

    /// Where the font was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Container flavour.
    pub fn format(&self) -> FontFormat {
        self.format
    }

    /// Table count for single fonts, face count for collections.
    pub fn faces_or_tables(&self) -> u32 {
        self.faces_or_tables
    }

    /// Raw file contents.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Family name to reference the font by, taken from the file stem.
    pub fn family(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sans-serif")
    }
}

fn read_u16(data: &[u8], at: usize) -> Option<u16> {
    let bytes = data.get(at..at + 2)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn read_u32(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 4)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
