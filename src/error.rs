/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{io, path::Path, path::PathBuf};

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures that can surface from loading rule configuration or
/// expanding moves.
///
/// Out-of-bounds move candidates are *not* represented here; they are an
/// expected part of expansion and get filtered silently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration resource could not be read from disk.
    #[error("cannot read configuration at {path}: {source}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration resource was read, but its JSON did not match the
    /// expected shape.
    #[error("cannot parse configuration at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON supplied directly (not via a file path) failed to parse.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The board matrix parsed, but is not an 8x8 grid.
    #[error("board layout must be 8x8, got {rows}x{cols}")]
    MalformedBoard { rows: usize, cols: usize },

    /// No movement rule exists for the requested piece type.
    #[error("unknown piece type {0:?}")]
    UnknownPiece(String),

    /// The starting square label does not appear in the board layout.
    #[error("unknown square label {0:?}")]
    UnknownSquare(String),

    /// A direction code outside the eight fixed tokens was encountered.
    #[error("unknown direction code {0:?}")]
    UnknownDirection(String),
}

impl Error {
    /// Attaches a file path to a bare [`Error::Json`], for errors that
    /// originated from a file on disk rather than an in-memory string.
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Json(source) => Self::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}
