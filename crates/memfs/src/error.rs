// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by lookups in a [`crate::MemFs`].
///
/// Opening a directory as a file and naming an absent entry are the same
/// failure: the path does not resolve to what was asked for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl Error {
    pub fn not_found<P: AsRef<Path>>(path: P) -> Self {
        Error::NotFound(path.as_ref().to_path_buf())
    }

    /// The path that failed to resolve.
    pub fn path(&self) -> &Path {
        match self {
            Error::NotFound(path) => path,
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> std::io::Error {
        let kind = match err {
            Error::NotFound(_) => std::io::ErrorKind::NotFound,
        };
        std::io::Error::new(kind, err)
    }
}
