// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use bytes::Bytes;
use diagnostics::{debug, info};

use crate::dir::DirNode;
use crate::error::*;
use crate::file::OpenFile;
use crate::metadata::{DirEntry, Entry, Metadata};
use crate::path;

/// In-memory filesystem: an owned root directory plus path parsing
///
/// Build it with [`MemFs::add`] / [`MemFs::add_map`], then read it through
/// shared references. Each value is an independent tree.
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    root: DirNode,
}

impl MemFs {
    /// Creates an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root directory. Its name is always empty.
    pub fn root(&self) -> &DirNode {
        &self.root
    }

    /// Opens the file at `path` for reading.
    ///
    /// One leading `/` is optional. Directories cannot be opened; they
    /// report `NotFound` like any other unresolved path.
    pub fn open<P: AsRef<str>>(&self, path: P) -> Result<OpenFile> {
        let path = path.as_ref();
        if path.is_empty() {
            return Err(Error::not_found(path));
        }
        let components = path::components(path::strip_leading_separator(path));
        match self.root.resolve_file(&components) {
            Some(file) => Ok(file.open()),
            None => {
                debug!("open: '{path}' not found", path: path);
                Err(Error::not_found(path))
            }
        }
    }

    /// Lists the immediate children of the directory at `path`, files
    /// first, each group in insertion order.
    ///
    /// `""`, `"/"` and `"."` name the root. Any other path is split as-is,
    /// so a leading `/` yields an empty first component.
    pub fn read_dir<P: AsRef<str>>(&self, path: P) -> Result<Vec<DirEntry<'_>>> {
        let path = path.as_ref();
        if path::is_root(path) {
            return Ok(self.root.entries());
        }
        match self.root.resolve_dir(&path::components(path)) {
            Some(dir) => Ok(dir.entries()),
            None => {
                debug!("read_dir: '{path}' not found", path: path);
                Err(Error::not_found(path))
            }
        }
    }

    /// Adds a file at `path`, creating parent directories as needed.
    ///
    /// Adding an existing path appends a second file of the same name;
    /// lookups keep returning the first one.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    pub fn add<P: AsRef<str>, D: Into<Bytes>>(&mut self, path: P, data: D) -> &mut Self {
        let path = path.as_ref();
        assert!(!path.is_empty(), "memfs: path can't be empty");
        let components = path::components(path::strip_leading_separator(path));
        self.root.insert(&components, data.into());
        self
    }

    /// Adds every `(path, content)` pair. Iteration order follows the
    /// mapping, which for hash maps is unspecified.
    ///
    /// # Panics
    ///
    /// Panics if any path is empty.
    pub fn add_map<I, K, V>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut count = 0usize;
        for (file, content) in files {
            let content: String = content.into();
            _ = self.add(file, content);
            count += 1;
        }
        info!("add_map: added {count} files", count: count);
        self
    }

    /// Reads the whole payload of the file at `path`.
    pub fn read_file<P: AsRef<str>>(&self, path: P) -> Result<Bytes> {
        Ok(self.open(path)?.contents())
    }

    /// Metadata of the file at `path`.
    pub fn stat<P: AsRef<str>>(&self, path: P) -> Result<Metadata> {
        self.open(path)?.stat()
    }

    /// Visits every entry below the root, depth first, passing the full
    /// slash-joined path (without a leading `/`). Within a directory files
    /// come before subdirectories. An error from `visitor` stops the walk.
    pub fn walk<'a, F>(&'a self, mut visitor: F) -> Result<()>
    where
        F: FnMut(&str, DirEntry<'a>) -> Result<()>,
    {
        walk_dir(&self.root, "", &mut visitor)
    }
}

fn walk_dir<'a, F>(dir: &'a DirNode, prefix: &str, visitor: &mut F) -> Result<()>
where
    F: FnMut(&str, DirEntry<'a>) -> Result<()>,
{
    for entry in dir.entries() {
        let full = path::join(prefix, entry.name());
        visitor(&full, entry)?;
        if let DirEntry::Dir(sub) = entry {
            walk_dir(sub, &full, visitor)?;
        }
    }
    Ok(())
}

impl<K, V> Extend<(K, V)> for MemFs
where
    K: AsRef<str>,
    V: Into<Bytes>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (path, data) in iter {
            _ = self.add(path, data);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MemFs
where
    K: AsRef<str>,
    V: Into<Bytes>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fs = MemFs::new();
        fs.extend(iter);
        fs
    }
}
