// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::EntryType;
use crate::file::FileNode;
use crate::metadata::{DirEntry, Entry};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use diagnostics::debug;

/// Directory holding owned files and subdirectories in insertion order
///
/// Files and subdirectories live in separate lists, so one name may refer to
/// both a file and a directory at the same level.
#[derive(Debug, Clone, Default)]
pub struct DirNode {
    name: String,
    files: Vec<FileNode>,
    dirs: Vec<DirNode>,
}

impl DirNode {
    pub(crate) fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    pub fn files(&self) -> &[FileNode] {
        &self.files
    }

    pub fn dirs(&self) -> &[DirNode] {
        &self.dirs
    }

    /// Immediate children: files first, then directories.
    pub fn entries(&self) -> Vec<DirEntry<'_>> {
        self.files
            .iter()
            .map(DirEntry::File)
            .chain(self.dirs.iter().map(DirEntry::Dir))
            .collect()
    }

    /// First file with this exact name.
    pub fn file(&self, name: &str) -> Option<&FileNode> {
        self.files.iter().find(|f| f.name() == name)
    }

    /// First subdirectory with this exact name.
    pub fn dir(&self, name: &str) -> Option<&DirNode> {
        self.dirs.iter().find(|d| d.name == name)
    }

    /// Follow `components` to a file. The last component names the file,
    /// every earlier one a subdirectory. An empty list never names a file.
    pub fn resolve_file<S: AsRef<str>>(&self, components: &[S]) -> Option<&FileNode> {
        match components {
            [] => None,
            [name] => self.file(name.as_ref()),
            [first, rest @ ..] => self.dir(first.as_ref())?.resolve_file(rest),
        }
    }

    /// Follow `components` through subdirectories. An empty list is this
    /// directory itself.
    pub fn resolve_dir<S: AsRef<str>>(&self, components: &[S]) -> Option<&DirNode> {
        match components {
            [] => Some(self),
            [first, rest @ ..] => self.dir(first.as_ref())?.resolve_dir(rest),
        }
    }

    /// Attach `data` at `components`, creating missing subdirectories.
    ///
    /// A file with the same name is appended rather than replaced.
    pub(crate) fn insert<S: AsRef<str>>(&mut self, components: &[S], data: Bytes) {
        match components {
            [] => {}
            [name] => {
                let name = name.as_ref();
                let size = data.len();
                debug!("insert: adding file '{name}' ({size} bytes)", name: name, size: size);
                self.files.push(FileNode::new(name, data));
            }
            [first, rest @ ..] => {
                let first = first.as_ref();
                let idx = match self.dirs.iter().position(|d| d.name == first) {
                    Some(idx) => idx,
                    None => {
                        debug!("insert: creating directory '{first}'", first: first);
                        self.dirs.push(DirNode::new(first));
                        self.dirs.len() - 1
                    }
                };
                self.dirs[idx].insert(rest, data);
            }
        }
    }

    /// Total number of files below this directory.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.dirs.iter().map(DirNode::file_count).sum::<usize>()
    }
}

impl Entry for DirNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn entry_type(&self) -> EntryType {
        EntryType::Directory
    }

    fn size(&self) -> u64 {
        0
    }

    fn mod_time(&self) -> Option<DateTime<Utc>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DirNode {
        let mut root = DirNode::default();
        root.insert(&["a", "b", "c.txt"], Bytes::from_static(b"c"));
        root.insert(&["a", "d.txt"], Bytes::from_static(b"dd"));
        root.insert(&["top"], Bytes::from_static(b"t"));
        root
    }

    #[test]
    fn test_insert_creates_intermediate_dirs() {
        let root = sample();
        assert_eq!(root.files().len(), 1);
        assert_eq!(root.dirs().len(), 1);

        let a = root.dir("a").unwrap();
        assert_eq!(a.name(), "a");
        assert_eq!(a.files().len(), 1);
        assert_eq!(a.dirs().len(), 1);
        assert_eq!(root.file_count(), 3);
    }

    #[test]
    fn test_insert_reuses_existing_dir() {
        let mut root = sample();
        root.insert(&["a", "b", "e.txt"], Bytes::from_static(b"e"));
        assert_eq!(root.dirs().len(), 1);
        assert_eq!(root.resolve_dir(&["a", "b"]).unwrap().files().len(), 2);
    }

    #[test]
    fn test_insert_new_sibling_dir() {
        let mut root = sample();
        root.insert(&["z", "f"], Bytes::from_static(b"f"));
        let names: Vec<_> = root.dirs().iter().map(|d| d.name().to_string()).collect();
        assert_eq!(names, vec!["a", "z"]);
        // The new file lands in "z", not in the previously last directory.
        assert!(root.resolve_file(&["z", "f"]).is_some());
        assert!(root.resolve_file(&["a", "f"]).is_none());
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let mut root = DirNode::default();
        let nothing: [&str; 0] = [];
        root.insert(&nothing, Bytes::from_static(b"x"));
        assert!(root.entries().is_empty());
    }

    #[test]
    fn test_resolve_file() {
        let root = sample();
        let f = root.resolve_file(&["a", "b", "c.txt"]).unwrap();
        assert_eq!(f.data().as_ref(), b"c");
        assert_eq!(f.name(), "c.txt");

        let nothing: [&str; 0] = [];
        assert!(root.resolve_file(&nothing).is_none());
        assert!(root.resolve_file(&["a"]).is_none());
        assert!(root.resolve_file(&["a", "missing"]).is_none());
        assert!(root.resolve_file(&["x", "c.txt"]).is_none());
    }

    #[test]
    fn test_resolve_dir() {
        let root = sample();
        let nothing: [&str; 0] = [];
        assert!(root.resolve_dir(&nothing).is_some());
        assert_eq!(root.resolve_dir(&["a", "b"]).unwrap().name(), "b");
        assert!(root.resolve_dir(&["top"]).is_none());
        assert!(root.resolve_dir(&["a", "d.txt"]).is_none());
    }

    #[test]
    fn test_entries_files_before_dirs() {
        let mut root = DirNode::default();
        root.insert(&["sub", "x"], Bytes::from_static(b"x"));
        root.insert(&["first"], Bytes::from_static(b"1"));
        root.insert(&["second"], Bytes::from_static(b"2"));

        let listing: Vec<_> = root
            .entries()
            .iter()
            .map(|e| (e.name().to_string(), e.is_dir()))
            .collect();
        assert_eq!(
            listing,
            vec![
                ("first".to_string(), false),
                ("second".to_string(), false),
                ("sub".to_string(), true),
            ]
        );
    }
}
