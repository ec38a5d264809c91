// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::EntryType;
use crate::FileMode;
use crate::dir::DirNode;
use crate::file::FileNode;
use chrono::{DateTime, Utc};

/// Common metadata interface for files and directories
///
/// Every accessor is a pure read of state fixed at insertion time.
pub trait Entry {
    /// Final path component. Empty only for the root directory.
    fn name(&self) -> &str;

    fn entry_type(&self) -> EntryType;

    /// Payload length in bytes; always 0 for directories.
    fn size(&self) -> u64;

    /// Creation time for files, `None` for directories.
    fn mod_time(&self) -> Option<DateTime<Utc>>;

    fn is_dir(&self) -> bool {
        self.entry_type().is_dir()
    }

    fn mode(&self) -> FileMode {
        self.entry_type().mode()
    }

    /// Snapshot of this entry's metadata.
    fn info(&self) -> Metadata {
        Metadata {
            name: self.name().to_string(),
            entry_type: self.entry_type(),
            size: self.size(),
            mod_time: self.mod_time(),
        }
    }
}

/// Owned metadata snapshot for a file or directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub entry_type: EntryType,
    pub size: u64,
    pub mod_time: Option<DateTime<Utc>>,
}

impl Entry for Metadata {
    fn name(&self) -> &str {
        &self.name
    }

    fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mod_time(&self) -> Option<DateTime<Utc>> {
        self.mod_time
    }

    fn info(&self) -> Metadata {
        self.clone()
    }
}

/// One item of a directory listing, borrowed from the tree
#[derive(Debug, Clone, Copy)]
pub enum DirEntry<'a> {
    File(&'a FileNode),
    Dir(&'a DirNode),
}

impl<'a> DirEntry<'a> {
    pub fn as_file(&self) -> Option<&'a FileNode> {
        match self {
            DirEntry::File(f) => Some(f),
            DirEntry::Dir(_) => None,
        }
    }

    pub fn as_dir(&self) -> Option<&'a DirNode> {
        match self {
            DirEntry::File(_) => None,
            DirEntry::Dir(d) => Some(d),
        }
    }
}

impl Entry for DirEntry<'_> {
    fn name(&self) -> &str {
        match self {
            DirEntry::File(f) => f.name(),
            DirEntry::Dir(d) => d.name(),
        }
    }

    fn entry_type(&self) -> EntryType {
        match self {
            DirEntry::File(_) => EntryType::File,
            DirEntry::Dir(_) => EntryType::Directory,
        }
    }

    fn size(&self) -> u64 {
        match self {
            DirEntry::File(f) => f.size(),
            DirEntry::Dir(d) => d.size(),
        }
    }

    fn mod_time(&self) -> Option<DateTime<Utc>> {
        match self {
            DirEntry::File(f) => f.mod_time(),
            DirEntry::Dir(d) => d.mod_time(),
        }
    }
}
