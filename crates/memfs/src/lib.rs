//! In-memory hierarchical filesystem.
//!
//! A [`MemFs`] is a tree of directories and immutable files held entirely in
//! process memory. It is built once with [`MemFs::add`] and then read through
//! [`MemFs::open`] and [`MemFs::read_dir`], the same contract a disk-backed
//! filesystem offers, without touching disk.
//!
//! ```
//! use memfs::{Entry, MemFs};
//! use std::io::Read;
//!
//! let mut fs = MemFs::new();
//! fs.add("/a/b/c/hello.txt", "hello world");
//!
//! let mut text = String::new();
//! fs.open("/a/b/c/hello.txt")?.read_to_string(&mut text)?;
//! assert_eq!(text, "hello world");
//!
//! let names: Vec<_> = fs.read_dir("a")?.iter().map(|e| e.name().to_string()).collect();
//! assert_eq!(names, vec!["b"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod dir;
mod entry_type;
mod error;
mod file;
mod fs;
mod metadata;
mod mode;
pub mod path;
mod tree;

pub use dir::DirNode;
pub use entry_type::EntryType;
pub use error::{Error, Result};
pub use file::{FileNode, OpenFile};
pub use fs::MemFs;
pub use metadata::{DirEntry, Entry, Metadata};
pub use mode::FileMode;
pub use tree::format_tree;
