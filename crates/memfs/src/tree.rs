//! Box-drawing rendering of a directory tree.
//!
//! ```text
//! /
//! ├── top (1 bytes)
//! └─┬ a/
//!   ├── one (1 bytes)
//!   └─┬ b/
//!     └── two (1 bytes)
//! ```

use std::fmt;

use crate::dir::DirNode;
use crate::fs::MemFs;
use crate::metadata::{DirEntry, Entry};

/// Render `dir` and everything below it, one entry per line.
pub fn format_tree(dir: &DirNode) -> String {
    let mut output = String::new();
    if dir.name().is_empty() {
        output.push('/');
    } else {
        output.push_str(dir.name());
        output.push('/');
    }
    output.push('\n');
    format_children(&mut output, dir, "");
    output
}

fn label(entry: &DirEntry<'_>) -> String {
    match entry {
        DirEntry::File(f) => format!("{} ({} bytes)", f.name(), f.size()),
        DirEntry::Dir(d) => format!("{}/", d.name()),
    }
}

fn format_children(output: &mut String, dir: &DirNode, prefix: &str) {
    let entries = dir.entries();
    let count = entries.len();

    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == count;
        let has_children = entry.as_dir().is_some_and(|d| !d.entries().is_empty());

        let (connector, continuation) = match (has_children, is_last) {
            (false, true) => ("└──", ' '),
            (false, false) => ("├──", '│'),
            (true, true) => ("└─┬", ' '),
            (true, false) => ("├─┬", '│'),
        };

        output.push_str(prefix);
        output.push_str(connector);
        output.push(' ');
        output.push_str(&label(entry));
        output.push('\n');

        if let DirEntry::Dir(sub) = entry {
            let child_prefix = format!("{prefix}{continuation} ");
            format_children(output, sub, &child_prefix);
        }
    }
}

impl fmt::Display for MemFs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tree(self.root()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        assert_eq!(MemFs::new().to_string(), "/\n");
    }

    #[test]
    fn test_nested_tree() {
        let mut fs = MemFs::new();
        _ = fs
            .add("/top", "t")
            .add("/a/one", "1")
            .add("/a/b/two", "22")
            .add("/c/three", "333");

        let expected = "\
/
├── top (1 bytes)
├─┬ a/
│ ├── one (1 bytes)
│ └─┬ b/
│   └── two (2 bytes)
└─┬ c/
  └── three (3 bytes)
";
        assert_eq!(fs.to_string(), expected);
    }

    #[test]
    fn test_subtree() {
        let mut fs = MemFs::new();
        _ = fs.add("/a/one", "1");
        let a = fs.root().dir("a").unwrap();
        assert_eq!(format_tree(a), "a/\n└── one (1 bytes)\n");
    }
}
