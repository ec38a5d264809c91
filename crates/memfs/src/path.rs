/// Component separator.
pub const SEPARATOR: char = '/';

/// Removes exactly one leading separator, if present
pub fn strip_leading_separator(path: &str) -> &str {
    path.strip_prefix(SEPARATOR).unwrap_or(path)
}

/// Splits a path into components. Empty components are kept, so `"a//b"`
/// and `"a/"` only resolve if an entry is literally named `""`.
pub fn components(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).collect()
}

/// True for the spellings that name the root directory in a listing
pub fn is_root(path: &str) -> bool {
    matches!(path, "" | "/" | ".")
}

/// Joins a parent path and a child name for walk output
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_separator() {
        assert_eq!(strip_leading_separator("/a/b/c"), "a/b/c");
        assert_eq!(strip_leading_separator("a/b/c"), "a/b/c");
        // Only one separator is removed
        assert_eq!(strip_leading_separator("//a"), "/a");
        assert_eq!(strip_leading_separator("/"), "");
    }

    #[test]
    fn test_components() {
        assert_eq!(components("a/b/c"), vec!["a", "b", "c"]);
        assert_eq!(components("file"), vec!["file"]);
        assert_eq!(components("a/"), vec!["a", ""]);
        assert_eq!(components("/a"), vec!["", "a"]);
        assert_eq!(components(""), vec![""]);
    }

    #[test]
    fn test_is_root() {
        assert!(is_root(""));
        assert!(is_root("/"));
        assert!(is_root("."));
        assert!(!is_root("./"));
        assert!(!is_root("a"));
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "a"), "a");
        assert_eq!(join("a/b", "c"), "a/b/c");
    }
}
