/// Kind of a directory entry
///
/// Exactly two kinds exist: files hold bytes, directories hold entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Regular file entry
    File,
    /// Directory entry
    Directory,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::File => "file",
            EntryType::Directory => "directory",
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryType::Directory)
    }

    /// The fixed mode word entries of this kind report.
    pub fn mode(&self) -> crate::FileMode {
        match self {
            EntryType::File => crate::FileMode::PERM,
            EntryType::Directory => crate::FileMode::DIR,
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(EntryType::File),
            "directory" => Ok(EntryType::Directory),
            other => Err(format!("Unknown entry type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileMode;

    #[test]
    fn test_entry_type_parsing() {
        assert_eq!("file".parse::<EntryType>().unwrap(), EntryType::File);
        assert_eq!("directory".parse::<EntryType>().unwrap(), EntryType::Directory);
        assert!("symlink".parse::<EntryType>().is_err());
    }

    #[test]
    fn test_display_and_mode() {
        assert_eq!(format!("{}", EntryType::File), "file");
        assert_eq!(format!("{}", EntryType::Directory), "directory");
        assert_eq!(EntryType::File.mode(), FileMode::PERM);
        assert_eq!(EntryType::Directory.mode(), FileMode::DIR);
        assert!(EntryType::Directory.is_dir());
        assert!(!EntryType::File.is_dir());
    }

    #[test]
    fn test_serde_serialization() {
        let file_json = serde_json::to_string(&EntryType::File).unwrap();
        assert_eq!(file_json, "\"file\"");

        let dir_parsed: EntryType = serde_json::from_str("\"directory\"").unwrap();
        assert_eq!(dir_parsed, EntryType::Directory);
    }
}
