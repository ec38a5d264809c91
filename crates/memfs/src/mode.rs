/// Mode word reported by entries.
///
/// Bit layout follows the conventional high type bits over low permission
/// bits. Only two values ever occur: [`FileMode::DIR`] and
/// [`FileMode::PERM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Directory type bit.
    pub const DIR: FileMode = FileMode(1 << 31);

    /// Regular file with all permission bits set.
    pub const PERM: FileMode = FileMode(0o777);

    const PERM_MASK: u32 = 0o777;

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_dir(self) -> bool {
        self.0 & Self::DIR.0 != 0
    }

    pub const fn is_regular(self) -> bool {
        !self.is_dir()
    }

    /// Permission bits only.
    pub const fn perm(self) -> u32 {
        self.0 & Self::PERM_MASK
    }
}

impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_dir() { 'd' } else { '-' };
        write!(f, "{kind}")?;
        for shift in [6, 3, 0] {
            let bits = (self.perm() >> shift) & 0o7;
            let r = if bits & 0o4 != 0 { 'r' } else { '-' };
            let w = if bits & 0o2 != 0 { 'w' } else { '-' };
            let x = if bits & 0o1 != 0 { 'x' } else { '-' };
            write!(f, "{r}{w}{x}")?;
        }
        Ok(())
    }
}
