use std::fmt;

/// Whether the simulated backend takes the safe or the naive path.
///
/// For lookups, `Protected` means parameter binding and `Unprotected` means
/// string concatenation. For comment rendering, `Protected` means escaped
/// output and `Unprotected` means raw output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Parameterized query / escaped output
    Protected,
    /// Concatenated query / raw output
    #[default]
    Unprotected,
}

impl Mode {
    /// Converts a "protected" flag into a mode.
    pub fn from_protected(protected: bool) -> Self {
        if protected {
            Mode::Protected
        } else {
            Mode::Unprotected
        }
    }

    /// Returns `true` for [`Mode::Protected`].
    pub fn is_protected(self) -> bool {
        matches!(self, Mode::Protected)
    }

    /// Returns `true` when comments are inserted without escaping.
    pub fn renders_raw(self) -> bool {
        !self.is_protected()
    }

    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Protected => Mode::Unprotected,
            Mode::Unprotected => Mode::Protected,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Protected => write!(f, "protected"),
            Mode::Unprotected => write!(f, "unprotected"),
        }
    }
}
