use serde::{Deserialize, Serialize};

/// How the three output files are opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteMode {
    /// Overwrite existing output
    #[default]
    Truncate,
    /// Extend existing output
    Append,
}

/// Statistics verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatsLevel {
    #[default]
    None,
    /// Counts only
    Short,
    /// Counts plus min/max/sum/average
    Full,
}

impl StatsLevel {
    /// Collapse the two independent `-s`/`-f` switches. Full wins when both are set.
    #[must_use]
    pub const fn from_flags(short: bool, full: bool) -> Self {
        match (short, full) {
            (_, true) => Self::Full,
            (true, false) => Self::Short,
            (false, false) => Self::None,
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }
}
