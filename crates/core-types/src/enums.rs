use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A market category used to bucket instruments.
///
/// The declaration order is the display order used by the UI and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Sector {
    Technology,
    Healthcare,
    Finance,
    Energy,
    Consumer,
    Utilities,
    Industrials,
    Materials,
}

impl Sector {
    /// Every sector, in display order.
    pub const ALL: [Sector; 8] = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::Finance,
        Sector::Energy,
        Sector::Consumer,
        Sector::Utilities,
        Sector::Industrials,
        Sector::Materials,
    ];

    /// The lowercase tag used on the wire and in configuration files.
    pub fn tag(&self) -> &'static str {
        match self {
            Sector::Technology => "technology",
            Sector::Healthcare => "healthcare",
            Sector::Finance => "finance",
            Sector::Energy => "energy",
            Sector::Consumer => "consumer",
            Sector::Utilities => "utilities",
            Sector::Industrials => "industrials",
            Sector::Materials => "materials",
        }
    }

    /// Human-readable label shown next to the sector toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Healthcare => "Healthcare",
            Sector::Finance => "Finance",
            Sector::Energy => "Energy",
            Sector::Consumer => "Consumer Goods",
            Sector::Utilities => "Utilities",
            Sector::Industrials => "Industrials",
            Sector::Materials => "Materials",
        }
    }

    /// Hex colour used for sector badges.
    pub fn color(&self) -> &'static str {
        match self {
            Sector::Technology => "#3B82F6",
            Sector::Healthcare => "#22C55E",
            Sector::Finance => "#A855F7",
            Sector::Energy => "#EAB308",
            Sector::Consumer => "#EC4899",
            Sector::Utilities => "#F97316",
            Sector::Industrials => "#6366F1",
            Sector::Materials => "#14B8A6",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Sector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sector::ALL
            .into_iter()
            .find(|sector| sector.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownSector(wanted.to_string()))
    }
}

impl TryFrom<String> for Sector {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
