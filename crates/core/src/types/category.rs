//! Product category enumeration.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0} (expected casual, evening, formal or summer)")]
pub struct CategoryError(pub String);

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Casual,
    Evening,
    Formal,
    Summer,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Casual, Self::Evening, Self::Formal, Self::Summer];

    /// Returns the identifier used in filters and snapshots.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Evening => "evening",
            Self::Formal => "formal",
            Self::Summer => "summer",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Casual => "Casual",
            Self::Evening => "Evening",
            Self::Formal => "Formal",
            Self::Summer => "Summer",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}
