//! Sort orders supported by acronym listings.

use serde::{Deserialize, Serialize};

/// Column an acronym listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Single-key ordering for acronym listings.
///
/// Comparison follows the storage layer's default string ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AcronymSort {
    ShortAscending,
    LongAscending,
    LongDescending,
}

impl AcronymSort {
    pub const fn field(self) -> SortField {
        match self {
            Self::ShortAscending => SortField::Short,
            Self::LongAscending | Self::LongDescending => SortField::Long,
        }
    }

    pub const fn direction(self) -> SortDirection {
        match self {
            Self::ShortAscending | Self::LongAscending => SortDirection::Ascending,
            Self::LongDescending => SortDirection::Descending,
        }
    }
}
