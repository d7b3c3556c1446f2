//! List query inputs: status filter, search term, sort direction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::CharacterStatus;

/// Sentinel value that disables status filtering.
const ALL_SENTINEL: &str = "All";

/// Status filter: everything, or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CharacterStatus),
}

impl StatusFilter {
    /// Whether a record with `status` passes this filter.
    pub fn matches(self, status: CharacterStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// Next filter in the cycle `All → Alive → Dead → unknown → All`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(CharacterStatus::Alive),
            Self::Only(CharacterStatus::Alive) => Self::Only(CharacterStatus::Dead),
            Self::Only(CharacterStatus::Dead) => Self::Only(CharacterStatus::Unknown),
            Self::Only(CharacterStatus::Unknown) => Self::All,
        }
    }

    /// Display label, identical to the accepted input string.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Only(status) => status.as_str(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    /// Accepts `"All"` or an exact status wire value (`"Alive"`, `"Dead"`, `"unknown"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(Self::All);
        }
        CharacterStatus::from_wire(s)
            .map(Self::Only)
            .ok_or_else(|| CoreError::ValidationError(format!("unknown status filter '{s}'")))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The other direction.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::ValidationError(format!(
                "unknown sort direction '{other}'"
            ))),
        }
    }
}

/// Everything the filter/sort pipeline reads besides the collection itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ViewQuery {
    /// Status filter.
    pub status: StatusFilter,
    /// Case-insensitive substring to look for in names. Empty matches all.
    pub search: String,
    /// Name sort direction.
    pub sort: SortDirection,
}

impl ViewQuery {
    pub fn new(status: StatusFilter, search: impl Into<String>, sort: SortDirection) -> Self {
        Self {
            status,
            search: search.into(),
            sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_sentinel() {
        assert_eq!("All".parse::<StatusFilter>().ok(), Some(StatusFilter::All));
    }

    #[test]
    fn parse_exact_status() {
        assert_eq!(
            "unknown".parse::<StatusFilter>().ok(),
            Some(StatusFilter::Only(CharacterStatus::Unknown))
        );
        assert_eq!(
            "Dead".parse::<StatusFilter>().ok(),
            Some(StatusFilter::Only(CharacterStatus::Dead))
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(matches!(
            "all".parse::<StatusFilter>(),
            Err(CoreError::ValidationError(_))
        ));
        assert!("alive".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn filter_cycle_returns_to_all() {
        let mut filter = StatusFilter::All;
        for _ in 0..4 {
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::All);
    }

    #[test]
    fn label_round_trips_through_parse() {
        let mut filter = StatusFilter::All;
        for _ in 0..4 {
            assert_eq!(filter.label().parse::<StatusFilter>().ok(), Some(filter));
            filter = filter.next();
        }
    }

    #[test]
    fn sort_direction_parse_and_toggle() {
        assert_eq!("desc".parse::<SortDirection>().ok(), Some(SortDirection::Desc));
        assert!("DESC".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
    }
}
