// crates/loadboard-core/src/sort.rs
use crate::model::Listing;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// User-selected ordering for the filtered listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Keep catalog order.
    #[default]
    None,
    DateDesc,
    DateAsc,
    WeightDesc,
    WeightAsc,
}

#[derive(Debug, Clone, Error)]
#[error("unknown sort option '{0}' (expected one of: none, date-desc, date-asc, weight-desc, weight-asc)")]
pub struct UnknownSortOption(pub String);

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::None,
        SortOption::DateDesc,
        SortOption::DateAsc,
        SortOption::WeightDesc,
        SortOption::WeightAsc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::None => "none",
            SortOption::DateDesc => "date-desc",
            SortOption::DateAsc => "date-asc",
            SortOption::WeightDesc => "weight-desc",
            SortOption::WeightAsc => "weight-asc",
        }
    }

    /// Human label for a sort dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SortOption::None => "-- Select --",
            SortOption::DateDesc => "Date (Newest)",
            SortOption::DateAsc => "Date (Oldest)",
            SortOption::WeightDesc => "Weight (High to Low)",
            SortOption::WeightAsc => "Weight (Low to High)",
        }
    }

    /// Lenient parse for values coming out of a `<select>`: the empty
    /// placeholder and anything unrecognised mean "no sorting".
    pub fn from_select_value(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(SortOption::None);
        }
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSortOption(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort stage: reorder `filtered` by `option` without touching the input.
///
/// The sort is stable, so listings that compare equal keep their relative
/// order. Dates and weights that failed to parse compare as the smallest
/// value: first in ascending order, last in descending order.
pub fn sort_listings<'a>(filtered: &[&'a Listing], option: SortOption) -> Vec<&'a Listing> {
    let mut out = filtered.to_vec();
    match option {
        SortOption::None => {}
        SortOption::DateDesc => out.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOption::DateAsc => out.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOption::WeightDesc => out.sort_by(|a, b| b.weight.cmp(&a.weight)),
        SortOption::WeightAsc => out.sort_by(|a, b| a.weight.cmp(&b.weight)),
    }
    out
}
