// crates/loadboard-core/src/common.rs
use crate::model::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Simple aggregate statistics for a catalog.
///
/// Returned by [`Catalog::stats`]; counts are taken over the listings as
/// ingested, before any query is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub listings: usize,
    /// Distinct city names across origins and destinations.
    pub cities: usize,
    pub cargo_types: usize,
    /// Listings whose weight had no leading integer.
    pub unparsed_weights: usize,
    /// Listings whose date was not a calendar date.
    pub unparsed_dates: usize,
}

impl Catalog {
    pub fn stats(&self) -> CatalogStats {
        let listings = self.listings();
        let cities: HashSet<&str> = listings
            .iter()
            .flat_map(|l| [l.origin(), l.destination()])
            .collect();
        let cargo_types: HashSet<&str> = listings.iter().map(|l| l.cargo_type()).collect();

        CatalogStats {
            listings: listings.len(),
            cities: cities.len(),
            cargo_types: cargo_types.len(),
            unparsed_weights: listings.iter().filter(|l| l.weight.value().is_none()).count(),
            unparsed_dates: listings.iter().filter(|l| l.date.value().is_none()).count(),
        }
    }
}
