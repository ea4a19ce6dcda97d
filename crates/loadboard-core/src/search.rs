// crates/loadboard-core/src/search.rs
use crate::model::{Catalog, Listing};
use crate::sort::{sort_listings, SortOption};
use crate::text::{contains_folded, fold_case};
use crate::traits::{CatalogSearch, RouteMatch};
use std::collections::HashSet;

/// Filter stage: keep listings whose origin or destination contains the query.
///
/// Matching is case-insensitive and the query is used verbatim (no trimming).
/// The result preserves catalog order and borrows from `listings`.
pub fn filter_listings<'a>(listings: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    let q = fold_case(query);
    if q.is_empty() {
        return listings.iter().collect();
    }
    listings
        .iter()
        .filter(|l| l.route_contains_folded(&q))
        .collect()
}

/// Suggest stage: city names for the autocomplete dropdown.
///
/// 1. Take the listings matched by [`filter_listings`].
/// 2. Collect all their origins, then all their destinations.
/// 3. Deduplicate, keeping the first occurrence.
/// 4. Keep only names that themselves contain the query.
/// 5. Truncate to `limit`.
///
/// An empty query yields no suggestions: autocomplete is suppressed rather
/// than listing every city.
pub fn suggest_cities(listings: &[Listing], query: &str, limit: usize) -> Vec<String> {
    let q = fold_case(query);
    if q.is_empty() || limit == 0 {
        return Vec::new();
    }

    let matches: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.route_contains_folded(&q))
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(limit);

    let candidates = matches
        .iter()
        .map(|l| l.origin())
        .chain(matches.iter().map(|l| l.destination()));

    for city in candidates {
        if !seen.insert(city) {
            continue;
        }
        if contains_folded(city, &q) {
            out.push(city.to_string());
            if out.len() == limit {
                break;
            }
        }
    }
    out
}

impl CatalogSearch for [Listing] {
    fn filter(&self, query: &str) -> Vec<&Listing> {
        filter_listings(self, query)
    }

    fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        suggest_cities(self, query, limit)
    }

    fn filter_sorted(&self, query: &str, option: SortOption) -> Vec<&Listing> {
        sort_listings(&filter_listings(self, query), option)
    }
}

impl CatalogSearch for Catalog {
    fn filter(&self, query: &str) -> Vec<&Listing> {
        self.listings().filter(query)
    }

    fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        self.listings().suggest(query, limit)
    }

    fn filter_sorted(&self, query: &str, option: SortOption) -> Vec<&Listing> {
        self.listings().filter_sorted(query, option)
    }
}
