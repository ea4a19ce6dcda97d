// crates/loadboard-core/src/traits.rs
use crate::model::Listing;
use crate::sort::SortOption;
use crate::text::{contains_folded, fold_case};

/// Route-based matching helpers for types that expose an origin and a
/// destination city.
///
/// Implementors provide `&str` views of both endpoints and get
/// case-insensitive helpers built on [`fold_case`]:
/// - [`RouteMatch::route_contains`]: the query is a substring of either end
/// - [`RouteMatch::route_contains_folded`]: same, with a pre-folded query
///
/// # Examples
/// ```rust
/// use loadboard_core::traits::RouteMatch;
///
/// struct Lane(&'static str, &'static str);
/// impl RouteMatch for Lane {
///     fn origin_str(&self) -> &str { self.0 }
///     fn destination_str(&self) -> &str { self.1 }
/// }
///
/// assert!(Lane("Lahore", "Karachi").route_contains("KARA"));
/// assert!(!Lane("Lahore", "Karachi").route_contains("Quetta"));
/// ```
pub trait RouteMatch {
    fn origin_str(&self) -> &str;
    fn destination_str(&self) -> &str;

    /// Case-insensitive substring match on origin OR destination.
    #[inline]
    fn route_contains(&self, q: &str) -> bool {
        self.route_contains_folded(&fold_case(q))
    }

    /// Like [`RouteMatch::route_contains`], for a query already passed
    /// through [`fold_case`]. Scans use this to fold the query only once.
    #[inline]
    fn route_contains_folded(&self, folded: &str) -> bool {
        contains_folded(self.origin_str(), folded) || contains_folded(self.destination_str(), folded)
    }
}

impl RouteMatch for Listing {
    fn origin_str(&self) -> &str {
        &self.origin
    }

    fn destination_str(&self) -> &str {
        &self.destination
    }
}

/// The pure search stages available on a listing source.
///
/// Implemented for `[Listing]` and [`Catalog`](crate::Catalog). Every method
/// is deterministic and side-effect free, so re-running it with the same
/// inputs yields the same output.
pub trait CatalogSearch {
    /// Listings whose origin or destination contains `query`
    /// (case-insensitive), in catalog order. An empty query matches all.
    fn filter(&self, query: &str) -> Vec<&Listing>;

    /// Up to `limit` unique city names for autocomplete. Empty for an empty
    /// query.
    fn suggest(&self, query: &str, limit: usize) -> Vec<String>;

    /// `filter` followed by a stable sort on `option`.
    fn filter_sorted(&self, query: &str, option: SortOption) -> Vec<&Listing>;
}
