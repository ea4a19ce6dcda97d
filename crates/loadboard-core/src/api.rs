// crates/loadboard-core/src/api.rs
use crate::booking::BookingState;
use crate::model::Listing;
use crate::sort::SortOption;
use serde::Serialize;

/// Number of skeleton cards shown while listings are loading.
pub const SKELETON_PLACEHOLDERS: usize = 6;

/// Everything a front end needs to render one listing card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCard<'a> {
    pub id: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub cargo_type: &'a str,
    pub weight: &'a str,
    /// Long form pickup date, e.g. "January 5, 2024".
    pub pickup: String,
    pub booking: BookingState,
    pub button_label: &'static str,
    pub can_book: bool,
}

impl<'a> ListingCard<'a> {
    pub fn new(listing: &'a Listing, booking: BookingState) -> Self {
        ListingCard {
            id: listing.id.as_str(),
            origin: &listing.origin,
            destination: &listing.destination,
            cargo_type: &listing.cargo_type,
            weight: listing.weight.text(),
            pickup: listing.date.display_long(),
            booking,
            button_label: booking.button_label(),
            can_book: booking.can_book(),
        }
    }
}

/// A rendered snapshot of a search session.
///
/// Produced by [`SearchSession::view`](crate::SearchSession::view); taking
/// the view twice without intervening events yields identical output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a> {
    pub query: &'a str,
    pub suggestions: &'a [String],
    /// Highlighted suggestion; `None` when nothing is highlighted.
    pub active_suggestion: Option<usize>,
    pub sort: SortOption,
    pub loading: bool,
    /// Skeleton cards to draw instead of listings (non-zero only while loading).
    pub placeholders: usize,
    pub listings: Vec<ListingCard<'a>>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    /// Page buttons to render. Empty while loading or when there is only one page.
    pub pages: Vec<usize>,
    /// Show the "no loads found" fallback.
    pub no_results: bool,
}
