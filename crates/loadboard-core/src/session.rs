// crates/loadboard-core/src/session.rs

//! # Search Session
//!
//! Interactive state of the load search page. Every mutation is a discrete
//! reaction to one user event; everything shown on screen is re-derived from
//! the state through the pure stages in [`crate::search`],
//! [`crate::sort`] and [`crate::paginate`].

use crate::api::{ListingCard, PageView, SKELETON_PLACEHOLDERS};
use crate::booking::{BookingPrompt, BookingState, Bookings};
use crate::collab::Notifier;
use crate::config::SearchConfig;
use crate::model::{Catalog, Listing, ListingId};
use crate::paginate::{paginate, PageState};
use crate::search::{filter_listings, suggest_cities};
use crate::sort::{sort_listings, SortOption};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for the simulated data arrival; no listings are shown.
    Loading,
    Ready,
    /// Torn down. A loading delay that elapses now is ignored.
    Disposed,
}

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Key {
        match name {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

pub struct SearchSession {
    catalog: Arc<Catalog>,
    config: SearchConfig,
    query: String,
    suggestions: Vec<String>,
    active: Option<usize>,
    sort: SortOption,
    page: PageState,
    phase: Phase,
    bookings: Bookings,
}

impl SearchSession {
    /// Start a session over `catalog`.
    ///
    /// The session begins in [`Phase::Loading`] unless the configured loading
    /// delay is zero. The delay itself is driven from outside (see
    /// [`Controller`](crate::Controller)); the session only records the phase.
    pub fn new(catalog: impl Into<Arc<Catalog>>, config: SearchConfig) -> Self {
        let phase = if config.loading_delay.is_zero() {
            Phase::Ready
        } else {
            Phase::Loading
        };
        SearchSession {
            catalog: catalog.into(),
            page: PageState::new(config.items_per_page),
            config,
            query: String::new(),
            suggestions: Vec::new(),
            active: None,
            sort: SortOption::None,
            phase,
            bookings: Bookings::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    // ------------------------------------------------------------------
    // Query + autocomplete
    // ------------------------------------------------------------------

    /// A keystroke in the search box: replace the query, go back to page 1,
    /// and recompute suggestions with nothing highlighted.
    pub fn set_query(&mut self, value: impl Into<String>) {
        self.query = value.into();
        self.page.reset();
        self.suggestions = suggest_cities(
            self.catalog.listings(),
            &self.query,
            self.config.max_suggestions,
        );
        self.active = None;
        trace!(query = %self.query, suggestions = self.suggestions.len(), "query changed");
    }

    /// Keyboard navigation in the suggestion list.
    ///
    /// Returns `true` when the key committed a suggestion.
    pub fn key_down(&mut self, key: Key) -> bool {
        let len = self.suggestions.len();
        match key {
            Key::ArrowDown => {
                self.active = match (self.active, len) {
                    (_, 0) => None,
                    (None, _) => Some(0),
                    (Some(i), _) => Some((i + 1).min(len - 1)),
                };
                false
            }
            Key::ArrowUp => {
                self.active = match (self.active, len) {
                    (_, 0) => None,
                    (None, _) => Some(0),
                    (Some(i), _) => Some(i.saturating_sub(1).min(len - 1)),
                };
                false
            }
            Key::Enter => match self.active {
                Some(i) => self.select_suggestion(i),
                None => false,
            },
            Key::Escape => {
                self.close_suggestions();
                false
            }
            Key::Other => false,
        }
    }

    /// Commit suggestion `index` (click, or Enter on the highlighted entry).
    ///
    /// The query becomes that exact city name and the list closes. A commit
    /// changes the query, so the page returns to 1. Out-of-range indexes
    /// (including any index into an empty list) are a no-op.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(city) = self.suggestions.get(index).cloned() else {
            return false;
        };
        debug!(%city, "suggestion committed");
        self.query = city;
        self.page.reset();
        self.close_suggestions();
        true
    }

    pub fn close_suggestions(&mut self) {
        self.suggestions.clear();
        self.active = None;
    }

    // ------------------------------------------------------------------
    // Sort + pages
    // ------------------------------------------------------------------

    /// Change the ordering. The current page is kept; the match count does
    /// not change with the ordering.
    pub fn set_sort(&mut self, option: SortOption) {
        debug!(sort = %option, "sort changed");
        self.sort = option;
    }

    /// Select a page, clamped to the pages that exist. Returns the page
    /// actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        let count = self.filtered().len();
        let selected = self.page.select(page, count);
        if selected != page {
            debug!(requested = page, selected, "page request clamped");
        }
        selected
    }

    pub fn current_page(&self) -> usize {
        self.page.current(self.filtered().len())
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.filtered().len())
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    pub fn filtered(&self) -> Vec<&Listing> {
        filter_listings(self.catalog.listings(), &self.query)
    }

    pub fn sorted(&self) -> Vec<&Listing> {
        sort_listings(&self.filtered(), self.sort)
    }

    /// The listings on the current page, in display order.
    pub fn visible(&self) -> Vec<&Listing> {
        if self.phase != Phase::Ready {
            return Vec::new();
        }
        let sorted = self.sorted();
        let page = self.page.current(sorted.len());
        paginate(&sorted, page, self.page.items_per_page()).to_vec()
    }

    /// Render the current state.
    pub fn view(&self) -> PageView<'_> {
        let sorted = self.sorted();
        let total_matches = sorted.len();
        let total_pages = self.page.total_pages(total_matches);
        let current_page = self.page.current(total_matches);
        let loading = self.phase == Phase::Loading;

        let listings = if self.phase == Phase::Ready {
            paginate(&sorted, current_page, self.page.items_per_page())
                .iter()
                .map(|&l| ListingCard::new(l, self.bookings.state(&l.id)))
                .collect()
        } else {
            Vec::new()
        };

        let pages = if self.phase == Phase::Ready && total_pages > 1 {
            (1..=total_pages).collect()
        } else {
            Vec::new()
        };

        PageView {
            query: &self.query,
            suggestions: &self.suggestions,
            active_suggestion: self.active,
            sort: self.sort,
            loading,
            placeholders: if loading { SKELETON_PLACEHOLDERS } else { 0 },
            listings,
            current_page,
            total_pages,
            total_matches,
            pages,
            no_results: !loading && total_matches == 0,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// The loading delay elapsed. Ignored unless still loading, so a delay
    /// firing after [`SearchSession::dispose`] changes nothing.
    pub fn finish_loading(&mut self) -> bool {
        if self.phase != Phase::Loading {
            trace!(phase = ?self.phase, "loading completion ignored");
            return false;
        }
        debug!(listings = self.catalog.len(), "listings ready");
        self.phase = Phase::Ready;
        true
    }

    pub fn dispose(&mut self) {
        debug!("session disposed");
        self.phase = Phase::Disposed;
    }

    // ------------------------------------------------------------------
    // Booking
    // ------------------------------------------------------------------

    pub fn booking_state(&self, id: &ListingId) -> BookingState {
        self.bookings.state(id)
    }

    pub fn bookings(&self) -> &Bookings {
        &self.bookings
    }

    pub fn request_booking(&mut self, id: &ListingId) -> Option<BookingPrompt> {
        let listing = self.catalog.get(id)?;
        self.bookings.request(listing)
    }

    pub fn confirm_booking<N: Notifier + ?Sized>(&mut self, id: &ListingId, notifier: &mut N) -> bool {
        match self.catalog.get(id) {
            Some(listing) => self.bookings.confirm(listing, notifier),
            None => false,
        }
    }

    pub fn cancel_booking(&mut self, id: &ListingId) -> bool {
        match self.catalog.get(id) {
            Some(listing) => self.bookings.cancel(listing),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::RecordingNotifier;

    fn catalog(n: usize) -> Catalog {
        let cities = ["Lahore", "Karachi", "Multan", "Quetta"];
        let listings = (0..n)
            .map(|i| {
                Listing::new(
                    i.to_string().as_str(),
                    cities[i % 4],
                    cities[(i + 1) % 4],
                    "General",
                    format!("{} kg", 100 + i),
                    format!("2024-01-{:02}", 1 + i % 28),
                )
            })
            .collect();
        Catalog::from_listings(listings).unwrap()
    }

    fn ready(n: usize) -> SearchSession {
        SearchSession::new(catalog(n), SearchConfig::immediate())
    }

    #[test]
    fn query_edit_resets_page_to_one() {
        let mut s = ready(30);
        assert_eq!(s.set_page(3), 3);
        s.set_query("a");
        assert_eq!(s.current_page(), 1);
    }

    #[test]
    fn arrow_keys_stay_within_the_list() {
        let mut s = ready(8);
        s.set_query("a"); // Lahore, Karachi, Multan, Quetta
        assert_eq!(s.suggestions().len(), 4);
        assert_eq!(s.active_index(), None);

        s.key_down(Key::ArrowUp);
        assert_eq!(s.active_index(), Some(0));
        for _ in 0..10 {
            s.key_down(Key::ArrowDown);
        }
        assert_eq!(s.active_index(), Some(3));
        s.key_down(Key::ArrowUp);
        assert_eq!(s.active_index(), Some(2));
    }

    #[test]
    fn arrow_keys_on_empty_list_keep_nothing_highlighted() {
        let mut s = ready(8);
        s.set_query("zzz");
        s.key_down(Key::ArrowDown);
        s.key_down(Key::ArrowUp);
        assert_eq!(s.active_index(), None);
        assert!(!s.key_down(Key::Enter));
    }

    #[test]
    fn enter_commits_highlighted_suggestion() {
        let mut s = ready(8);
        s.set_query("ult");
        s.key_down(Key::ArrowDown);
        assert!(s.key_down(Key::Enter));
        assert_eq!(s.query(), "Multan");
        assert!(s.suggestions().is_empty());
        assert_eq!(s.active_index(), None);
    }

    #[test]
    fn enter_without_highlight_is_noop() {
        let mut s = ready(8);
        s.set_query("ult");
        assert!(!s.key_down(Key::Enter));
        assert_eq!(s.query(), "ult");
    }

    #[test]
    fn editing_after_navigation_resets_highlight() {
        let mut s = ready(8);
        s.set_query("a");
        s.key_down(Key::ArrowDown);
        s.key_down(Key::ArrowDown);
        s.set_query("qu");
        assert_eq!(s.active_index(), None);
        assert_eq!(s.suggestions(), ["Quetta"]);
    }

    #[test]
    fn escape_closes_suggestions_but_keeps_query() {
        let mut s = ready(8);
        s.set_query("kar");
        s.key_down(Key::Escape);
        assert!(s.suggestions().is_empty());
        assert_eq!(s.query(), "kar");
    }

    #[test]
    fn loading_hides_listings_until_finished() {
        let mut s = SearchSession::new(catalog(12), SearchConfig::default());
        let view = s.view();
        assert!(view.loading);
        assert_eq!(view.placeholders, 6);
        assert!(view.listings.is_empty());
        assert!(view.pages.is_empty());
        assert!(!view.no_results);

        assert!(s.finish_loading());
        let view = s.view();
        assert!(!view.loading);
        assert_eq!(view.listings.len(), 9);
        assert_eq!(view.pages, [1, 2]);
    }

    #[test]
    fn finish_after_dispose_is_suppressed() {
        let mut s = SearchSession::new(catalog(3), SearchConfig::default());
        s.dispose();
        assert!(!s.finish_loading());
        assert_eq!(s.phase(), Phase::Disposed);
    }

    #[test]
    fn disposed_view_shows_no_page_buttons() {
        let mut s = ready(12);
        assert_eq!(s.view().pages, [1, 2]);
        s.dispose();
        let view = s.view();
        assert!(!view.loading);
        assert!(view.listings.is_empty());
        assert!(view.pages.is_empty());
    }

    #[test]
    fn no_results_view() {
        let mut s = ready(5);
        s.set_query("Gwadar");
        let view = s.view();
        assert!(view.no_results);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn view_is_idempotent() {
        let mut s = ready(20);
        s.set_query("la");
        s.set_sort(SortOption::WeightDesc);
        let a = serde_json::to_string(&s.view()).unwrap();
        let b = serde_json::to_string(&s.view()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn booking_unknown_listing_is_ignored() {
        let mut s = ready(2);
        let mut toasts = RecordingNotifier::default();
        let ghost = ListingId::new("404");
        assert!(s.request_booking(&ghost).is_none());
        assert!(!s.confirm_booking(&ghost, &mut toasts));
        assert!(toasts.messages.is_empty());
    }
}
