// crates/loadboard-core/src/config.rs
use crate::paginate::ITEMS_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maximum number of autocomplete entries offered for a query.
pub const MAX_SUGGESTIONS: usize = 5;

/// Simulated data-arrival delay before listings are first shown.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_secs(1);

/// Tunables for a [`SearchSession`](crate::SearchSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub items_per_page: usize,
    pub max_suggestions: usize,
    pub loading_delay: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            items_per_page: ITEMS_PER_PAGE,
            max_suggestions: MAX_SUGGESTIONS,
            loading_delay: DEFAULT_LOADING_DELAY,
        }
    }
}

impl SearchConfig {
    /// Default settings, but listings are available without a loading phase.
    pub fn immediate() -> Self {
        Self::default().with_loading_delay(Duration::ZERO)
    }

    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }
}
