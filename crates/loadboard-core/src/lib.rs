// crates/loadboard-core/src/lib.rs

//! # loadboard-core
//!
//! An in-memory freight load catalog plus the interactive search pipeline
//! that sits on top of it:
//!
//! ```text
//! listings ──► filter ──► sort ──► paginate ──► PageView
//!     │
//!     └──► suggest (autocomplete side-branch)
//! ```
//!
//! The pipeline stages are pure functions ([`search`], [`sort`],
//! [`paginate`]). [`SearchSession`] owns the interactive state (query,
//! suggestions, sort option, page, per-listing booking state) and
//! [`Controller`] drives a session from a single-threaded event queue.
//!
//! ```rust
//! use loadboard_core::prelude::*;
//!
//! let catalog = Catalog::load_default()?;
//! let mut session = SearchSession::new(catalog, SearchConfig::immediate());
//!
//! session.set_query("lah");
//! session.set_sort(SortOption::WeightAsc);
//! let view = session.view();
//! assert!(view.listings.iter().all(|card| card.origin == "Lahore"
//!     || card.destination == "Lahore"));
//! # Ok::<(), loadboard_core::CatalogError>(())
//! ```

pub mod api; // Serializable views for front ends
pub mod booking;
pub mod collab; // Navigation / notification / confirmation collaborators
pub mod common;
pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod loader;
pub mod model;
pub mod paginate;
pub mod prelude;
// Shared Raw Input (JSON ingestion boundary)
#[doc(hidden)]
pub mod raw;
pub mod routes;
pub mod search;
pub mod session;
pub mod sort;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{CatalogError, Result};
pub use crate::common::CatalogStats;
pub use crate::config::SearchConfig;
pub use crate::controller::{Controller, Event};
pub use crate::model::{Catalog, Listing, ListingId, PickupDate, Weight};
pub use crate::session::{Key, Phase, SearchSession};
pub use crate::sort::SortOption;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::CatalogSearch;
