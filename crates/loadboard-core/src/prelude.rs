//! loadboard prelude: bring common types and traits into scope for front ends and demos.

#![allow(unused_imports)]

pub use crate::api::{ListingCard, PageView};
pub use crate::booking::{BookingPrompt, BookingState};
pub use crate::collab::{
    ConfirmDialog, ConfirmPrompt, Decision, FixedPrompt, Navigator, Notifier, RecordingNavigator,
    RecordingNotifier, Severity,
};
pub use crate::config::SearchConfig;
pub use crate::controller::{Controller, Event};
pub use crate::error::{CatalogError, Result};
pub use crate::forms::{Field, FieldErrors, LoginForm, Role, SignupForm};
pub use crate::model::{Catalog, Listing, ListingId};
pub use crate::routes::Route;
pub use crate::session::{Key, Phase, SearchSession};
pub use crate::sort::SortOption;
pub use crate::traits::{CatalogSearch, RouteMatch};
