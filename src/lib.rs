//! Workspace umbrella crate: re-exports `loadboard-core` so the demos can
//! `use loadboard_rs::prelude::*`.
pub use loadboard_core::*;
