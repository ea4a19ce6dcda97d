//! loadboard-cli
//! =============
//!
//! Command-line front end for the `loadboard-core` load search pipeline.
//!
//! This crate primarily provides a binary (`loadboard`). The small library
//! target exists so the crate gets a rendered documentation page with this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! loadboard --help
//! loadboard stats
//! loadboard search lahore --sort weight-asc
//! loadboard suggest la
//! loadboard book 2 --yes
//! loadboard --input my-loads.json --delay-ms 1000 search
//! ```
//!
//! Set `RUST_LOG=loadboard_core=trace` (or pass `-v`) to watch the session's
//! state transitions on stderr.
//!
//! For programmatic access use [`loadboard-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
