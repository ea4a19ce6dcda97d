use clap::{Parser, Subcommand};
use loadboard_core::forms::Role;
use loadboard_core::SortOption;

/// CLI arguments for the `loadboard` binary
#[derive(Debug, Parser)]
#[command(
    name = "loadboard",
    version,
    about = "Search, sort and book freight loads from the terminal"
)]
pub struct CliArgs {
    /// Path to a listings JSON file (default: the fixture embedded in loadboard-core)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Simulated loading delay in milliseconds before listings are shown
    #[arg(long = "delay-ms", global = true, default_value_t = 0)]
    pub delay_ms: u64,

    /// Log state transitions (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded listings
    Stats,

    /// Filter listings by city and print one page of results
    Search {
        /// Substring matched against origin and destination (case-insensitive)
        query: Option<String>,

        /// One of: date-desc, date-asc, weight-desc, weight-asc
        #[arg(short = 's', long = "sort", default_value = "none")]
        sort: SortOption,

        /// 1-based page number; out-of-range values are clamped
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,
    },

    /// Show city suggestions for a partial query
    Suggest {
        query: String,
    },

    /// Book a load by id
    Book {
        /// Listing id (e.g. 3)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Validate login credentials (client-side only)
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Validate a signup form (client-side only)
    Signup {
        #[arg(long)]
        email: String,
        /// Non-digits are dropped; 11 digits are required
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        /// shipper or driver
        #[arg(long, default_value = "shipper")]
        role: Role,
    },
}
