//! Basic usage example for loadboard-rs
//!
//! This example demonstrates how to:
//! - Load the embedded listings catalog
//! - Filter, autocomplete, sort and paginate
//! - Book a load through the event controller

use loadboard_rs::prelude::*;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    println!("=== loadboard-rs Basic Usage Example ===\n");

    println!("Loading listings...");
    let catalog = Catalog::load_default()?;
    println!("✓ {} listings loaded\n", catalog.len());

    // Example 1: statistics
    println!("--- Example 1: Catalog statistics ---");
    let stats = catalog.stats();
    println!("Cities: {}", stats.cities);
    println!("Cargo types: {}", stats.cargo_types);
    println!();

    // Example 2: autocomplete
    println!("--- Example 2: Suggestions for 'la' ---");
    for city in catalog.suggest("la", 5) {
        println!("- {city}");
    }
    println!();

    // Example 3: filter + sort
    println!("--- Example 3: Loads touching Karachi, heaviest first ---");
    for listing in catalog.filter_sorted("karachi", SortOption::WeightDesc) {
        println!(
            "#{} {} ➜ {} ({})",
            listing.id,
            listing.origin,
            listing.destination,
            listing.weight.text()
        );
    }
    println!();

    // Example 4: an interactive session driven by events
    println!("--- Example 4: Session with a loading phase ---");
    let start = Instant::now();
    let session = SearchSession::new(catalog.clone(), SearchConfig::default());
    let mut controller = Controller::new(
        session,
        RecordingNotifier::default(),
        FixedPrompt(Decision::Confirm),
        start,
    );
    println!("Skeleton cards: {}", controller.session().view().placeholders);

    controller.poll_timers(start + Duration::from_secs(1));
    controller.dispatch(Event::QueryChanged("lah".into()));
    controller.dispatch(Event::KeyDown(Key::ArrowDown));
    controller.dispatch(Event::KeyDown(Key::Enter));
    controller.dispatch(Event::SortChanged(SortOption::DateAsc));
    controller.run_pending();

    let view = controller.session().view();
    println!(
        "Query '{}': {} matches on {} page(s)",
        view.query, view.total_matches, view.total_pages
    );
    for card in &view.listings {
        println!("  {} ➜ {} | Pickup: {}", card.origin, card.destination, card.pickup);
    }
    println!();

    // Example 5: booking
    println!("--- Example 5: Booking ---");
    let id = ListingId::new("1");
    controller.handle(Event::BookRequested(id.clone()));
    println!("State: {:?}", controller.session().booking_state(&id));
    for (severity, message) in &controller.notifier().messages {
        println!("  [{severity:?}] {message}");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
