use loadboard_core::booking::BookingState;
use loadboard_core::collab::{Decision, FixedPrompt, RecordingNavigator, RecordingNotifier, Severity};
use loadboard_core::forms::LoginForm;
use loadboard_core::paginate::paginate;
use loadboard_core::routes::Route;
use loadboard_core::search::{filter_listings, suggest_cities};
use loadboard_core::sort::sort_listings;
use loadboard_core::{
    Catalog, CatalogError, CatalogSearch, Controller, Event, Key, Listing, ListingId, Phase,
    SearchConfig, SearchSession, SortOption,
};
use std::time::{Duration, Instant};

fn lahore_karachi() -> Catalog {
    Catalog::from_listings(vec![
        Listing::new("1", "Lahore", "Karachi", "Electronics", "500 kg", "2024-01-05"),
        Listing::new("2", "Karachi", "Lahore", "Textiles", "200 kg", "2024-02-10"),
    ])
    .unwrap()
}

/// `n` listings, all leaving Lahore, with distinct weights and dates.
fn numbered(n: usize) -> Catalog {
    let listings = (1..=n)
        .map(|i| {
            Listing::new(
                i.to_string(),
                "Lahore",
                "Multan",
                "Rice",
                format!("{} kg", i * 100),
                format!("2024-01-{:02}", i),
            )
        })
        .collect();
    Catalog::from_listings(listings).unwrap()
}

fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.to_string()).collect()
}

#[test]
fn lahore_query_weight_ascending() {
    let mut session = SearchSession::new(lahore_karachi(), SearchConfig::immediate());
    session.set_query("Lahore");
    session.set_sort(SortOption::WeightAsc);

    let view = session.view();
    let weights: Vec<_> = view.listings.iter().map(|c| c.weight).collect();
    assert_eq!(weights, ["200 kg", "500 kg"]);
    assert_eq!(view.total_pages, 1);
    assert!(view.pages.is_empty());
}

#[test]
fn twelve_listings_make_two_pages() {
    let mut session = SearchSession::new(numbered(12), SearchConfig::immediate());
    assert_eq!(session.total_pages(), 2);
    assert_eq!(session.visible().len(), 9);

    assert_eq!(session.set_page(2), 2);
    let view = session.view();
    assert_eq!(view.listings.len(), 3);
    assert_eq!(view.pages, [1, 2]);
}

#[test]
fn changing_page_keeps_filter_and_sort_results() {
    let mut session = SearchSession::new(numbered(20), SearchConfig::immediate());
    session.set_query("lah");
    session.set_sort(SortOption::WeightDesc);

    let sorted_before = ids(&session.sorted());
    let matches_before = session.view().total_matches;
    let first_page = ids(&session.visible());

    assert_eq!(session.set_page(2), 2);
    assert_eq!(ids(&session.sorted()), sorted_before);
    assert_eq!(session.view().total_matches, matches_before);
    assert_eq!(session.sort(), SortOption::WeightDesc);
    assert_ne!(ids(&session.visible()), first_page);
}

#[test]
fn editing_the_query_returns_to_page_one() {
    let mut session = SearchSession::new(numbered(30), SearchConfig::immediate());
    session.set_page(3);
    assert_eq!(session.current_page(), 3);

    session.set_query("lah");
    assert_eq!(session.current_page(), 1);
}

#[test]
fn filter_is_a_subset_matching_the_predicate() {
    let catalog = Catalog::load_default().unwrap();
    let all = filter_listings(catalog.listings(), "");
    assert_eq!(all.len(), catalog.len());

    for query in ["kar", "ISL", "a", "zzz"] {
        let q = query.to_lowercase();
        for l in catalog.filter(query) {
            assert!(
                l.origin.to_lowercase().contains(&q) || l.destination.to_lowercase().contains(&q),
                "{} does not match {query}",
                l.id
            );
        }
    }
}

#[test]
fn suggestions_are_bounded_and_unique() {
    let catalog = Catalog::load_default().unwrap();
    for query in ["a", "r", "la", "k"] {
        let s = suggest_cities(catalog.listings(), query, 5);
        assert!(s.len() <= 5);
        let mut dedup = s.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), s.len(), "duplicates for {query}: {s:?}");
    }
    assert!(catalog.suggest("", 5).is_empty());
}

#[test]
fn date_sorts_are_idempotent_and_mirrored() {
    let catalog = Catalog::load_default().unwrap();
    let all: Vec<&Listing> = catalog.listings().iter().collect();

    let asc = sort_listings(&all, SortOption::DateAsc);
    assert_eq!(ids(&sort_listings(&asc, SortOption::DateAsc)), ids(&asc));

    let mut desc = sort_listings(&all, SortOption::DateDesc);
    desc.reverse();
    assert_eq!(ids(&desc), ids(&asc));
}

#[test]
fn pages_are_nine_wide_except_the_last() {
    let catalog = numbered(20);
    let all: Vec<&Listing> = catalog.listings().iter().collect();
    let sizes: Vec<usize> = (1..=3).map(|p| paginate(&all, p, 9).len()).collect();
    assert_eq!(sizes, [9, 9, 2]);
}

#[test]
fn keyboard_flow_through_the_controller() {
    let start = Instant::now();
    let session = SearchSession::new(lahore_karachi(), SearchConfig::default());
    let mut c = Controller::new(
        session,
        RecordingNotifier::default(),
        FixedPrompt(Decision::Confirm),
        start,
    );
    assert_eq!(c.session().view().placeholders, 6);

    c.poll_timers(start + Duration::from_millis(1000));
    c.dispatch(Event::QueryChanged("kar".into()));
    c.dispatch(Event::KeyDown(Key::ArrowDown));
    c.dispatch(Event::KeyDown(Key::Enter));
    c.run_pending();

    assert_eq!(c.session().phase(), Phase::Ready);
    assert_eq!(c.session().query(), "Karachi");
    assert_eq!(c.session().view().total_matches, 2);
}

#[test]
fn booking_confirm_and_cancel() {
    let start = Instant::now();
    let session = SearchSession::new(lahore_karachi(), SearchConfig::immediate());
    let mut confirmed = Controller::new(
        session,
        RecordingNotifier::default(),
        FixedPrompt(Decision::Confirm),
        start,
    );
    confirmed.handle(Event::BookRequested(ListingId::new("1")));
    let card_state = confirmed.session().booking_state(&ListingId::new("1"));
    assert_eq!(card_state, BookingState::Booked);
    assert!(!card_state.can_book());
    assert_eq!(
        confirmed.notifier().messages,
        [(Severity::Success, "Load from Lahore ➜ Karachi booked!".to_string())]
    );

    let session = SearchSession::new(lahore_karachi(), SearchConfig::immediate());
    let mut cancelled = Controller::new(
        session,
        RecordingNotifier::default(),
        FixedPrompt(Decision::Cancel),
        start,
    );
    cancelled.handle(Event::BookRequested(ListingId::new("1")));
    assert_eq!(
        cancelled.session().booking_state(&ListingId::new("1")),
        BookingState::Unbooked
    );
    assert!(cancelled.notifier().messages.is_empty());
}

#[test]
fn valid_login_lands_on_loads() {
    let mut form = LoginForm::new("ali@cargo.pk", "secret1");
    let mut toasts = RecordingNotifier::default();
    let mut nav = RecordingNavigator::default();
    form.submit(&mut toasts, &mut nav).unwrap();
    assert_eq!(nav.history, [Route::Loads]);
    assert_eq!(toasts.messages[0].1, "Logged in successfully!");
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::from_json_str(
        r#"[{"id": 1, "origin": "A", "destination": "B"},
            {"id": "1", "origin": "C", "destination": "D"}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
}
