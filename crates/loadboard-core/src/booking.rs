// crates/loadboard-core/src/booking.rs
use crate::collab::{Notifier, Severity};
use crate::model::{Listing, ListingId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

pub const CONFIRM_TITLE: &str = "Confirm Booking";

/// Per-listing booking status. Local to a session, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingState {
    #[default]
    Unbooked,
    PendingConfirmation,
    /// Terminal for the rest of the session.
    Booked,
}

/// Inputs of the booking state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEvent {
    Request,
    Confirm,
    Cancel,
}

impl BookingState {
    /// The successor state, or `None` when `event` is not allowed here.
    pub fn apply(self, event: BookingEvent) -> Option<BookingState> {
        use BookingEvent::*;
        use BookingState::*;
        match (self, event) {
            (Unbooked, Request) => Some(PendingConfirmation),
            (PendingConfirmation, Confirm) => Some(Booked),
            (PendingConfirmation, Cancel) => Some(Unbooked),
            _ => None,
        }
    }

    /// Same spelling as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingState::Unbooked => "unbooked",
            BookingState::PendingConfirmation => "pendingConfirmation",
            BookingState::Booked => "booked",
        }
    }

    /// Whether the "Book" button is enabled.
    pub fn can_book(self) -> bool {
        self != BookingState::Booked
    }

    pub fn button_label(self) -> &'static str {
        match self {
            BookingState::Booked => "Load Booked",
            _ => "Book Load",
        }
    }
}

/// What the confirmation dialog should show for a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingPrompt {
    pub listing: ListingId,
    pub title: &'static str,
    pub message: String,
}

pub fn confirmation_message(listing: &Listing) -> String {
    format!(
        "Are you sure you want to book the load from {} to {}?",
        listing.origin, listing.destination
    )
}

pub fn booked_message(listing: &Listing) -> String {
    format!("Load from {} ➜ {} booked!", listing.origin, listing.destination)
}

/// Booking states for every listing of a session.
///
/// Listings that were never touched are implicitly `Unbooked`.
#[derive(Debug, Clone, Default)]
pub struct Bookings {
    states: HashMap<ListingId, BookingState>,
}

impl Bookings {
    pub fn state(&self, id: &ListingId) -> BookingState {
        self.states.get(id).copied().unwrap_or_default()
    }

    pub fn booked_count(&self) -> usize {
        self.states.values().filter(|s| **s == BookingState::Booked).count()
    }

    fn transition(&mut self, id: &ListingId, event: BookingEvent) -> Option<BookingState> {
        let current = self.state(id);
        match current.apply(event) {
            Some(next) => {
                debug!(listing = %id, from = ?current, to = ?next, "booking transition");
                self.states.insert(id.clone(), next);
                Some(next)
            }
            None => {
                warn!(listing = %id, state = ?current, event = ?event, "ignored booking event");
                None
            }
        }
    }

    /// "Book" clicked: `Unbooked → PendingConfirmation`.
    ///
    /// Returns what the confirmation dialog should display, or `None` if the
    /// listing is already pending or booked.
    pub fn request(&mut self, listing: &Listing) -> Option<BookingPrompt> {
        self.transition(&listing.id, BookingEvent::Request)?;
        Some(BookingPrompt {
            listing: listing.id.clone(),
            title: CONFIRM_TITLE,
            message: confirmation_message(listing),
        })
    }

    /// Dialog confirmed: `PendingConfirmation → Booked`, with one success
    /// notification. No booking API is called; a real backend would hook in
    /// here.
    pub fn confirm<N: Notifier + ?Sized>(&mut self, listing: &Listing, notifier: &mut N) -> bool {
        if self.transition(&listing.id, BookingEvent::Confirm).is_none() {
            return false;
        }
        notifier.notify(Severity::Success, &booked_message(listing));
        true
    }

    /// Dialog cancelled: `PendingConfirmation → Unbooked`, silently.
    pub fn cancel(&mut self, listing: &Listing) -> bool {
        self.transition(&listing.id, BookingEvent::Cancel).is_some()
    }
}
