// crates/loadboard-core/src/controller.rs

//! # Event Controller
//!
//! Drives a [`SearchSession`] from a single-threaded FIFO queue. Front ends
//! translate raw input into [`Event`]s and call [`Controller::dispatch`];
//! [`Controller::run_pending`] then applies them one at a time, so no two
//! reactions ever overlap.
//!
//! Time is passed in explicitly ([`Controller::poll_timers`]) instead of being
//! read from a clock, which keeps the controller deterministic under test.

use crate::collab::{ConfirmDialog, ConfirmPrompt, Notifier};
use crate::model::ListingId;
use crate::session::{Key, SearchSession};
use crate::sort::SortOption;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, trace};

/// One discrete user (or timer) input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    QueryChanged(String),
    KeyDown(Key),
    SuggestionClicked(usize),
    SortChanged(SortOption),
    PageSelected(usize),
    LoadingElapsed,
    BookRequested(ListingId),
    BookingConfirmed(ListingId),
    BookingCancelled(ListingId),
    Dispose,
}

/// One-shot, cancellable deadline for the initial loading phase.
#[derive(Debug, Clone, Copy)]
pub struct LoadingTimer {
    deadline: Instant,
    state: TimerState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Armed,
    Fired,
    Cancelled,
}

impl LoadingTimer {
    pub fn new(deadline: Instant) -> Self {
        LoadingTimer {
            deadline,
            state: TimerState::Armed,
        }
    }

    /// `true` exactly once: the first poll at or after the deadline of a
    /// timer that was not cancelled.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == TimerState::Armed && now >= self.deadline {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        if self.state == TimerState::Armed {
            self.state = TimerState::Cancelled;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == TimerState::Armed
    }
}

pub struct Controller<N: Notifier, P: ConfirmPrompt> {
    session: SearchSession,
    queue: VecDeque<Event>,
    timer: Option<LoadingTimer>,
    notifier: N,
    prompt: P,
    disposed: bool,
}

impl<N: Notifier, P: ConfirmPrompt> Controller<N, P> {
    /// Wrap `session`. If it is still loading, a timer is armed for
    /// `started_at + loading_delay`.
    pub fn new(session: SearchSession, notifier: N, prompt: P, started_at: Instant) -> Self {
        let timer = session
            .is_loading()
            .then(|| LoadingTimer::new(started_at + session.config().loading_delay));
        Controller {
            session,
            queue: VecDeque::new(),
            timer,
            notifier,
            prompt,
            disposed: false,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Enqueue an event. Nothing happens until [`Controller::run_pending`].
    pub fn dispatch(&mut self, event: Event) {
        trace!(?event, "event queued");
        self.queue.push_back(event);
    }

    /// Fire the loading timer if its deadline has passed. Returns `true`
    /// when a [`Event::LoadingElapsed`] was enqueued.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        if self.timer.as_mut().is_some_and(|timer| timer.poll(now)) {
            self.queue.push_back(Event::LoadingElapsed);
            return true;
        }
        false
    }

    /// Drain the queue, applying events in arrival order. Events produced
    /// while draining (a dialog's answer) are applied in the same run.
    /// Returns the number of events applied.
    pub fn run_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.queue.pop_front() {
            if self.disposed {
                trace!(?event, "event dropped after dispose");
                continue;
            }
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Convenience: `dispatch` + `run_pending`.
    pub fn handle(&mut self, event: Event) -> usize {
        self.dispatch(event);
        self.run_pending()
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::QueryChanged(q) => self.session.set_query(q),
            Event::KeyDown(key) => {
                self.session.key_down(key);
            }
            Event::SuggestionClicked(i) => {
                self.session.select_suggestion(i);
            }
            Event::SortChanged(option) => self.session.set_sort(option),
            Event::PageSelected(page) => {
                self.session.set_page(page);
            }
            Event::LoadingElapsed => {
                self.session.finish_loading();
            }
            Event::BookRequested(id) => {
                let Some(prompt) = self.session.request_booking(&id) else {
                    return;
                };
                let (yes, no) = (id.clone(), id);
                let dialog = ConfirmDialog::open(
                    prompt.title,
                    prompt.message,
                    move || Event::BookingConfirmed(yes),
                    move || Event::BookingCancelled(no),
                );
                let follow_up = dialog.resolve_with(&mut self.prompt);
                self.queue.push_back(follow_up);
            }
            Event::BookingConfirmed(id) => {
                self.session.confirm_booking(&id, &mut self.notifier);
            }
            Event::BookingCancelled(id) => {
                self.session.cancel_booking(&id);
            }
            Event::Dispose => {
                if let Some(timer) = self.timer.as_mut() {
                    timer.cancel();
                }
                self.session.dispose();
                self.disposed = true;
                debug!(dropped = self.queue.len(), "controller disposed");
            }
        }
    }
}
