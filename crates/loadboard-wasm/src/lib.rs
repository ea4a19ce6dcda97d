//! loadboard-wasm: WebAssembly bindings for loadboard-core
//!
//! This crate exposes a `LoadBoard` handle that a browser page drives with
//! raw UI input (query edits, key names, clicks, select values). Every call
//! goes through the same [`SearchSession`] the terminal front end uses, and
//! the page re-renders from [`LoadBoard::view`].
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `new LoadBoard(delayMs)` over the embedded fixture, or
//!   `LoadBoard.fromJson(json, delayMs)` over caller-supplied listings
//! - Input handlers: `setQuery`, `keyDown`, `selectSuggestion`, `setSort`,
//!   `setPage`, `book`, `confirmBooking`, `cancelBooking`
//! - Lifecycle: `finishLoading`, `poll`, `dispose`
//! - `view()` returning a JSON-serializable snapshot of the page
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { LoadBoard } from 'loadboard-wasm';
//!
//! await init();
//! const board = new LoadBoard(1000);
//! setTimeout(() => { board.finishLoading(); render(board.view()); }, board.loadingDelayMs());
//!
//! input.oninput = (e) => { board.setQuery(e.target.value); render(board.view()); };
//! input.onkeydown = (e) => { board.keyDown(e.key); render(board.view()); };
//! ```
//!
//! Notes
//! -----
//! - Booking is two-step: `book(id)` returns the confirmation text for the
//!   page's modal, and the modal answers with `confirmBooking` or
//!   `cancelBooking`. Toasts are collected and drained with
//!   `takeNotifications()`.
//! - Methods returning `JsValue` only work on `wasm32`; the `*_json`
//!   variants return plain strings.
use loadboard_core::booking::CONFIRM_TITLE;
use loadboard_core::collab::{Notifier, Severity};
use loadboard_core::forms::{validate_field, Field};
use loadboard_core::session::Key;
use loadboard_core::{Catalog, ListingId, SearchConfig, SearchSession, SortOption};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use std::time::Duration;
use wasm_bindgen::prelude::*;

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or_default()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing loadboard WASM module...");

    // Parse the embedded fixture once so the first LoadBoard is instant.
    match Catalog::load_default() {
        Ok(catalog) => log(&format!("✓ Loaded {} listings", catalog.len())),
        Err(e) => web_sys::console::error_1(&format!("loadboard: {e}").into()),
    }
}

/* --------------------------------------------------------------------------
   Notifications
-------------------------------------------------------------------------- */

#[derive(Debug, Clone, Serialize)]
struct Toast {
    severity: Severity,
    message: String,
}

/// Keeps toasts until the page drains them, echoing each to the console.
#[derive(Debug, Default)]
struct ToastQueue(Vec<Toast>);

impl Notifier for ToastQueue {
    fn notify(&mut self, severity: Severity, message: &str) {
        log(message);
        self.0.push(Toast {
            severity,
            message: message.to_string(),
        });
    }
}

/* --------------------------------------------------------------------------
   Session handle
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct LoadBoard {
    session: SearchSession,
    toasts: ToastQueue,
    started_ms: f64,
}

#[wasm_bindgen]
impl LoadBoard {
    /// A session over the embedded fixture. `delay_ms` defaults to 1000.
    #[wasm_bindgen(constructor)]
    pub fn new(delay_ms: Option<u32>) -> Result<LoadBoard, JsError> {
        let catalog = Catalog::load_default().map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self::with_catalog(catalog, delay_ms))
    }

    /// A session over listings supplied as a JSON array.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str, delay_ms: Option<u32>) -> Result<LoadBoard, JsError> {
        let catalog = Catalog::from_json_str(json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self::with_catalog(catalog, delay_ms))
    }

    #[wasm_bindgen(js_name = loadingDelayMs)]
    pub fn loading_delay_ms(&self) -> u32 {
        u32::try_from(self.session.config().loading_delay.as_millis()).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// Finish loading if the delay has elapsed since construction. For pages
    /// that poll from `requestAnimationFrame` instead of arming a timeout.
    pub fn poll(&mut self) -> bool {
        if !self.session.is_loading() {
            return false;
        }
        if now_ms() - self.started_ms >= f64::from(self.loading_delay_ms()) {
            return self.session.finish_loading();
        }
        false
    }

    #[wasm_bindgen(js_name = finishLoading)]
    pub fn finish_loading(&mut self) -> bool {
        self.session.finish_loading()
    }

    /// Unmount. A pending loading timeout that fires afterwards is ignored.
    pub fn dispose(&mut self) {
        self.session.dispose();
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, value: &str) {
        self.session.set_query(value);
    }

    pub fn query(&self) -> String {
        self.session.query().to_string()
    }

    /// Handle a key by its DOM `key` name. Returns `true` when the key
    /// committed a suggestion.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.session.key_down(Key::from_name(key))
    }

    #[wasm_bindgen(js_name = selectSuggestion)]
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        self.session.select_suggestion(index)
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.session.suggestions().to_vec()
    }

    /// Highlighted suggestion, or -1 when none.
    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self) -> i32 {
        self.session
            .active_index()
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Accepts the `<select>` values (`date-desc`, `weight-asc`, ...);
    /// anything else means "no sort".
    #[wasm_bindgen(js_name = setSort)]
    pub fn set_sort(&mut self, value: &str) {
        self.session.set_sort(SortOption::from_select_value(value));
    }

    pub fn sort(&self) -> String {
        self.session.sort().as_str().to_string()
    }

    /// Select a 1-based page; returns the page actually shown.
    #[wasm_bindgen(js_name = setPage)]
    pub fn set_page(&mut self, page: usize) -> usize {
        self.session.set_page(page)
    }

    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> usize {
        self.session.current_page()
    }

    #[wasm_bindgen(js_name = totalPages)]
    pub fn total_pages(&self) -> usize {
        self.session.total_pages()
    }

    /// "Book Load" clicked. Returns the modal text, or `undefined` when the
    /// listing is unknown or already booked.
    pub fn book(&mut self, id: &str) -> Option<String> {
        self.session
            .request_booking(&ListingId::new(id))
            .map(|prompt| prompt.message)
    }

    #[wasm_bindgen(js_name = confirmBooking)]
    pub fn confirm_booking(&mut self, id: &str) -> bool {
        self.session
            .confirm_booking(&ListingId::new(id), &mut self.toasts)
    }

    #[wasm_bindgen(js_name = cancelBooking)]
    pub fn cancel_booking(&mut self, id: &str) -> bool {
        self.session.cancel_booking(&ListingId::new(id))
    }

    #[wasm_bindgen(js_name = bookingState)]
    pub fn booking_state(&self, id: &str) -> String {
        self.session
            .booking_state(&ListingId::new(id))
            .as_str()
            .to_string()
    }

    /// Drain pending toasts as `[{ severity, message }]`.
    #[wasm_bindgen(js_name = takeNotifications)]
    pub fn take_notifications(&mut self) -> Result<JsValue, JsError> {
        let toasts = std::mem::take(&mut self.toasts.0);
        to_value(&toasts).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Number of toasts not yet drained.
    #[wasm_bindgen(js_name = pendingNotifications)]
    pub fn pending_notifications(&self) -> usize {
        self.toasts.0.len()
    }

    /// Snapshot of the page as a plain JS object.
    pub fn view(&self) -> Result<JsValue, JsError> {
        to_value(&self.session.view()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Same snapshot as [`LoadBoard::view`], serialized to a JSON string.
    #[wasm_bindgen(js_name = viewJson)]
    pub fn view_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.session.view()).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl LoadBoard {
    fn with_catalog(catalog: impl Into<std::sync::Arc<Catalog>>, delay_ms: Option<u32>) -> Self {
        let mut config = SearchConfig::default();
        if let Some(ms) = delay_ms {
            config = config.with_loading_delay(Duration::from_millis(u64::from(ms)));
        }
        LoadBoard {
            session: SearchSession::new(catalog, config),
            toasts: ToastQueue::default(),
            started_ms: now_ms(),
        }
    }
}

/* --------------------------------------------------------------------------
   Free helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen(js_name = confirmTitle)]
pub fn confirm_title() -> String {
    CONFIRM_TITLE.to_string()
}

/// Statistics over the embedded fixture.
#[wasm_bindgen(js_name = getStats)]
pub fn get_stats() -> Result<JsValue, JsError> {
    let catalog = Catalog::load_default().map_err(|e| JsError::new(&e.to_string()))?;
    to_value(&catalog.stats()).map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen(js_name = getListingCount)]
pub fn get_listing_count() -> usize {
    Catalog::load_default().map(|c| c.len()).unwrap_or(0)
}

/// Validate one auth-form input (`email`, `phone` or `password`). Returns
/// the message to show under the field, or `undefined` when valid.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_form_field(field: &str, value: &str) -> Option<String> {
    let field = match field {
        "email" => Field::Email,
        "phone" => Field::Phone,
        "password" => Field::Password,
        _ => return None,
    };
    validate_field(field, value).map(str::to_string)
}
