//! Rotating, one-at-a-time testimonial display.
//!
//! `CarouselState` owns the cached list, the current index and the loading flag.
//! All changes go through the transition methods below so the clamping and
//! wrap-around rules hold no matter which UI drives them:
//!
//! - `current` is always a valid index into `items`, or `0` when `items` is empty.
//! - previous/next wrap around in both directions.
//! - a fetch result is only applied if it belongs to the latest fetch of a widget
//!   that is still active; anything else is discarded untouched.

use crate::model::testimonial::Testimonial;
use crate::repository::RepositoryError;

/// Identifies one fetch. Only the most recent ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
    Applied,
    Discarded,
}

/// What the display should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselDisplay<'a> {
    Placeholder,
    Showing(&'a Testimonial),
}

#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    items: Vec<Testimonial>,
    current: usize,
    is_loading: bool,
    load_error: Option<RepositoryError>,
    active: bool,
    generation: u64,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Testimonial] {
        &self.items
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Last list failure. The display still shows the placeholder; this only lets
    /// callers tell "nothing yet" apart from "could not load".
    pub fn load_error(&self) -> Option<&RepositoryError> {
        self.load_error.as_ref()
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Tears the widget down: any fetch still in flight will be discarded.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn on_fetch_start(&mut self) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.is_loading = true;
        FetchTicket(self.generation)
    }

    pub fn on_fetch_success(&mut self, ticket: FetchTicket, items: Vec<Testimonial>) -> FetchDisposition {
        if !self.accepts(ticket) {
            return self.on_fetch_discarded(ticket);
        }
        self.load_error = None;
        self.finish_fetch(items);
        FetchDisposition::Applied
    }

    /// A failed list shows exactly like an empty one; the error is kept aside.
    pub fn on_fetch_failure(&mut self, ticket: FetchTicket, error: RepositoryError) -> FetchDisposition {
        if !self.accepts(ticket) {
            return self.on_fetch_discarded(ticket);
        }
        self.load_error = Some(error);
        self.finish_fetch(Vec::new());
        FetchDisposition::Applied
    }

    pub fn on_fetch_result(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Testimonial>, RepositoryError>,
    ) -> FetchDisposition {
        match result {
            Ok(items) => self.on_fetch_success(ticket, items),
            Err(error) => self.on_fetch_failure(ticket, error),
        }
    }

    /// A stale or orphaned result: state is left exactly as it was.
    pub fn on_fetch_discarded(&mut self, _ticket: FetchTicket) -> FetchDisposition {
        FetchDisposition::Discarded
    }

    /// Applies a list obtained outside the mount fetch (the refresh after a
    /// successful submission). It supersedes any fetch still in flight.
    pub fn on_refresh(&mut self, result: Result<Vec<Testimonial>, RepositoryError>) -> FetchDisposition {
        if !self.active {
            return FetchDisposition::Discarded;
        }
        let ticket = self.on_fetch_start();
        self.on_fetch_result(ticket, result)
    }

    pub fn previous(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.current = if self.current == 0 { len - 1 } else { self.current - 1 };
    }

    pub fn next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.current = if self.current + 1 >= len { 0 } else { self.current + 1 };
    }

    /// Jumps straight to `index`. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Keyboard navigation while the carousel has focus.
    /// Whether `key` is one the carousel handles, so the host can stop the
    /// browser from also scrolling the page.
    pub fn handles_key(key: &str) -> bool {
        matches!(key, "ArrowLeft" | "ArrowRight")
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" if !self.items.is_empty() => {
                self.previous();
                true
            }
            "ArrowRight" if !self.items.is_empty() => {
                self.next();
                true
            }
            _ => false,
        }
    }

    pub fn display(&self) -> CarouselDisplay<'_> {
        if self.is_loading {
            return CarouselDisplay::Placeholder;
        }
        match self.items.get(self.current) {
            Some(testimonial) => CarouselDisplay::Showing(testimonial),
            None => CarouselDisplay::Placeholder,
        }
    }

    pub fn navigation_enabled(&self) -> bool {
        !self.is_loading && !self.items.is_empty()
    }

    pub fn count_label(&self) -> String {
        if self.is_loading {
            return "Loading...".to_string();
        }
        let count = self.items.len();
        format!("{} testimonial{}", count, if count == 1 { "" } else { "s" })
    }

    fn accepts(&self, ticket: FetchTicket) -> bool {
        self.active && ticket.0 == self.generation
    }

    fn finish_fetch(&mut self, items: Vec<Testimonial>) {
        self.items = items;
        self.is_loading = false;
        self.clamp();
    }

    fn clamp(&mut self) {
        if self.items.is_empty() {
            self.current = 0;
        } else if self.current >= self.items.len() {
            self.current = self.items.len() - 1;
        }
    }
}
