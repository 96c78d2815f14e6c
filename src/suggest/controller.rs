//! Suggestion controller
//!
//! Owns the debounce timer, the worker handle, the selection state and the
//! presenter. The host feeds it input edits, key and pointer events, and
//! calls `tick` from its event loop to dispatch due fetches and apply
//! finished ones.

use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use super::presenter::{InputField, Presenter};
use super::selection::{NavKey, SelectionEvent, SelectionState};
use super::worker::{FetchHandle, FetchResponse};

/// Invoked with the committed text when a row is activated with the pointer
pub type SearchCallback = Box<dyn FnMut(&str)>;

pub struct Suggestions<P: Presenter> {
    debouncer: Debouncer<String>,
    fetcher: FetchHandle,
    selection: SelectionState,
    presenter: P,
    on_search: Option<SearchCallback>,
    /// Whether the dropdown is currently shown
    visible: bool,
}

impl<P: Presenter> Suggestions<P> {
    /// Attach the subsystem to a presenter
    ///
    /// # Arguments
    /// * `fetcher` - Channel ends of a running suggestion worker
    /// * `debounce_ms` - Settle delay before a fetch is dispatched
    /// * `presenter` - Dropdown renderer; expected to start hidden
    /// * `on_search` - Optional "search now" hook for pointer commits
    pub fn init(
        fetcher: FetchHandle,
        debounce_ms: u64,
        presenter: P,
        on_search: Option<SearchCallback>,
    ) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_ms),
            fetcher,
            selection: SelectionState::new(),
            presenter,
            on_search,
            visible: false,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Time until the pending fetch is due, if one is scheduled
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// The user edited the input
    pub fn on_input(&mut self, text: &str, now: Instant) {
        if text.trim().is_empty() {
            self.debouncer.cancel();
            self.hide();
            return;
        }

        self.debouncer.schedule(text.to_string(), now);
    }

    /// Dispatch a due fetch and apply any finished ones
    ///
    /// Returns true when the dropdown changed.
    pub fn tick<I: InputField + ?Sized>(&mut self, input: &I, now: Instant) -> bool {
        if let Some(query) = self.debouncer.take_due(now)
            && !self.fetcher.dispatch(query)
        {
            log::warn!("Suggestion worker is gone; fetch not dispatched");
        }

        let mut changed = false;
        let live = input.value();
        while let Some(response) = self.fetcher.try_recv() {
            changed |= self.apply_response(response, &live);
        }
        changed
    }

    /// Apply a finished fetch if the input still holds its query
    fn apply_response(&mut self, response: FetchResponse, live: &str) -> bool {
        if response.query != live {
            log::debug!(
                "Discarding stale suggestions for {:?} (input is now {:?})",
                response.query,
                live
            );
            return false;
        }

        self.show_items(response.suggestions);
        true
    }

    fn show_items(&mut self, items: Vec<String>) {
        self.selection.replace(items);

        if !self.selection.is_open() {
            self.hide();
            return;
        }

        self.presenter.render(self.selection.items());
        self.presenter.highlight(None);
        self.visible = true;
        self.presenter.show();
    }

    /// Handle a navigation key; returns true if it was consumed
    pub fn on_key<I: InputField + ?Sized>(&mut self, key: NavKey, input: &mut I) -> bool {
        if !self.visible {
            return false;
        }

        let event = self.selection.handle_key(key);
        self.apply_event(event, input, false)
    }

    /// Pointer activation of the row at `index`
    pub fn on_pointer<I: InputField + ?Sized>(&mut self, index: usize, input: &mut I) -> bool {
        if !self.visible {
            return false;
        }

        let event = self.selection.activate(index);
        self.apply_event(event, input, true)
    }

    /// A click landed outside both the input and the dropdown
    pub fn on_click_outside(&mut self) {
        if let SelectionEvent::Closed = self.selection.dismiss() {
            self.hide();
        }
    }

    fn apply_event<I: InputField + ?Sized>(
        &mut self,
        event: SelectionEvent,
        input: &mut I,
        from_pointer: bool,
    ) -> bool {
        match event {
            SelectionEvent::Ignored => false,
            SelectionEvent::Highlighted { index, preview } => {
                self.presenter.highlight(index);
                if let Some(text) = preview {
                    input.set_value(&text);
                }
                true
            }
            SelectionEvent::Committed(text) => {
                input.set_value(&text);
                self.hide();
                if from_pointer && let Some(callback) = self.on_search.as_mut() {
                    callback(&text);
                }
                true
            }
            SelectionEvent::Closed => {
                self.hide();
                true
            }
        }
    }

    /// Close the dropdown and forget the current list
    pub fn hide(&mut self) {
        self.selection.close();
        if !self.visible {
            return;
        }
        self.visible = false;
        self.presenter.hide();
    }
}

impl<P: Presenter + std::fmt::Debug> std::fmt::Debug for Suggestions<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suggestions")
            .field("selection", &self.selection)
            .field("presenter", &self.presenter)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
