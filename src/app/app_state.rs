use std::sync::mpsc;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use super::dropdown::DropdownView;
use crate::config::{Config, Shortcut};
use crate::layout::LayoutRegions;
use crate::search::{Engine, SearchMode, search_url};
use crate::suggest::{FetchHandle, InputField, SearchCallback, Suggestions};

/// Application state
pub struct App {
    pub input: TextArea<'static>,
    pub suggestions: Suggestions<DropdownView>,
    pub mode: SearchMode,
    pub engine: Engine,
    pub favourites: Vec<Shortcut>,
    pub top_sites: Vec<Shortcut>,
    pub layout_regions: LayoutRegions,
    /// Texts committed from the dropdown with the pointer
    pointer_searches: mpsc::Receiver<String>,
    /// Destination picked by the user, printed on exit
    output: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create the dashboard around a running suggestion worker
    pub fn new(config: &Config, fetcher: FetchHandle) -> Self {
        let mut input = TextArea::default();
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        // Remove default underline from cursor line
        input.set_cursor_line_style(Style::default());
        input.set_placeholder_text("Search the web");

        let (search_tx, pointer_searches) = mpsc::channel();
        let on_search: SearchCallback = Box::new(move |text: &str| {
            let _ = search_tx.send(text.to_string());
        });

        Self {
            input,
            suggestions: Suggestions::init(
                fetcher,
                config.suggestions.debounce_ms,
                DropdownView::new(),
                Some(on_search),
            ),
            mode: config.search.mode,
            engine: config.search.engine,
            favourites: config.favourites.clone(),
            top_sites: config.top_sites.clone(),
            layout_regions: LayoutRegions::new(),
            pointer_searches,
            output: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// URL the user chose, if any
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Current text of the search box
    pub fn query(&self) -> String {
        self.input.value()
    }

    pub fn dropdown(&self) -> &DropdownView {
        self.suggestions.presenter()
    }

    /// Redirect to the configured engine with the current input
    ///
    /// Blank input does nothing.
    pub fn search_now(&mut self) {
        self.suggestions.hide();
        let query = self.query();
        if let Some(url) = search_url(&query, self.mode, self.engine) {
            log::debug!("Searching {:?} in {} mode", query, self.mode);
            self.open(url);
        }
    }

    /// Run searches queued by pointer commits
    pub(super) fn drain_pointer_searches(&mut self) {
        while let Ok(text) = self.pointer_searches.try_recv() {
            if let Some(url) = search_url(&text, self.mode, self.engine) {
                self.open(url);
            }
        }
    }

    pub(super) fn open(&mut self, url: String) {
        self.output = Some(url);
        self.should_quit = true;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Empty the input and close the dropdown
    pub fn clear_input(&mut self) {
        self.input.set_value("");
        self.suggestions.hide();
    }
}

impl InputField for TextArea<'static> {
    fn value(&self) -> String {
        self.lines().join(" ")
    }

    /// Replace the whole text, leaving the yank buffer as the user left it
    fn set_value(&mut self, text: &str) {
        let yank = self.yank_text();
        self.select_all();
        self.cut();
        self.set_yank_text(yank);
        self.insert_str(text);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
