//! Dropdown view
//!
//! Presenter implementation that keeps what the dashboard should draw. The
//! shortcut sections are hidden for as long as the dropdown is visible.

use crate::suggest::Presenter;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropdownView {
    rows: Vec<String>,
    selected: Option<usize>,
    visible: bool,
}

impl DropdownView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Favourites and top sites are drawn only while the dropdown is hidden
    pub fn sections_hidden(&self) -> bool {
        self.visible
    }
}

impl Presenter for DropdownView {
    fn render(&mut self, items: &[String]) {
        self.rows = items.to_vec();
    }

    fn highlight(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
    }
}
