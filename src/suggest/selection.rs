//! Selection state for the suggestion dropdown
//!
//! Pure state: owns the current suggestion list and the highlighted index.
//! It never touches the input field or the screen; callers act on the
//! returned [`SelectionEvent`].

/// Keys the dropdown reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Escape,
    Enter,
}

/// Observable phase of the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Closed,
    OpenNoSelection,
    OpenSelected(usize),
}

/// Outcome of a key or pointer event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The event was not consumed; the host should handle it
    Ignored,
    /// Highlight changed (or was re-applied); `preview` is the text to show
    /// in the input, absent when nothing is highlighted
    Highlighted {
        index: Option<usize>,
        preview: Option<String>,
    },
    /// A suggestion was chosen; the list is now closed
    Committed(String),
    /// The list was dismissed without choosing anything
    Closed,
}

/// Suggestion list plus highlighted index
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    items: Vec<String>,
    /// Currently highlighted suggestion (None = no selection)
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_index: None,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.items.is_empty(), self.selected_index) {
            (true, _) => SelectionPhase::Closed,
            (false, None) => SelectionPhase::OpenNoSelection,
            (false, Some(index)) => SelectionPhase::OpenSelected(index),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selected_index
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    /// Replace the list wholesale; the selection always resets
    pub fn replace(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected_index = None;
    }

    /// Clear the list and selection
    pub fn close(&mut self) {
        self.items.clear();
        self.selected_index = None;
    }

    /// Move the highlight down, stopping at the last suggestion
    pub fn navigate_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.selected_index = Some(match self.selected_index {
            Some(current) => (current + 1).min(last),
            None => 0,
        });
    }

    /// Move the highlight up; moving above the first suggestion clears it
    pub fn navigate_previous(&mut self) {
        self.selected_index = match self.selected_index {
            Some(0) | None => None,
            Some(current) => Some(current - 1),
        };
    }

    /// Apply a navigation key
    pub fn handle_key(&mut self, key: NavKey) -> SelectionEvent {
        if !self.is_open() {
            return SelectionEvent::Ignored;
        }

        match key {
            NavKey::Down => {
                self.navigate_next();
                self.highlighted()
            }
            NavKey::Up => {
                self.navigate_previous();
                self.highlighted()
            }
            NavKey::Escape => {
                self.close();
                SelectionEvent::Closed
            }
            NavKey::Enter => match self.selected_text().map(str::to_string) {
                Some(text) => {
                    self.close();
                    SelectionEvent::Committed(text)
                }
                None => SelectionEvent::Ignored,
            },
        }
    }

    /// Pointer activation of the row at `index`
    pub fn activate(&mut self, index: usize) -> SelectionEvent {
        match self.items.get(index).filter(|text| !text.is_empty()).cloned() {
            Some(text) => {
                self.close();
                SelectionEvent::Committed(text)
            }
            None => SelectionEvent::Ignored,
        }
    }

    /// Click landed outside the input and the dropdown
    pub fn dismiss(&mut self) -> SelectionEvent {
        if !self.is_open() {
            return SelectionEvent::Ignored;
        }
        self.close();
        SelectionEvent::Closed
    }

    fn highlighted(&self) -> SelectionEvent {
        SelectionEvent::Highlighted {
            index: self.selected_index,
            preview: self.selected_text().map(str::to_string),
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
