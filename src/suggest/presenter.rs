//! Host-facing boundaries of the suggestion subsystem
//!
//! `Presenter` draws the dropdown; `InputField` is the search box the
//! subsystem previews and commits text into. Both are implemented by the
//! host, which keeps the state machine free of any UI code.

/// Renders the suggestion dropdown
pub trait Presenter {
    /// Replace the visible rows
    fn render(&mut self, items: &[String]);

    /// Mark the row at `index` as selected, or none
    fn highlight(&mut self, index: Option<usize>);

    /// Reveal the dropdown and hide sibling sections
    fn show(&mut self);

    /// Hide the dropdown and restore sibling sections
    fn hide(&mut self);
}

/// Text input the dropdown is attached to
pub trait InputField {
    fn value(&self) -> String;

    /// Replace the text programmatically (does not count as user input)
    fn set_value(&mut self, text: &str);
}

impl InputField for String {
    fn value(&self) -> String {
        self.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}
