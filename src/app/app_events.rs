use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::layout::region_at;
use crate::suggest::{InputField, NavKey};

impl App {
    /// Route a terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(&text, now),
            _ => {}
        }
    }

    /// Dispatch due fetches and apply finished ones
    pub fn tick(&mut self, now: Instant) -> bool {
        self.suggestions.tick(&self.input, now)
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('u') if ctrl => {
                self.clear_input();
            }
            KeyCode::Tab => self.toggle_mode(),
            KeyCode::Enter => {
                // A highlighted row is committed into the input first
                self.suggestions.on_key(NavKey::Enter, &mut self.input);
                self.search_now();
            }
            KeyCode::Down => {
                self.suggestions.on_key(NavKey::Down, &mut self.input);
            }
            KeyCode::Up => {
                self.suggestions.on_key(NavKey::Up, &mut self.input);
            }
            KeyCode::Esc => {
                if !self.suggestions.on_key(NavKey::Escape, &mut self.input) {
                    self.should_quit = true;
                }
            }
            // Newlines never enter the single-line search box
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => {}
            _ => {
                if self.input.input(key) {
                    self.on_user_edit(now);
                }
            }
        }
    }

    pub fn handle_paste_event(&mut self, text: &str, now: Instant) {
        let line = text.replace(['\r', '\n'], " ");
        if line.is_empty() {
            return;
        }
        self.input.insert_str(line);
        self.on_user_edit(now);
    }

    fn on_user_edit(&mut self, now: Instant) {
        let text = self.input.value();
        self.suggestions.on_input(&text, now);
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        mouse_click::handle_click(self, region, mouse);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
