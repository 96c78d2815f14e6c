//! Tests for dashboard rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyCode;

use crate::test_utils::test_helpers::{AppHarness, key};

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 24;

fn render_app(harness: &mut AppHarness) -> String {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| harness.app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_idle_dashboard_shows_sections() {
    let mut harness = AppHarness::new();

    let output = render_app(&mut harness);

    assert!(output.contains("Search"));
    assert!(output.contains("Favourites"));
    assert!(output.contains("Top sites"));
    assert!(output.contains("https://docs.rs"));
    assert!(harness.app.layout_regions.dropdown.is_none());
    assert!(harness.app.layout_regions.favourites.is_some());
}

#[test]
fn test_open_dropdown_hides_sections() {
    let mut harness = AppHarness::new();
    harness.open_dropdown("weat", &["weather", "weather today", "weather nyc"]);

    let output = render_app(&mut harness);

    assert!(output.contains("weather today"));
    assert!(output.contains("weather nyc"));
    assert!(!output.contains("Favourites"));
    assert!(!output.contains("Top sites"));
    assert!(harness.app.layout_regions.favourites.is_none());

    let dropdown = harness.app.layout_regions.dropdown.unwrap();
    assert_eq!(dropdown.y, 4);
    assert_eq!(dropdown.height, 5);
}

#[test]
fn test_selected_row_has_marker() {
    let mut harness = AppHarness::new();
    harness.open_dropdown("weat", &["weather", "weather today"]);
    let now = harness.at(400);
    harness.app.handle_key_event(key(KeyCode::Down), now);
    harness.app.handle_key_event(key(KeyCode::Down), now);

    let output = render_app(&mut harness);

    assert!(output.contains("► weather today"));
    assert!(output.contains("  weather "));
}

#[test]
fn test_sections_return_after_escape() {
    let mut harness = AppHarness::new();
    harness.open_dropdown("weat", &["weather"]);
    harness.app.handle_key_event(key(KeyCode::Esc), harness.at(400));

    let output = render_app(&mut harness);

    assert!(output.contains("Favourites"));
    assert!(harness.app.layout_regions.dropdown.is_none());
}

#[test]
fn test_ai_mode_changes_input_title() {
    let mut harness = AppHarness::new();
    harness.app.handle_key_event(key(KeyCode::Tab), harness.at(0));

    let output = render_app(&mut harness);

    assert!(output.contains("Ask AI"));
}

#[test]
fn test_wide_characters_fit_in_dropdown() {
    let mut harness = AppHarness::new();
    harness.open_dropdown("天気", &["天気予報天気予報天気予報", "天気"]);

    render_app(&mut harness);

    let dropdown = harness.app.layout_regions.dropdown.unwrap();
    // 12 double-width characters plus border and marker
    assert_eq!(dropdown.width, 28);
}
