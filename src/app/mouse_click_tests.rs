//! Tests for mouse click handling

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::layout::Region;
use crate::test_utils::test_helpers::{AppHarness, left_click};

use super::{handle_click, row_in_bordered};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

// With the default layout the body starts below the search box at row 4, so
// the first content row of the dropdown or a section is row 5.
const FIRST_ROW: u16 = 5;

fn draw(harness: &mut AppHarness) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| harness.app.render(f)).unwrap();
}

fn weather_dropdown() -> AppHarness {
    let mut harness = AppHarness::new();
    harness.open_dropdown("weat", &["weather", "weather today", "weather nyc"]);
    draw(&mut harness);
    harness
}

#[test]
fn test_click_dropdown_row_commits_and_searches() {
    let mut harness = weather_dropdown();

    harness
        .app
        .handle_mouse_event(left_click(5, FIRST_ROW + 2));

    assert_eq!(harness.app.query(), "weather nyc");
    assert!(!harness.app.dropdown().is_visible());
    assert_eq!(
        harness.app.output(),
        Some("https://duckduckgo.com/?q=weather%20nyc")
    );
}

#[test]
fn test_click_dropdown_border_does_nothing() {
    let mut harness = weather_dropdown();

    harness.app.handle_mouse_event(left_click(5, FIRST_ROW - 1));

    assert!(harness.app.dropdown().is_visible());
    assert_eq!(harness.app.output(), None);
}

#[test]
fn test_click_search_input_keeps_dropdown_open() {
    let mut harness = weather_dropdown();

    harness.app.handle_mouse_event(left_click(5, 2));

    assert!(harness.app.dropdown().is_visible());
}

#[test]
fn test_click_outside_closes_without_commit() {
    let mut harness = weather_dropdown();

    harness.app.handle_mouse_event(left_click(70, 20));

    assert!(!harness.app.dropdown().is_visible());
    assert_eq!(harness.app.query(), "weat");
    assert_eq!(harness.app.output(), None);
}

#[test]
fn test_click_favourite_opens_its_url() {
    let mut harness = AppHarness::new();
    draw(&mut harness);

    harness.app.handle_mouse_event(left_click(5, FIRST_ROW + 1));

    assert_eq!(harness.app.output(), Some("https://docs.rs"));
    assert!(harness.app.should_quit());
}

#[test]
fn test_click_top_site_opens_its_url() {
    let mut harness = AppHarness::new();
    draw(&mut harness);

    harness.app.handle_mouse_event(left_click(50, FIRST_ROW));

    assert_eq!(harness.app.output(), Some("https://news.ycombinator.com"));
}

#[test]
fn test_click_empty_section_row_does_nothing() {
    let mut harness = AppHarness::new();
    draw(&mut harness);

    handle_click(
        &mut harness.app,
        Some(Region::TopSites),
        left_click(50, FIRST_ROW + 3),
    );

    assert_eq!(harness.app.output(), None);
}

#[test]
fn test_non_left_clicks_are_ignored() {
    let mut harness = weather_dropdown();
    let scroll = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 70,
        row: 20,
        modifiers: KeyModifiers::NONE,
    };
    let right = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: 70,
        row: 20,
        modifiers: KeyModifiers::NONE,
    };

    let now = harness.at(400);
    harness.app.handle_event(Event::Mouse(scroll), now);
    harness.app.handle_event(Event::Mouse(right), now);

    assert!(harness.app.dropdown().is_visible());
}

#[test]
fn test_row_in_bordered() {
    let area = ratatui::layout::Rect::new(0, 4, 40, 5);

    assert_eq!(row_in_bordered(area, 4), None);
    assert_eq!(row_in_bordered(area, 5), Some(0));
    assert_eq!(row_in_bordered(area, 7), Some(2));
    assert_eq!(row_in_bordered(area, 8), None);
}
