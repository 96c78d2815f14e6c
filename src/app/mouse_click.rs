//! Mouse click handling
//!
//! Routes left clicks to the dropdown, the shortcut sections, or treats them
//! as a click outside the suggestions.

use ratatui::crossterm::event::MouseEvent;
use ratatui::layout::Rect;

use super::app_state::App;
use crate::layout::{Region, dropdown_row_at};

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Dropdown) => click_dropdown(app, mouse),
        // Clicks inside the search box leave the dropdown alone
        Some(Region::SearchInput) => {}
        Some(Region::Favourites) => click_shortcut(app, Region::Favourites, mouse),
        Some(Region::TopSites) => click_shortcut(app, Region::TopSites, mouse),
        None => app.suggestions.on_click_outside(),
    }
}

fn click_dropdown(app: &mut App, mouse: MouseEvent) {
    let Some(row) = dropdown_row_at(&app.layout_regions, mouse.column, mouse.row) else {
        return;
    };

    if app.suggestions.on_pointer(row, &mut app.input) {
        app.drain_pointer_searches();
    }
}

fn click_shortcut(app: &mut App, region: Region, mouse: MouseEvent) {
    app.suggestions.on_click_outside();

    let Some(area) = app.layout_regions.get(region) else {
        return;
    };
    let Some(row) = row_in_bordered(area, mouse.row) else {
        return;
    };

    let shortcuts = match region {
        Region::Favourites => &app.favourites,
        _ => &app.top_sites,
    };
    if let Some(shortcut) = shortcuts.get(row) {
        let url = shortcut.url.clone();
        log::debug!("Opening shortcut {:?}", shortcut.name);
        app.open(url);
    }
}

/// Content row under `y` for an area drawn with a one-cell border
fn row_in_bordered(area: Rect, y: u16) -> Option<usize> {
    let first = area.y + 1;
    let last = area.y + area.height.saturating_sub(1);
    (first..last).contains(&y).then(|| (y - first) as usize)
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
