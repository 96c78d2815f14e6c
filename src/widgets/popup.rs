use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under `anchor`, left-aligned with it
///
/// Width is clamped to the anchor, height to the space left in `bounds`
/// below the anchor.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: anchor.x,
        y: popup_y.min(bottom),
        width: width.min(anchor.width),
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

/// Shrink `area` by the given margins on each side
pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
