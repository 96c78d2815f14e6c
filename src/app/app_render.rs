use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::config::Shortcut;
use crate::search::SearchMode;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
// Border plus the two-cell selection marker
const POPUP_PADDING: u16 = 4;
const MIN_POPUP_WIDTH: u16 = 24;
const HELP_TEXT: &str = " Enter search · ↑↓ select · Tab mode · Ctrl+U clear · Esc close";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let area = popup::inset_rect(frame.area(), 1, 0);
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
        let (header_area, input_area, body_area, help_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        self.render_header(frame, header_area);
        self.render_input(frame, input_area);

        if self.dropdown().sections_hidden() {
            self.render_dropdown(frame, input_area, body_area);
        } else {
            self.render_sections(frame, body_area);
        }

        frame.render_widget(
            Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" newtab ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" {} ", self.engine),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.mode {
            SearchMode::Search => " Search ",
            SearchMode::Ai => " Ask AI ",
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(&self.input, area);
        self.layout_regions.search_input = Some(area);
    }

    /// Render the suggestion list directly below the search box
    fn render_dropdown(&mut self, frame: &mut Frame, input_area: Rect, body_area: Rect) {
        let dropdown = self.dropdown();
        let rows = dropdown.rows();
        if rows.is_empty() {
            return;
        }

        let text_width = rows.iter().map(|row| row.width()).max().unwrap_or(0);
        let popup_width = (text_width as u16)
            .saturating_add(POPUP_PADDING)
            .max(MIN_POPUP_WIDTH);
        let popup_height = (rows.len() as u16) + POPUP_BORDER_HEIGHT;
        let bounds = input_area.union(body_area);
        let popup_area = popup::popup_below_anchor(input_area, bounds, popup_width, popup_height);

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if dropdown.selected() == Some(i) {
                    ListItem::new(Line::from(Span::styled(
                        format!("► {}", row),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )))
                } else {
                    ListItem::new(Line::from(Span::raw(format!("  {}", row))))
                }
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        popup::clear_area(frame, popup_area);
        frame.render_widget(list, popup_area);
        self.layout_regions.dropdown = Some(popup_area);
    }

    fn render_sections(&mut self, frame: &mut Frame, area: Rect) {
        let layout =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

        render_shortcuts(frame, layout[0], " Favourites ", &self.favourites);
        render_shortcuts(frame, layout[1], " Top sites ", &self.top_sites);

        self.layout_regions.favourites = Some(layout[0]);
        self.layout_regions.top_sites = Some(layout[1]);
    }
}

fn render_shortcuts(frame: &mut Frame, area: Rect, title: &str, shortcuts: &[Shortcut]) {
    let items: Vec<ListItem> = shortcuts
        .iter()
        .map(|shortcut| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    shortcut.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", shortcut.url),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
