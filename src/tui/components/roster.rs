//! # Roster List Helpers
//!
//! Shared selection state and table rendering for the listing pages
//! (jobs, companies, students, interviews, documents). Each page builds
//! its own rows; the selection handling and the bordered-list chrome are
//! identical everywhere, so they live here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::event::TuiEvent;

/// Persistent selection state for one listing page.
pub struct ListNav {
    pub selected: usize,
    pub list_state: ListState,
}

impl ListNav {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Keep the selection inside a list of `len` rows. Called every
    /// frame because deletes can shrink the list under the cursor.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Move the selection for Up/Down events. Returns true if the event
    /// was consumed.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> bool {
        match event {
            TuiEvent::CursorUp => {
                if len > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                true
            }
            TuiEvent::CursorDown => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                    self.list_state.select(Some(self.selected));
                }
                true
            }
            _ => false,
        }
    }
}

impl Default for ListNav {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a bordered, selectable list of pre-built rows with a bottom
/// help line. The empty message shows when there are no rows.
pub fn render_roster(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    help: &str,
    empty_message: &str,
    rows: Vec<Line<'_>>,
    nav: &mut ListNav,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "))
        .title_alignment(Alignment::Left)
        .title_bottom(Line::from(help.to_string()).centered())
        .padding(Padding::horizontal(1));

    if rows.is_empty() {
        let empty = Paragraph::new(empty_message.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    nav.clamp(rows.len());
    let items: Vec<ListItem> = rows
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if Some(i) == nav.list_state.selected() {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(line.style(style))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_stateful_widget(list, area, &mut nav.list_state);
}

/// Pad or truncate a cell to an exact display width.
pub fn cell(text: &str, width: usize) -> String {
    let truncated = truncate_str(text, width);
    let pad = width.saturating_sub(truncated.width());
    format!("{truncated}{}", " ".repeat(pad))
}

/// Truncate a string to fit within `max_width` columns, adding "..." if
/// needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    for ch in s.chars() {
        let candidate_width = out.width() + ch.to_string().width();
        if candidate_width > max_width - 3 {
            break;
        }
        out.push(ch);
    }
    format!("{out}...")
}
