//! # TitleBar Component
//!
//! Top status bar showing the operator name, the active role, the
//! breadcrumb trail and the transient status message.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and
//! has no internal state:
//!
//! - `operator_name`: configured display name of the placement cell
//! - `role`: the role the dashboard was opened as
//! - `breadcrumbs`: labels from the navigation stack, root first
//! - `status_message`: transient text from the last action (may be empty)
//!
//! The trail is rendered root-to-current, joined with `›`, exactly
//! mirroring the navigation stack, so there is no second source of truth
//! for "where am I".

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::directory::Role;
use crate::tui::component::Component;

pub struct TitleBar {
    pub operator_name: String,
    pub role: Role,
    pub breadcrumbs: Vec<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        operator_name: String,
        role: Role,
        breadcrumbs: Vec<String>,
        status_message: String,
    ) -> Self {
        Self {
            operator_name,
            role,
            breadcrumbs,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let trail = self.breadcrumbs.join(" › ");
        let mut spans = vec![
            Span::styled(
                format!("Placeboard — {} ", self.operator_name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}] ", self.role),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(trail),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
