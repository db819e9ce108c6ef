//! # User Directory Component
//!
//! The admin/operations screen over the user directory: live search,
//! role/status filter cycling, status updates and two-press delete.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `UserAdminState` lives in `TuiState`
//! - `UserAdmin` is created each frame with borrowed state
//!
//! The component never touches `App.users` itself. It emits
//! `UserAdminEvent`s; the event loop turns those into core actions so
//! every mutation still flows through `update()`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::directory::{Role, UserRecord, UserStatus};
use crate::tui::component::Component;
use crate::tui::components::roster::{ListNav, cell, render_roster};
use crate::tui::event::TuiEvent;

/// Persistent state for the user directory screen.
pub struct UserAdminState {
    pub search: String,
    pub role_filter: Option<Role>,
    pub status_filter: Option<UserStatus>,
    pub confirm_delete: bool,
    pub nav: ListNav,
}

impl UserAdminState {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            role_filter: None,
            status_filter: None,
            confirm_delete: false,
            nav: ListNav::new(),
        }
    }

    /// Handle a key event against the currently visible (filtered) rows,
    /// returning a UserAdminEvent if the screen should act.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        visible: &[UserRecord],
    ) -> Option<UserAdminEvent> {
        // Reset delete confirmation on any key that isn't the delete key
        if !matches!(event, TuiEvent::DeleteEntry) {
            self.confirm_delete = false;
        }

        match event {
            TuiEvent::InputChar(c) => {
                self.search.push(*c);
                self.nav.selected = 0;
                None
            }
            TuiEvent::Backspace => {
                self.search.pop();
                None
            }
            TuiEvent::CursorUp | TuiEvent::CursorDown => {
                self.nav.handle_event(event, visible.len());
                None
            }
            TuiEvent::CursorLeft => {
                self.role_filter = cycle_role(self.role_filter, false);
                self.nav.selected = 0;
                None
            }
            TuiEvent::CursorRight => {
                self.role_filter = cycle_role(self.role_filter, true);
                self.nav.selected = 0;
                None
            }
            TuiEvent::NextField => {
                self.status_filter = cycle_status(self.status_filter, true);
                self.nav.selected = 0;
                None
            }
            TuiEvent::PrevField => {
                self.status_filter = cycle_status(self.status_filter, false);
                self.nav.selected = 0;
                None
            }
            TuiEvent::CycleStatus => visible.get(self.nav.selected).map(|u| {
                UserAdminEvent::SetStatus {
                    id: u.id,
                    status: u.status.next(),
                }
            }),
            TuiEvent::DeleteEntry => {
                let user = visible.get(self.nav.selected)?;
                if self.confirm_delete {
                    self.confirm_delete = false;
                    Some(UserAdminEvent::Delete { id: user.id })
                } else {
                    self.confirm_delete = true;
                    None
                }
            }
            _ => None,
        }
    }
}

impl Default for UserAdminState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the user directory screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAdminEvent {
    SetStatus { id: u32, status: UserStatus },
    Delete { id: u32 },
}

/// Advance (or rewind) the role filter, passing through "all" (None).
fn cycle_role(current: Option<Role>, forward: bool) -> Option<Role> {
    let mut order: Vec<Option<Role>> = vec![None];
    order.extend(Role::ALL.into_iter().map(Some));
    let pos = order.iter().position(|r| *r == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % order.len()
    } else {
        (pos + order.len() - 1) % order.len()
    };
    order[next]
}

/// Advance (or rewind) the status filter, passing through "all" (None).
fn cycle_status(current: Option<UserStatus>, forward: bool) -> Option<UserStatus> {
    let mut order: Vec<Option<UserStatus>> = vec![None];
    order.extend(UserStatus::ALL.into_iter().map(Some));
    let pos = order.iter().position(|s| *s == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % order.len()
    } else {
        (pos + order.len() - 1) % order.len()
    };
    order[next]
}

/// Transient render wrapper for the user directory screen.
pub struct UserAdmin<'a> {
    state: &'a mut UserAdminState,
    visible: &'a [UserRecord],
    total: usize,
}

impl<'a> UserAdmin<'a> {
    pub fn new(state: &'a mut UserAdminState, visible: &'a [UserRecord], total: usize) -> Self {
        Self {
            state,
            visible,
            total,
        }
    }
}

impl Component for UserAdmin<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [filter_area, list_area] = Layout::vertical([Length(3), Min(0)]).areas(area);

        // Filter bar
        let role_label = self
            .state
            .role_filter
            .map(|r| r.label())
            .unwrap_or("all");
        let status_label = self
            .state
            .status_filter
            .map(|s| s.label())
            .unwrap_or("all");
        let filter_line = Line::from(vec![
            Span::raw("Search: "),
            Span::styled(
                format!("{}_", self.state.search),
                Style::default().fg(Color::White),
            ),
            Span::raw("   Role ‹"),
            Span::styled(role_label, Style::default().fg(Color::Cyan)),
            Span::raw("›   Status ‹"),
            Span::styled(status_label, Style::default().fg(Color::Cyan)),
            Span::raw(format!("›   {}/{} shown", self.visible.len(), self.total)),
        ]);
        let filter_bar = Paragraph::new(filter_line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" User Directory ")
                    .title_alignment(Alignment::Left)
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(filter_bar, filter_area);

        // Row list
        let help = if self.state.confirm_delete {
            " Press Ctrl+D again to confirm delete "
        } else {
            " Type to search  ←→ Role  Tab Status  Ctrl+S Cycle status  Ctrl+D Delete  Esc Back "
        };
        let rows: Vec<Line> = self
            .visible
            .iter()
            .map(|u| {
                let status_span = Span::styled(
                    cell(u.status.label(), 10),
                    Style::default().fg(status_color(u.status)),
                );
                Line::from(vec![
                    Span::raw(cell(&format!("#{}", u.id), 5)),
                    Span::raw(cell(&u.name, 22)),
                    Span::raw(cell(&u.email, 26)),
                    Span::raw(cell(u.role.label(), 12)),
                    status_span,
                    Span::raw(format!("{:>3}%", u.profile_completed)),
                ])
            })
            .collect();

        render_roster(
            frame,
            list_area,
            "Users",
            help,
            "No users match the current filters.",
            rows,
            &mut self.state.nav,
        );
    }
}

fn status_color(status: UserStatus) -> Color {
    match status {
        UserStatus::Active => Color::Green,
        UserStatus::Inactive => Color::DarkGray,
        UserStatus::Suspended => Color::Red,
        UserStatus::Pending => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::directory::filter_users;
    use crate::data::seed_users;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_builds_the_search_string() {
        let mut state = UserAdminState::new();
        let users = seed_users();
        state.handle_event(&TuiEvent::InputChar('a'), &users);
        state.handle_event(&TuiEvent::InputChar('b'), &users);
        state.handle_event(&TuiEvent::Backspace, &users);
        assert_eq!(state.search, "a");
    }

    #[test]
    fn test_role_filter_cycles_through_all() {
        let mut f = None;
        f = cycle_role(f, true);
        assert_eq!(f, Some(Role::Student));
        // A full loop is the five roles plus the "all" slot
        for _ in 0..Role::ALL.len() + 1 {
            f = cycle_role(f, true);
        }
        assert_eq!(f, Some(Role::Student));
        assert_eq!(cycle_role(None, false), Some(Role::Admin));
    }

    #[test]
    fn test_status_cycle_emits_event_for_selected_user() {
        let mut state = UserAdminState::new();
        let users = seed_users();
        let event = state.handle_event(&TuiEvent::CycleStatus, &users);
        assert_eq!(
            event,
            Some(UserAdminEvent::SetStatus {
                id: users[0].id,
                status: users[0].status.next(),
            })
        );
    }

    #[test]
    fn test_delete_requires_two_presses() {
        let mut state = UserAdminState::new();
        let users = seed_users();
        assert_eq!(state.handle_event(&TuiEvent::DeleteEntry, &users), None);
        assert!(state.confirm_delete);
        assert_eq!(
            state.handle_event(&TuiEvent::DeleteEntry, &users),
            Some(UserAdminEvent::Delete { id: users[0].id })
        );
    }

    #[test]
    fn test_any_other_key_cancels_delete_confirmation() {
        let mut state = UserAdminState::new();
        let users = seed_users();
        state.handle_event(&TuiEvent::DeleteEntry, &users);
        state.handle_event(&TuiEvent::CursorDown, &users);
        assert!(!state.confirm_delete);
    }

    #[test]
    fn test_delete_on_empty_list_is_ignored() {
        let mut state = UserAdminState::new();
        assert_eq!(state.handle_event(&TuiEvent::DeleteEntry, &[]), None);
        assert!(!state.confirm_delete);
    }

    #[test]
    fn test_render_shows_filtered_rows() {
        let mut state = UserAdminState::new();
        state.search = "meera".to_string();
        let users = seed_users();
        let visible = filter_users(&users, &state.search, state.role_filter, state.status_filter);

        let backend = TestBackend::new(110, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| UserAdmin::new(&mut state, &visible, users.len()).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("meera_"));
        assert!(text.contains("Meera Iyer"));
        assert!(!text.contains("Aarav Sharma"));
        assert!(text.contains("1/10 shown"));
    }
}
