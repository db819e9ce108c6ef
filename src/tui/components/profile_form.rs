//! # Profile Form Component
//!
//! The editable profile page. Field editing and focus are presentation
//! state; validation rules live in `core::directory::validate_user` and
//! the form only renders what they return. Submitting a valid draft
//! emits `FormEvent::Submit` for the event loop to feed into `update()`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::directory::{FieldError, Role, UserDraft, Validation, validate_user};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Role,
    Department,
}

const FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::Role, Field::Department];

/// Persistent state for the profile form.
pub struct ProfileFormState {
    pub draft: UserDraft,
    focus: usize,
    /// Set after a failed submit; cleared as soon as the draft changes.
    validation: Option<Validation>,
}

/// Events emitted by the profile form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submit(UserDraft),
}

impl ProfileFormState {
    pub fn new() -> Self {
        Self {
            draft: UserDraft::default(),
            focus: 0,
            validation: None,
        }
    }

    fn focused(&self) -> Field {
        FIELDS[self.focus]
    }

    fn field_has_error(&self, error: FieldError) -> bool {
        self.validation
            .as_ref()
            .is_some_and(|v| v.errors.contains(&error))
    }
}

impl EventHandler for ProfileFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % FIELDS.len();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = (self.focus + FIELDS.len() - 1) % FIELDS.len();
                None
            }
            TuiEvent::InputChar(c) => {
                match self.focused() {
                    Field::Name => self.draft.name.push(*c),
                    Field::Email => self.draft.email.push(*c),
                    Field::Department => self.draft.department.push(*c),
                    Field::Role => return None, // role is picked with ←→
                }
                self.validation = None;
                None
            }
            TuiEvent::Backspace => {
                match self.focused() {
                    Field::Name => {
                        self.draft.name.pop();
                    }
                    Field::Email => {
                        self.draft.email.pop();
                    }
                    Field::Department => {
                        self.draft.department.pop();
                    }
                    Field::Role => self.draft.role = None,
                }
                self.validation = None;
                None
            }
            TuiEvent::CursorLeft | TuiEvent::CursorRight if self.focused() == Field::Role => {
                self.draft.role = next_role(self.draft.role, *event == TuiEvent::CursorRight);
                self.validation = None;
                None
            }
            TuiEvent::Submit => {
                let validation = validate_user(&self.draft);
                if validation.is_valid {
                    self.validation = None;
                    Some(FormEvent::Submit(self.draft.clone()))
                } else {
                    self.validation = Some(validation);
                    None
                }
            }
            _ => None,
        }
    }
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn next_role(current: Option<Role>, forward: bool) -> Option<Role> {
    let pos = current.and_then(|r| Role::ALL.iter().position(|x| *x == r));
    let next = match (pos, forward) {
        (None, _) => 0,
        (Some(p), true) => (p + 1) % Role::ALL.len(),
        (Some(p), false) => (p + Role::ALL.len() - 1) % Role::ALL.len(),
    };
    Some(Role::ALL[next])
}

/// Transient render wrapper for the profile form.
pub struct ProfileForm<'a> {
    state: &'a ProfileFormState,
}

impl<'a> ProfileForm<'a> {
    pub fn new(state: &'a ProfileFormState) -> Self {
        Self { state }
    }

    fn field_line(&self, label: &str, value: String, field: Field, error: FieldError) -> Line<'a> {
        let focused = self.state.focused() == field;
        let marker = if focused { "▸ " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        let value_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::raw(marker.to_string()),
            Span::raw(format!("{label:<12}")),
            Span::styled(format!("{value}{cursor}"), value_style),
        ];
        if self.state.field_has_error(error) {
            spans.push(Span::styled(
                format!("  ✗ {}", error.message()),
                Style::default().fg(Color::Red),
            ));
        }
        Line::from(spans)
    }

}

impl Component for ProfileForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let role_value = self
            .state
            .draft
            .role
            .map(|r| format!("‹ {} ›", r.label()))
            .unwrap_or_else(|| String::from("‹ pick with ←→ ›"));

        let mut lines = vec![
            Line::from(""),
            self.field_line("Name", self.state.draft.name.clone(), Field::Name, FieldError::Name),
            Line::from(""),
            self.field_line(
                "Email",
                self.state.draft.email.clone(),
                Field::Email,
                FieldError::Email,
            ),
            Line::from(""),
            self.field_line("Role", role_value, Field::Role, FieldError::Role),
            Line::from(""),
            self.field_line(
                "Department",
                self.state.draft.department.clone(),
                Field::Department,
                FieldError::Department,
            ),
            Line::from(""),
        ];
        if let Some(validation) = &self.state.validation {
            lines.push(
                Line::from(format!(
                    "Fix {} field(s) before saving.",
                    validation.errors.len()
                ))
                .style(Style::default().fg(Color::Red)),
            );
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Edit Profile ")
            .title_alignment(Alignment::Left)
            .title_bottom(
                Line::from(" Tab Next field  Enter Save  Esc Back ").centered(),
            )
            .padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(state: &mut ProfileFormState, text: &str) {
        for c in text.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_submit_empty_form_is_rejected_with_errors() {
        let mut state = ProfileFormState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        let validation = state.validation.as_ref().unwrap();
        assert_eq!(validation.errors.len(), 4);
    }

    #[test]
    fn test_submit_complete_form_emits_draft() {
        let mut state = ProfileFormState::new();
        type_text(&mut state, "Asha Rao");
        state.handle_event(&TuiEvent::NextField);
        type_text(&mut state, "asha@uni.edu");
        state.handle_event(&TuiEvent::NextField);
        state.handle_event(&TuiEvent::CursorRight); // pick first role
        state.handle_event(&TuiEvent::NextField);
        type_text(&mut state, "Placement Cell");

        match state.handle_event(&TuiEvent::Submit) {
            Some(FormEvent::Submit(draft)) => {
                assert_eq!(draft.name, "Asha Rao");
                assert_eq!(draft.role, Some(Role::Student));
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn test_editing_clears_stale_validation() {
        let mut state = ProfileFormState::new();
        state.handle_event(&TuiEvent::Submit);
        assert!(state.validation.is_some());
        state.handle_event(&TuiEvent::InputChar('A'));
        assert!(state.validation.is_none());
    }

    #[test]
    fn test_role_field_ignores_typed_characters() {
        let mut state = ProfileFormState::new();
        state.focus = 2; // Role
        state.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(state.draft.role, None);
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.draft.role, Some(Role::Student));
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.draft.role, Some(Role::Admin)); // wraps backwards
    }

    #[test]
    fn test_render_marks_invalid_fields() {
        let mut state = ProfileFormState::new();
        state.handle_event(&TuiEvent::Submit);
        let backend = TestBackend::new(100, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ProfileForm::new(&state).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Name is required"));
        assert!(text.contains("Fix 4 field(s)"));
    }
}
