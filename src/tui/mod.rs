//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! Core state and the reducer never see a key code.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an input event or a
//! resize. Between events it sleeps in `poll_event_timeout` for up to
//! 250ms; pending events are drained before the next draw so a paste or
//! a held-down key never queues a frame per keystroke.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::directory::filter_users;
use crate::core::nav::Page;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FormEvent, ListNav, ProfileFormState, UserAdminEvent, UserAdminState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    // Selection state, one per listing page, kept across navigation
    pub job_list: ListNav,
    pub company_list: ListNav,
    pub student_list: ListNav,
    pub interview_list: ListNav,
    pub document_list: ListNav,
    // Persistent component states
    pub user_admin: UserAdminState,
    pub profile_form: ProfileFormState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            job_list: ListNav::new(),
            company_list: ListNav::new(),
            student_list: ListNav::new(),
            interview_list: ListNav::new(),
            document_list: ListNav::new(),
            user_admin: UserAdminState::new(),
            profile_form: ProfileFormState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct CursorGuard;

impl CursorGuard {
    fn new() -> std::io::Result<Self> {
        // All editing renders its own cursor marker; the terminal cursor
        // just flickers across the frame during redraws.
        execute!(stdout(), Hide)?;
        info!("Terminal cursor hidden");
        Ok(Self)
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// The action Enter triggers on a listing page: open the selected
/// record's detail page, with the record's name as the breadcrumb.
fn open_selected(app: &App, page: &Page, selected: usize) -> Option<Action> {
    match page {
        Page::JobBoard => app.jobs.get(selected).map(|job| Action::Navigate {
            page: Page::JobDetail(job.id),
            title: job.title.clone(),
        }),
        Page::CompanyDirectory => app.companies.get(selected).map(|company| Action::Navigate {
            page: Page::CompanyDetail(company.id),
            title: company.name.clone(),
        }),
        Page::StudentDirectory => app.students.get(selected).map(|student| Action::Navigate {
            page: Page::StudentDetail(student.id),
            title: student.name.clone(),
        }),
        _ => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _cursor_guard = CursorGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of page
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Esc steps back everywhere
            if matches!(event, TuiEvent::Escape) {
                update(&mut app, Action::Back);
                continue;
            }

            // Page-modal dispatch: text-capturing pages own the keyboard
            let page = app.nav.current().page.clone();
            match page {
                Page::UserDirectory => {
                    let visible = filter_users(
                        &app.users,
                        &tui.user_admin.search,
                        tui.user_admin.role_filter,
                        tui.user_admin.status_filter,
                    );
                    if let Some(admin_event) = tui.user_admin.handle_event(&event, &visible) {
                        let action = match admin_event {
                            UserAdminEvent::SetStatus { id, status } => {
                                Action::SetUserStatus { id, status }
                            }
                            UserAdminEvent::Delete { id } => Action::DeleteUser { id },
                        };
                        update(&mut app, action);
                    }
                }
                Page::ProfileEdit => {
                    if let Some(FormEvent::Submit(draft)) = tui.profile_form.handle_event(&event)
                    {
                        update(&mut app, Action::SubmitProfile(draft));
                        // A valid submit navigates away; start the next
                        // edit from a clean form.
                        if app.nav.current().page != Page::ProfileEdit {
                            tui.profile_form = ProfileFormState::new();
                        }
                    }
                }
                ref page => match event {
                    TuiEvent::InputChar('q') => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    TuiEvent::CursorUp | TuiEvent::CursorDown => {
                        match page {
                            Page::JobBoard => tui.job_list.handle_event(&event, app.jobs.len()),
                            Page::CompanyDirectory => {
                                tui.company_list.handle_event(&event, app.companies.len())
                            }
                            Page::StudentDirectory => {
                                tui.student_list.handle_event(&event, app.students.len())
                            }
                            Page::InterviewSchedule => tui
                                .interview_list
                                .handle_event(&event, app.interviews.len()),
                            Page::Documents => {
                                tui.document_list.handle_event(&event, app.documents.len())
                            }
                            _ => false,
                        };
                    }
                    TuiEvent::Submit => {
                        let selected = match page {
                            Page::JobBoard => tui.job_list.selected,
                            Page::CompanyDirectory => tui.company_list.selected,
                            Page::StudentDirectory => tui.student_list.selected,
                            _ => continue,
                        };
                        if let Some(action) = open_selected(&app, page, selected) {
                            update(&mut app, action);
                        }
                    }
                    TuiEvent::InputChar(c) => {
                        let target = ui::nav_shortcuts(app.role)
                            .into_iter()
                            .find(|(key, _)| *key == c)
                            .map(|(_, page)| page);
                        if let Some(target) = target {
                            let title = target.default_title().to_string();
                            update(&mut app, Action::Navigate { page: target, title });
                        }
                    }
                    _ => {}
                },
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
