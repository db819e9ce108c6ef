//! # UI Router
//!
//! Builds the full frame: title bar, the current page, footer. The page
//! to draw comes from the top of the navigation stack; this module is a
//! pure function of `App` + `TuiState` and holds no state of its own.
//!
//! The role gate is enforced twice on purpose. `update()` refuses to
//! push a forbidden page, and the router additionally treats a forbidden
//! current page as unknown and draws the dashboard instead, so a stale
//! stack can never show restricted data.

use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::directory::{filter_users, generate_user_report, get_user_stats, Role};
use crate::core::nav::Page;
use crate::core::state::App;
use crate::data::JobStatus;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::analytics::render_analytics;
use crate::tui::components::companies::{render_company_detail, render_company_directory};
use crate::tui::components::documents::render_documents;
use crate::tui::components::help::render_help;
use crate::tui::components::interviews::render_interview_schedule;
use crate::tui::components::jobs::{render_job_board, render_job_detail};
use crate::tui::components::students::{
    render_resume_builder, render_student_detail, render_student_directory,
};
use crate::tui::components::{Dashboard, ProfileForm, TitleBar, UserAdmin};

/// Keyboard shortcuts for jumping between pages, filtered to what the
/// role may open. One table; the dashboard listing, the footer and the
/// event loop all read from it.
pub fn nav_shortcuts(role: Role) -> Vec<(char, Page)> {
    [
        ('j', Page::JobBoard),
        ('c', Page::CompanyDirectory),
        ('s', Page::StudentDirectory),
        ('i', Page::InterviewSchedule),
        ('d', Page::Documents),
        ('a', Page::Analytics),
        ('u', Page::UserDirectory),
        ('p', Page::ProfileEdit),
        ('r', Page::ResumeBuilder),
        ('h', Page::HelpDesk),
    ]
    .into_iter()
    .filter(|(_, page)| page.allowed_for(role))
    .collect()
}

/// Whether the page routes printable characters to a text input rather
/// than treating them as shortcuts.
pub fn page_captures_text(page: &Page) -> bool {
    matches!(page, Page::UserDirectory | Page::ProfileEdit)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, footer_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let breadcrumbs = app
        .nav
        .breadcrumbs()
        .into_iter()
        .map(String::from)
        .collect();
    TitleBar::new(
        app.operator_name.clone(),
        app.role,
        breadcrumbs,
        app.status_message.clone(),
    )
    .render(frame, title_area);

    let page = app.nav.current().page.clone();
    if page.allowed_for(app.role) {
        draw_page(frame, main_area, &page, app, tui);
    } else {
        // Forbidden page on top of the stack. Should not happen (update()
        // gates every push), but if it does the dashboard is what shows.
        draw_dashboard(frame, main_area, app);
    }

    let footer = if page_captures_text(&page) {
        String::from(" Esc Back  Ctrl+C Quit")
    } else {
        let keys = nav_shortcuts(app.role)
            .iter()
            .map(|(key, _)| key.to_string())
            .collect::<Vec<_>>()
            .join("/");
        format!(" {keys} Jump  Esc Back  q Quit")
    };
    frame.render_widget(
        Line::from(footer).style(Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let shortcuts = nav_shortcuts(app.role)
        .into_iter()
        .map(|(key, page)| (key, page.default_title()))
        .collect();
    Dashboard {
        stats: get_user_stats(&app.users),
        open_jobs: app
            .jobs
            .iter()
            .filter(|j| j.status == JobStatus::Open)
            .count(),
        upcoming_interviews: app.interviews.len(),
        unverified_documents: app.documents.iter().filter(|d| !d.verified).count(),
        shortcuts,
    }
    .render(frame, area);
}

fn draw_page(frame: &mut Frame, area: Rect, page: &Page, app: &App, tui: &mut TuiState) {
    match page {
        Page::Dashboard => draw_dashboard(frame, area, app),
        Page::JobBoard => {
            render_job_board(frame, area, &app.jobs, &app.companies, &mut tui.job_list);
        }
        Page::JobDetail(id) => render_job_detail(frame, area, app.job(*id), &app.companies),
        Page::CompanyDirectory => {
            render_company_directory(frame, area, &app.companies, &mut tui.company_list);
        }
        Page::CompanyDetail(id) => {
            render_company_detail(frame, area, app.company(*id), &app.jobs);
        }
        Page::StudentDirectory => {
            render_student_directory(frame, area, &app.students, &mut tui.student_list);
        }
        Page::StudentDetail(id) => render_student_detail(frame, area, app.student(*id)),
        Page::ProfileEdit => ProfileForm::new(&tui.profile_form).render(frame, area),
        // Mock data has no login session; the resume builder edits the
        // first seeded student.
        Page::ResumeBuilder => render_resume_builder(frame, area, app.students.first()),
        Page::InterviewSchedule => render_interview_schedule(
            frame,
            area,
            &app.interviews,
            &app.jobs,
            &app.students,
            &mut tui.interview_list,
        ),
        Page::Documents => {
            render_documents(frame, area, &app.documents, &mut tui.document_list);
        }
        Page::Analytics => {
            let report = generate_user_report(&app.users, Utc::now(), app.recent_window_days);
            render_analytics(frame, area, &report, app.recent_window_days);
        }
        Page::UserDirectory => {
            let visible = filter_users(
                &app.users,
                &tui.user_admin.search,
                tui.user_admin.role_filter,
                tui.user_admin.status_filter,
            );
            UserAdmin::new(&mut tui.user_admin, &visible, app.users.len()).render(frame, area);
        }
        Page::HelpDesk => render_help(frame, area),
    }
}
