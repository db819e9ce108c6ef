//! # Application State
//!
//! Core business state for Placeboard. This module contains domain data
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── role: Role                    // who is looking at the dashboard
//! ├── operator_name: String         // shown in the title bar
//! ├── nav: Navigator                // page stack + breadcrumbs
//! ├── users: Vec<UserRecord>        // the user directory
//! ├── jobs / companies / students   // placement mock data
//! ├── interviews / documents        //
//! ├── status_message: String        // status bar text
//! └── recent_window_days: i64       // analytics "recent joins" window
//! ```
//!
//! State changes only happen through `update(state, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use crate::core::config::{DEFAULT_RECENT_WINDOW_DAYS, ResolvedConfig};
use crate::core::directory::{Role, UserRecord};
use crate::core::nav::Navigator;
use crate::data::{
    Company, DocumentRecord, InterviewSlot, JobPosting, StudentProfile, seed_companies,
    seed_documents, seed_interviews, seed_jobs, seed_students, seed_users,
};

pub struct App {
    pub role: Role,
    pub operator_name: String,
    pub nav: Navigator,
    pub users: Vec<UserRecord>,
    pub jobs: Vec<JobPosting>,
    pub companies: Vec<Company>,
    pub students: Vec<StudentProfile>,
    pub interviews: Vec<InterviewSlot>,
    pub documents: Vec<DocumentRecord>,
    pub status_message: String,
    pub recent_window_days: i64,
}

impl App {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            operator_name: String::from("Placement Cell"),
            nav: Navigator::new(),
            users: seed_users(),
            jobs: seed_jobs(),
            companies: seed_companies(),
            students: seed_students(),
            interviews: seed_interviews(),
            documents: seed_documents(),
            status_message: String::from("Welcome to Placeboard!"),
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
        }
    }

    /// Build the app from a resolved config, applying the configured
    /// start page on top of the dashboard root. The role gate applies to
    /// the start page too; a forbidden page stays on the dashboard.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.role);
        app.operator_name = config.operator_name.clone();
        app.recent_window_days = config.recent_window_days;
        if config.start_page != crate::core::nav::Page::Dashboard {
            if config.start_page.allowed_for(config.role) {
                let title = config.start_page.default_title().to_string();
                app.nav.navigate_to(config.start_page.clone(), title);
            } else {
                log::warn!(
                    "start_page {:?} not available to {}, staying on dashboard",
                    config.start_page,
                    config.role
                );
            }
        }
        app
    }

    pub fn job(&self, id: u32) -> Option<&JobPosting> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn company(&self, id: u32) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn student(&self, id: u32) -> Option<&StudentProfile> {
        self.students.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::Page;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(Role::Student);
        assert_eq!(app.status_message, "Welcome to Placeboard!");
        assert_eq!(app.nav.current().page, Page::Dashboard);
        assert!(!app.users.is_empty());
        assert!(!app.jobs.is_empty());
    }

    #[test]
    fn test_from_config_applies_allowed_start_page() {
        let config = ResolvedConfig {
            role: Role::Admin,
            start_page: Page::UserDirectory,
            operator_name: "TPO Desk".to_string(),
            recent_window_days: 14,
        };
        let app = App::from_config(&config);
        assert_eq!(app.nav.current().page, Page::UserDirectory);
        assert_eq!(app.nav.depth(), 2); // dashboard root stays underneath
        assert_eq!(app.operator_name, "TPO Desk");
        assert_eq!(app.recent_window_days, 14);
    }

    #[test]
    fn test_from_config_rejects_forbidden_start_page() {
        let config = ResolvedConfig {
            role: Role::Student,
            start_page: Page::UserDirectory,
            operator_name: "Placement Cell".to_string(),
            recent_window_days: 30,
        };
        let app = App::from_config(&config);
        assert_eq!(app.nav.current().page, Page::Dashboard);
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_record_lookups() {
        let app = App::new(Role::Admin);
        assert!(app.job(1).is_some());
        assert!(app.job(999).is_none());
        assert!(app.company(1).is_some());
        assert!(app.student(1).is_some());
    }
}
