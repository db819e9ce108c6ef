//! # Navigation
//!
//! A single-tab page stack with breadcrumb labels, confined to the app.
//!
//! ```text
//! Navigator
//! └── history: Vec<NavEntry>     // root Dashboard entry is never popped
//!       NavEntry
//!       ├── page: Page           // which view, with its typed payload
//!       └── title: String        // breadcrumb label
//! ```
//!
//! Breadcrumbs are derived from `history` rather than stored alongside it,
//! so push/pop symmetry cannot drift: after any sequence of `navigate_to`
//! calls followed by the same number of `go_back` calls, the trail is
//! exactly what it was before.
//!
//! There is exactly one back mechanism, this stack. Views never reach
//! around it.

use crate::core::directory::Role;

/// Identifies a view, carrying the id of the selected record where the
/// view shows one. Detail payloads are part of the variant, so a view
/// never has to defensively re-check an untyped payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    JobBoard,
    JobDetail(u32),
    CompanyDirectory,
    CompanyDetail(u32),
    StudentDirectory,
    StudentDetail(u32),
    ProfileEdit,
    ResumeBuilder,
    InterviewSchedule,
    Documents,
    Analytics,
    UserDirectory,
    HelpDesk,
}

impl Page {
    /// Parse an external page identifier (config `start_page`, for example).
    ///
    /// Only payload-free pages have stable identifiers; detail pages need a
    /// record id and cannot be addressed from the outside. Unknown
    /// identifiers return `None` and the caller falls back to the
    /// dashboard through its own, visible branch.
    pub fn parse(id: &str) -> Option<Page> {
        match id {
            "dashboard" => Some(Page::Dashboard),
            "job-board" => Some(Page::JobBoard),
            "company-directory" => Some(Page::CompanyDirectory),
            "student-directory" => Some(Page::StudentDirectory),
            "profile-edit" => Some(Page::ProfileEdit),
            "resume-builder" => Some(Page::ResumeBuilder),
            "interview-schedule" => Some(Page::InterviewSchedule),
            "documents" => Some(Page::Documents),
            "analytics" => Some(Page::Analytics),
            "user-directory" => Some(Page::UserDirectory),
            "help-desk" => Some(Page::HelpDesk),
            _ => None,
        }
    }

    /// Default breadcrumb label for a page.
    pub fn default_title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::JobBoard => "Job Board",
            Page::JobDetail(_) => "Job",
            Page::CompanyDirectory => "Companies",
            Page::CompanyDetail(_) => "Company",
            Page::StudentDirectory => "Students",
            Page::StudentDetail(_) => "Student",
            Page::ProfileEdit => "Edit Profile",
            Page::ResumeBuilder => "Resume Builder",
            Page::InterviewSchedule => "Interviews",
            Page::Documents => "Documents",
            Page::Analytics => "Analytics",
            Page::UserDirectory => "User Directory",
            Page::HelpDesk => "Help Desk",
        }
    }

    /// Role gate, kept in one table. `update()` consults this before
    /// pushing an entry; the router treats a forbidden current page as
    /// unknown and renders the dashboard fallback.
    pub fn allowed_for(&self, role: Role) -> bool {
        use Role::*;
        match self {
            Page::Dashboard
            | Page::JobBoard
            | Page::JobDetail(_)
            | Page::InterviewSchedule
            | Page::Documents
            | Page::HelpDesk => true,
            Page::CompanyDirectory | Page::CompanyDetail(_) => true,
            Page::StudentDirectory | Page::StudentDetail(_) => {
                matches!(role, Faculty | Outreach | Operations | Admin)
            }
            Page::ProfileEdit | Page::ResumeBuilder => matches!(role, Student | Admin),
            Page::Analytics => matches!(role, Outreach | Operations | Admin),
            Page::UserDirectory => matches!(role, Operations | Admin),
        }
    }
}

/// One step of navigation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub page: Page,
    pub title: String,
}

/// The page stack. Created once at startup, owned by `App`, and mutated
/// only through `navigate_to` / `go_back`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    history: Vec<NavEntry>,
}

impl Navigator {
    /// A navigator rooted at the dashboard. The root entry exists for the
    /// whole lifetime of the app and is never popped.
    pub fn new() -> Self {
        Self {
            history: vec![NavEntry {
                page: Page::Dashboard,
                title: Page::Dashboard.default_title().to_string(),
            }],
        }
    }

    /// Push a page onto the stack. Any page may follow any page; the
    /// graph is flat.
    pub fn navigate_to(&mut self, page: Page, title: impl Into<String>) {
        let title = title.into();
        log::debug!("navigate_to {:?} ({})", page, title);
        self.history.push(NavEntry { page, title });
    }

    /// Pop the top entry, unless only the root remains. Returns whether
    /// an entry was actually popped, so callers can tell a real step back
    /// from a no-op at the root.
    pub fn go_back(&mut self) -> bool {
        if self.history.len() > 1 {
            let left = self.history.pop();
            log::debug!("go_back from {:?}", left.map(|e| e.page));
            true
        } else {
            false
        }
    }

    /// The entry currently showing. Infallible: history is never empty.
    pub fn current(&self) -> &NavEntry {
        self.history
            .last()
            .unwrap_or_else(|| unreachable!("navigator history is never empty"))
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Breadcrumb labels, root first, current page last.
    pub fn breadcrumbs(&self) -> Vec<&str> {
        self.history.iter().map(|e| e.title.as_str()).collect()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_navigator_is_rooted_at_dashboard() {
        let nav = Navigator::new();
        assert_eq!(nav.current().page, Page::Dashboard);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.breadcrumbs(), vec!["Dashboard"]);
    }

    #[test]
    fn test_navigate_then_back_restores_prior_state() {
        let mut nav = Navigator::new();
        let before = nav.clone();

        nav.navigate_to(Page::JobDetail(7), "Job 7");
        assert_eq!(nav.current().page, Page::JobDetail(7));
        assert_eq!(nav.breadcrumbs(), vec!["Dashboard", "Job 7"]);

        assert!(nav.go_back());
        assert_eq!(nav, before);
    }

    #[test]
    fn test_push_pop_symmetry_over_a_sequence() {
        let mut nav = Navigator::new();
        nav.navigate_to(Page::JobBoard, "Job Board");
        let before = nav.clone();

        let pages = [
            (Page::JobDetail(1), "Job 1"),
            (Page::CompanyDetail(3), "Acme"),
            (Page::Analytics, "Analytics"),
            (Page::UserDirectory, "User Directory"),
        ];
        for (page, title) in pages.clone() {
            nav.navigate_to(page, title);
        }
        for _ in 0..pages.len() {
            assert!(nav.go_back());
        }
        assert_eq!(nav, before);
    }

    #[test]
    fn test_go_back_at_root_is_a_no_op() {
        let mut nav = Navigator::new();
        assert!(!nav.go_back());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().page, Page::Dashboard);
    }

    #[test]
    fn test_parse_known_and_unknown_ids() {
        assert_eq!(Page::parse("job-board"), Some(Page::JobBoard));
        assert_eq!(Page::parse("user-directory"), Some(Page::UserDirectory));
        assert_eq!(Page::parse("job-detail"), None); // needs a record id
        assert_eq!(Page::parse("not-a-page"), None);
    }

    #[test]
    fn test_role_gating_table() {
        assert!(Page::UserDirectory.allowed_for(Role::Admin));
        assert!(Page::UserDirectory.allowed_for(Role::Operations));
        assert!(!Page::UserDirectory.allowed_for(Role::Student));
        assert!(!Page::Analytics.allowed_for(Role::Faculty));
        assert!(Page::ProfileEdit.allowed_for(Role::Student));
        assert!(!Page::ProfileEdit.allowed_for(Role::Outreach));
        // Dashboard is open to everyone; it is the fallback.
        for role in [
            Role::Student,
            Role::Faculty,
            Role::Outreach,
            Role::Operations,
            Role::Admin,
        ] {
            assert!(Page::Dashboard.allowed_for(role));
        }
    }
}
