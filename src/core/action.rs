//! # Actions
//!
//! Everything that can happen in Placeboard becomes an `Action`.
//! User opens a job? That's `Action::Navigate`.
//! Admin suspends an account? That's `Action::SetUserStatus`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state in place and reports a follow-up `Effect`. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable: feed in a sequence of actions,
//! assert on the resulting state.

use log::{debug, info};

use crate::core::directory::{
    UserDraft, UserStatus, delete_user, update_user_status, validate_user,
};
use crate::core::nav::Page;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push a page onto the navigation stack with a breadcrumb title.
    Navigate { page: Page, title: String },
    /// Pop back to the previous page (no-op at the dashboard root).
    Back,
    /// Replace the status of the user with this id.
    SetUserStatus { id: u32, status: UserStatus },
    /// Remove the user with this id from the directory.
    DeleteUser { id: u32 },
    /// Save the profile form. Invalid drafts are rejected with a status
    /// message and leave all state untouched.
    SubmitProfile(UserDraft),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate { page, title } => {
            if !page.allowed_for(app.role) {
                info!("{} blocked for role {}", title, app.role);
                app.status_message = format!("{} is not available to {}", title, app.role);
                return Effect::None;
            }
            app.nav.navigate_to(page, title);
            app.status_message.clear();
        }
        Action::Back => {
            if app.nav.go_back() {
                app.status_message.clear();
            } else {
                debug!("back ignored at dashboard root");
            }
        }
        Action::SetUserStatus { id, status } => {
            let (users, changed) = update_user_status(&app.users, id, status);
            app.users = users;
            app.status_message = if changed {
                format!("User #{id} set to {status}")
            } else {
                format!("User #{id} not found")
            };
        }
        Action::DeleteUser { id } => {
            let (users, removed) = delete_user(&app.users, id);
            app.users = users;
            app.status_message = if removed {
                format!("User #{id} removed")
            } else {
                format!("User #{id} not found")
            };
        }
        Action::SubmitProfile(draft) => {
            let validation = validate_user(&draft);
            if validation.is_valid {
                info!("profile saved for {}", draft.name);
                app.status_message = format!("Profile saved for {}", draft.name);
                app.nav.go_back();
            } else {
                app.status_message = format!(
                    "Profile has {} error(s), fix them to save",
                    validation.errors.len()
                );
            }
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::directory::Role;

    fn navigate(app: &mut App, page: Page) -> Effect {
        let title = page.default_title().to_string();
        update(app, Action::Navigate { page, title })
    }

    #[test]
    fn test_navigate_pushes_and_back_pops() {
        let mut app = App::new(Role::Admin);
        navigate(&mut app, Page::JobBoard);
        navigate(&mut app, Page::JobDetail(1));
        assert_eq!(app.nav.current().page, Page::JobDetail(1));

        update(&mut app, Action::Back);
        assert_eq!(app.nav.current().page, Page::JobBoard);
    }

    #[test]
    fn test_navigate_to_forbidden_page_is_rejected() {
        let mut app = App::new(Role::Student);
        navigate(&mut app, Page::UserDirectory);
        assert_eq!(app.nav.current().page, Page::Dashboard);
        assert!(app.status_message.contains("not available"));
    }

    #[test]
    fn test_back_at_root_leaves_state_alone() {
        let mut app = App::new(Role::Student);
        app.status_message = String::from("hello");
        update(&mut app, Action::Back);
        assert_eq!(app.nav.depth(), 1);
        // Status untouched: the no-op really is a no-op.
        assert_eq!(app.status_message, "hello");
    }

    #[test]
    fn test_set_status_reports_hit_and_miss() {
        let mut app = App::new(Role::Admin);
        update(
            &mut app,
            Action::SetUserStatus {
                id: 1,
                status: UserStatus::Suspended,
            },
        );
        assert_eq!(app.users[0].status, UserStatus::Suspended);
        assert!(app.status_message.contains("set to suspended"));

        update(
            &mut app,
            Action::SetUserStatus {
                id: 9999,
                status: UserStatus::Active,
            },
        );
        assert!(app.status_message.contains("not found"));
    }

    #[test]
    fn test_delete_user_shrinks_directory() {
        let mut app = App::new(Role::Admin);
        let before = app.users.len();
        update(&mut app, Action::DeleteUser { id: 1 });
        assert_eq!(app.users.len(), before - 1);
        update(&mut app, Action::DeleteUser { id: 1 });
        assert_eq!(app.users.len(), before - 1);
        assert!(app.status_message.contains("not found"));
    }

    #[test]
    fn test_submit_invalid_profile_stays_on_page() {
        let mut app = App::new(Role::Student);
        navigate(&mut app, Page::ProfileEdit);
        update(&mut app, Action::SubmitProfile(UserDraft::default()));
        assert_eq!(app.nav.current().page, Page::ProfileEdit);
        assert!(app.status_message.contains("4 error(s)"));
    }

    #[test]
    fn test_submit_valid_profile_navigates_back() {
        let mut app = App::new(Role::Student);
        navigate(&mut app, Page::ProfileEdit);
        let draft = UserDraft {
            name: "Aarav Sharma".to_string(),
            email: "aarav.sharma@uni.edu".to_string(),
            role: Some(Role::Student),
            department: "Computer Science".to_string(),
        };
        update(&mut app, Action::SubmitProfile(draft));
        assert_eq!(app.nav.current().page, Page::Dashboard);
        assert!(app.status_message.contains("Profile saved"));
    }

    #[test]
    fn test_quit_effect() {
        let mut app = App::new(Role::Student);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
