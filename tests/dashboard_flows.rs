//! End-to-end flows through the reducer: sequences of actions against a
//! fresh app, asserting on the resulting state. No terminal involved.

use placeboard::core::action::{Action, Effect, update};
use placeboard::core::directory::{
    Role, UserDraft, UserStatus, generate_user_report, get_user_stats,
};
use placeboard::core::nav::Page;
use placeboard::core::state::App;
use chrono::Utc;

fn navigate(app: &mut App, page: Page, title: &str) {
    update(
        app,
        Action::Navigate {
            page,
            title: title.to_string(),
        },
    );
}

#[test]
fn test_deep_navigation_and_back_restores_breadcrumbs() {
    let mut app = App::new(Role::Admin);
    assert_eq!(app.nav.breadcrumbs(), vec!["Dashboard"]);

    navigate(&mut app, Page::JobBoard, "Job Board");
    navigate(&mut app, Page::JobDetail(1), "Backend Engineer Intern");
    assert_eq!(
        app.nav.breadcrumbs(),
        vec!["Dashboard", "Job Board", "Backend Engineer Intern"]
    );

    update(&mut app, Action::Back);
    assert_eq!(app.nav.breadcrumbs(), vec!["Dashboard", "Job Board"]);
    update(&mut app, Action::Back);
    assert_eq!(app.nav.breadcrumbs(), vec!["Dashboard"]);

    // Back at the root stays at the root
    update(&mut app, Action::Back);
    assert_eq!(app.nav.current().page, Page::Dashboard);
    assert_eq!(app.nav.depth(), 1);
}

#[test]
fn test_role_gate_blocks_restricted_pages_end_to_end() {
    let mut app = App::new(Role::Student);
    navigate(&mut app, Page::UserDirectory, "User Directory");
    assert_eq!(app.nav.current().page, Page::Dashboard);
    assert!(app.status_message.contains("not available"));

    // The same push works for operations staff
    let mut app = App::new(Role::Operations);
    navigate(&mut app, Page::UserDirectory, "User Directory");
    assert_eq!(app.nav.current().page, Page::UserDirectory);
}

#[test]
fn test_admin_session_mutates_directory_and_stats_follow() {
    let mut app = App::new(Role::Admin);
    let before = get_user_stats(&app.users);

    update(
        &mut app,
        Action::SetUserStatus {
            id: 1,
            status: UserStatus::Suspended,
        },
    );
    update(&mut app, Action::DeleteUser { id: 2 });

    let after = get_user_stats(&app.users);
    assert_eq!(after.total, before.total - 1);
    assert_eq!(after.by_status.suspended, before.by_status.suspended + 1);
    assert_eq!(after.by_role.sum(), after.total);

    let report = generate_user_report(&app.users, Utc::now(), 30);
    assert_eq!(report.total, after.total);
}

#[test]
fn test_profile_edit_round_trip() {
    let mut app = App::new(Role::Student);
    navigate(&mut app, Page::ProfileEdit, "Edit Profile");

    // An invalid draft stays on the page
    update(&mut app, Action::SubmitProfile(UserDraft::default()));
    assert_eq!(app.nav.current().page, Page::ProfileEdit);

    // A valid draft saves and steps back to where the user came from
    let draft = UserDraft {
        name: "Aarav Sharma".to_string(),
        email: "aarav.sharma@uni.edu".to_string(),
        role: Some(Role::Student),
        department: "Computer Science".to_string(),
    };
    update(&mut app, Action::SubmitProfile(draft));
    assert_eq!(app.nav.current().page, Page::Dashboard);
    assert!(app.status_message.contains("Profile saved for Aarav Sharma"));
}

#[test]
fn test_quit_is_the_only_quitting_effect() {
    let mut app = App::new(Role::Faculty);
    assert_eq!(
        update(
            &mut app,
            Action::Navigate {
                page: Page::StudentDirectory,
                title: "Students".to_string()
            }
        ),
        Effect::None
    );
    assert_eq!(update(&mut app, Action::Back), Effect::None);
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
