//! # TUI Components
//!
//! One file per screen (or shared widget), each self-contained: state
//! types, event types, rendering and tests live together.
//!
//! ## Component Architecture
//!
//! Two patterns, mirroring how much state a screen needs:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Plain `render_*` functions that receive all data as parameters:
//! - `title_bar`: breadcrumb trail and status line
//! - `dashboard`: stat cards and navigation shortcuts
//! - `jobs` / `companies` / `students` / `interviews` / `documents`:
//!   roster listings and their detail views
//! - `analytics`: rendered `UserReport`
//! - `help`: static key reference
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent `*State` structs that live in `TuiState` across frames,
//! plus a transient wrapper created per frame with borrowed state:
//! - `user_admin`: search text, filter cycles, delete confirmation
//! - `profile_form`: field focus and draft under edit
//!
//! Stateful components never mutate `App` directly. They emit events
//! (`UserAdminEvent`, `FormEvent`) which the event loop converts into
//! core actions, so every mutation flows through `update()`.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as parameters, not by reaching into
//! global state. Dependencies stay explicit and every screen renders
//! under `TestBackend` without a running terminal.

pub mod analytics;
pub mod companies;
pub mod dashboard;
pub mod documents;
pub mod help;
pub mod interviews;
pub mod jobs;
pub mod profile_form;
pub mod roster;
pub mod students;
pub mod title_bar;
pub mod user_admin;

pub use dashboard::Dashboard;
pub use profile_form::{FormEvent, ProfileForm, ProfileFormState};
pub use roster::ListNav;
pub use title_bar::TitleBar;
pub use user_admin::{UserAdmin, UserAdminEvent, UserAdminState};
