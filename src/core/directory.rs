//! # User Directory
//!
//! Pure, synchronous transformations over a caller-owned list of user
//! records. Nothing in here holds state or performs I/O; every function
//! returns a fresh value and leaves its input untouched, which keeps the
//! reducer in `action.rs` trivially testable.
//!
//! Operations that can miss (status update, delete) report whether they
//! had any effect instead of silently succeeding, and the two places the
//! original product divided without a zero guard (`active_percent`,
//! average profile completion) are pinned to `0` on empty input.

use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Dashboard role. Doubles as the `--role` CLI value and the config
/// `default_role` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Faculty,
    Outreach,
    Operations,
    Admin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Student,
        Role::Faculty,
        Role::Outreach,
        Role::Operations,
        Role::Admin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
            Role::Outreach => "Outreach",
            Role::Operations => "Operations",
            Role::Admin => "Admin",
        }
    }

    /// Parse an external role string (env var `PLACEBOARD_ROLE`).
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Some(Role::Student),
            "faculty" => Some(Role::Faculty),
            "outreach" => Some(Role::Outreach),
            "operations" => Some(Role::Operations),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Account status of a directory user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    Pending,
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::Suspended,
        UserStatus::Pending,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
            UserStatus::Pending => "pending",
        }
    }

    /// The next status in cycling order, used by the directory screen's
    /// status-cycle key.
    pub fn next(&self) -> UserStatus {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Suspended,
            UserStatus::Suspended => UserStatus::Pending,
            UserStatus::Pending => UserStatus::Active,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user in the directory. Seeded from `data::seed_users`, replaced
/// wholesale by the update/delete operations below; never mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: UserStatus,
    pub last_login: DateTime<Utc>,
    pub join_date: DateTime<Utc>,
    /// Profile completion, 0–100.
    pub profile_completed: u8,
    pub permissions: BTreeSet<String>,
}

/// Filter a user list by search text and optional role/status.
///
/// The search is a case-insensitive substring match against name OR
/// email; an empty search matches everything. `None` for role or status
/// means "all". Order is preserved and the input is not touched.
pub fn filter_users(
    users: &[UserRecord],
    search: &str,
    role: Option<Role>,
    status: Option<UserStatus>,
) -> Vec<UserRecord> {
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|u| {
            let text_hit = needle.is_empty()
                || u.name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle);
            let role_hit = role.is_none_or(|r| u.role == r);
            let status_hit = status.is_none_or(|s| u.status == s);
            text_hit && role_hit && status_hit
        })
        .cloned()
        .collect()
}

/// Return a copy of `users` with the status of the record matching `id`
/// replaced. The bool reports whether any record matched; a miss returns
/// an equal copy rather than an error.
pub fn update_user_status(
    users: &[UserRecord],
    id: u32,
    new_status: UserStatus,
) -> (Vec<UserRecord>, bool) {
    let mut changed = false;
    let updated = users
        .iter()
        .map(|u| {
            if u.id == id {
                changed = true;
                let mut u = u.clone();
                u.status = new_status;
                u
            } else {
                u.clone()
            }
        })
        .collect();
    (updated, changed)
}

/// Return a copy of `users` without the record matching `id`. The bool
/// reports whether a record was removed; a miss returns a full copy.
pub fn delete_user(users: &[UserRecord], id: u32) -> (Vec<UserRecord>, bool) {
    let before = users.len();
    let remaining: Vec<UserRecord> = users.iter().filter(|u| u.id != id).cloned().collect();
    let removed = remaining.len() < before;
    (remaining, removed)
}

/// Fixed-key counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: usize,
    pub inactive: usize,
    pub suspended: usize,
    pub pending: usize,
}

/// Fixed-key counts over the five roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub student: usize,
    pub faculty: usize,
    pub outreach: usize,
    pub operations: usize,
    pub admin: usize,
}

impl RoleCounts {
    pub fn get(&self, role: Role) -> usize {
        match role {
            Role::Student => self.student,
            Role::Faculty => self.faculty,
            Role::Outreach => self.outreach,
            Role::Operations => self.operations,
            Role::Admin => self.admin,
        }
    }

    pub fn sum(&self) -> usize {
        self.student + self.faculty + self.outreach + self.operations + self.admin
    }
}

/// Aggregate counts for the dashboard cards and the analytics page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub by_status: StatusCounts,
    pub by_role: RoleCounts,
}

impl UserStats {
    /// Active users as a whole percentage of the total. Defined as 0 for
    /// an empty directory.
    pub fn active_percent(&self) -> u8 {
        if self.total == 0 {
            0
        } else {
            (self.by_status.active * 100 / self.total) as u8
        }
    }
}

/// Recompute aggregate counts. `stats.total` always equals `users.len()`
/// and the role counts always sum back to the total.
pub fn get_user_stats(users: &[UserRecord]) -> UserStats {
    let mut stats = UserStats {
        total: users.len(),
        ..UserStats::default()
    };
    for u in users {
        match u.status {
            UserStatus::Active => stats.by_status.active += 1,
            UserStatus::Inactive => stats.by_status.inactive += 1,
            UserStatus::Suspended => stats.by_status.suspended += 1,
            UserStatus::Pending => stats.by_status.pending += 1,
        }
        match u.role {
            Role::Student => stats.by_role.student += 1,
            Role::Faculty => stats.by_role.faculty += 1,
            Role::Outreach => stats.by_role.outreach += 1,
            Role::Operations => stats.by_role.operations += 1,
            Role::Admin => stats.by_role.admin += 1,
        }
    }
    stats
}

/// An unsaved user as entered in the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub department: String,
}

/// Which field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Name,
    Email,
    Role,
    Department,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Name => "Name is required",
            FieldError::Email => "A valid email is required",
            FieldError::Role => "Role is required",
            FieldError::Department => "Department is required",
        }
    }
}

/// Outcome of validating a draft. Returned, never thrown; the caller
/// decides how to surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

// Deliberately loose: something@something.something. The directory is
// mock data, not an RFC 5322 gate.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("email regex: {e}"))
});

/// Validate a draft: name, email (shape-checked), role and department
/// must all be present.
pub fn validate_user(draft: &UserDraft) -> Validation {
    let mut errors = Vec::new();
    if draft.name.trim().is_empty() {
        errors.push(FieldError::Name);
    }
    if draft.email.trim().is_empty() || !EMAIL_RE.is_match(draft.email.trim()) {
        errors.push(FieldError::Email);
    }
    if draft.role.is_none() {
        errors.push(FieldError::Role);
    }
    if draft.department.trim().is_empty() {
        errors.push(FieldError::Department);
    }
    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Point-in-time directory summary for the analytics page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReport {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub active: usize,
    pub by_role: RoleCounts,
    /// Users who joined within `window_days` before `generated_at`.
    pub recent_joins: usize,
    /// Mean profile completion, rounded to an integer. 0 for an empty
    /// directory.
    pub avg_profile_completed: u8,
}

/// Snapshot the directory. `now` is a parameter so the join window and
/// the timestamp are deterministic under test; `window_days` normally
/// comes from config (30 by default).
pub fn generate_user_report(
    users: &[UserRecord],
    now: DateTime<Utc>,
    window_days: i64,
) -> UserReport {
    let stats = get_user_stats(users);
    let window_start = now - Duration::days(window_days);
    let recent_joins = users.iter().filter(|u| u.join_date >= window_start).count();
    let avg_profile_completed = if users.is_empty() {
        0
    } else {
        let sum: u32 = users.iter().map(|u| u.profile_completed as u32).sum();
        ((sum as f64 / users.len() as f64).round()) as u8
    };
    UserReport {
        generated_at: now,
        total: stats.total,
        active: stats.by_status.active,
        by_role: stats.by_role,
        recent_joins,
        avg_profile_completed,
    }
}
