//! Seed records for the user directory.

use std::collections::BTreeSet;

use crate::core::directory::{Role, UserRecord, UserStatus};
use crate::data::date;

fn perms(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// The in-memory user directory. Ids are unique; every role and status
/// value appears at least once so the directory filters have something
/// to bite on.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            name: "Aarav Sharma".to_string(),
            email: "aarav.sharma@uni.edu".to_string(),
            role: Role::Student,
            department: "Computer Science".to_string(),
            status: UserStatus::Active,
            last_login: date(2026, 8, 24),
            join_date: date(2026, 8, 2),
            profile_completed: 92,
            permissions: perms(&["jobs.view", "profile.edit"]),
        },
        UserRecord {
            id: 2,
            name: "Meera Iyer".to_string(),
            email: "meera.iyer@uni.edu".to_string(),
            role: Role::Student,
            department: "Electronics".to_string(),
            status: UserStatus::Active,
            last_login: date(2026, 8, 25),
            join_date: date(2025, 7, 14),
            profile_completed: 78,
            permissions: perms(&["jobs.view", "profile.edit"]),
        },
        UserRecord {
            id: 3,
            name: "John Mathew".to_string(),
            email: "john.mathew@uni.edu".to_string(),
            role: Role::Student,
            department: "Mechanical".to_string(),
            status: UserStatus::Pending,
            last_login: date(2026, 8, 10),
            join_date: date(2026, 8, 10),
            profile_completed: 35,
            permissions: perms(&["jobs.view"]),
        },
        UserRecord {
            id: 4,
            name: "Prof. Lakshmi Menon".to_string(),
            email: "lakshmi.menon@uni.edu".to_string(),
            role: Role::Faculty,
            department: "Computer Science".to_string(),
            status: UserStatus::Active,
            last_login: date(2026, 8, 23),
            join_date: date(2021, 6, 1),
            profile_completed: 100,
            permissions: perms(&["students.view", "interviews.view"]),
        },
        UserRecord {
            id: 5,
            name: "Prof. Dev Khanna".to_string(),
            email: "dev.khanna@uni.edu".to_string(),
            role: Role::Faculty,
            department: "Electronics".to_string(),
            status: UserStatus::Inactive,
            last_login: date(2026, 2, 3),
            join_date: date(2019, 7, 20),
            profile_completed: 64,
            permissions: perms(&["students.view"]),
        },
        UserRecord {
            id: 6,
            name: "Sara Thomas".to_string(),
            email: "sara.thomas@uni.edu".to_string(),
            role: Role::Outreach,
            department: "Placement Cell".to_string(),
            status: UserStatus::Active,
            last_login: date(2026, 8, 25),
            join_date: date(2023, 1, 9),
            profile_completed: 88,
            permissions: perms(&["companies.manage", "analytics.view"]),
        },
        UserRecord {
            id: 7,
            name: "Rahul Bose".to_string(),
            email: "rahul.bose@uni.edu".to_string(),
            role: Role::Outreach,
            department: "Placement Cell".to_string(),
            status: UserStatus::Suspended,
            last_login: date(2026, 5, 30),
            join_date: date(2024, 3, 18),
            profile_completed: 51,
            permissions: perms(&["companies.manage"]),
        },
        UserRecord {
            id: 8,
            name: "Nina Paul".to_string(),
            email: "nina.paul@uni.edu".to_string(),
            role: Role::Operations,
            department: "Placement Cell".to_string(),
            status: UserStatus::Active,
            last_login: date(2026, 8, 26),
            join_date: date(2022, 11, 2),
            profile_completed: 95,
            permissions: perms(&["users.manage", "interviews.schedule", "analytics.view"]),
        },
        UserRecord {
            id: 9,
            name: "Vikram Rao".to_string(),
            email: "vikram.rao@uni.edu".to_string(),
            role: Role::Operations,
            department: "Placement Cell".to_string(),
            status: UserStatus::Pending,
            last_login: date(2026, 8, 20),
            join_date: date(2026, 8, 19),
            profile_completed: 40,
            permissions: perms(&["interviews.schedule"]),
        },
        UserRecord {
            id: 10,
            name: "Admin Desk".to_string(),
            email: "admin@uni.edu".to_string(),
            role: Role::Admin,
            department: "Administration".to_string(),
            status: UserStatus::Active,
            last_login: date(2026, 8, 26),
            join_date: date(2018, 4, 5),
            profile_completed: 100,
            permissions: perms(&["users.manage", "system.admin", "analytics.view"]),
        },
    ]
}
