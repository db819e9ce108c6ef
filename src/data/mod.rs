//! # Mock Data
//!
//! Deterministic seed records standing in for a backend. Every screen
//! reads from these lists; mutations (status updates, deletes) replace
//! the owning `Vec` in `App` and do not survive a restart.
//!
//! Dates are fixed absolute timestamps, not offsets from `Utc::now()`,
//! so renders and tests are stable.

mod placements;
mod users;

pub use placements::{
    Company, DocumentRecord, InterviewMode, InterviewSlot, JobPosting, JobStatus, PlacementStatus,
    StudentProfile, seed_companies, seed_documents, seed_interviews, seed_jobs, seed_students,
};
pub use users::seed_users;

use chrono::{DateTime, TimeZone, Utc};

/// Seed timestamp helper. The arguments are always in-range literals, so
/// the ambiguity branch is unreachable.
pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}
