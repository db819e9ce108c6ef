//! Interview schedule listing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::data::{InterviewSlot, JobPosting, StudentProfile};
use crate::tui::components::roster::{ListNav, cell, render_roster};

pub fn render_interview_schedule(
    frame: &mut Frame,
    area: Rect,
    interviews: &[InterviewSlot],
    jobs: &[JobPosting],
    students: &[StudentProfile],
    nav: &mut ListNav,
) {
    let rows: Vec<Line> = interviews
        .iter()
        .map(|slot| {
            let job = jobs
                .iter()
                .find(|j| j.id == slot.job_id)
                .map(|j| j.title.as_str())
                .unwrap_or("—");
            let student = students
                .iter()
                .find(|s| s.id == slot.student_id)
                .map(|s| s.name.as_str())
                .unwrap_or("—");
            let confirmed = if slot.confirmed { "confirmed" } else { "tentative" };
            Line::from(format!(
                "{} {} {} {} {} {}",
                cell(&slot.scheduled_at.format("%b %d %H:%M").to_string(), 14),
                cell(student, 18),
                cell(job, 24),
                cell(&slot.round, 12),
                cell(slot.mode.label(), 10),
                cell(confirmed, 10),
            ))
        })
        .collect();

    render_roster(
        frame,
        area,
        "Interview Schedule",
        " ↑↓ Select  Esc Back ",
        "Nothing scheduled.",
        rows,
        nav,
    );
}
