//! Student directory, student detail and the resume builder view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::data::{PlacementStatus, StudentProfile};
use crate::tui::components::roster::{ListNav, cell, render_roster};

pub fn render_student_directory(
    frame: &mut Frame,
    area: Rect,
    students: &[StudentProfile],
    nav: &mut ListNav,
) {
    let rows: Vec<Line> = students
        .iter()
        .map(|s| {
            Line::from(format!(
                "{} {} {} {}",
                cell(&s.name, 22),
                cell(&s.branch, 18),
                cell(&format!("CGPA {:.1}", s.cgpa), 10),
                cell(s.placement_status.label(), 12),
            ))
        })
        .collect();

    render_roster(
        frame,
        area,
        "Students",
        " ↑↓ Select  Enter Open  Esc Back ",
        "No student profiles on record.",
        rows,
        nav,
    );
}

fn placement_color(status: PlacementStatus) -> Color {
    match status {
        PlacementStatus::Placed => Color::Green,
        PlacementStatus::Shortlisted => Color::Yellow,
        PlacementStatus::Unplaced => Color::Gray,
    }
}

pub fn render_student_detail(frame: &mut Frame, area: Rect, student: Option<&StudentProfile>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Student ")
        .padding(Padding::horizontal(1));

    let Some(student) = student else {
        let missing = Paragraph::new("This student profile no longer exists.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(missing, area);
        return;
    };

    let lines = vec![
        Line::from(student.name.clone()).style(Style::default().fg(Color::White)),
        Line::from(""),
        Line::from(format!("Branch        {}", student.branch)),
        Line::from(format!("CGPA          {:.1}", student.cgpa)),
        Line::from(format!("Skills        {}", student.skills.join(", "))),
        Line::from(format!("Resume score  {}/100", student.resume_score)),
        Line::from(""),
        Line::from(format!("Placement: {}", student.placement_status.label()))
            .style(Style::default().fg(placement_color(student.placement_status))),
    ];

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(detail, area);
}

/// Resume builder: section checklist plus a score gauge for the first
/// seeded student (the "logged in" one under mock data).
pub fn render_resume_builder(frame: &mut Frame, area: Rect, student: Option<&StudentProfile>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Resume Builder ")
        .padding(Padding::horizontal(1));

    let Some(student) = student else {
        let missing = Paragraph::new("No student profile to build a resume from.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(missing, area);
        return;
    };

    let score = student.resume_score.min(100) as usize;
    let filled = score / 5; // 20-cell gauge
    let gauge = format!("[{}{}] {}/100", "█".repeat(filled), "░".repeat(20 - filled), score);

    let section = |label: &str, done: bool| {
        let mark = if done { "[x]" } else { "[ ]" };
        Line::from(format!("  {mark} {label}"))
    };

    let lines = vec![
        Line::from(format!("Resume — {}", student.name))
            .style(Style::default().fg(Color::White)),
        Line::from(""),
        section("Education", true),
        section("Skills", !student.skills.is_empty()),
        section("Projects", score >= 60),
        section("Internships", score >= 75),
        section("Achievements", score >= 90),
        Line::from(""),
        Line::from(gauge).style(Style::default().fg(Color::Cyan)),
        Line::from(""),
        Line::from("Complete the unchecked sections to raise your score.")
            .style(Style::default().fg(Color::DarkGray)),
    ];

    let builder = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(builder, area);
}
