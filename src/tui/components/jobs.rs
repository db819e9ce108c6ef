//! # Job Pages
//!
//! The job board listing and the job detail view. Rows join each posting
//! with its company record; a dangling company id renders as "—" rather
//! than hiding the posting.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::data::{Company, JobPosting, JobStatus};
use crate::tui::components::roster::{ListNav, cell, render_roster};

pub fn render_job_board(
    frame: &mut Frame,
    area: Rect,
    jobs: &[JobPosting],
    companies: &[Company],
    nav: &mut ListNav,
) {
    let rows: Vec<Line> = jobs
        .iter()
        .map(|job| {
            let company = companies
                .iter()
                .find(|c| c.id == job.company_id)
                .map(|c| c.name.as_str())
                .unwrap_or("—");
            Line::from(format!(
                "{} {} {} {} {}",
                cell(&job.title, 28),
                cell(company, 20),
                cell(&job.location, 12),
                cell(&format!("{} applicants", job.applicants), 16),
                cell(job.status.label(), 8),
            ))
        })
        .collect();

    render_roster(
        frame,
        area,
        "Job Board",
        " ↑↓ Select  Enter Open  Esc Back ",
        "No postings yet.",
        rows,
        nav,
    );
}

pub fn render_job_detail(
    frame: &mut Frame,
    area: Rect,
    job: Option<&JobPosting>,
    companies: &[Company],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Job ")
        .padding(Padding::horizontal(1));

    let Some(job) = job else {
        // Stale id (e.g. a breadcrumb into a deleted record). Keep the
        // page up and say so instead of falling over.
        let missing = Paragraph::new("This posting no longer exists.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(missing, area);
        return;
    };

    let company = companies
        .iter()
        .find(|c| c.id == job.company_id)
        .map(|c| c.name.as_str())
        .unwrap_or("—");

    let status_color = match job.status {
        JobStatus::Open => Color::Green,
        JobStatus::OnHold => Color::Yellow,
        JobStatus::Closed => Color::Red,
    };

    let lines = vec![
        Line::from(job.title.clone()).style(Style::default().fg(Color::White)),
        Line::from(""),
        Line::from(format!("Company     {company}")),
        Line::from(format!("Location    {}", job.location)),
        Line::from(format!("Type        {}", job.job_type)),
        Line::from(format!("Package     {}", job.stipend)),
        Line::from(format!("Deadline    {}", job.deadline.format("%b %d, %Y"))),
        Line::from(format!("Applicants  {}", job.applicants)),
        Line::from(""),
        Line::from(format!("Status: {}", job.status.label()))
            .style(Style::default().fg(status_color)),
    ];

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(detail, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{seed_companies, seed_jobs};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(draw: impl FnOnce(&mut Frame)) -> String {
        let backend = TestBackend::new(90, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_job_board_lists_titles_and_companies() {
        let jobs = seed_jobs();
        let companies = seed_companies();
        let mut nav = ListNav::new();
        let text = render_to_text(|f| {
            render_job_board(f, f.area(), &jobs, &companies, &mut nav)
        });
        assert!(text.contains("Backend Engineer Intern"));
        assert!(text.contains("Qubit Labs"));
    }

    #[test]
    fn test_job_detail_shows_fields() {
        let jobs = seed_jobs();
        let companies = seed_companies();
        let text =
            render_to_text(|f| render_job_detail(f, f.area(), jobs.first(), &companies));
        assert!(text.contains("Backend Engineer Intern"));
        assert!(text.contains("Bengaluru"));
        assert!(text.contains("Status: open"));
    }

    #[test]
    fn test_job_detail_with_missing_record() {
        let companies = seed_companies();
        let text = render_to_text(|f| render_job_detail(f, f.area(), None, &companies));
        assert!(text.contains("no longer exists"));
    }
}
