//! Company directory listing and company detail view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::data::{Company, JobPosting, JobStatus};
use crate::tui::components::roster::{ListNav, cell, render_roster};

pub fn render_company_directory(
    frame: &mut Frame,
    area: Rect,
    companies: &[Company],
    nav: &mut ListNav,
) {
    let rows: Vec<Line> = companies
        .iter()
        .map(|c| {
            Line::from(format!(
                "{} {} {} {}",
                cell(&c.name, 24),
                cell(&c.industry, 14),
                cell(&c.tier, 8),
                cell(&format!("{} open roles", c.open_roles), 14),
            ))
        })
        .collect();

    render_roster(
        frame,
        area,
        "Companies",
        " ↑↓ Select  Enter Open  Esc Back ",
        "No partner companies on record.",
        rows,
        nav,
    );
}

pub fn render_company_detail(
    frame: &mut Frame,
    area: Rect,
    company: Option<&Company>,
    jobs: &[JobPosting],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Company ")
        .padding(Padding::horizontal(1));

    let Some(company) = company else {
        let missing = Paragraph::new("This company no longer exists.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(missing, area);
        return;
    };

    let mut lines = vec![
        Line::from(company.name.clone()).style(Style::default().fg(Color::White)),
        Line::from(""),
        Line::from(format!("Industry       {}", company.industry)),
        Line::from(format!("Tier           {}", company.tier)),
        Line::from(format!("Campus visits  {}", company.campus_visits)),
        Line::from(format!("Contact        {}", company.contact)),
        Line::from(""),
        Line::from("Active postings:").style(Style::default().fg(Color::Cyan)),
    ];
    let mut any = false;
    for job in jobs
        .iter()
        .filter(|j| j.company_id == company.id && j.status == JobStatus::Open)
    {
        any = true;
        lines.push(Line::from(format!("  • {} ({})", job.title, job.location)));
    }
    if !any {
        lines.push(Line::from("  none").style(Style::default().fg(Color::DarkGray)));
    }

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(detail, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{seed_companies, seed_jobs};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_company_detail_lists_open_postings_only() {
        let companies = seed_companies();
        let jobs = seed_jobs();
        let backend = TestBackend::new(90, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_company_detail(f, f.area(), companies.first(), &jobs))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Qubit Labs"));
        assert!(text.contains("Backend Engineer Intern"));
        // Job 4 is closed and belongs to another company anyway
        assert!(!text.contains("Embedded Systems"));
    }
}
