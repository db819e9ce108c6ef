//! Analytics page: a rendered `UserReport` with per-role bars.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::directory::{Role, UserReport};

const BAR_WIDTH: usize = 30;

fn role_bar(label: &str, count: usize, max: usize) -> Line<'static> {
    let filled = if max == 0 { 0 } else { count * BAR_WIDTH / max };
    Line::from(format!(
        "  {label:<12}{} {count}",
        "█".repeat(filled.max(usize::from(count > 0)))
    ))
}

pub fn render_analytics(frame: &mut Frame, area: Rect, report: &UserReport, window_days: i64) {
    let max = Role::ALL.iter().map(|r| report.by_role.get(*r)).max().unwrap_or(0);

    let mut lines = vec![
        Line::from(format!(
            "Report generated {}",
            report.generated_at.format("%b %d, %Y %H:%M UTC")
        ))
        .style(Style::default().fg(Color::DarkGray)),
        Line::from(""),
        Line::from(format!("  Total users          {}", report.total)),
        Line::from(format!("  Active users         {}", report.active)),
        Line::from(format!(
            "  Joined last {window_days} days  {}",
            report.recent_joins
        )),
        Line::from(format!(
            "  Avg profile filled   {}%",
            report.avg_profile_completed
        )),
        Line::from(""),
        Line::from("Users by role").style(Style::default().fg(Color::White)),
        Line::from(""),
    ];
    for role in Role::ALL {
        lines.push(role_bar(role.label(), report.by_role.get(role), max));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Analytics ")
        .title_bottom(Line::from(" Esc Back ").centered())
        .padding(Padding::horizontal(1));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
