//! # Dashboard Component
//!
//! The root page: a row of stat cards over a role-aware list of page
//! shortcuts. Everything is props; the numbers are computed by the
//! caller from core state (`get_user_stats` and friends).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::directory::UserStats;
use crate::tui::component::Component;

pub struct Dashboard {
    pub stats: UserStats,
    pub open_jobs: usize,
    pub upcoming_interviews: usize,
    pub unverified_documents: usize,
    /// `(key, label)` pairs, already filtered to what the role may open.
    pub shortcuts: Vec<(char, &'static str)>,
}

fn stat_card(title: &str, value: String, accent: Color) -> Paragraph<'static> {
    Paragraph::new(value)
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {title} "))
                .padding(Padding::horizontal(1)),
        )
}

impl Component for Dashboard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min, Percentage};

        let [cards_area, shortcuts_area] = Layout::vertical([Length(4), Min(0)]).areas(area);
        let card_areas: [Rect; 4] = Layout::horizontal([
            Percentage(25),
            Percentage(25),
            Percentage(25),
            Percentage(25),
        ])
        .areas(cards_area);

        let cards = [
            stat_card("Open Jobs", self.open_jobs.to_string(), Color::Green),
            stat_card(
                "Interviews",
                self.upcoming_interviews.to_string(),
                Color::Cyan,
            ),
            stat_card(
                "Users Active",
                format!(
                    "{} / {} ({}%)",
                    self.stats.by_status.active,
                    self.stats.total,
                    self.stats.active_percent()
                ),
                Color::Yellow,
            ),
            stat_card(
                "Docs Pending",
                self.unverified_documents.to_string(),
                Color::Magenta,
            ),
        ];
        for (card, card_area) in cards.into_iter().zip(card_areas) {
            frame.render_widget(card, card_area);
        }

        let mut lines = vec![Line::from("")];
        for (key, label) in &self.shortcuts {
            lines.push(Line::from(format!("  {key}  {label}")));
        }
        lines.push(Line::from(""));
        lines.push(
            Line::from("Esc back · q quit").style(Style::default().fg(Color::DarkGray)),
        );
        let shortcuts = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Go To ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(shortcuts, shortcuts_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_dashboard_renders_counts_and_shortcuts() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut dashboard = Dashboard {
            stats: UserStats::default(),
            open_jobs: 3,
            upcoming_interviews: 2,
            unverified_documents: 1,
            shortcuts: vec![('j', "Job Board"), ('u', "User Directory")],
        };
        terminal
            .draw(|f| dashboard.render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Open Jobs"));
        assert!(text.contains("Job Board"));
        assert!(text.contains("User Directory"));
    }
}
