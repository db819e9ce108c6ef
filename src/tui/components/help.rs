//! Help desk page: key reference and placement-cell contacts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

pub fn render_help(frame: &mut Frame, area: Rect) {
    let heading = |text: &'static str| Line::from(text).style(Style::default().fg(Color::White));
    let entry = |key: &str, what: &str| Line::from(format!("  {key:<10}{what}"));

    let lines = vec![
        heading("Keys"),
        Line::from(""),
        entry("j c s i d", "Jobs / Companies / Students / Interviews / Documents"),
        entry("a u", "Analytics / User directory (where permitted)"),
        entry("p r", "Edit profile / Resume builder (students)"),
        entry("↑ ↓", "Move selection"),
        entry("Enter", "Open the selected entry"),
        entry("Esc", "Back to the previous page"),
        entry("q", "Quit (Ctrl+C anywhere)"),
        Line::from(""),
        heading("Contact"),
        Line::from(""),
        Line::from("  Placement cell office, Admin Block room 204."),
        Line::from("  placements@uni.edu — replies within one working day."),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Help Desk ")
        .title_bottom(Line::from(" Esc Back ").centered())
        .padding(Padding::horizontal(1));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_help_lists_keys_and_contact() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_help(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Keys"));
        assert!(text.contains("placements@uni.edu"));
    }
}
