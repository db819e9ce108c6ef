//! Document manager listing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::data::DocumentRecord;
use crate::tui::components::roster::{ListNav, cell, render_roster};

pub fn render_documents(
    frame: &mut Frame,
    area: Rect,
    documents: &[DocumentRecord],
    nav: &mut ListNav,
) {
    let rows: Vec<Line> = documents
        .iter()
        .map(|doc| {
            let verified = if doc.verified { "verified" } else { "pending" };
            Line::from(format!(
                "{} {} {} {}",
                cell(&doc.kind, 14),
                cell(&doc.owner, 20),
                cell(&doc.uploaded_at.format("%b %d, %Y").to_string(), 14),
                cell(verified, 10),
            ))
        })
        .collect();

    render_roster(
        frame,
        area,
        "Documents",
        " ↑↓ Select  Esc Back ",
        "No documents uploaded.",
        rows,
        nav,
    );
}
