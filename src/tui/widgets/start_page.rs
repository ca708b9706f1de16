//! Start page: welcome text and the current connection state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::store::Store;
use crate::tui::style::Styles;

pub fn render_start_page(frame: &mut Frame, area: Rect, store: &Store) {
    let mut lines = vec![
        Line::from(Span::styled("Welcome to Grasya", Styles::section_header())),
        Line::from(""),
        Line::from("Move relational data from PostgreSQL into MongoDB Atlas,"),
        Line::from("with optional replication to an AWS S3 data lake."),
        Line::from(""),
    ];

    if store.session().connected {
        lines.push(Line::from(vec![
            Span::styled("● ", Styles::throughput()),
            Span::raw("Connected. Open the monitor with "),
            Span::styled("m", Styles::help_key()),
            Span::raw(" or browse the explorer with "),
            Span::styled("e", Styles::help_key()),
            Span::raw("."),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled("○ ", Styles::dim()),
            Span::raw("Not connected. Press "),
            Span::styled("c", Styles::help_key()),
            Span::raw(" or "),
            Span::styled("Enter", Styles::help_key()),
            Span::raw(" to open the connection dialog."),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Recent", Styles::section_header())));
    for entry in store.log().entries().iter().rev().take(5) {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", entry.timestamp), Styles::dim()),
            Span::styled(entry.message.clone(), Styles::log(entry.kind)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
