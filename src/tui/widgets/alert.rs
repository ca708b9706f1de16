//! Blocking notification popup.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered_rect;
use crate::tui::style::Styles;

pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_rect(44, 7, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Grasya ")
        .borders(Borders::ALL)
        .border_style(Styles::critical());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" → OK", Styles::dim()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
