//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::store::Store;
use crate::tui::style::Styles;

/// Renders a centered quit confirmation popup. Warns when the pipeline is
/// still running.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect, store: &Store) {
    let popup_area = centered_rect(46, 8, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Exit Grasya ")
        .borders(Borders::ALL)
        .border_style(Styles::focused_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let question = if store.session().running {
        Line::from(Span::styled(
            "The pipeline is still running. Quit anyway?",
            Styles::critical(),
        ))
    } else {
        Line::from("Are you sure you want to quit?")
    };
    let content = vec![
        question,
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" or ", Styles::dim()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" → quit", Styles::dim()),
        ]),
        Line::from(vec![
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" or ", Styles::dim()),
            Span::styled("n", Styles::help_key()),
            Span::styled(" → cancel", Styles::dim()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        inner,
    );
}
