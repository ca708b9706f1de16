//! Connection dialog: endpoint summary and the cloud replication checkbox.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::store::Store;
use crate::tui::style::Styles;

pub fn render_connect_dialog(frame: &mut Frame, area: Rect, store: &Store, aws_enabled: bool) {
    let popup_area = centered_rect(54, 12, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Connect to Endpoints ")
        .borders(Borders::ALL)
        .border_style(Styles::focused_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let settings = store.settings();
    let checkbox = if aws_enabled { "[x]" } else { "[ ]" };
    let content = vec![
        Line::from(vec![
            Span::styled("Source  ", Styles::dim()),
            Span::styled("PostgreSQL (Primary)", Styles::route(false)),
        ]),
        Line::from(vec![
            Span::styled("Target  ", Styles::dim()),
            Span::styled(
                format!("MongoDB Atlas / {}", settings.target_database),
                Styles::route(true),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", checkbox), Styles::help_key()),
            Span::styled("Replicate to AWS S3 ", Styles::cloud()),
            Span::styled(format!("({})", settings.aws_region), Styles::dim()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("a", Styles::help_key()),
            Span::styled(" toggle S3  ", Styles::dim()),
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" connect  ", Styles::dim()),
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" cancel", Styles::dim()),
        ]),
    ];
    frame.render_widget(Paragraph::new(content), inner);
}
