//! Status bar: connection, pipeline and route indicators.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::store::Store;
use crate::tui::state::UiState;
use crate::tui::style::Styles;

pub fn render_status_bar(frame: &mut Frame, area: Rect, store: &Store, ui: &UiState) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(44)]).areas(area);

    let session = store.session();
    let mut spans = vec![Span::styled(
        if session.connected { " Ready " } else { " Disconnected " },
        Styles::status_bar(),
    )];
    if session.running {
        spans.push(Span::styled(" ● Migrating... ", Styles::running()));
    }
    if let Some(msg) = &ui.status_message {
        spans.push(Span::styled(format!(" {}", msg), Styles::status_bar()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::status_bar()),
        left,
    );

    let right_text = if session.connected {
        format!(
            "Route: {}  Latency: {} ms  ?:help ",
            session.route.label(),
            store.telemetry().latency
        )
    } else {
        "?:help  q:quit ".to_string()
    };
    frame.render_widget(
        Paragraph::new(right_text)
            .style(Styles::status_bar())
            .alignment(ratatui::layout::Alignment::Right),
        right,
    );
}
