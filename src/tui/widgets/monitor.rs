//! Pipeline monitor: endpoint diagram and the live event log.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::model::TrafficRoute;
use crate::store::Store;
use crate::tui::state::UiState;
use crate::tui::style::Styles;

pub fn render_monitor(frame: &mut Frame, area: Rect, store: &Store, ui: &mut UiState) {
    let [diagram, log] = Layout::vertical([Constraint::Length(5), Constraint::Min(3)]).areas(area);
    render_diagram(frame, diagram, store);
    render_log(frame, log, store, ui);
}

fn render_diagram(frame: &mut Frame, area: Rect, store: &Store) {
    let session = store.session();
    let target = session.route == TrafficRoute::Target;
    let flow = if session.running {
        Styles::throughput()
    } else {
        Styles::dim()
    };

    let mut endpoints = vec![
        Span::styled("[ PostgreSQL ]", Styles::route(false)),
        Span::styled(" ──▶ ", flow),
        Span::styled("[ Kafka CDC ]", Styles::default()),
        Span::styled(" ──▶ ", flow),
        Span::styled("[ MongoDB Atlas ]", Styles::route(true)),
    ];
    if store.aws_enabled() {
        endpoints.push(Span::styled(" ──▶ ", flow));
        endpoints.push(Span::styled("[ AWS S3 ]", Styles::cloud()));
    }

    let live = if target {
        Span::styled("TARGET (green)", Styles::route(true))
    } else {
        Span::styled("SOURCE (blue)", Styles::route(false))
    };
    let lines = vec![
        Line::from(endpoints),
        Line::from(""),
        Line::from(vec![Span::styled("Live traffic: ", Styles::dim()), live]),
    ];

    let block = Block::default()
        .title(" Pipeline ")
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_log(frame: &mut Frame, area: Rect, store: &Store, ui: &mut UiState) {
    let entries = store.log().entries();
    let height = area.height.saturating_sub(2) as usize;
    let max_scroll = entries.len().saturating_sub(height);
    ui.log_scroll = ui.log_scroll.min(max_scroll);

    let end = entries.len() - ui.log_scroll;
    let start = end.saturating_sub(height);
    let items: Vec<ListItem> = entries[start..end]
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", entry.timestamp), Styles::dim()),
                Span::styled(
                    format!("{}{}", entry.kind.prefix(), entry.message),
                    Styles::log(entry.kind),
                ),
            ]))
        })
        .collect();

    let title = if ui.log_scroll > 0 {
        format!(" Event Log ({} entries, -{}) ", entries.len(), ui.log_scroll)
    } else {
        format!(" Event Log ({} entries) ", entries.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(List::new(items).block(block), area);
}
