//! Live row feed of an explorer table or view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table};

use crate::feed::RowOp;
use crate::store::Store;
use crate::tui::state::UiState;
use crate::tui::style::Styles;

pub fn render_feed(frame: &mut Frame, area: Rect, store: &Store, tab: &str, ui: &mut UiState) {
    let Some(feed) = store.feed(tab) else {
        frame.render_widget(
            Paragraph::new(Span::styled("No feed for this tab", Styles::dim())),
            area,
        );
        return;
    };

    let [progress, table_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

    let state = if feed.is_saturated() {
        "complete"
    } else if store.session().running {
        "streaming"
    } else {
        "paused"
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ({}) ", feed.source(), state))
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .gauge_style(Styles::throughput())
        .percent(feed.progress())
        .label(format!("{}/{} rows", feed.revealed(), feed.total()));
    frame.render_widget(gauge, progress);

    // newest rows at the top
    let rows = feed.visible();
    let height = table_area.height.saturating_sub(3) as usize;
    ui.feed_scroll = ui.feed_scroll.min(rows.len().saturating_sub(height));
    let shown = rows
        .iter()
        .rev()
        .skip(ui.feed_scroll)
        .take(height)
        .map(|row| {
            let op_style = match row.op {
                RowOp::Insert => Styles::throughput(),
                RowOp::Update => Styles::section_header(),
                RowOp::Delete => Styles::critical(),
            };
            Row::new(vec![
                Cell::from(row.seq.to_string()),
                Cell::from(row.key.clone()),
                Cell::from(Span::styled(row.op.label(), op_style)),
                Cell::from(format!("{} B", row.payload_bytes)),
                Cell::from(format!("{} ms", row.lag_ms)),
            ])
        });

    let header = Row::new(vec!["SEQ", "KEY", "OP", "PAYLOAD", "LAG"]).style(Styles::table_header());
    let table = Table::new(
        shown,
        [
            Constraint::Length(6),
            Constraint::Min(12),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(table, table_area);
}
