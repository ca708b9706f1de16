//! Telemetry sidebar: current sample gauges and the trailing history.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Sparkline};

use crate::store::Store;
use crate::tui::style::Styles;

pub fn render_telemetry(frame: &mut Frame, area: Rect, store: &Store) {
    let block = Block::default()
        .title(" Telemetry ")
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cloud = store.aws_enabled();
    let [cpu, mem, numbers, throughput, latency, sync] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(if cloud { 5 } else { 0 }),
    ])
    .areas(inner);

    let sample = store.telemetry();
    render_gauge(frame, cpu, "CPU", sample.cpu, Styles::cpu());
    render_gauge(frame, mem, "Memory", sample.memory, Styles::mem());

    let lines = vec![
        Line::from(vec![
            Span::styled("Throughput ", Styles::dim()),
            Span::styled(format!("{} msg/s", sample.throughput), Styles::throughput()),
        ]),
        Line::from(vec![
            Span::styled("Latency    ", Styles::dim()),
            Span::styled(format!("{} ms", sample.latency), Styles::default()),
        ]),
        Line::from(Span::styled(
            format!(
                "History    {}/{}",
                store.history().len(),
                store.history().capacity()
            ),
            Styles::dim(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), numbers);

    let series = store.history().throughput_series();
    frame.render_widget(
        Sparkline::default()
            .block(Block::default().title("msg/s").borders(Borders::TOP))
            .data(&series)
            .style(Styles::throughput()),
        throughput,
    );
    let series = store.history().latency_series();
    frame.render_widget(
        Sparkline::default()
            .block(Block::default().title("latency").borders(Borders::TOP))
            .data(&series)
            .style(Styles::cpu()),
        latency,
    );

    if cloud {
        let state = if store.session().running {
            "replicating"
        } else {
            "idle"
        };
        let lines = vec![
            Line::from(Span::styled("Cloud Sync", Styles::cloud())),
            Line::from(vec![
                Span::styled("S3 ", Styles::dim()),
                Span::styled(store.settings().aws_region.clone(), Styles::default()),
                Span::styled(format!(" {}", state), Styles::dim()),
            ]),
        ];
        let [text, upload] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(2)]).areas(sync);
        frame.render_widget(Paragraph::new(lines), text);
        render_gauge(frame, upload, "S3 Upload", sample.upload, Styles::cloud());
    }
}

fn render_gauge(frame: &mut Frame, area: Rect, label: &str, percent: u8, style: ratatui::style::Style) {
    let gauge = Gauge::default()
        .block(Block::default().title(label.to_string()))
        .gauge_style(style)
        .percent(u16::from(percent.min(100)))
        .label(format!("{}%", percent));
    frame.render_widget(gauge, area);
}
