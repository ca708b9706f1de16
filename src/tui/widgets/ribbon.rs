//! Ribbon toolbar: page tabs plus the buttons of the selected page.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::store::Store;
use crate::tui::state::{RibbonTab, UiState};
use crate::tui::style::Styles;

/// Page tabs, two button rows and a bottom border.
pub const RIBBON_HEIGHT: u16 = 4;

/// A ribbon button: key hint and label. Disabled buttons are dimmed.
struct Button {
    key: &'static str,
    label: String,
    enabled: bool,
}

impl Button {
    fn new(key: &'static str, label: impl Into<String>, enabled: bool) -> Self {
        Self {
            key,
            label: label.into(),
            enabled,
        }
    }
}

pub fn render_ribbon(frame: &mut Frame, area: Rect, store: &Store, ui: &UiState) {
    let mut tabs: Vec<Span> = Vec::new();
    for (i, tab) in RibbonTab::all().iter().enumerate() {
        let style = if *tab == ui.ribbon {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        tabs.push(Span::styled(format!(" F{}:", i + 1), Styles::dim()));
        tabs.push(Span::styled(format!("{} ", tab.name()), style));
    }

    let lines = vec![
        Line::from(tabs),
        button_line(&buttons(ui.ribbon, store)),
        Line::from(Span::styled(group_caption(ui.ribbon), Styles::dim())),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn buttons(page: RibbonTab, store: &Store) -> Vec<Button> {
    let session = store.session();
    let connected = session.connected;
    match page {
        RibbonTab::Home => vec![
            Button::new(
                "c",
                if connected { "Disconnect" } else { "Connect" },
                true,
            ),
            Button::new(
                "r",
                if session.running { "Pause" } else { "Run" },
                connected,
            ),
            Button::new("m", "Monitor", connected),
            Button::new("L", "Clear Log", true),
        ],
        RibbonTab::Migration => vec![
            Button::new("x", "Execute", connected && !session.running),
            Button::new("p", "Pause", session.running),
            Button::new(
                "t",
                format!("Route: {}", session.route.label()),
                connected,
            ),
        ],
        RibbonTab::Integrity => vec![
            Button::new("d", "Dead Letters", true),
            Button::new("e", "Explorer", connected),
        ],
        RibbonTab::View => vec![
            Button::new("o", "Configuration", true),
            Button::new("w", "Close Tab", store.tabs().is_closable(store.tabs().active())),
            Button::new("?", "Help", true),
        ],
    }
}

fn group_caption(page: RibbonTab) -> &'static str {
    match page {
        RibbonTab::Home => " Session",
        RibbonTab::Migration => " Pipeline  |  Blue/Green",
        RibbonTab::Integrity => " Verification",
        RibbonTab::View => " Workspace",
    }
}

fn button_line(buttons: &[Button]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for b in buttons {
        let (key_style, label_style) = if b.enabled {
            (Styles::help_key(), Styles::default())
        } else {
            (Styles::dim(), Styles::dim())
        };
        spans.push(Span::styled(format!("[{}]", b.key), key_style));
        spans.push(Span::styled(format!(" {}   ", b.label), label_style));
    }
    Line::from(spans)
}
