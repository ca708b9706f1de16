//! Workspace tab strip.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::store::Store;
use crate::tui::style::Styles;

pub fn render_tab_strip(frame: &mut Frame, area: Rect, store: &Store) {
    let registry = store.tabs();
    let mut spans = Vec::new();
    for name in registry.tabs() {
        let active = name == registry.active();
        let style = if active {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        let marker = if registry.is_closable(name) { " ×" } else { "" };
        spans.push(Span::styled(
            if active { "▌" } else { " " },
            Styles::tab_active(),
        ));
        spans.push(Span::styled(format!("{}{}", name, marker), style));
        spans.push(Span::styled(" │", Styles::dim()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
