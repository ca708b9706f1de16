//! Object explorer: schema tree of the connected endpoints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::schema::NodeKind;
use crate::store::Store;
use crate::tui::state::{Focus, UiState};
use crate::tui::style::Styles;

pub fn render_explorer(frame: &mut Frame, area: Rect, store: &Store, ui: &mut UiState) {
    let focused = ui.focus == Focus::Explorer;
    let block = Block::default()
        .title(" Object Explorer ")
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::focused_border()
        } else {
            Styles::border()
        });

    if !store.session().connected {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled("Not Connected", Styles::dim())),
            Line::from(vec![
                Span::styled("press ", Styles::dim()),
                Span::styled("c", Styles::help_key()),
                Span::styled(" to connect", Styles::dim()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(block),
            area,
        );
        return;
    }

    let visible = store.schema().visible();
    if !visible.is_empty() {
        ui.explorer_cursor = ui.explorer_cursor.min(visible.len() - 1);
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|node| {
            let indent = "  ".repeat(node.depth);
            let (icon, style) = match node.kind {
                NodeKind::Folder { open: true } => ("▾ ", Styles::section_header()),
                NodeKind::Folder { open: false } => ("▸ ", Styles::section_header()),
                NodeKind::Table => ("▦ ", Styles::default()),
                NodeKind::View => ("◫ ", Styles::throughput()),
                NodeKind::Procedure => ("ƒ ", Styles::dim()),
            };
            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(icon, style),
                Span::styled(node.name.to_string(), style),
            ]))
        })
        .collect();

    let mut list = List::new(items).block(block);
    if focused {
        list = list.highlight_style(Styles::selected());
    }
    let mut state = ListState::default().with_selected(Some(ui.explorer_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use crate::config::ConsoleConfig;
    use crate::settings::Settings;
    use crate::store::Action;
    use crate::tui::widgets::testing::{contains, terminal};

    fn draw(store: &Store, ui: &mut UiState) -> ratatui::buffer::Buffer {
        let mut term = terminal(32, 16);
        term.draw(|f| render_explorer(f, f.area(), store, ui)).unwrap();
        term.backend().buffer().clone()
    }

    #[test]
    fn test_placeholder_when_disconnected() {
        let store = Store::new(ConsoleConfig::default(), Settings::default()).unwrap();
        let buf = draw(&store, &mut UiState::new());
        assert!(contains(&buf, "Not Connected"));
        assert!(!contains(&buf, "users"));
    }

    #[test]
    fn test_tree_follows_toggles() {
        let mut store = Store::new(ConsoleConfig::default(), Settings::default()).unwrap();
        store
            .dispatch(Action::Connect { aws_enabled: true }, Instant::now())
            .unwrap();
        let mut ui = UiState::new();
        let buf = draw(&store, &mut ui);
        assert!(contains(&buf, "SRC_POSTGRES"));
        assert!(contains(&buf, "transactions"));
        assert!(!contains(&buf, "refresh_ledger"));

        store
            .dispatch(Action::ToggleNode("s2".to_string()), Instant::now())
            .unwrap();
        let buf = draw(&store, &mut ui);
        assert!(contains(&buf, "refresh_ledger"));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut store = Store::new(ConsoleConfig::default(), Settings::default()).unwrap();
        store
            .dispatch(Action::Connect { aws_enabled: true }, Instant::now())
            .unwrap();
        let mut ui = UiState::new();
        ui.explorer_cursor = 500;
        draw(&store, &mut ui);
        assert_eq!(ui.explorer_cursor, store.schema().visible().len() - 1);
    }
}
