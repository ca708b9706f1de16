//! Configuration tab: editable, decorative migration settings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::settings::SettingField;
use crate::store::Store;
use crate::tui::state::UiState;
use crate::tui::style::Styles;

pub fn render_settings(frame: &mut Frame, area: Rect, store: &Store, ui: &mut UiState) {
    let [list_area, hint] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    ui.settings_cursor = ui.settings_cursor.min(SettingField::ALL.len() - 1);

    let settings = store.settings();
    let items: Vec<ListItem> = SettingField::ALL
        .iter()
        .map(|field| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<20}", field.label()), Styles::dim()),
                Span::styled(settings.display(*field), Styles::default()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Styles::selected())
        .highlight_symbol("> ")
        .block(
            Block::default()
                .title(" Configuration ")
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );
    let mut state = ListState::default().with_selected(Some(ui.settings_cursor));
    frame.render_stateful_widget(list, list_area, &mut state);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ←/→", Styles::help_key()),
            Span::styled(" change  ", Styles::help()),
            Span::styled("↑/↓", Styles::help_key()),
            Span::styled(" select  (values are not applied to the pipeline)", Styles::help()),
        ])),
        hint,
    );
}
