//! Dead-letter queue: static sample of failed pipeline events.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Row, Table, TableState};

use crate::model::sample_dead_letters;
use crate::tui::state::UiState;
use crate::tui::style::Styles;

pub fn render_dead_letters(frame: &mut Frame, area: Rect, ui: &mut UiState) {
    let letters = sample_dead_letters();
    ui.dead_letter_selected = ui.dead_letter_selected.min(letters.len().saturating_sub(1));

    let rows = letters.iter().map(|l| {
        Row::new(vec![
            l.event_id.to_string(),
            l.source.to_string(),
            l.error.to_string(),
            l.attempts.to_string(),
            l.last_seen.to_string(),
        ])
    });
    let header = Row::new(vec!["EVENT", "SOURCE", "ERROR", "TRIES", "LAST SEEN"])
        .style(Styles::table_header());

    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Length(22),
            Constraint::Min(20),
            Constraint::Length(5),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .row_highlight_style(Styles::selected())
    .block(
        Block::default()
            .title(format!(" Dead Letter Queue ({}) ", letters.len()))
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );

    let mut state = TableState::default().with_selected(Some(ui.dead_letter_selected));
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::{contains, terminal};

    #[test]
    fn test_selection_clamped() {
        let mut ui = UiState::new();
        ui.dead_letter_selected = 99;
        let mut term = terminal(100, 12);
        term.draw(|f| render_dead_letters(f, f.area(), &mut ui)).unwrap();
        assert_eq!(ui.dead_letter_selected, sample_dead_letters().len() - 1);
        assert!(contains(term.backend().buffer(), "evt-0007f3"));
    }
}
