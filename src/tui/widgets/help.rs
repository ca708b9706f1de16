//! Help popup with key bindings, scrollable.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Session",
        &[
            ("c", "Connect / disconnect"),
            ("r, Space", "Run or pause the pipeline"),
            ("x", "Execute pipeline"),
            ("p", "Pause pipeline"),
            ("t", "Switch blue/green traffic route"),
            ("L", "Clear event log"),
        ],
    ),
    (
        "Workspace",
        &[
            ("Tab / S-Tab", "Next / previous tab"),
            ("w", "Close active tab"),
            ("m", "Open pipeline monitor"),
            ("d", "Open dead letter queue"),
            ("o", "Open configuration"),
            ("↑/↓ PgUp/PgDn", "Scroll log, feed or list"),
            ("←/→ +/-", "Change setting value"),
        ],
    ),
    (
        "Explorer",
        &[
            ("e", "Focus / leave object explorer"),
            ("↑/↓", "Move cursor"),
            ("Enter, Space", "Toggle folder / open table or view"),
            ("←/→", "Collapse / expand folder"),
        ],
    ),
    (
        "General",
        &[
            ("F1-F4", "Ribbon page"),
            ("?", "Toggle this help"),
            ("q", "Quit (with confirmation)"),
            ("Ctrl-C", "Quit immediately"),
        ],
    ),
];

fn content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*title, Styles::section_header())));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<16}", key), Styles::help_key()),
                Span::styled(*desc, Styles::default()),
            ]));
        }
    }
    lines
}

/// Renders the help popup centered on screen; clamps `scroll` in place.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 72);
    let popup_height = (area.height * 80 / 100).clamp(10, 32);
    let popup_area = super::centered_rect(popup_width, popup_height, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::focused_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let lines = content();
    let max_scroll = lines.len().saturating_sub(body.height as usize);
    *scroll = (*scroll).min(max_scroll);

    frame.render_widget(Paragraph::new(lines).scroll((*scroll as u16, 0)), body);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Press ", Styles::dim()),
            Span::styled("?", Styles::help_key()),
            Span::styled(" or ", Styles::dim()),
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" to close", Styles::dim()),
            Span::styled(scroll_info, Styles::dim()),
        ])),
        footer,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::{contains, terminal};

    #[test]
    fn test_scroll_clamped_to_content() {
        let mut scroll = 1000;
        let mut term = terminal(80, 20);
        term.draw(|f| render_help(f, f.area(), &mut scroll)).unwrap();
        assert!(scroll < content().len());
        assert!(contains(term.backend().buffer(), "to close"));
    }

    #[test]
    fn test_fits_without_scroll_on_tall_terminal() {
        let mut scroll = 5;
        let mut term = terminal(100, 60);
        term.draw(|f| render_help(f, f.area(), &mut scroll)).unwrap();
        assert_eq!(scroll, 0);
        assert!(contains(term.backend().buffer(), "Switch blue/green traffic route"));
    }
}
