use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::layout::centered_rect;
use crate::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / 1 2 3", "switch tab"),
    ("r", "refresh document list"),
    ("q / Ctrl-C", "quit"),
    ("", ""),
    ("o", "browse for a PDF (Upload)"),
    ("Enter", "upload selected file (Upload)"),
    ("x", "discard selection (Upload)"),
    ("", ""),
    ("j / k", "move selection (Documents)"),
    ("Enter", "chat about document (Documents)"),
    ("d", "delete document (Documents)"),
    ("", ""),
    ("i", "type a question (Chat)"),
    ("s", "suggested question (Chat)"),
    ("c", "clear transcript (Chat)"),
    ("x", "back to all-documents chat"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    #[allow(clippy::cast_possible_truncation)]
    let height = (BINDINGS.len() as u16).saturating_add(4).min(area.height);
    let popup = centered_rect(55, height, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::default()];
    for (keys, action) in BINDINGS {
        if keys.is_empty() {
            lines.push(Line::default());
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<14}"), theme.highlight),
                Span::styled((*action).to_owned(), theme.assistant_message),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border)
            .title(" Keys ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(paragraph, popup);
}
