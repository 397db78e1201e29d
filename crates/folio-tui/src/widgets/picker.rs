use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::layout::centered_rect;
use crate::picker::FilePicker;
use crate::theme::Theme;

pub fn render(picker: &FilePicker, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let popup = centered_rect(60, 16, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("> ", theme.highlight),
            Span::styled(picker.query.clone(), theme.input_cursor),
        ]),
        Line::default(),
    ];

    if picker.matches().is_empty() {
        lines.push(Line::from(Span::styled("  no matching files", theme.dim)));
    }
    for (idx, path) in picker.matches().iter().enumerate() {
        let style = if idx == picker.selected {
            theme.selected_row
        } else {
            theme.assistant_message
        };
        let marker = if idx == picker.selected { "> " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{marker}{path}"), style)));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border)
            .title(Span::styled(" Select a PDF ", theme.panel_title)),
    );
    frame.render_widget(paragraph, popup);
}
