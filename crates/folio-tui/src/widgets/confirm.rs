use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::ConfirmAction;
use crate::layout::centered_rect;
use crate::theme::Theme;

pub fn render(action: &ConfirmAction, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let popup = centered_rect(50, 8, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::default()];
    match action {
        ConfirmAction::DeleteDocument { file_name, .. } => {
            lines.push(Line::from(Span::styled(
                "Are you sure you want to delete this document?",
                theme.panel_title,
            )));
            lines.push(Line::from(Span::styled(file_name.clone(), theme.dim)));
        }
        ConfirmAction::ClearChat => {
            lines.push(Line::from(Span::styled(
                "Clear all messages?",
                theme.panel_title,
            )));
            lines.push(Line::default());
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("[Y]es / [N]o", theme.highlight)));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border)
                .title(" Confirm ")
                .title_alignment(Alignment::Center),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup);
}
