use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, InputMode};
use crate::theme::Theme;

/// One-line status bar. A live notice takes over the whole line; otherwise
/// mode, user, backend and registry summary.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    if let Some(notice) = app.notice() {
        let style = if notice.error { theme.error } else { theme.success };
        let line = Line::from(Span::styled(format!(" {} ", notice.text), style));
        frame.render_widget(Paragraph::new(line).style(theme.status_bar), area);
        return;
    }

    let mode = match app.input_mode {
        InputMode::Normal => "Normal",
        InputMode::Insert => "Insert",
    };
    let text = format!(
        " [{mode}] | {user} | {api} | Docs: {total} ({processed} processed) | ? for help",
        user = app.user_name,
        api = app.api_label,
        total = app.registry.len(),
        processed = app.registry.processed_count(),
    );
    let line = Line::from(Span::styled(text, theme.status_bar));
    frame.render_widget(Paragraph::new(line).style(theme.status_bar), area);
}
