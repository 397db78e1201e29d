use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::markdown::{render_markdown, wrap_plain};
use crate::theme::Theme;

use folio_core::Role;
use folio_core::session::SUGGESTED_QUESTIONS;

/// Transcript panel. Assistant answers render as markdown; user messages
/// stay plain. Scrolling is anchored to the bottom, `chat_scroll` counts
/// lines back up into history.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let inner_height = area.height.saturating_sub(2) as usize;
    // 2 for borders, 2 for the accent prefix on every line
    let wrap_width = area.width.saturating_sub(4) as usize;

    let title = match app.session.scope() {
        Some(scope) => format!(" Chatting about: {} ", scope.file_name),
        None => " Chat: All Documents ".to_owned(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(Span::styled(title, theme.panel_title));

    let mut lines: Vec<Line<'static>> = Vec::new();
    if app.session.messages().is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask a question about your documents, or press 's' for a suggestion:",
            theme.dim,
        )));
        for question in SUGGESTED_QUESTIONS {
            lines.push(Line::from(Span::styled(
                format!("  \u{2022} {question}"),
                theme.dim,
            )));
        }
    }

    for (idx, msg) in app.session.messages().iter().enumerate() {
        let (accent, body_style) = match msg.role {
            Role::User => (theme.user_message, theme.user_message),
            Role::Assistant => (theme.assistant_accent, theme.assistant_message),
        };
        if idx > 0 {
            lines.push(Line::from(Span::styled(
                "\u{2500}".repeat(wrap_width),
                theme.system_message,
            )));
        }
        let stamp = msg.timestamp.format("%H:%M").to_string();
        let who = match msg.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        lines.push(Line::from(Span::styled(
            format!("{who} \u{b7} {stamp}"),
            theme.dim,
        )));
        let body = match msg.role {
            Role::User => wrap_plain(&msg.content, body_style, wrap_width),
            Role::Assistant => render_markdown(&msg.content, body_style, &theme, wrap_width),
        };
        for mut line in body {
            line.spans.insert(0, Span::styled("\u{258e} ", accent));
            lines.push(line);
        }
    }

    let total = lines.len();
    if total < inner_height {
        let mut padded = vec![Line::default(); inner_height - total];
        padded.append(&mut lines);
        lines = padded;
    }

    let total = lines.len();
    let max_scroll = total.saturating_sub(inner_height);
    let offset = usize::from(app.chat_scroll).min(max_scroll);
    #[allow(clippy::cast_possible_truncation)]
    let scroll = (max_scroll - offset) as u16;

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
