use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode, Tab};
use crate::theme::Theme;

/// Bottom input panel. On the Chat tab it holds the question being typed;
/// on Upload it mirrors the description field; Documents gets a key hint.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let (title, content) = match app.tab {
        Tab::Chat => {
            let title = match app.input_mode {
                InputMode::Normal => " Press 'i' to ask a question ",
                InputMode::Insert => " Question (Enter to send, Esc to cancel) ",
            };
            (title, app.input.clone())
        }
        Tab::Upload => {
            let title = match app.input_mode {
                InputMode::Normal => " Description ",
                InputMode::Insert => " Description (Enter or Esc when done) ",
            };
            (title, app.upload.description().to_owned())
        }
        Tab::Documents => (
            " j/k move, Enter chat, d delete, r refresh ",
            String::new(),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(title);

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(theme.input_cursor)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);

    if app.tab == Tab::Chat && app.input_mode == InputMode::Insert {
        let prefix: String = app.input.chars().take(app.cursor_position).collect();
        #[allow(clippy::cast_possible_truncation)]
        let cursor_x = area.x + prefix.width() as u16 + 1;
        frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(1)), area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::test_utils::render_to_string;

    fn app() -> App {
        let (tx, _rx) = mpsc::channel(4);
        App::new(tx, "john.doe".into(), "api".into())
    }

    #[test]
    fn chat_normal_mode_shows_hint_title() {
        let mut app = app();
        app.tab = Tab::Chat;
        let out = render_to_string(60, 3, |frame, area| render(&app, frame, area));
        assert!(out.contains("Press 'i' to ask a question"));
    }

    #[test]
    fn chat_insert_mode_shows_typed_text() {
        let mut app = app();
        app.tab = Tab::Chat;
        app.input_mode = InputMode::Insert;
        app.input = "what is this?".into();
        app.cursor_position = app.input.chars().count();
        let out = render_to_string(60, 3, |frame, area| render(&app, frame, area));
        assert!(out.contains("what is this?"));
        assert!(out.contains("Enter to send"));
    }

    #[test]
    fn upload_tab_mirrors_description() {
        let mut app = app();
        app.tab = Tab::Upload;
        app.upload.description_mut().push_str("quarterly numbers");
        let out = render_to_string(60, 3, |frame, area| render(&app, frame, area));
        assert!(out.contains("Description"));
        assert!(out.contains("quarterly numbers"));
    }
}
