use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::format::format_file_size;
use crate::theme::Theme;

use folio_core::UploadStage;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(Span::styled(" Upload ", theme.panel_title));

    let mut lines = vec![Line::default()];
    match app.upload.stage() {
        UploadStage::Idle => {
            lines.push(Line::from(Span::styled(
                "  No file selected.",
                theme.dim,
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "  Press 'o' to browse for a PDF.",
                theme.highlight,
            )));
        }
        UploadStage::FileSelected | UploadStage::Uploading => {
            // stage() guarantees a file here
            if let Some(file) = app.upload.file() {
                lines.push(Line::from(vec![
                    Span::styled("  File: ", theme.dim),
                    Span::styled(
                        format!("{} ({})", file.file_name, format_file_size(file.size_bytes)),
                        theme.panel_title,
                    ),
                ]));
            }
            let description = if app.upload.description().is_empty() {
                Span::styled("(none, press 'i' to add)", theme.dim)
            } else {
                Span::styled(app.upload.description().to_owned(), theme.assistant_message)
            };
            lines.push(Line::from(vec![
                Span::styled("  Description: ", theme.dim),
                description,
            ]));
            lines.push(Line::default());
            if app.upload.stage() == UploadStage::Uploading {
                lines.push(Line::from(Span::styled(
                    "  Uploading...",
                    theme.badge_processing,
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    "  Press Enter to upload, 'x' to discard.",
                    theme.highlight,
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
