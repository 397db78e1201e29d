use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::app::App;
use crate::format::{format_file_size, format_upload_date};
use crate::theme::Theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();

    let title = if app.registry.is_loading() {
        " Documents (refreshing) "
    } else {
        " Documents "
    };
    let summary = format!(
        " {} total, {} processed ",
        app.registry.len(),
        app.registry.processed_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(Span::styled(title, theme.panel_title))
        .title_bottom(Span::styled(summary, theme.dim));

    if app.registry.is_empty() {
        let hint = if app.registry.is_loading() {
            "Loading..."
        } else {
            "No documents yet. Switch to the Upload tab to add one."
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(hint, theme.dim)))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec!["Name", "Size", "Pages", "Uploaded", "By", "Status"])
        .style(theme.panel_title)
        .bottom_margin(1);

    let rows = app.registry.documents().iter().map(|doc| {
        let (badge, badge_style) = if doc.is_processed {
            ("Ready", theme.badge_ready)
        } else {
            ("Processing", theme.badge_processing)
        };
        Row::new(vec![
            Cell::from(doc.file_name.clone()),
            Cell::from(format_file_size(doc.file_size)),
            Cell::from(doc.page_count.to_string()),
            Cell::from(format_upload_date(&doc.uploaded_at)),
            Cell::from(doc.uploaded_by.clone()),
            Cell::from(Span::styled(badge, badge_style)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(5),
            Constraint::Length(18),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(theme.selected_row)
    .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected_row));
    frame.render_stateful_widget(table, area, &mut state);
}
