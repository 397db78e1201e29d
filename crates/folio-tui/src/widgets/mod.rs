use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, WhichUse};

use crate::app::{App, Overlay, Tab};
use crate::layout::AppLayout;
use crate::theme::Theme;

pub mod chat;
pub mod confirm;
pub mod documents;
pub mod help;
pub mod input;
pub mod picker;
pub mod status;
pub mod upload;

/// Top-level frame composition: header tabs, the active tab's panel, an
/// activity line, the input panel, the status bar, then any overlay.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let layout = AppLayout::compute(frame.area());

    render_header(app, frame, layout.header);
    match app.tab {
        Tab::Upload => upload::render(app, frame, layout.content),
        Tab::Documents => documents::render(app, frame, layout.content),
        Tab::Chat => chat::render(app, frame, layout.content),
    }
    render_activity(app, frame, layout.activity);
    input::render(app, frame, layout.input);
    status::render(app, frame, layout.status);

    match &app.overlay {
        Overlay::None => {}
        Overlay::Confirm(action) => confirm::render(action, frame, frame.area()),
        Overlay::Picker(file_picker) => picker::render(file_picker, frame, frame.area()),
        Overlay::Help => help::render(frame, frame.area()),
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    let mut spans = vec![Span::styled(" folio ", theme.header)];
    for (n, tab) in [Tab::Upload, Tab::Documents, Tab::Chat]
        .into_iter()
        .enumerate()
    {
        let label = format!(" [{}] {} ", n + 1, tab.title());
        let style = if tab == app.tab {
            theme.highlight
        } else {
            theme.dim
        };
        spans.push(Span::styled(label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_activity(app: &mut App, frame: &mut Frame, area: Rect) {
    let theme = Theme::default();
    if !app.is_busy() {
        frame.render_widget(Paragraph::new(""), area);
        return;
    }
    let label = if app.registry.is_loading() {
        "Loading documents"
    } else if app.session.is_pending() {
        "Waiting for answer"
    } else {
        "Working"
    };
    let throbber = Throbber::default()
        .label(label)
        .style(theme.highlight)
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);
    frame.render_stateful_widget(throbber, area, &mut app.throbber);
}
