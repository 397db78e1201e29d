use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::{ChatScope, ChatSession, DocumentRegistry, UploadForm};
use folio_core::session::SUGGESTED_QUESTIONS;
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc;

use crate::event::{ApiEvent, ApiRequest, AppEvent};
use crate::picker::FilePicker;

/// How long a status-line notice stays visible, in tick events.
const NOTICE_TICKS: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Upload,
    Documents,
    Chat,
}

impl Tab {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Upload => Self::Documents,
            Self::Documents => Self::Chat,
            Self::Chat => Self::Upload,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Documents => "Documents",
            Self::Chat => "Chat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteDocument { id: i64, file_name: String },
    ClearChat,
}

/// Modal surface drawn over the active tab. At most one at a time;
/// keys route to the overlay while it is open.
pub enum Overlay {
    None,
    Confirm(ConfirmAction),
    Picker(FilePicker),
    Help,
}

/// Transient status-line message, the terminal stand-in for a browser
/// alert. Expires after a few seconds of ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub error: bool,
}

pub struct App {
    pub tab: Tab,
    pub input_mode: InputMode,
    pub overlay: Overlay,
    pub registry: DocumentRegistry,
    pub session: ChatSession,
    pub upload: UploadForm,
    pub input: String,
    pub cursor_position: usize,
    pub selected_row: usize,
    pub chat_scroll: u16,
    pub suggestion_idx: usize,
    pub user_name: String,
    pub api_label: String,
    pub throbber: ThrobberState,
    pub should_quit: bool,
    notice: Option<Notice>,
    notice_ticks: u16,
    delete_pending: bool,
    picker_root: PathBuf,
    api_tx: mpsc::Sender<ApiRequest>,
}

impl App {
    #[must_use]
    pub fn new(api_tx: mpsc::Sender<ApiRequest>, user_name: String, api_label: String) -> Self {
        let picker_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            tab: Tab::Documents,
            input_mode: InputMode::Normal,
            overlay: Overlay::None,
            registry: DocumentRegistry::default(),
            session: ChatSession::default(),
            upload: UploadForm::default(),
            input: String::new(),
            cursor_position: 0,
            selected_row: 0,
            chat_scroll: 0,
            suggestion_idx: 0,
            user_name,
            api_label,
            throbber: ThrobberState::default(),
            should_quit: false,
            notice: None,
            notice_ticks: 0,
            delete_pending: false,
            picker_root,
            api_tx,
        }
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Anything waiting on the backend right now.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.registry.is_loading()
            || self.session.is_pending()
            || self.delete_pending
            || self.upload.stage() == folio_core::UploadStage::Uploading
    }

    /// Kick off a document list refetch. No-op while one is in flight.
    pub fn request_refresh(&mut self) {
        if self.registry.is_loading() {
            return;
        }
        self.registry.begin_refresh();
        self.send(ApiRequest::RefreshDocuments);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(..) => {}
            AppEvent::MouseScroll(delta) => {
                if self.tab == Tab::Chat {
                    self.scroll_chat(delta);
                }
            }
        }
    }

    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Documents(Ok(documents)) => {
                self.registry.replace_all(documents);
                if self.selected_row >= self.registry.len() {
                    self.selected_row = self.registry.len().saturating_sub(1);
                }
            }
            ApiEvent::Documents(Err(reason)) => {
                tracing::warn!(%reason, "document refresh failed");
                self.registry.refresh_failed();
                self.set_notice("Failed to load documents", true);
            }
            ApiEvent::Uploaded(Ok(document)) => {
                tracing::info!(id = document.id, file = %document.file_name, "upload complete");
                self.upload.complete_success();
                self.set_notice("File uploaded and processed successfully!", false);
                self.tab = Tab::Documents;
                self.request_refresh();
            }
            ApiEvent::Uploaded(Err(reason)) => {
                tracing::warn!(%reason, "upload failed");
                self.upload.complete_failure();
                self.set_notice("Failed to upload file. Please try again.", true);
            }
            ApiEvent::Deleted(Ok(id)) => {
                tracing::info!(id, "document deleted");
                self.delete_pending = false;
                self.set_notice("Document deleted successfully", false);
                if self.session.scope().is_some_and(|s| s.document_id == id) {
                    self.session.clear_scope();
                }
                self.request_refresh();
            }
            ApiEvent::Deleted(Err(reason)) => {
                tracing::warn!(%reason, "delete failed");
                self.delete_pending = false;
                self.set_notice("Failed to delete document", true);
            }
            ApiEvent::Answered(outcome) => {
                self.session.complete_turn(outcome.map(|a| a.answer));
                self.chat_scroll = 0;
            }
        }
    }

    fn on_tick(&mut self) {
        if self.is_busy() {
            self.throbber.calc_next();
        }
        if self.notice_ticks > 0 {
            self.notice_ticks -= 1;
            if self.notice_ticks == 0 {
                self.notice = None;
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match std::mem::replace(&mut self.overlay, Overlay::None) {
            Overlay::Confirm(action) => self.on_confirm_key(key, action),
            Overlay::Picker(picker) => self.on_picker_key(key, picker),
            Overlay::Help => {
                // any key dismisses
            }
            Overlay::None => match self.input_mode {
                InputMode::Insert => self.on_insert_key(key),
                InputMode::Normal => self.on_normal_key(key),
            },
        }
    }

    fn on_confirm_key(&mut self, key: KeyEvent, action: ConfirmAction) {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => match action {
                ConfirmAction::DeleteDocument { id, .. } => {
                    self.delete_pending = true;
                    self.send(ApiRequest::Delete { id });
                }
                ConfirmAction::ClearChat => self.session.clear(),
            },
            KeyCode::Char('n' | 'N') | KeyCode::Esc => {}
            _ => self.overlay = Overlay::Confirm(action),
        }
    }

    fn on_picker_key(&mut self, key: KeyEvent, mut picker: FilePicker) {
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter => {
                if let Some(path) = picker.selected_path() {
                    if let Err(err) = self.upload.select_file(&path) {
                        self.set_notice(&err.to_string(), true);
                    }
                } else {
                    self.overlay = Overlay::Picker(picker);
                }
            }
            KeyCode::Up => {
                picker.move_selection(-1);
                self.overlay = Overlay::Picker(picker);
            }
            KeyCode::Down => {
                picker.move_selection(1);
                self.overlay = Overlay::Picker(picker);
            }
            KeyCode::Backspace => {
                picker.pop_char();
                self.overlay = Overlay::Picker(picker);
            }
            KeyCode::Char(c) => {
                picker.push_char(c);
                self.overlay = Overlay::Picker(picker);
            }
            _ => self.overlay = Overlay::Picker(picker),
        }
    }

    fn on_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.overlay = Overlay::Help,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::Char('1') => self.tab = Tab::Upload,
            KeyCode::Char('2') => self.tab = Tab::Documents,
            KeyCode::Char('3') => self.tab = Tab::Chat,
            KeyCode::Char('r') => self.request_refresh(),
            _ => match self.tab {
                Tab::Upload => self.on_upload_key(key),
                Tab::Documents => self.on_documents_key(key),
                Tab::Chat => self.on_chat_key(key),
            },
        }
    }

    fn on_upload_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('o') => {
                self.overlay = Overlay::Picker(FilePicker::open(&self.picker_root));
            }
            KeyCode::Char('i') if self.upload.file().is_some() => {
                self.input_mode = InputMode::Insert;
            }
            KeyCode::Char('x') => self.upload.clear_selection(),
            KeyCode::Enter => self.submit_upload(),
            _ => {}
        }
    }

    fn on_documents_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected_row + 1 < self.registry.len() {
                    self.selected_row += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(doc) = self.registry.get(self.selected_row) {
                    self.session.set_scope(ChatScope {
                        document_id: doc.id,
                        file_name: doc.file_name.clone(),
                    });
                    self.tab = Tab::Chat;
                    self.chat_scroll = 0;
                }
            }
            KeyCode::Char('d') => {
                if self.delete_pending {
                    return;
                }
                if let Some(doc) = self.registry.get(self.selected_row) {
                    self.overlay = Overlay::Confirm(ConfirmAction::DeleteDocument {
                        id: doc.id,
                        file_name: doc.file_name.clone(),
                    });
                }
            }
            KeyCode::Char('x') => self.session.clear_scope(),
            _ => {}
        }
    }

    fn on_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('i') => self.input_mode = InputMode::Insert,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_chat(-1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_chat(1),
            KeyCode::Char('c') => {
                if !self.session.messages().is_empty() {
                    self.overlay = Overlay::Confirm(ConfirmAction::ClearChat);
                }
            }
            KeyCode::Char('s') => {
                if self.session.messages().is_empty() {
                    self.input = SUGGESTED_QUESTIONS[self.suggestion_idx].to_owned();
                    self.cursor_position = self.input.chars().count();
                    self.suggestion_idx = (self.suggestion_idx + 1) % SUGGESTED_QUESTIONS.len();
                    self.input_mode = InputMode::Insert;
                }
            }
            KeyCode::Char('x') => self.session.clear_scope(),
            _ => {}
        }
    }

    fn on_insert_key(&mut self, key: KeyEvent) {
        match self.tab {
            Tab::Chat => match key.code {
                KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Enter => self.submit_chat(),
                KeyCode::Char(c) => self.insert_char(c),
                KeyCode::Backspace => self.delete_char(),
                KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
                KeyCode::Right => {
                    let len = self.input.chars().count();
                    self.cursor_position = (self.cursor_position + 1).min(len);
                }
                KeyCode::Home => self.cursor_position = 0,
                KeyCode::End => self.cursor_position = self.input.chars().count(),
                _ => {}
            },
            Tab::Upload => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
                KeyCode::Char(c) => self.upload.description_mut().push(c),
                KeyCode::Backspace => {
                    self.upload.description_mut().pop();
                }
                _ => {}
            },
            Tab::Documents => self.input_mode = InputMode::Normal,
        }
    }

    fn submit_chat(&mut self) {
        let Some(question) = self.session.submit_question(&self.input) else {
            return;
        };
        self.input.clear();
        self.cursor_position = 0;
        self.chat_scroll = 0;
        let document_id = self.session.scope().map(|s| s.document_id);
        self.send(ApiRequest::Ask {
            question,
            document_id,
        });
    }

    fn submit_upload(&mut self) {
        let Some((file, description)) = self.upload.begin_upload() else {
            return;
        };
        self.send(ApiRequest::Upload {
            path: file.path,
            file_name: file.file_name,
            description,
        });
    }

    fn scroll_chat(&mut self, delta: i8) {
        if delta > 0 {
            self.chat_scroll = self.chat_scroll.saturating_add(1);
        } else {
            self.chat_scroll = self.chat_scroll.saturating_sub(1);
        }
    }

    fn insert_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input.insert(idx, c);
        self.cursor_position += 1;
    }

    fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let idx = self.byte_index();
        self.input.remove(idx);
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input.len())
    }

    fn set_notice(&mut self, text: &str, error: bool) {
        self.notice = Some(Notice {
            text: text.to_owned(),
            error,
        });
        self.notice_ticks = NOTICE_TICKS;
    }

    fn send(&mut self, request: ApiRequest) {
        if let Err(err) = self.api_tx.try_send(request) {
            tracing::error!(%err, "api worker channel unavailable");
            self.set_notice("Backend worker is not responding", true);
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_api::{ChatAnswer, Document};
    use folio_core::session::FALLBACK_ANSWER;
    use folio_core::Role;

    use super::*;

    fn new_app() -> (App, mpsc::Receiver<ApiRequest>) {
        let (tx, rx) = mpsc::channel(16);
        let app = App::new(tx, "john.doe".into(), "http://localhost:8080/api".into());
        (app, rx)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ch(c: char) -> AppEvent {
        key(KeyCode::Char(c))
    }

    fn doc(id: i64) -> Document {
        Document {
            id,
            file_name: format!("doc-{id}.pdf"),
            file_type: "application/pdf".into(),
            file_size: 2048,
            description: None,
            uploaded_at: "2026-03-01T09:15:00".into(),
            uploaded_by: "john.doe".into(),
            is_processed: true,
            page_count: 3,
        }
    }

    fn drain(rx: &mut mpsc::Receiver<ApiRequest>) -> Vec<ApiRequest> {
        let mut out = Vec::new();
        while let Ok(req) = rx.try_recv() {
            out.push(req);
        }
        out
    }

    #[test]
    fn starts_on_documents_tab() {
        let (app, _rx) = new_app();
        assert_eq!(app.tab, Tab::Documents);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn q_quits_and_tab_cycles() {
        let (mut app, _rx) = new_app();
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Chat);
        app.handle_event(ch('1'));
        assert_eq!(app.tab, Tab::Upload);
        app.handle_event(ch('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn refresh_sends_one_request_and_blocks_while_loading() {
        let (mut app, mut rx) = new_app();
        app.request_refresh();
        app.request_refresh();
        assert_eq!(drain(&mut rx), vec![ApiRequest::RefreshDocuments]);
        assert!(app.registry.is_loading());
    }

    #[test]
    fn upload_success_switches_tab_and_refetches_exactly_once() {
        let (mut app, mut rx) = new_app();
        app.tab = Tab::Upload;
        app.handle_api_event(ApiEvent::Uploaded(Ok(doc(1))));

        assert_eq!(app.tab, Tab::Documents);
        assert_eq!(
            app.notice().unwrap().text,
            "File uploaded and processed successfully!"
        );
        assert_eq!(drain(&mut rx), vec![ApiRequest::RefreshDocuments]);
    }

    #[test]
    fn upload_failure_keeps_tab_and_sends_nothing() {
        let (mut app, mut rx) = new_app();
        app.tab = Tab::Upload;
        app.handle_api_event(ApiEvent::Uploaded(Err("500".into())));

        assert_eq!(app.tab, Tab::Upload);
        let notice = app.notice().unwrap();
        assert_eq!(notice.text, "Failed to upload file. Please try again.");
        assert!(notice.error);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn delete_requires_confirmation() {
        let (mut app, mut rx) = new_app();
        app.registry.replace_all(vec![doc(7)]);
        app.handle_event(ch('d'));
        assert!(matches!(
            app.overlay,
            Overlay::Confirm(ConfirmAction::DeleteDocument { id: 7, .. })
        ));
        assert!(drain(&mut rx).is_empty(), "no call before confirmation");
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let (mut app, mut rx) = new_app();
        app.registry.replace_all(vec![doc(7)]);
        app.handle_event(ch('d'));
        app.handle_event(ch('n'));
        assert!(matches!(app.overlay, Overlay::None));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn confirmed_delete_sends_delete_request() {
        let (mut app, mut rx) = new_app();
        app.registry.replace_all(vec![doc(7)]);
        app.handle_event(ch('d'));
        app.handle_event(ch('y'));
        assert_eq!(drain(&mut rx), vec![ApiRequest::Delete { id: 7 }]);
    }

    #[test]
    fn delete_success_refetches_and_clears_matching_scope() {
        let (mut app, mut rx) = new_app();
        app.registry.replace_all(vec![doc(7)]);
        app.session.set_scope(ChatScope {
            document_id: 7,
            file_name: "doc-7.pdf".into(),
        });
        app.handle_api_event(ApiEvent::Deleted(Ok(7)));

        assert!(app.session.scope().is_none());
        assert_eq!(app.notice().unwrap().text, "Document deleted successfully");
        assert_eq!(drain(&mut rx), vec![ApiRequest::RefreshDocuments]);
    }

    #[test]
    fn delete_failure_shows_notice_without_refetch() {
        let (mut app, mut rx) = new_app();
        app.handle_api_event(ApiEvent::Deleted(Err("boom".into())));
        assert_eq!(app.notice().unwrap().text, "Failed to delete document");
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn enter_on_document_scopes_chat() {
        let (mut app, _rx) = new_app();
        app.registry.replace_all(vec![doc(3)]);
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.tab, Tab::Chat);
        assert_eq!(app.session.scope().unwrap().document_id, 3);
    }

    #[test]
    fn ask_carries_scoped_document_id() {
        let (mut app, mut rx) = new_app();
        app.registry.replace_all(vec![doc(3)]);
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(ch('i'));
        for c in "what?".chars() {
            app.handle_event(ch(c));
        }
        app.handle_event(key(KeyCode::Enter));

        assert_eq!(
            drain(&mut rx),
            vec![ApiRequest::Ask {
                question: "what?".into(),
                document_id: Some(3),
            }]
        );
        assert!(app.input.is_empty());
        assert!(app.session.is_pending());
    }

    #[test]
    fn unscoped_ask_has_no_document_id() {
        let (mut app, mut rx) = new_app();
        app.tab = Tab::Chat;
        app.handle_event(ch('i'));
        app.handle_event(ch('h'));
        app.handle_event(ch('i'));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(
            drain(&mut rx),
            vec![ApiRequest::Ask {
                question: "hi".into(),
                document_id: None,
            }]
        );
    }

    #[test]
    fn pending_turn_blocks_resubmit() {
        let (mut app, mut rx) = new_app();
        app.tab = Tab::Chat;
        app.handle_event(ch('i'));
        app.handle_event(ch('a'));
        app.handle_event(key(KeyCode::Enter));
        drain(&mut rx);

        app.handle_event(ch('b'));
        app.handle_event(key(KeyCode::Enter));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn failed_answer_appends_fallback() {
        let (mut app, _rx) = new_app();
        app.tab = Tab::Chat;
        app.handle_event(ch('i'));
        app.handle_event(ch('x'));
        app.handle_event(key(KeyCode::Enter));
        app.handle_api_event(ApiEvent::Answered(Err("timeout".into())));

        let messages = app.session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, FALLBACK_ANSWER);
    }

    #[test]
    fn answered_ok_appends_answer_text() {
        let (mut app, _rx) = new_app();
        app.tab = Tab::Chat;
        app.handle_event(ch('i'));
        app.handle_event(ch('x'));
        app.handle_event(key(KeyCode::Enter));
        app.handle_api_event(ApiEvent::Answered(Ok(ChatAnswer {
            question: "x".into(),
            answer: "an answer".into(),
            document_id: None,
        })));
        assert_eq!(app.session.messages()[1].content, "an answer");
    }

    #[test]
    fn answer_after_scope_switch_is_discarded() {
        let (mut app, mut rx) = new_app();
        app.registry.replace_all(vec![doc(1), doc(2)]);
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(ch('i'));
        app.handle_event(ch('q'));
        app.handle_event(key(KeyCode::Enter));
        drain(&mut rx);

        app.input_mode = InputMode::Normal;
        app.tab = Tab::Documents;
        app.selected_row = 1;
        app.handle_event(key(KeyCode::Enter));
        app.handle_api_event(ApiEvent::Answered(Ok(ChatAnswer {
            question: "q".into(),
            answer: "stale".into(),
            document_id: Some("1".into()),
        })));

        assert!(app.session.messages().is_empty(), "stale answer must not appear");
        assert_eq!(app.session.scope().unwrap().document_id, 2);
        assert!(!app.session.is_pending());
    }

    #[test]
    fn suggestion_key_fills_input_and_cycles() {
        let (mut app, _rx) = new_app();
        app.tab = Tab::Chat;
        app.handle_event(ch('s'));
        assert_eq!(app.input, SUGGESTED_QUESTIONS[0]);
        assert_eq!(app.input_mode, InputMode::Insert);

        app.input_mode = InputMode::Normal;
        app.handle_event(ch('s'));
        assert_eq!(app.input, SUGGESTED_QUESTIONS[1]);
    }

    #[test]
    fn suggestions_unavailable_once_transcript_has_messages() {
        let (mut app, _rx) = new_app();
        app.tab = Tab::Chat;
        app.session.submit_question("q").unwrap();
        app.session.complete_turn(Ok("a".into()));
        app.handle_event(ch('s'));
        assert!(app.input.is_empty());
    }

    #[test]
    fn clear_chat_requires_confirmation() {
        let (mut app, _rx) = new_app();
        app.tab = Tab::Chat;
        app.session.submit_question("q").unwrap();
        app.session.complete_turn(Ok("a".into()));

        app.handle_event(ch('c'));
        assert!(matches!(
            app.overlay,
            Overlay::Confirm(ConfirmAction::ClearChat)
        ));
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.session.messages().len(), 2, "declined clear keeps transcript");

        app.handle_event(ch('c'));
        app.handle_event(ch('y'));
        assert!(app.session.messages().is_empty());
    }

    #[test]
    fn documents_error_keeps_stale_list() {
        let (mut app, _rx) = new_app();
        app.registry.replace_all(vec![doc(1)]);
        app.registry.begin_refresh();
        app.handle_api_event(ApiEvent::Documents(Err("down".into())));
        assert_eq!(app.registry.len(), 1);
        assert_eq!(app.notice().unwrap().text, "Failed to load documents");
    }

    #[test]
    fn documents_refresh_clamps_selection() {
        let (mut app, _rx) = new_app();
        app.registry.replace_all(vec![doc(1), doc(2), doc(3)]);
        app.selected_row = 2;
        app.handle_api_event(ApiEvent::Documents(Ok(vec![doc(1)])));
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn notice_expires_after_ticks() {
        let (mut app, _rx) = new_app();
        app.handle_api_event(ApiEvent::Deleted(Err("boom".into())));
        assert!(app.notice().is_some());
        for _ in 0..NOTICE_TICKS {
            app.handle_event(AppEvent::Tick);
        }
        assert!(app.notice().is_none());
    }

    #[test]
    fn picker_rejects_non_pdf_with_notice() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let (mut app, _rx) = new_app();
        app.tab = Tab::Upload;
        app.overlay = Overlay::Picker(FilePicker::open(dir.path()));

        app.handle_event(key(KeyCode::Enter));
        assert!(matches!(app.overlay, Overlay::None));
        assert_eq!(app.notice().unwrap().text, "Please upload only PDF files");
        assert!(app.upload.file().is_none());
    }

    #[test]
    fn picker_selects_pdf_into_upload_form() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("report.pdf"), "x").unwrap();
        let (mut app, _rx) = new_app();
        app.tab = Tab::Upload;
        app.overlay = Overlay::Picker(FilePicker::open(dir.path()));

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.upload.file().unwrap().file_name, "report.pdf");
    }

    #[test]
    fn upload_submit_sends_request_with_description() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, "x").unwrap();
        let (mut app, mut rx) = new_app();
        app.tab = Tab::Upload;
        app.upload.select_file(&path).unwrap();
        app.handle_event(ch('i'));
        for c in "q3 numbers".chars() {
            app.handle_event(ch(c));
        }
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);

        app.handle_event(key(KeyCode::Enter));
        let sent = drain(&mut rx);
        assert_eq!(sent.len(), 1);
        assert!(matches!(
            &sent[0],
            ApiRequest::Upload { file_name, description, .. }
                if file_name == "report.pdf" && description.as_deref() == Some("q3 numbers")
        ));
    }

    #[test]
    fn upload_submit_without_selection_is_noop() {
        let (mut app, mut rx) = new_app();
        app.tab = Tab::Upload;
        app.handle_event(key(KeyCode::Enter));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn help_overlay_opens_and_any_key_closes() {
        let (mut app, _rx) = new_app();
        app.handle_event(ch('?'));
        assert!(matches!(app.overlay, Overlay::Help));
        app.handle_event(ch('z'));
        assert!(matches!(app.overlay, Overlay::None));
    }

    #[test]
    fn cursor_editing_handles_multibyte_input() {
        let (mut app, _rx) = new_app();
        app.tab = Tab::Chat;
        app.handle_event(ch('i'));
        app.handle_event(ch('é'));
        app.handle_event(ch('x'));
        app.handle_event(key(KeyCode::Left));
        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(app.input, "x");
    }
}
