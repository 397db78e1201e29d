use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEventKind};
use folio_api::{ChatAnswer, Document};
use tokio::sync::mpsc;

/// Terminal-side events feeding the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    MouseScroll(i8),
}

/// Backend calls the UI asks the worker task to perform. The worker owns
/// the `ApiClient`; requests are served one at a time in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    RefreshDocuments,
    Upload {
        path: PathBuf,
        file_name: String,
        description: Option<String>,
    },
    Delete {
        id: i64,
    },
    Ask {
        question: String,
        document_id: Option<i64>,
    },
}

/// Call outcomes posted back by the worker. Errors arrive already
/// collapsed to display strings; the detailed cause is logged at the
/// worker boundary.
#[derive(Debug)]
pub enum ApiEvent {
    Documents(Result<Vec<Document>, String>),
    Uploaded(Result<Document, String>),
    Deleted(Result<i64, String>),
    Answered(Result<ChatAnswer, String>),
}

pub struct EventReader {
    tx: mpsc::Sender<AppEvent>,
    tick_rate: Duration,
}

impl EventReader {
    #[must_use]
    pub fn new(tx: mpsc::Sender<AppEvent>, tick_rate: Duration) -> Self {
        Self { tx, tick_rate }
    }

    /// Blocking loop — must run on a dedicated `std::thread`, not a tokio worker.
    pub fn run(self) {
        loop {
            if event::poll(self.tick_rate).unwrap_or(false) {
                let evt = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => AppEvent::Key(key),
                    Ok(CrosstermEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                    Ok(CrosstermEvent::Mouse(mouse)) => match mouse.kind {
                        MouseEventKind::ScrollUp => AppEvent::MouseScroll(1),
                        MouseEventKind::ScrollDown => AppEvent::MouseScroll(-1),
                        _ => continue,
                    },
                    _ => continue,
                };
                if self.tx.blocking_send(evt).is_err() {
                    break;
                }
            } else if self.tx.blocking_send(AppEvent::Tick).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_request_upload_carries_fields() {
        let req = ApiRequest::Upload {
            path: PathBuf::from("/tmp/a.pdf"),
            file_name: "a.pdf".into(),
            description: Some("desc".into()),
        };
        assert!(matches!(
            req,
            ApiRequest::Upload { ref file_name, .. } if file_name == "a.pdf"
        ));
    }

    #[test]
    fn api_event_debug() {
        let e = ApiEvent::Deleted(Ok(3));
        let s = format!("{e:?}");
        assert!(s.contains("Deleted"));
    }

    #[test]
    fn event_reader_construction() {
        let (tx, _rx) = mpsc::channel(16);
        let reader = EventReader::new(tx, Duration::from_millis(100));
        assert_eq!(reader.tick_rate, Duration::from_millis(100));
    }
}
