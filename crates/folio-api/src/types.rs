use serde::{Deserialize, Serialize};

/// Server-tracked uploaded document. Read-only on the client except for
/// deletion; `id` is unique and stable for the document's lifetime.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub file_name: String,
    pub file_type: String,
    pub file_size: u64,
    #[serde(default)]
    pub description: Option<String>,
    pub uploaded_at: String,
    pub uploaded_by: String,
    /// False while the backend is still extracting and embedding content,
    /// true once chat queries against this document are expected to succeed.
    pub is_processed: bool,
    pub page_count: u32,
}

/// Answer to a chat question, optionally scoped to one document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatAnswer {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub document_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AskRequest<'a> {
    pub question: &'a str,
}
