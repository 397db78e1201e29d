use std::time::Duration;

use crate::error::{ApiError, Result};
use crate::types::{AskRequest, ChatAnswer, Document};

const ERROR_BODY_LIMIT: usize = 500;

/// Create the shared HTTP client used for all backend calls.
///
/// Config: 10s connect timeout, 120s request timeout (uploads and LLM
/// answers are slow), `folio/{version}` user-agent. Individual calls do
/// not override these and are never retried.
#[must_use]
pub fn default_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(120))
        .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("default HTTP client construction must not fail")
}

/// Client for the document and chat backend. One method per backend
/// operation; each call is fire-once with no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /documents` — the full document list in server display order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn list_documents(&self) -> Result<Vec<Document>> {
        let url = format!("{}/documents", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `GET /documents/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn get_document(&self, id: i64) -> Result<Document> {
        let url = format!("{}/documents/{id}", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `POST /documents/upload` — multipart fields `file`, `uploadedBy`
    /// and optional `description`. Returns the created document.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        uploaded_by: &str,
        description: Option<&str>,
    ) -> Result<Document> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str("application/pdf")?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("uploadedBy", uploaded_by.to_owned());
        if let Some(desc) = description {
            form = form.text("description", desc.to_owned());
        }

        let url = format!("{}/documents/upload", self.base_url);
        tracing::debug!(%file_name, %uploaded_by, "uploading document");
        let resp = self.client.post(&url).multipart(form).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `DELETE /documents/{id}` — no content on success.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn delete_document(&self, id: i64) -> Result<()> {
        let url = format!("{}/documents/{id}", self.base_url);
        let resp = self.client.delete(&url).send().await?;
        check(resp).await?;
        Ok(())
    }

    /// `GET /documents/user/{username}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn documents_by_user(&self, username: &str) -> Result<Vec<Document>> {
        let url = format!("{}/documents/user/{username}", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `POST /chat/ask` — a question across all documents.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn ask(&self, question: &str) -> Result<ChatAnswer> {
        let url = format!("{}/chat/ask", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `POST /chat/ask/{documentId}` — a question scoped to one document.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn ask_about_document(&self, document_id: i64, question: &str) -> Result<ChatAnswer> {
        let url = format!("{}/chat/ask/{document_id}", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `GET /chat/health` — implementation-defined payload, passed through.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn health(&self) -> Result<serde_json::Value> {
        let url = format!("{}/chat/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(check(resp).await?.json().await?)
    }
}

/// Map non-2xx responses to `ApiError::Status` with a truncated body.
/// Status codes are not interpreted beyond pass/fail.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let mut body = resp.text().await.unwrap_or_default();
    body.truncate(ERROR_BODY_LIMIT);
    tracing::warn!(%status, "backend call failed");
    Err(ApiError::Status { status, body })
}
