use folio_api::Document;

/// Client-side view of the server's document list. Refreshed wholesale:
/// a refetch replaces the entire list, and list order is the server's
/// display order (no client-side sort). Deletion is reflected only by the
/// refetch that follows a confirmed delete call.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: Vec<Document>,
    loading: bool,
}

impl DocumentRegistry {
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.documents.iter().filter(|d| d.is_processed).count()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    #[must_use]
    pub fn by_id(&self, id: i64) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Mark a refetch in flight. The stale list keeps rendering until the
    /// replacement arrives.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Replace local state wholesale with a fresh server list.
    pub fn replace_all(&mut self, documents: Vec<Document>) {
        self.documents = documents;
        self.loading = false;
    }

    /// Refetch failed; keep whatever was displayed before.
    pub fn refresh_failed(&mut self) {
        self.loading = false;
    }
}
