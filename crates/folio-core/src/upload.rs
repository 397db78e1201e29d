use std::path::{Path, PathBuf};

/// A file accepted for upload. Captured at selection time so the display
/// line ("name (1.5 KB)") does not re-stat the file on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Idle,
    FileSelected,
    Uploading,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadFormError {
    #[error("Please upload only PDF files")]
    NotAPdf,

    #[error("failed to read file metadata: {0}")]
    Io(#[from] std::io::Error),
}

/// Local upload workflow state: `Idle -> FileSelected -> Uploading`,
/// returning to `Idle` on success and back to `FileSelected` on failure
/// so the user can retry with the same file.
#[derive(Debug, Default)]
pub struct UploadForm {
    file: Option<SelectedFile>,
    description: String,
    uploading: bool,
}

impl UploadForm {
    #[must_use]
    pub fn stage(&self) -> UploadStage {
        if self.uploading {
            UploadStage::Uploading
        } else if self.file.is_some() {
            UploadStage::FileSelected
        } else {
            UploadStage::Idle
        }
    }

    #[must_use]
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn description_mut(&mut self) -> &mut String {
        &mut self.description
    }

    /// Select a file for upload. Only PDFs are accepted; a rejected file
    /// leaves any prior selection unchanged. Picker and manually entered
    /// paths both funnel through here.
    ///
    /// # Errors
    ///
    /// Returns `NotAPdf` for non-PDF files and `Io` when the file cannot
    /// be stat'ed.
    pub fn select_file(&mut self, path: &Path) -> Result<(), UploadFormError> {
        if self.uploading {
            return Ok(());
        }
        if !is_pdf(path) {
            return Err(UploadFormError::NotAPdf);
        }
        let meta = std::fs::metadata(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.file = Some(SelectedFile {
            path: path.to_path_buf(),
            file_name,
            size_bytes: meta.len(),
        });
        Ok(())
    }

    /// Discard the current selection and description.
    pub fn clear_selection(&mut self) {
        if self.uploading {
            return;
        }
        self.file = None;
        self.description.clear();
    }

    /// Transition to `Uploading` and hand back what the network call
    /// needs. Returns `None` when no file is selected or a call is
    /// already in flight (the submit control is disabled then).
    pub fn begin_upload(&mut self) -> Option<(SelectedFile, Option<String>)> {
        if self.uploading {
            return None;
        }
        let file = self.file.clone()?;
        self.uploading = true;
        let description = if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description.clone())
        };
        Some((file, description))
    }

    /// Upload succeeded: clear the file and description, back to `Idle`.
    pub fn complete_success(&mut self) {
        self.uploading = false;
        self.file = None;
        self.description.clear();
    }

    /// Upload failed: keep the file selected so the user may retry.
    pub fn complete_failure(&mut self) {
        self.uploading = false;
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
