pub mod config;
pub mod registry;
pub mod session;
pub mod upload;

pub use config::Config;
pub use registry::DocumentRegistry;
pub use session::{ChatMessage, ChatScope, ChatSession, Role};
pub use upload::{SelectedFile, UploadForm, UploadFormError, UploadStage};
