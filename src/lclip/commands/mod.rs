use std::path::PathBuf;

pub mod delete;
pub mod get;
pub mod labels;
pub mod paths;
pub mod set;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result of one command, UI-agnostic.
///
/// The CLI decides how to render each field; commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Raw payload bytes, for commands that retrieve one.
    pub payload: Option<Vec<u8>>,
    /// Labels to list, already sorted for display.
    pub listed_labels: Vec<String>,
    /// Backing file involved, for introspection commands.
    pub store_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_listed_labels(mut self, labels: Vec<String>) -> Self {
        self.listed_labels = labels;
        self
    }

    pub fn with_store_path(mut self, path: PathBuf) -> Self {
        self.store_path = Some(path);
        self
    }
}
