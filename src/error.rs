use thiserror::Error;

/// Errors raised at the edges of the tags-view state: parsing route objects
/// handed over by the webview, sharing the store between threads and
/// reading/writing the settings file. Store actions themselves never fail.
#[derive(Debug, Error)]
pub enum TagsViewError {
    #[error("invalid view record: {0}")]
    InvalidView(#[source] serde_json::Error),

    #[error("invalid settings: {0}")]
    Settings(#[source] serde_json::Error),

    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),

    #[error("tags-view state lock poisoned")]
    StateLocked,
}
