/// Error types for the help knowledge-base core.
///
/// Corpus-load variants are startup preconditions — a malformed corpus must
/// fail the process before serving, never degrade matching silently. The
/// only runtime variant is `EmptyMessage`, raised by the conversation
/// session for blank input and recovered locally by the caller.

#[derive(Debug, thiserror::Error)]
pub enum KbError {
    #[error("message text must not be empty")]
    EmptyMessage,

    #[error("duplicate article id: {0}")]
    DuplicateArticleId(String),

    #[error("article {0} has no tags and would never match a query")]
    MissingTags(String),

    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse corpus file: {0}")]
    Json(#[from] serde_json::Error),
}
