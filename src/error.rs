use thiserror::Error;

/// One variant per pipeline operation, so the orchestrating loop (and the
/// tests) can tell which step failed instead of unwinding through a single
/// blanket catch.
///
/// The payloads are `anyhow::Error` because the Gmail client stack produces
/// several unrelated error types; what matters here is which operation failed,
/// not the transport detail.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("credential resolution failed: {0}")]
    Credentials(anyhow::Error),

    #[error("listing unread messages failed: {0}")]
    List(anyhow::Error),

    #[error("retrieving message {id} failed: {cause}")]
    Get { id: String, cause: anyhow::Error },

    #[error("message {id} has no raw content")]
    EmptyMessage { id: String },

    #[error("message {id} could not be parsed as a MIME message")]
    Parse { id: String },

    #[error("saving message {id} failed: {cause}")]
    Save { id: String, cause: anyhow::Error },

    #[error("marking message {id} as read failed: {cause}")]
    MarkRead { id: String, cause: anyhow::Error },
}
