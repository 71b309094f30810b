use async_trait::async_trait;

use crate::error::FetchError;

/// Mail-provider capability consumed by the fetch pipeline.
///
/// The Gmail implementation lives in `gmail_client`; tests drive the pipeline
/// with an in-memory fake, so nothing downstream of this trait ever needs a
/// browser, a token cache, or network access.
#[async_trait]
pub trait MailProvider {
    /// Identifiers of the messages matching `query`, in provider order.
    async fn list_messages(&self, query: &str) -> Result<Vec<String>, FetchError>;

    /// Full RFC822 bytes of one message, transport encoding already removed.
    async fn fetch_raw(&self, id: &str) -> Result<Vec<u8>, FetchError>;

    /// Remove the unread marker from one message remotely.
    async fn mark_read(&self, id: &str) -> Result<(), FetchError>;
}
