use anyhow::Context;
use async_trait::async_trait;
use google_gmail1::{hyper, hyper_rustls, oauth2, Gmail};
use log::{debug, info};

use crate::config::GmailConfig;
use crate::error::FetchError;
use crate::provider::MailProvider;

pub struct GmailClient {
    hub: Gmail<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
}

impl GmailClient {
    /// Connect to the Gmail API, resolving credentials first.
    ///
    /// The authenticator loads the token cache if it exists, refreshes the
    /// token in place when it is expired but refreshable, and otherwise runs
    /// the interactive browser consent flow against a local redirect endpoint.
    /// Any new or refreshed token overwrites the cache file whole.
    pub async fn new(config: &GmailConfig) -> Result<Self, FetchError> {
        info!("Connecting to Gmail API via OAuth2");

        // Read OAuth2 client credentials from file
        let secret = oauth2::read_application_secret(&config.credentials_path)
            .await
            .context("Unable to read OAuth2 client credentials file")
            .map_err(FetchError::Credentials)?;

        // Create authenticator with token persistence
        // Note: We use Scope::Modify on all API calls, which is the broadest
        // scope available in google-gmail1 (covers reading and label changes)
        let auth = oauth2::InstalledFlowAuthenticator::builder(
            secret,
            oauth2::InstalledFlowReturnMethod::HTTPRedirect,
        )
        .persist_tokens_to_disk(&config.token_cache_path)
        .build()
        .await
        .context("Unable to create OAuth2 authenticator")
        .map_err(FetchError::Credentials)?;

        // Create HTTP client
        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .context("Unable to load native TLS roots")
            .map_err(FetchError::Credentials)?
            .https_or_http()
            .enable_http1()
            .build();

        let client = hyper::Client::builder().build(connector);

        let hub = Gmail::new(client, auth);

        info!("✅ Gmail API connection established successfully");

        Ok(GmailClient { hub })
    }
}

#[async_trait]
impl MailProvider for GmailClient {
    async fn list_messages(&self, query: &str) -> Result<Vec<String>, FetchError> {
        debug!("Search criteria: {}", query);

        let result = self
            .hub
            .users()
            .messages_list("me")
            .q(query)
            .add_scope(google_gmail1::api::Scope::Modify)
            .doit()
            .await
            .map_err(|e| FetchError::List(anyhow::Error::new(e)))?;

        let message_ids: Vec<String> = result
            .1
            .messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|msg| msg.id)
            .collect();

        Ok(message_ids)
    }

    async fn fetch_raw(&self, id: &str) -> Result<Vec<u8>, FetchError> {
        debug!("Retrieving message {} in RAW format", id);

        let result = self
            .hub
            .users()
            .messages_get("me", id)
            .format("raw")
            .add_scope(google_gmail1::api::Scope::Modify)
            .doit()
            .await
            .map_err(|e| FetchError::Get {
                id: id.to_string(),
                cause: anyhow::Error::new(e),
            })?;

        // The urlsafe-base64 transport encoding is undone during response
        // deserialization, so `raw` already holds the RFC822 bytes
        let raw_bytes = result.1.raw.ok_or_else(|| FetchError::EmptyMessage {
            id: id.to_string(),
        })?;

        debug!("Message {} retrieved, size: {} bytes", id, raw_bytes.len());

        Ok(raw_bytes)
    }

    async fn mark_read(&self, id: &str) -> Result<(), FetchError> {
        // UNREAD is a system label with a fixed id, no lookup needed
        let mut modify_request = google_gmail1::api::ModifyMessageRequest::default();
        modify_request.remove_label_ids = Some(vec!["UNREAD".to_string()]);

        self.hub
            .users()
            .messages_modify(modify_request, "me", id)
            .add_scope(google_gmail1::api::Scope::Modify)
            .doit()
            .await
            .map_err(|e| FetchError::MarkRead {
                id: id.to_string(),
                cause: anyhow::Error::new(e),
            })?;

        debug!("Removed UNREAD label from message {}", id);

        Ok(())
    }
}
