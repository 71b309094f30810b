use chrono::{DateTime, Local};
use log::{debug, info};
use mail_parser::MessageParser;

use crate::error::FetchError;
use crate::provider::MailProvider;
use crate::store::MailStore;

type Clock = Box<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// Drains unread messages into the store and marks each one read.
///
/// The pipeline is strictly sequential: list once, then for each message in
/// provider order get, parse, save, mark-read. The first failing step aborts the
/// remaining batch; a message already saved but not yet marked read stays
/// saved and stays unread remotely, so the next run fetches it again under a
/// different timestamp.
pub struct Fetcher<P: MailProvider> {
    provider: P,
    store: MailStore,
    query: String,
    dry_run: bool,
    clock: Clock,
}

impl<P: MailProvider> Fetcher<P> {
    pub fn new(provider: P, store: MailStore, query: impl Into<String>, dry_run: bool) -> Self {
        Fetcher {
            provider,
            store,
            query: query.into(),
            dry_run,
            clock: Box::new(Local::now),
        }
    }

    /// Replace the save-timestamp clock. Tests use this to control filename
    /// collisions; production code keeps the default wall clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run the fetch loop once. Returns the number of messages saved.
    pub async fn drain(&self, limit: Option<usize>) -> Result<usize, FetchError> {
        let message_ids = self.provider.list_messages(&self.query).await?;

        info!("Fetched {} new messages", message_ids.len());

        let message_ids: Vec<String> = match limit {
            Some(n) => message_ids.into_iter().take(n).collect(),
            None => message_ids,
        };

        let mut saved = 0;

        for id in &message_ids {
            let raw = self.provider.fetch_raw(id).await?;

            // Structural check only. The original bytes are what gets stored,
            // so a re-parse of the saved file reproduces headers and body
            // unchanged.
            let parsed = MessageParser::default()
                .parse(&raw)
                .ok_or_else(|| FetchError::Parse { id: id.clone() })?;

            debug!(
                "Message {}: '{}' from {}",
                id,
                parsed.subject().unwrap_or("No subject"),
                parsed
                    .from()
                    .and_then(|addrs| addrs.first())
                    .and_then(|addr| addr.address.as_deref())
                    .unwrap_or("unknown sender"),
            );

            let now = (self.clock)();
            let path = self
                .store
                .save(&raw, now)
                .map_err(|e| FetchError::Save {
                    id: id.clone(),
                    cause: e,
                })?;

            info!("Email saved in {}", path.display());

            // Save failure above already aborted, so a message is never
            // marked read without its file on disk
            if self.dry_run {
                info!("Dry-run: leaving message {} unread", id);
            } else {
                self.provider.mark_read(id).await?;
            }

            saved += 1;
        }

        Ok(saved)
    }
}
