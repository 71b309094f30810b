use anyhow::Result;
use serde::Deserialize;

/// Default search query: unread messages, excluding the social and
/// promotions categories.
pub const UNREAD_QUERY: &str = "is:unread -category:social -category:promotions";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub gmail: GmailConfig,
    pub output_dir: String,
    pub query: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GmailConfig {
    pub credentials_path: String,
    pub token_cache_path: String,
}

impl Config {
    pub fn new() -> Result<Self> {
        let config = Config {
            gmail: GmailConfig {
                credentials_path: std::env::var("GMAIL_CREDENTIALS_PATH")
                    .unwrap_or_else(|_| "./credentials.json".to_string()),
                token_cache_path: std::env::var("GMAIL_TOKEN_CACHE_PATH")
                    .unwrap_or_else(|_| "./token.json".to_string()),
            },
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
            query: std::env::var("FETCH_QUERY").unwrap_or_else(|_| UNREAD_QUERY.to_string()),
        };

        config.check_credentials_file()?;

        Ok(config)
    }

    fn check_credentials_file(&self) -> Result<()> {
        if !std::path::Path::new(&self.gmail.credentials_path).exists() {
            anyhow::bail!(
                "OAuth2 client credentials file not found: {}\n\
                 \n\
                 💡 Solutions :\n\
                 1. Download the OAuth2 client secret for your Google Cloud project\n\
                    and save it as ./credentials.json\n\
                 \n\
                 2. Or point GMAIL_CREDENTIALS_PATH at it :\n\
                    export GMAIL_CREDENTIALS_PATH=/path/to/client_credentials.json\n\
                    cargo run\n\
                 \n\
                 3. Or create a .env file :\n\
                    cp .env.example .env\n\
                    # Then edit .env with your paths",
                self.gmail.credentials_path
            );
        }

        Ok(())
    }
}
