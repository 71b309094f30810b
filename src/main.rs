use std::path::Path;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::{error, info};

use mailfetch::cleanup;
use mailfetch::config::Config;
use mailfetch::fetcher::Fetcher;
use mailfetch::gmail_client::GmailClient;
use mailfetch::logging;
use mailfetch::store::MailStore;

#[derive(Parser)]
#[command(name = "mailfetch")]
#[command(about = "Drains unread Gmail messages into per-day .eml folders")]
#[command(version = "0.1.0")]
struct Args {
    /// Fetch and save messages without marking them read
    #[arg(short, long)]
    dry_run: bool,

    /// Limit the number of messages processed in one run (default: unlimited)
    #[arg(short = 'l', long)]
    limit: Option<usize>,

    /// Verify the configuration without connecting
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load the .env file if it exists
    dotenv::dotenv().ok();

    let args = Args::parse();

    let config = Config::new()?;

    if args.check_config {
        println!("✅ Configuration valid!");
        println!("📧 Gmail API OAuth2");
        println!("🔑 Credentials: {}", config.gmail.credentials_path);
        println!("💾 Token cache: {}", config.gmail.token_cache_path);
        println!("📁 Output directory: {}", config.output_dir);
        println!("🔎 Query: {}", config.query);
        return Ok(());
    }

    let today = Local::now().date_naive();
    let output_dir = Path::new(&config.output_dir);

    logging::init(output_dir, today)?;

    info!("Script started");

    // Rotation first, so yesterday's artifacts are gone before today's
    // folder and log accumulate new ones
    cleanup::remove_previous_day(output_dir, today);

    let result = run(&config, &args).await;

    match result {
        Ok(count) => {
            info!("✅ Run complete: {} message(s) saved", count);
            Ok(())
        }
        Err(e) => {
            error!("Error fetching emails: {}", e);
            // Deliberate departure from best-effort exit: an external
            // scheduler should be able to observe a failed run
            Err(e)
        }
    }
}

async fn run(config: &Config, args: &Args) -> Result<usize> {
    let client = GmailClient::new(&config.gmail).await?;

    let store = MailStore::new(&config.output_dir);
    let fetcher = Fetcher::new(client, store, config.query.clone(), args.dry_run);

    let count = fetcher.drain(args.limit).await?;

    Ok(count)
}
