use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use env_logger::{Builder, Env, Target};

/// Name of the run log for a given day, shared with cleanup so rotation and
/// creation agree on the scheme.
pub fn log_file_name(date: NaiveDate) -> String {
    format!("email_fetch_{}.log", date.format("%Y-%m-%d"))
}

/// Initialize the process-wide logger, writing to today's log file under
/// `base_dir`. Records are `YYYY-MM-DD HH:MM:SS - LEVEL - message`, one line
/// per event, appended across invocations within the same day.
///
/// Default level is `info`; `RUST_LOG` overrides it.
pub fn init(base_dir: &Path, date: NaiveDate) -> Result<()> {
    let path = base_dir.join(log_file_name(date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Unable to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
