use std::path::Path;

use chrono::NaiveDate;
use log::{error, info};

use crate::logging;

/// Remove yesterday's day folder and log file before today's run produces new
/// ones. At most one day folder and one log file stay live this way.
///
/// Both sub-steps are attempted and logged independently; a failure here is
/// non-fatal and never propagates past this function.
pub fn remove_previous_day(base: &Path, today: NaiveDate) {
    let Some(yesterday) = today.pred_opt() else {
        return;
    };

    let folder = base.join(yesterday.format("%Y-%m-%d").to_string());
    if folder.exists() {
        match std::fs::remove_dir_all(&folder) {
            Ok(()) => info!("Removed previous mail folder successfully"),
            Err(e) => error!("Error removing previous folder {}: {}", folder.display(), e),
        }
    }

    let log_path = base.join(logging::log_file_name(yesterday));
    if log_path.exists() {
        match std::fs::remove_file(&log_path) {
            Ok(()) => info!("Removed previous log file successfully"),
            Err(e) => error!("Error removing previous log file {}: {}", log_path.display(), e),
        }
    }
}
