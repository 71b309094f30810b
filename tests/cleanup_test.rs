use chrono::NaiveDate;
use mailfetch::cleanup;
use mailfetch::logging;

#[test]
fn test_removes_yesterday_folder_and_log() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

    let yesterday_folder = dir.path().join("2026-08-24");
    std::fs::create_dir(&yesterday_folder).expect("Failed to create folder");
    std::fs::write(yesterday_folder.join("email_10-00-00.eml"), b"old mail")
        .expect("Failed to write old message");

    let yesterday_log = dir.path().join(logging::log_file_name(
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
    ));
    std::fs::write(&yesterday_log, b"old log").expect("Failed to write old log");

    cleanup::remove_previous_day(dir.path(), today);

    assert!(!yesterday_folder.exists(), "Yesterday's folder should be gone");
    assert!(!yesterday_log.exists(), "Yesterday's log should be gone");
}

#[test]
fn test_missing_artifacts_are_a_no_op() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

    cleanup::remove_previous_day(dir.path(), today);

    let entries = std::fs::read_dir(dir.path())
        .expect("Failed to read dir")
        .count();
    assert_eq!(entries, 0, "Cleanup must not create anything");
}

#[test]
fn test_todays_artifacts_are_untouched() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

    let today_folder = dir.path().join("2026-08-25");
    std::fs::create_dir(&today_folder).expect("Failed to create folder");
    std::fs::write(today_folder.join("email_08-00-00.eml"), b"fresh mail")
        .expect("Failed to write message");
    let today_log = dir.path().join(logging::log_file_name(today));
    std::fs::write(&today_log, b"fresh log").expect("Failed to write log");

    cleanup::remove_previous_day(dir.path(), today);

    assert!(today_folder.join("email_08-00-00.eml").exists());
    assert!(today_log.exists());
}

#[test]
fn test_only_yesterday_is_rotated() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

    // Two days old: left behind by design, rotation only looks one day back
    let older_folder = dir.path().join("2026-08-23");
    std::fs::create_dir(&older_folder).expect("Failed to create folder");

    cleanup::remove_previous_day(dir.path(), today);

    assert!(older_folder.exists());
}
