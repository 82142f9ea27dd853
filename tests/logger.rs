use mailcaster::logger::Logger;

#[test]
fn test_log_entries_are_timestamped() {
    let logger = Logger::new();
    logger.log("first entry".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("first entry"));
    assert!(logs[0].starts_with('['));
}

#[test]
fn test_get_logs_newest_first() {
    let logger = Logger::new();
    logger.log("older".to_string());
    logger.log("newer".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].contains("newer"));
    assert!(logs[1].contains("older"));
}

#[test]
fn test_clear() {
    let logger = Logger::new();
    logger.log("entry".to_string());
    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_clones_share_storage() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("shared".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}
