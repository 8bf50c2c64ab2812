use crate::common::*;

#[doc = "Custom log format: timestamp, level, module path, message."]
fn custom_log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}

#[doc = r#"
    Sets up the global logger: daily-rotated log files under `logs/`,
    duplicated to stdout so a one-shot run is observable in the terminal.
"#]
pub fn set_global_logger() {
    Logger::try_with_str("info")
        .expect("Failed to initialize global logger")
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .duplicate_to_stdout(Duplicate::Info)
        .format(custom_log_format)
        .start()
        .expect("Failed to start global logger");
}
