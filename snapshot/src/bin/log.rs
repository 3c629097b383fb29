use emlog::Severity;
use emlog_snapshot::stdout_logger;

fn main() {
    let logger = stdout_logger();

    emlog::debug!(logger, "main", "debug message");
    emlog::info!(logger, "main", "info message");
    emlog::warning!(logger, "main", "warning message");
    emlog::error!(logger, "main", "error message");
    emlog::fatal!(logger, "main", "fatal message");

    emlog::log!(logger, "net", Severity::Info, "%s connected after %u tries", "eth0", 3u8);
    logger.log_code("net", 9, "level code %u", &[9u8.into()]);

    emlog::print!(logger, "raw %s, no framing\r\n", "print");

    logger.report_assertion("src/bin/log.rs", 21);
}
