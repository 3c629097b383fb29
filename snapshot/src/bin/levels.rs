use emlog::Severity;
use emlog_snapshot::stdout_logger;

fn all(logger: &emlog::Logger<emlog::transport::Native>, round: u32) {
    for severity in Severity::ALL {
        emlog::log!(logger, "levels", severity, "round %u", round);
    }
}

fn main() {
    let logger = stdout_logger();

    all(&logger, 1);

    for severity in [Severity::Debug, Severity::Warning] {
        if let Err(e) = logger.set_level_enabled(severity, false) {
            eprintln!("{}", e);
        }
    }
    all(&logger, 2);

    // unknown codes are never filtered
    logger.log_code("levels", 200, "round %u", &[2u32.into()]);

    if let Err(e) = logger.set_level_code_enabled(0, 1) {
        eprintln!("{}", e);
    }
    all(&logger, 3);
}
