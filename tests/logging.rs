mod common;

use common::{calls, logger, ready_logger, text, Call};
use emlog::{
    transport::Platform, Arg, InitError, LevelError, Levels, Severity, TransportConfig,
};
use rstest::rstest;

#[test]
fn nothing_is_written_before_init() {
    let logger = logger();
    emlog::fatal!(logger, "main", "lost %u", 1u32);
    emlog::print!(logger, "lost");
    logger.log_code("main", 42, "lost", &[]);
    assert!(calls(&logger).is_empty());
    assert!(!logger.state().initialized);
}

#[test]
fn rejected_init_keeps_the_logger_silent() {
    let logger = logger();
    assert!(matches!(
        logger.init(&TransportConfig::new(230_400)),
        Err(InitError::BaudRateInvalid { requested: 230_400, max: 115_200 })
    ));
    emlog::info!(logger, "main", "lost");
    assert!(calls(&logger).is_empty());
}

#[test]
fn init_starts_the_transport() {
    let logger = logger();
    logger.init(&TransportConfig::new(57_600)).unwrap();
    assert_eq!(calls(&logger), [Call::Begin(57_600)]);
    assert_eq!(logger.state().platform, Some(Platform::Native));
}

#[rstest]
#[case(Severity::Debug, "\x1b[36m> [DEBUG] ")]
#[case(Severity::Info, "\x1b[32m> [INFO] ")]
#[case(Severity::Warning, "\x1b[33m> [WARNING] ")]
#[case(Severity::Error, "\x1b[31m> [ERROR] ")]
#[case(Severity::Fatal, "\x1b[1m\x1b[31m> [FATAL] ")]
fn frame_bytes(#[case] severity: Severity, #[case] prefix: &str) {
    let logger = ready_logger();
    emlog::log!(logger, "adc", severity, "ch%u=%d", 2u8, -17);
    assert_eq!(text(&logger), format!("{}adc: ch2=-17\x1b[0m\r\n", prefix));
}

#[test]
fn frame_segments_are_written_in_order() {
    let logger = ready_logger();
    emlog::error!(logger, "io", "a%sb", "XY");
    assert_eq!(
        calls(&logger),
        [
            Call::Str("\x1b[31m".into()),
            Call::Str("> [".into()),
            Call::Str("ERROR".into()),
            Call::Str("] ".into()),
            Call::Str("io".into()),
            Call::Str(": ".into()),
            // literal characters go out one by one
            Call::Char(b'a'),
            Call::Str("XY".into()),
            Call::Char(b'b'),
            Call::Str("\x1b[0m".into()),
            Call::Str("\r\n".into()),
        ]
    );
}

#[test]
fn unknown_level_code() {
    let logger = ready_logger();
    logger.log_code("io", 5, "x=%u", &[Arg::Unsigned(1)]);
    assert_eq!(text(&logger), "> [Unknown LogLvl?] io: x=1\x1b[0m\r\n");
}

#[test]
fn disabling_a_level_silences_it() {
    let logger = ready_logger();
    logger.set_level_enabled(Severity::Warning, false).unwrap();
    assert!(!logger.levels().contains(Levels::WARNING));

    emlog::warning!(logger, "temp", "%.1f C", 81.25);
    assert!(calls(&logger).is_empty());

    // the other levels are unaffected
    emlog::error!(logger, "temp", "hot");
    assert_eq!(text(&logger), "\x1b[31m> [ERROR] temp: hot\x1b[0m\r\n");

    logger.with_transport(|t| t.calls.clear()).unwrap();
    logger.set_level_enabled(Severity::Warning, true).unwrap();
    emlog::warning!(logger, "temp", "%.1f C", 81.25);
    assert_eq!(text(&logger), "\x1b[33m> [WARNING] temp: 81.3 C\x1b[0m\r\n");
}

#[test]
fn level_changes_need_init() {
    let logger = logger();
    assert_eq!(
        logger.set_level_enabled(Severity::Info, false),
        Err(LevelError::NotInitialized)
    );
    assert_eq!(logger.levels(), Levels::all());
}

#[test]
fn raw_print_has_no_framing() {
    let logger = ready_logger();
    emlog::print!(logger, "%s: %x\r\n", "reg", 0xC0FFEEu32);
    assert_eq!(text(&logger), "reg: C0FFEE\r\n");
}

#[test]
fn malformed_specifiers_are_visible() {
    let logger = ready_logger();
    emlog::print!(logger, "%5d|%.3q|%u|", 1, 2u32);
    // `%5` and `%.3q` take no argument, so `1` lands on `%u`; `2` is unused
    assert_eq!(text(&logger), "%5d|%.q|1|");
}

#[test]
fn assertion_failure_message() {
    let logger = ready_logger();
    logger.report_assertion("src/main.rs", 7);
    assert_eq!(
        text(&logger),
        "\x1b[1m\x1b[31m> [FATAL] ASSERT: ASSERTION FAILED:\r\n\t--> File: src/main.rs\r\n\t--> Line: 7\x1b[0m\r\n"
    );
}

#[test]
fn passing_assertion_writes_nothing() {
    let logger = ready_logger();
    let ready = logger.state().initialized;
    emlog::assert!(logger, ready);
    assert!(calls(&logger).is_empty());
}
