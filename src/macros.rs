// Every argument goes through `Arg::from`, so the usual integer, float, `char` and `&str` values
// can be passed as they are.

/// Logs a message at the given [`Severity`](crate::Severity).
///
/// ```ignore
/// emlog::log!(LOGGER, "pump", Severity::Warning, "pressure %.1f bar", pressure);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $source:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $source,
            $severity,
            $template,
            &[$($crate::Arg::from($arg)),*],
        )
    };
}

/// Logs a message at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $source:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $source, $crate::Severity::Debug, $template $(, $arg)*)
    };
}

/// Logs a message at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! info {
    ($logger:expr, $source:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $source, $crate::Severity::Info, $template $(, $arg)*)
    };
}

/// Logs a message at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! warning {
    ($logger:expr, $source:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $source, $crate::Severity::Warning, $template $(, $arg)*)
    };
}

/// Logs a message at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr, $source:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $source, $crate::Severity::Error, $template $(, $arg)*)
    };
}

/// Logs a message at [`Severity::Fatal`](crate::Severity::Fatal).
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $source:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $source, $crate::Severity::Fatal, $template $(, $arg)*)
    };
}

/// Formats without level framing or gating.
///
/// ```ignore
/// emlog::print!(LOGGER, "%u%%\r\n", progress);
/// ```
#[macro_export]
macro_rules! print {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.print($template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Halts with a fatal `ASSERT` message when `cond` is false.
///
/// The message names the file and line of the macro invocation. Unlike `core::assert!` it never
/// unwinds: the calling context spins forever.
///
/// The source tag is [`ASSERT_TAG`](crate::ASSERT_TAG), `ASSERT`. Tools written for the C
/// `RML_COMM` logger match on `RML_ASSERT` and need updating:
///
/// ```text
/// \x1b[1m\x1b[31m> [FATAL] ASSERT: ASSERTION FAILED:\r\n\t--> File: src/main.rs\r\n\t--> Line: 7\x1b[0m\r\n
/// ```
#[macro_export]
macro_rules! assert {
    ($logger:expr, $cond:expr $(,)?) => {
        if !$cond {
            $logger.assert_fail(::core::file!(), ::core::line!())
        }
    };
}
